//! PostgreSQL implementation of FlightRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use flightops_core::entities::Flight;
use flightops_core::error::DomainError;
use flightops_core::queries::{FlightQuery, Page};
use flightops_core::traits::{FlightRepository, RepoResult};
use flightops_core::value_objects::Snowflake;

use crate::mappers::FlightInsert;
use crate::models::FlightModel;

use super::error::{contains_pattern, flight_not_found, map_db_error, map_unique_violation};

const FLIGHT_COLUMNS: &str = "id, flight_number, origin, destination, scheduled_time, status, \
                              airline, gate, created_at, updated_at";

/// PostgreSQL implementation of FlightRepository
#[derive(Clone)]
pub struct PgFlightRepository {
    pool: PgPool,
}

impl PgFlightRepository {
    /// Create a new PgFlightRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append the query's filters as `AND` clauses. Both the count and the select
/// statement go through here so their WHERE clauses cannot drift apart.
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &FlightQuery) {
    if let Some(flight_number) = &query.flight_number {
        builder
            .push(" AND flight_number ILIKE ")
            .push_bind(contains_pattern(flight_number));
    }

    if let Some(origin) = &query.origin {
        builder
            .push(" AND origin ILIKE ")
            .push_bind(contains_pattern(origin));
    }

    if let Some(destination) = &query.destination {
        builder
            .push(" AND destination ILIKE ")
            .push_bind(contains_pattern(destination));
    }

    if !query.statuses.is_empty() {
        let statuses: Vec<String> = query
            .statuses
            .iter()
            .map(|s| s.as_str().to_string())
            .collect();
        builder.push(" AND status = ANY(").push_bind(statuses).push(")");
    }

    if let Some(after) = query.scheduled_after {
        builder.push(" AND scheduled_time >= ").push_bind(after);
    }

    if let Some(before) = query.scheduled_before {
        builder.push(" AND scheduled_time <= ").push_bind(before);
    }

    if let Some(date) = query.scheduled_date {
        builder.push(" AND scheduled_time::date = ").push_bind(date);
    }

    if let Some(search) = &query.search {
        let pattern = contains_pattern(search);
        builder
            .push(" AND (flight_number ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR origin ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR destination ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

#[async_trait]
impl FlightRepository for PgFlightRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Flight>> {
        let result = sqlx::query_as::<_, FlightModel>(
            r"
            SELECT id, flight_number, origin, destination, scheduled_time, status,
                   airline, gate, created_at, updated_at
            FROM flights
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Flight::from))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Flight>> {
        let rows = sqlx::query_as::<_, FlightModel>(
            r"
            SELECT id, flight_number, origin, destination, scheduled_time, status,
                   airline, gate, created_at, updated_at
            FROM flights
            ORDER BY scheduled_time DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Flight::from).collect())
    }

    #[instrument(skip(self, query))]
    async fn search(&self, query: &FlightQuery) -> RepoResult<Page<Flight>> {
        let mut count_builder =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM flights WHERE TRUE");
        push_filters(&mut count_builder, query);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {FLIGHT_COLUMNS} FROM flights WHERE TRUE"
        ));
        push_filters(&mut builder, query);

        // Ordering keys are whitelisted at parse time; id breaks ties so
        // pagination stays stable.
        let ordering = query.ordering();
        let direction = if ordering.descending { "DESC" } else { "ASC" };
        builder.push(format!(
            " ORDER BY {} {direction}, id {direction}",
            ordering.key.column()
        ));

        builder
            .push(" LIMIT ")
            .push_bind(query.page.limit())
            .push(" OFFSET ")
            .push_bind(query.page.offset());

        let rows = builder
            .build_query_as::<FlightModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Page::new(rows.into_iter().map(Flight::from).collect(), total))
    }

    #[instrument(skip(self, flight))]
    async fn create(&self, flight: &Flight) -> RepoResult<()> {
        let insert = FlightInsert::new(flight);

        sqlx::query(
            r"
            INSERT INTO flights (id, flight_number, origin, destination, scheduled_time,
                                 status, airline, gate, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(insert.id)
        .bind(insert.flight_number)
        .bind(insert.origin)
        .bind(insert.destination)
        .bind(insert.scheduled_time)
        .bind(insert.status)
        .bind(insert.airline)
        .bind(insert.gate)
        .bind(flight.created_at)
        .bind(flight.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::DuplicateFlightNumber(flight.flight_number.clone())
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self, flight))]
    async fn update(&self, flight: &Flight) -> RepoResult<()> {
        let insert = FlightInsert::new(flight);

        let result = sqlx::query(
            r"
            UPDATE flights
            SET flight_number = $2, origin = $3, destination = $4, scheduled_time = $5,
                status = $6, airline = $7, gate = $8, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(insert.id)
        .bind(insert.flight_number)
        .bind(insert.origin)
        .bind(insert.destination)
        .bind(insert.scheduled_time)
        .bind(insert.status)
        .bind(insert.airline)
        .bind(insert.gate)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::DuplicateFlightNumber(flight.flight_number.clone())
            })
        })?;

        if result.rows_affected() == 0 {
            return Err(flight_not_found(flight.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM flights WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(flight_not_found(id));
        }

        Ok(())
    }
}
