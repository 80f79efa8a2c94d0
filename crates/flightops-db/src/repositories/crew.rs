//! PostgreSQL implementation of CrewRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use flightops_core::entities::CrewMember;
use flightops_core::queries::{CrewQuery, Page};
use flightops_core::traits::{CrewRepository, RepoResult};
use flightops_core::value_objects::Snowflake;

use crate::mappers::CrewMemberInsert;
use crate::models::CrewMemberModel;

use super::error::{
    contains_pattern, crew_member_not_found, map_assigned_flight_violation, map_db_error,
};

const CREW_COLUMNS: &str = "id, name, role, assigned_flight, created_at";

/// PostgreSQL implementation of CrewRepository
#[derive(Clone)]
pub struct PgCrewRepository {
    pool: PgPool,
}

impl PgCrewRepository {
    /// Create a new PgCrewRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append the query's filters as `AND` clauses, shared by the count and the
/// select statement.
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &CrewQuery) {
    if let Some(name) = &query.name {
        builder
            .push(" AND name ILIKE ")
            .push_bind(contains_pattern(name));
    }

    if !query.roles.is_empty() {
        let roles: Vec<String> = query.roles.iter().map(|r| r.as_str().to_string()).collect();
        builder.push(" AND role = ANY(").push_bind(roles).push(")");
    }

    if let Some(flight_id) = query.assigned_flight {
        builder
            .push(" AND assigned_flight = ")
            .push_bind(flight_id.into_inner());
    }

    if let Some(search) = &query.search {
        let pattern = contains_pattern(search);
        builder
            .push(" AND (name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR role ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

#[async_trait]
impl CrewRepository for PgCrewRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<CrewMember>> {
        let result = sqlx::query_as::<_, CrewMemberModel>(
            r"
            SELECT id, name, role, assigned_flight, created_at
            FROM crew_members
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(CrewMember::from))
    }

    #[instrument(skip(self, query))]
    async fn search(&self, query: &CrewQuery) -> RepoResult<Page<CrewMember>> {
        let mut count_builder =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM crew_members WHERE TRUE");
        push_filters(&mut count_builder, query);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {CREW_COLUMNS} FROM crew_members WHERE TRUE"
        ));
        push_filters(&mut builder, query);

        builder.push(" ORDER BY id");
        builder
            .push(" LIMIT ")
            .push_bind(query.page.limit())
            .push(" OFFSET ")
            .push_bind(query.page.offset());

        let rows = builder
            .build_query_as::<CrewMemberModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Page::new(
            rows.into_iter().map(CrewMember::from).collect(),
            total,
        ))
    }

    #[instrument(skip(self, member))]
    async fn create(&self, member: &CrewMember) -> RepoResult<()> {
        let insert = CrewMemberInsert::new(member);

        sqlx::query(
            r"
            INSERT INTO crew_members (id, name, role, assigned_flight, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(insert.id)
        .bind(insert.name)
        .bind(insert.role)
        .bind(insert.assigned_flight)
        .bind(member.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_assigned_flight_violation(e, member.assigned_flight))?;

        Ok(())
    }

    #[instrument(skip(self, member))]
    async fn update(&self, member: &CrewMember) -> RepoResult<()> {
        let insert = CrewMemberInsert::new(member);

        let result = sqlx::query(
            r"
            UPDATE crew_members
            SET name = $2, role = $3, assigned_flight = $4
            WHERE id = $1
            ",
        )
        .bind(insert.id)
        .bind(insert.name)
        .bind(insert.role)
        .bind(insert.assigned_flight)
        .execute(&self.pool)
        .await
        .map_err(|e| map_assigned_flight_violation(e, member.assigned_flight))?;

        if result.rows_affected() == 0 {
            return Err(crew_member_not_found(member.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM crew_members WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(crew_member_not_found(id));
        }

        Ok(())
    }
}
