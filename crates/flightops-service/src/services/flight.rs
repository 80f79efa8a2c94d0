//! Flight service
//!
//! CRUD on flights, the read-through list cache, and the delay-notification
//! trigger.

use chrono::Utc;
use serde_json::value::RawValue;
use tracing::{info, instrument, warn};

use flightops_cache::DelayNotification;
use flightops_core::entities::{Flight, FlightStatus};
use flightops_core::queries::{FlightQuery, Page};
use flightops_core::Snowflake;

use crate::dto::{CreateFlightRequest, FlightResponse, UpdateFlightRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Flight service
pub struct FlightService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FlightService<'a> {
    /// Create a new FlightService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Serve the unfiltered flight list through the cache.
    ///
    /// Returns the serialized JSON array; on a hit the cached bytes are
    /// returned verbatim. Cache failures degrade to a direct store query.
    #[instrument(skip(self))]
    pub async fn list_cached(&self) -> ServiceResult<Box<RawValue>> {
        match self.ctx.flight_cache().get().await {
            Ok(Some(payload)) => return Ok(payload),
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Flight cache read failed, querying store directly"),
        }

        let flights = self.ctx.flight_repo().list_all().await?;
        let responses: Vec<FlightResponse> = flights.iter().map(FlightResponse::from).collect();

        let payload = serde_json::to_string(&responses)
            .and_then(RawValue::from_string)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if let Err(e) = self.ctx.flight_cache().set(&payload).await {
            warn!(error = %e, "Flight cache write failed");
        }

        Ok(payload)
    }

    /// Filtered, ordered, paginated listing; always bypasses the cache
    #[instrument(skip(self, query))]
    pub async fn search(&self, query: &FlightQuery) -> ServiceResult<Page<FlightResponse>> {
        let page = self.ctx.flight_repo().search(query).await?;
        Ok(page.map(FlightResponse::from))
    }

    /// Get a single flight
    #[instrument(skip(self))]
    pub async fn get(&self, id: Snowflake) -> ServiceResult<FlightResponse> {
        let flight = self.require(id).await?;
        Ok(FlightResponse::from(&flight))
    }

    /// Create a flight
    #[instrument(skip(self, request), fields(flight_number = %request.flight_number))]
    pub async fn create(&self, request: CreateFlightRequest) -> ServiceResult<FlightResponse> {
        let status = parse_status(request.status.as_deref())?.unwrap_or_default();

        let mut flight = Flight::new(
            self.ctx.generate_id(),
            request.flight_number,
            request.origin,
            request.destination,
            request.scheduled_time,
        );
        flight.status = status;
        if let Some(airline) = request.airline {
            flight.airline = airline;
        }
        flight.gate = request.gate;

        self.ctx.flight_repo().create(&flight).await?;

        info!(flight_id = %flight.id, "Flight created");

        // Creation never fires a delay notification, even when the flight is
        // born delayed.
        self.invalidate_cache().await;

        Ok(FlightResponse::from(&flight))
    }

    /// Partially update a flight; transition into `delayed` enqueues one
    /// notification job
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: Snowflake,
        request: UpdateFlightRequest,
    ) -> ServiceResult<FlightResponse> {
        let mut flight = self.require(id).await?;

        let new_status = parse_status(request.status.as_deref())?.unwrap_or(flight.status);
        let notify = flight.becomes_delayed(new_status);

        flight.status = new_status;
        if let Some(flight_number) = request.flight_number {
            flight.flight_number = flight_number;
        }
        if let Some(origin) = request.origin {
            flight.origin = origin;
        }
        if let Some(destination) = request.destination {
            flight.destination = destination;
        }
        if let Some(scheduled_time) = request.scheduled_time {
            flight.scheduled_time = scheduled_time;
        }
        if let Some(airline) = request.airline {
            flight.airline = airline;
        }
        if let Some(gate) = request.gate {
            flight.gate = gate;
        }
        flight.updated_at = Utc::now();

        self.ctx.flight_repo().update(&flight).await?;

        if notify {
            // Fire-and-forget: the update already committed, an enqueue
            // failure must not fail the request.
            let job = DelayNotification::new(flight.id, flight.flight_number.clone());
            if let Err(e) = self.ctx.delay_queue().enqueue(&job).await {
                warn!(flight_id = %flight.id, error = %e, "Failed to enqueue delay notification");
            }
        }

        self.invalidate_cache().await;

        Ok(FlightResponse::from(&flight))
    }

    /// Delete a flight; crew members go with it via FK cascade
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Snowflake) -> ServiceResult<()> {
        self.ctx.flight_repo().delete(id).await?;

        info!(flight_id = %id, "Flight deleted");

        self.invalidate_cache().await;

        Ok(())
    }

    async fn require(&self, id: Snowflake) -> ServiceResult<Flight> {
        self.ctx
            .flight_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Flight", id.to_string()))
    }

    async fn invalidate_cache(&self) {
        if let Err(e) = self.ctx.flight_cache().invalidate_all().await {
            warn!(error = %e, "Flight cache invalidation failed");
        }
    }
}

fn parse_status(status: Option<&str>) -> ServiceResult<Option<FlightStatus>> {
    status
        .map(str::parse)
        .transpose()
        .map_err(ServiceError::from)
}
