//! Crew service
//!
//! CRUD on crew members. Listings go straight to the store; only the flight
//! list is cached.

use tracing::{info, instrument};

use flightops_core::entities::{CrewMember, CrewRole};
use flightops_core::queries::{CrewQuery, Page};
use flightops_core::Snowflake;

use crate::dto::{CreateCrewMemberRequest, CrewMemberResponse, UpdateCrewMemberRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Crew service
pub struct CrewService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CrewService<'a> {
    /// Create a new CrewService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Filtered, paginated listing
    #[instrument(skip(self, query))]
    pub async fn search(&self, query: &CrewQuery) -> ServiceResult<Page<CrewMemberResponse>> {
        let page = self.ctx.crew_repo().search(query).await?;
        Ok(page.map(CrewMemberResponse::from))
    }

    /// Get a single crew member
    #[instrument(skip(self))]
    pub async fn get(&self, id: Snowflake) -> ServiceResult<CrewMemberResponse> {
        let member = self.require(id).await?;
        Ok(CrewMemberResponse::from(&member))
    }

    /// Create a crew member; the assigned flight must exist
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        request: CreateCrewMemberRequest,
    ) -> ServiceResult<CrewMemberResponse> {
        let role = parse_role(&request.role)?;
        let assigned_flight = parse_flight_id(&request.assigned_flight)?;

        let member = CrewMember::new(self.ctx.generate_id(), request.name, role, assigned_flight);

        self.ctx.crew_repo().create(&member).await?;

        info!(crew_member_id = %member.id, flight_id = %assigned_flight, "Crew member created");

        Ok(CrewMemberResponse::from(&member))
    }

    /// Partially update a crew member
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: Snowflake,
        request: UpdateCrewMemberRequest,
    ) -> ServiceResult<CrewMemberResponse> {
        let mut member = self.require(id).await?;

        if let Some(name) = request.name {
            member.name = name;
        }
        if let Some(role) = request.role.as_deref() {
            member.role = parse_role(role)?;
        }
        if let Some(flight) = request.assigned_flight.as_deref() {
            member.assigned_flight = parse_flight_id(flight)?;
        }

        self.ctx.crew_repo().update(&member).await?;

        Ok(CrewMemberResponse::from(&member))
    }

    /// Delete a crew member
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Snowflake) -> ServiceResult<()> {
        self.ctx.crew_repo().delete(id).await?;

        info!(crew_member_id = %id, "Crew member deleted");

        Ok(())
    }

    async fn require(&self, id: Snowflake) -> ServiceResult<CrewMember> {
        self.ctx
            .crew_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Crew member", id.to_string()))
    }
}

fn parse_role(role: &str) -> ServiceResult<CrewRole> {
    role.parse().map_err(ServiceError::from)
}

fn parse_flight_id(id: &str) -> ServiceResult<Snowflake> {
    id.parse::<i64>()
        .map(Snowflake::new)
        .map_err(|_| ServiceError::validation(format!("Invalid flight id: {id}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role_rejects_unknown() {
        assert!(parse_role("pilot").is_ok());
        let err = parse_role("navigator").unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "INVALID_ROLE");
    }

    #[test]
    fn test_parse_flight_id() {
        assert_eq!(parse_flight_id("42").unwrap(), Snowflake::new(42));
        assert!(parse_flight_id("not-a-number").is_err());
    }
}
