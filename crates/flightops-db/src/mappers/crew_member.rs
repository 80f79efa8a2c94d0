//! Crew member entity <-> model mapper

use flightops_core::entities::{CrewMember, CrewRole};
use flightops_core::value_objects::Snowflake;

use crate::models::CrewMemberModel;

/// Convert CrewMemberModel to CrewMember entity
impl From<CrewMemberModel> for CrewMember {
    fn from(model: CrewMemberModel) -> Self {
        CrewMember {
            id: Snowflake::new(model.id),
            name: model.name,
            // Stored values are constrained at write time
            role: model.role.parse().unwrap_or(CrewRole::Attendant),
            assigned_flight: Snowflake::new(model.assigned_flight),
            created_at: model.created_at,
        }
    }
}

/// Convert CrewMember entity reference to values for database insertion/update
pub struct CrewMemberInsert<'a> {
    pub id: i64,
    pub name: &'a str,
    pub role: &'static str,
    pub assigned_flight: i64,
}

impl<'a> CrewMemberInsert<'a> {
    pub fn new(member: &'a CrewMember) -> Self {
        Self {
            id: member.id.into_inner(),
            name: &member.name,
            role: member.role.as_str(),
            assigned_flight: member.assigned_flight.into_inner(),
        }
    }
}
