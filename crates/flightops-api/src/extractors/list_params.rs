//! List query extractors
//!
//! Parse the DRF-style query strings for the flight and crew listings into
//! the typed queries the services consume. Malformed values answer 400 with
//! the offending parameter named. `axum_extra`'s `Query` is used so repeated
//! keys (`status=planned&status=delayed`) deserialize into a `Vec`.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::Query;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use flightops_core::entities::{CrewRole, FlightStatus};
use flightops_core::queries::{CrewQuery, FlightOrdering, FlightQuery, PageRequest};
use flightops_core::Snowflake;

use crate::response::ApiError;

// ============================================================================
// Flights
// ============================================================================

/// Raw flight list query parameters
#[derive(Debug, Default, Deserialize)]
pub struct FlightListParams {
    pub flight_number: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    /// Repeatable; each value may itself be comma-separated
    #[serde(default)]
    pub status: Vec<String>,
    pub scheduled_time_after: Option<String>,
    pub scheduled_time_before: Option<String>,
    pub scheduled_date: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl FlightListParams {
    /// True when no recognized parameter is present at all; only then does
    /// the listing go through the cache.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.flight_number.is_none()
            && self.origin.is_none()
            && self.destination.is_none()
            && self.status.is_empty()
            && self.scheduled_time_after.is_none()
            && self.scheduled_time_before.is_none()
            && self.scheduled_date.is_none()
            && self.search.is_none()
            && self.ordering.is_none()
            && self.page.is_none()
            && self.page_size.is_none()
    }
}

impl TryFrom<FlightListParams> for FlightQuery {
    type Error = ApiError;

    fn try_from(params: FlightListParams) -> Result<Self, Self::Error> {
        let statuses = params
            .status
            .iter()
            .flat_map(|v| v.split(','))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| {
                v.parse::<FlightStatus>()
                    .map_err(|_| ApiError::invalid_query(format!("Invalid 'status' value: {v}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let ordering = params
            .ordering
            .as_deref()
            .map(|v| {
                v.parse::<FlightOrdering>()
                    .map_err(|_| ApiError::invalid_query(format!("Invalid 'ordering' value: {v}")))
            })
            .transpose()?;

        Ok(FlightQuery {
            flight_number: params.flight_number,
            origin: params.origin,
            destination: params.destination,
            statuses,
            scheduled_after: parse_timestamp("scheduled_time_after", params.scheduled_time_after)?,
            scheduled_before: parse_timestamp(
                "scheduled_time_before",
                params.scheduled_time_before,
            )?,
            scheduled_date: parse_date("scheduled_date", params.scheduled_date)?,
            search: params.search,
            ordering,
            page: parse_page(params.page.as_deref(), params.page_size.as_deref())?,
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for FlightListParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<FlightListParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(params)
    }
}

// ============================================================================
// Crew
// ============================================================================

/// Raw crew list query parameters
#[derive(Debug, Default, Deserialize)]
pub struct CrewListParams {
    pub name: Option<String>,
    /// Repeatable; each value may itself be comma-separated
    #[serde(default)]
    pub role: Vec<String>,
    pub assigned_flight: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl TryFrom<CrewListParams> for CrewQuery {
    type Error = ApiError;

    fn try_from(params: CrewListParams) -> Result<Self, Self::Error> {
        let roles = params
            .role
            .iter()
            .flat_map(|v| v.split(','))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| {
                v.parse::<CrewRole>()
                    .map_err(|_| ApiError::invalid_query(format!("Invalid 'role' value: {v}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let assigned_flight = params
            .assigned_flight
            .as_deref()
            .map(|v| {
                v.parse::<Snowflake>().map_err(|_| {
                    ApiError::invalid_query(format!("Invalid 'assigned_flight' value: {v}"))
                })
            })
            .transpose()?;

        Ok(CrewQuery {
            name: params.name,
            roles,
            assigned_flight,
            search: params.search,
            page: parse_page(params.page.as_deref(), params.page_size.as_deref())?,
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CrewListParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<CrewListParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(params)
    }
}

// ============================================================================
// Bare pagination (user listing)
// ============================================================================

/// Raw page-number pagination parameters
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl TryFrom<PageParams> for PageRequest {
    type Error = ApiError;

    fn try_from(params: PageParams) -> Result<Self, Self::Error> {
        parse_page(params.page.as_deref(), params.page_size.as_deref())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PageParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(params)
    }
}

// ============================================================================
// Shared parsing helpers
// ============================================================================

fn parse_page(page: Option<&str>, page_size: Option<&str>) -> Result<PageRequest, ApiError> {
    let defaults = PageRequest::default();

    // Pages are 1-based; 0 is as malformed as non-numeric input
    let page = page
        .map(|v| {
            v.parse::<u32>()
                .ok()
                .filter(|p| *p >= 1)
                .ok_or_else(|| ApiError::invalid_query(format!("Invalid 'page' value: {v}")))
        })
        .transpose()?
        .unwrap_or(defaults.page);

    let page_size = page_size
        .map(|v| {
            v.parse::<u32>()
                .map_err(|_| ApiError::invalid_query(format!("Invalid 'page_size' value: {v}")))
        })
        .transpose()?
        .unwrap_or(defaults.page_size);

    Ok(PageRequest::new(page, page_size))
}

fn parse_timestamp(
    param: &str,
    value: Option<String>,
) -> Result<Option<DateTime<Utc>>, ApiError> {
    value
        .as_deref()
        .map(|v| {
            DateTime::parse_from_rfc3339(v)
                .map(|ts| ts.with_timezone(&Utc))
                .map_err(|_| ApiError::invalid_query(format!("Invalid '{param}' timestamp: {v}")))
        })
        .transpose()
}

fn parse_date(param: &str, value: Option<String>) -> Result<Option<NaiveDate>, ApiError> {
    value
        .as_deref()
        .map(|v| {
            v.parse::<NaiveDate>()
                .map_err(|_| ApiError::invalid_query(format!("Invalid '{param}' date: {v}")))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flightops_core::queries::FlightOrderKey;

    #[test]
    fn test_empty_params_are_unfiltered() {
        assert!(FlightListParams::default().is_unfiltered());
    }

    #[test]
    fn test_any_param_marks_filtered() {
        let params = FlightListParams {
            page: Some("2".to_string()),
            ..Default::default()
        };
        assert!(!params.is_unfiltered());

        let params = FlightListParams {
            status: vec!["delayed".to_string()],
            ..Default::default()
        };
        assert!(!params.is_unfiltered());
    }

    #[test]
    fn test_comma_separated_statuses() {
        let params = FlightListParams {
            status: vec!["planned,delayed".to_string(), "departed".to_string()],
            ..Default::default()
        };
        let query = FlightQuery::try_from(params).unwrap();
        assert_eq!(
            query.statuses,
            vec![
                FlightStatus::Planned,
                FlightStatus::Delayed,
                FlightStatus::Departed
            ]
        );
    }

    #[test]
    fn test_unknown_status_names_parameter() {
        let params = FlightListParams {
            status: vec!["cancelled".to_string()],
            ..Default::default()
        };
        let err = FlightQuery::try_from(params).unwrap_err();
        assert!(err.to_string().contains("'status'"));
    }

    #[test]
    fn test_ordering_parsed() {
        let params = FlightListParams {
            ordering: Some("-flight_number".to_string()),
            ..Default::default()
        };
        let query = FlightQuery::try_from(params).unwrap();
        let ordering = query.ordering();
        assert_eq!(ordering.key, FlightOrderKey::FlightNumber);
        assert!(ordering.descending);
    }

    #[test]
    fn test_malformed_timestamp_names_parameter() {
        let params = FlightListParams {
            scheduled_time_after: Some("yesterday".to_string()),
            ..Default::default()
        };
        let err = FlightQuery::try_from(params).unwrap_err();
        assert!(err.to_string().contains("'scheduled_time_after'"));
    }

    #[test]
    fn test_non_numeric_page_names_parameter() {
        let err = parse_page(Some("two"), None).unwrap_err();
        assert!(err.to_string().contains("'page'"));
    }

    #[test]
    fn test_page_zero_rejected() {
        let err = parse_page(Some("0"), None).unwrap_err();
        assert!(err.to_string().contains("'page'"));
    }

    #[test]
    fn test_page_size_capped() {
        let page = parse_page(Some("1"), Some("500")).unwrap();
        assert_eq!(page.page_size, 100);
    }

    #[test]
    fn test_crew_role_filter() {
        let params = CrewListParams {
            role: vec!["pilot,attendant".to_string()],
            ..Default::default()
        };
        let query = CrewQuery::try_from(params).unwrap();
        assert_eq!(query.roles, vec![CrewRole::Pilot, CrewRole::Attendant]);
    }

    #[test]
    fn test_crew_unknown_role_rejected() {
        let params = CrewListParams {
            role: vec!["navigator".to_string()],
            ..Default::default()
        };
        assert!(CrewQuery::try_from(params).is_err());
    }
}
