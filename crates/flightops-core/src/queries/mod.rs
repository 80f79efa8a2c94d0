//! List query types - filtering, ordering, and page-number pagination

mod crew_query;
mod flight_query;
mod page;

pub use crew_query::CrewQuery;
pub use flight_query::{FlightOrderKey, FlightOrdering, FlightQuery};
pub use page::{Page, PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
