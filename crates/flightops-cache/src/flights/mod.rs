//! Flight list caching

mod list_cache;

pub use list_cache::FlightListCache;
