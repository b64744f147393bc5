//! Value Objects - Immutable, identity-less domain primitives

mod route_query;
mod travel_mode;

pub use route_query::RouteQuery;
pub use travel_mode::TravelMode;
