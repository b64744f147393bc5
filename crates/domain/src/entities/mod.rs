//! Entities produced while answering a route comparison

mod route_comparison;
mod travel_detail;

pub use route_comparison::RouteComparison;
pub use travel_detail::TravelDetail;
