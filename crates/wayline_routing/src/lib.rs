pub mod osrm_api;
pub mod route_segment;
pub mod segment_fetcher;
pub mod straight_line;
