use geo_types::Point;
use serde::{Deserialize, Serialize};

/// The routed path between two consecutive stops, as reported by the
/// routing backend. Points follow the georust convention: x is longitude,
/// y is latitude.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSegment {
    /// Decoded route geometry, in travel order.
    pub points: Vec<Point>,

    /// Start waypoint snapped to the road network by the backend.
    pub start_point: Point,

    /// End waypoint snapped to the road network by the backend.
    pub end_point: Point,

    /// Total driving distance in meters.
    pub distance_meters: f64,
}
