use geo_types::Point;

use crate::{
    osrm_api::RoutingError, route_segment::RouteSegment, segment_fetcher::SegmentFetcher,
};

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

pub fn haversine_distance(from: Point, to: Point) -> f64 {
    let lat1_rad = from.y().to_radians();
    let lon1_rad = from.x().to_radians();
    let lat2_rad = to.y().to_radians();
    let lon2_rad = to.x().to_radians();

    let delta_lat = lat2_rad - lat1_rad;
    let delta_lon = lon2_rad - lon1_rad;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Fallback fetcher that draws a straight leg between two stops instead of
/// querying the routing backend. No network access; distance as the crow
/// flies.
pub struct StraightLineFetcher;

impl SegmentFetcher for StraightLineFetcher {
    async fn fetch(&self, source: Point, destination: Point) -> Result<RouteSegment, RoutingError> {
        Ok(RouteSegment {
            points: vec![source, destination],
            start_point: source,
            end_point: destination,
            distance_meters: haversine_distance(source, destination),
        })
    }
}

#[cfg(test)]
mod tests {
    use geo_types::Point;

    use super::*;

    #[tokio::test]
    async fn test_straight_line_segment() {
        let brussels = Point::new(4.34878, 50.85045);
        let antwerp = Point::new(4.40346, 51.21989);

        let segment = StraightLineFetcher
            .fetch(brussels, antwerp)
            .await
            .unwrap();

        assert_eq!(segment.points, vec![brussels, antwerp]);
        assert_eq!(segment.start_point, brussels);
        assert_eq!(segment.end_point, antwerp);

        // Brussels to Antwerp is roughly 41 km in a straight line
        assert!((segment.distance_meters - 41_000.0).abs() < 1_000.0);
    }

    #[test]
    fn test_haversine_distance_is_symmetric() {
        let a = Point::new(4.34878, 50.85045);
        let b = Point::new(5.56749, 50.63373);

        assert_eq!(haversine_distance(a, b), haversine_distance(b, a));
        assert_eq!(haversine_distance(a, a), 0.0);
    }
}
