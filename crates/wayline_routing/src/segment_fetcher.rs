use geo_types::Point;

use crate::{
    osrm_api::{OsrmRouteClient, RoutingError},
    route_segment::RouteSegment,
};

/// Capability to resolve the driven path between two consecutive stops.
///
/// The map builder only depends on this trait, so tests (and offline use)
/// can substitute a deterministic fetcher for the HTTP backend.
pub trait SegmentFetcher {
    fn fetch(
        &self,
        source: Point,
        destination: Point,
    ) -> impl Future<Output = Result<RouteSegment, RoutingError>>;
}

impl SegmentFetcher for OsrmRouteClient {
    async fn fetch(&self, source: Point, destination: Point) -> Result<RouteSegment, RoutingError> {
        self.fetch_route(source, destination).await
    }
}
