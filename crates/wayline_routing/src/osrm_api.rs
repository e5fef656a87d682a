use std::time::Duration;

use geo_types::Point;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::route_segment::RouteSegment;

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Backend returned no routes")]
    NoRoutes,

    #[error("Malformed route geometry: {0}")]
    Geometry(String),

    #[error("Response missing waypoint {0}")]
    MissingWaypoint(usize),
}

#[derive(Deserialize)]
struct RouteResponse {
    routes: Vec<OsrmRoute>,
    waypoints: Vec<OsrmWaypoint>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    /// Encoded polyline, precision 5
    geometry: String,

    /// Total distance in meters
    distance: f64,
}

#[derive(Deserialize)]
struct OsrmWaypoint {
    /// [lon, lat]
    location: [f64; 2],
}

pub struct OsrmRouteClientParams {
    pub base_url: String,

    /// Per-request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl Default for OsrmRouteClientParams {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OSRM_URL.to_string(),
            timeout: None,
        }
    }
}

pub const OSRM_ROUTE_API_PATH: &str = "/route/v1/driving/";
pub const DEFAULT_OSRM_URL: &str = "http://router.project-osrm.org";

/// OSRM expects encoded polylines with 5 decimal places of precision.
const POLYLINE_PRECISION: u32 = 5;

/// Client for the OSRM route service. One GET per segment, no caching:
/// repeated identical pairs are refetched.
pub struct OsrmRouteClient {
    params: OsrmRouteClientParams,
    client: reqwest::Client,
}

impl OsrmRouteClient {
    pub fn new(params: OsrmRouteClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    pub async fn fetch_route(
        &self,
        source: Point,
        destination: Point,
    ) -> Result<RouteSegment, RoutingError> {
        let mut url = self.params.base_url.clone();
        url.push_str(OSRM_ROUTE_API_PATH);
        url.push_str(&route_request_path(source, destination));

        debug!("Osrm: GET {}", url);

        let mut request = self.client.get(url);
        if let Some(timeout) = self.params.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(RoutingError::Api { status, message });
        }

        let body: RouteResponse = response.json().await?;

        segment_from_response(body)
    }
}

/// Formats the coordinate pair the way the route API expects it:
/// longitude first, source before destination.
pub fn route_request_path(source: Point, destination: Point) -> String {
    // Debug float formatting keeps the trailing .0 on whole-numbered
    // coordinates, e.g. "-73.0" rather than "-73"
    format!(
        "{:?},{:?};{:?},{:?}",
        source.x(),
        source.y(),
        destination.x(),
        destination.y()
    )
}

fn segment_from_response(response: RouteResponse) -> Result<RouteSegment, RoutingError> {
    let route = response.routes.first().ok_or(RoutingError::NoRoutes)?;

    let geometry = polyline::decode_polyline(&route.geometry, POLYLINE_PRECISION)
        .map_err(|err| RoutingError::Geometry(err.to_string()))?;

    let start_point = waypoint_point(&response, 0)?;
    let end_point = waypoint_point(&response, 1)?;

    Ok(RouteSegment {
        points: geometry.points().collect(),
        start_point,
        end_point,
        distance_meters: route.distance,
    })
}

fn waypoint_point(response: &RouteResponse, index: usize) -> Result<Point, RoutingError> {
    let waypoint = response
        .waypoints
        .get(index)
        .ok_or(RoutingError::MissingWaypoint(index))?;

    // location arrives as [lon, lat], which matches Point's x/y order
    Ok(Point::new(waypoint.location[0], waypoint.location[1]))
}

#[cfg(test)]
mod tests {
    use geo_types::{Coord, Point};

    use super::*;

    #[test]
    fn test_request_path_is_longitude_first() {
        let source = Point::new(-73.0, 40.0);
        let destination = Point::new(-73.1, 40.1);

        assert_eq!(
            route_request_path(source, destination),
            "-73.0,40.0;-73.1,40.1"
        );
    }

    #[test]
    fn test_segment_from_response() {
        let coords = vec![
            Coord { x: -120.2, y: 38.5 },
            Coord {
                x: -120.95,
                y: 40.7,
            },
            Coord {
                x: -126.453,
                y: 43.252,
            },
        ];
        let geometry = polyline::encode_coordinates(coords, POLYLINE_PRECISION).unwrap();

        let json = format!(
            r#"{{
                "routes": [{{ "geometry": "{}", "distance": 1893.2 }}],
                "waypoints": [
                    {{ "location": [-120.2, 38.5] }},
                    {{ "location": [-126.453, 43.252] }}
                ]
            }}"#,
            geometry.replace('\\', "\\\\").replace('"', "\\\"")
        );

        let response: RouteResponse = serde_json::from_str(&json).unwrap();
        let segment = segment_from_response(response).unwrap();

        assert_eq!(segment.points.len(), 3);
        assert!((segment.points[0].y() - 38.5).abs() < 1e-5);
        assert!((segment.points[0].x() + 120.2).abs() < 1e-5);
        assert!((segment.points[2].y() - 43.252).abs() < 1e-5);

        // waypoints stored with latitude in y, longitude in x
        assert_eq!(segment.start_point, Point::new(-120.2, 38.5));
        assert_eq!(segment.end_point, Point::new(-126.453, 43.252));
        assert_eq!(segment.distance_meters, 1893.2);
    }

    #[test]
    fn test_decode_known_polyline() {
        // Example from the polyline format reference
        let geometry = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";
        let line = polyline::decode_polyline(geometry, POLYLINE_PRECISION).unwrap();
        let points: Vec<Point> = line.points().collect();

        assert_eq!(points.len(), 3);
        assert!((points[0].y() - 38.5).abs() < 1e-5);
        assert!((points[0].x() + 120.2).abs() < 1e-5);
        assert!((points[1].y() - 40.7).abs() < 1e-5);
        assert!((points[1].x() + 120.95).abs() < 1e-5);
    }

    #[test]
    fn test_polyline_roundtrip() {
        let coords = vec![
            Coord { x: 4.34878, y: 50.85045 },
            Coord { x: 4.40346, y: 51.21989 },
            Coord { x: 3.71947, y: 51.05 },
        ];

        let encoded = polyline::encode_coordinates(coords.clone(), POLYLINE_PRECISION).unwrap();
        let decoded = polyline::decode_polyline(&encoded, POLYLINE_PRECISION).unwrap();

        for (original, decoded) in coords.iter().zip(decoded.coords()) {
            assert!((original.x - decoded.x).abs() < 1e-5);
            assert!((original.y - decoded.y).abs() < 1e-5);
        }
    }

    #[test]
    fn test_empty_routes_is_an_error() {
        let json = r#"{
            "routes": [],
            "waypoints": [
                { "location": [-120.2, 38.5] },
                { "location": [-126.453, 43.252] }
            ]
        }"#;

        let response: RouteResponse = serde_json::from_str(json).unwrap();
        let result = segment_from_response(response);

        assert!(matches!(result, Err(RoutingError::NoRoutes)));
    }

    #[test]
    fn test_malformed_geometry_is_an_error() {
        // Truncated mid-chunk: the latitude delta never terminates
        let response = RouteResponse {
            routes: vec![OsrmRoute {
                geometry: "_p~iF~".to_string(),
                distance: 0.0,
            }],
            waypoints: vec![
                OsrmWaypoint {
                    location: [0.0, 0.0],
                },
                OsrmWaypoint {
                    location: [1.0, 1.0],
                },
            ],
        };

        let result = segment_from_response(response);
        assert!(matches!(result, Err(RoutingError::Geometry(_))));
    }

    #[test]
    fn test_missing_waypoint_is_an_error() {
        let response = RouteResponse {
            routes: vec![OsrmRoute {
                geometry: "_p~iF~ps|U_ulLnnqC".to_string(),
                distance: 10.0,
            }],
            waypoints: vec![OsrmWaypoint {
                location: [-120.2, 38.5],
            }],
        };

        let result = segment_from_response(response);
        assert!(matches!(result, Err(RoutingError::MissingWaypoint(1))));
    }
}
