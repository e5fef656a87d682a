use geo_types::{LineString, Point};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::style::{MarkerStyle, PolylineStyle};

/// A drawing primitive for the rendering surface. Elements are consumed in
/// sequence; insertion order is stop-traversal order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MapElement {
    Polyline(PolylineElement),
    Marker(MarkerElement),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolylineElement {
    pub points: Vec<Point>,
    pub style: PolylineStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerElement {
    pub location: Point,
    pub style: MarkerStyle,
    pub popup: Option<String>,
}

/// Initial viewport for the rendering surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapView {
    pub center: Point,
    pub zoom: u8,
}

pub fn to_feature_collection(elements: &[MapElement]) -> FeatureCollection {
    let features = elements
        .iter()
        .map(|element| match element {
            MapElement::Polyline(polyline) => polyline_feature(polyline),
            MapElement::Marker(marker) => marker_feature(marker),
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn polyline_feature(polyline: &PolylineElement) -> Feature {
    let line: LineString = polyline.points.iter().map(|point| point.0).collect();

    Feature {
        geometry: Some(Geometry::new(geojson::Value::from(&line))),
        properties: properties(json!({
            "color": polyline.style.color,
            "weight": polyline.style.weight,
            "opacity": polyline.style.opacity,
        })),
        ..Default::default()
    }
}

fn marker_feature(marker: &MarkerElement) -> Feature {
    let mut props = json!({
        "marker-color": marker.style.color.to_string(),
    });
    if let Some(icon) = &marker.style.icon {
        props["icon"] = json!(icon);
    }
    if let Some(popup) = &marker.popup {
        props["popup"] = json!(popup);
    }

    Feature {
        geometry: Some(Geometry::new(geojson::Value::from(&marker.location))),
        properties: properties(props),
        ..Default::default()
    }
}

fn properties(value: serde_json::Value) -> Option<JsonObject> {
    match value {
        serde_json::Value::Object(object) => Some(object),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use geo_types::Point;

    use crate::style::{MarkerColor, MarkerStyle, PolylineStyle};

    use super::*;

    #[test]
    fn test_feature_collection_preserves_element_order() {
        let elements = vec![
            MapElement::Marker(MarkerElement {
                location: Point::new(4.34878, 50.85045),
                style: MarkerStyle::colored(MarkerColor::Red),
                popup: Some(String::from("Order ID: 7")),
            }),
            MapElement::Polyline(PolylineElement {
                points: vec![
                    Point::new(4.34878, 50.85045),
                    Point::new(4.40346, 51.21989),
                ],
                style: PolylineStyle::default(),
            }),
        ];

        let collection = to_feature_collection(&elements);

        assert_eq!(collection.features.len(), 2);

        let first = collection.features[0].geometry.as_ref().unwrap();
        assert!(matches!(first.value, geojson::Value::Point(_)));
        assert_eq!(
            collection.features[0]
                .properties
                .as_ref()
                .unwrap()
                .get("popup")
                .unwrap(),
            "Order ID: 7"
        );

        let second = collection.features[1].geometry.as_ref().unwrap();
        assert!(matches!(second.value, geojson::Value::LineString(_)));
    }
}
