use thiserror::Error;
use tracing::debug;
use wayline_routing::{osrm_api::RoutingError, segment_fetcher::SegmentFetcher};

use crate::{
    map_elements::{MapElement, MarkerElement, PolylineElement},
    stop::Stop,
    style::{CategoryColors, MarkerColor, MarkerStyle, PolylineStyle},
};

#[derive(Debug, Error)]
pub enum MapError {
    #[error("Invalid coordinates: lat {lat}, lon {lon}")]
    InvalidCoordinates { lat: f64, lon: f64 },

    #[error(transparent)]
    Routing(#[from] RoutingError),
}

/// Builds the drawable element sequence for one vehicle route: one marker
/// per stop and one routed polyline per consecutive stop pair, strictly in
/// stop order.
///
/// The first fetch failure aborts the whole build; no partial element list
/// is returned.
pub struct RouteMapBuilder<'a, F> {
    fetcher: &'a F,
    colors: CategoryColors,
    first_stop_style: MarkerStyle,
    polyline_style: PolylineStyle,
}

impl<'a, F: SegmentFetcher> RouteMapBuilder<'a, F> {
    pub fn new(fetcher: &'a F, colors: CategoryColors) -> Self {
        Self {
            fetcher,
            colors,
            first_stop_style: MarkerStyle {
                color: MarkerColor::Green,
                icon: Some(String::from("building")),
            },
            polyline_style: PolylineStyle::default(),
        }
    }

    /// Marker style for the first stop, used regardless of its category.
    pub fn first_stop_style(mut self, style: MarkerStyle) -> Self {
        self.first_stop_style = style;
        self
    }

    pub fn polyline_style(mut self, style: PolylineStyle) -> Self {
        self.polyline_style = style;
        self
    }

    pub async fn build(&self, stops: &[Stop]) -> Result<Vec<MapElement>, MapError> {
        for stop in stops {
            if !stop.has_valid_coordinates() {
                return Err(MapError::InvalidCoordinates {
                    lat: stop.lat(),
                    lon: stop.lon(),
                });
            }
        }

        debug!("Building route map for {} stops", stops.len());

        let mut elements = Vec::new();

        for (index, stop) in stops.iter().enumerate() {
            elements.push(MapElement::Marker(self.marker_for(index, stop)));

            let Some(next_stop) = stops.get(index + 1) else {
                continue;
            };

            let segment = self.fetcher.fetch(stop.point, next_stop.point).await?;

            elements.push(MapElement::Polyline(PolylineElement {
                points: segment.points,
                style: self.polyline_style.clone(),
            }));
        }

        Ok(elements)
    }

    fn marker_for(&self, index: usize, stop: &Stop) -> MarkerElement {
        let style = if index == 0 {
            self.first_stop_style.clone()
        } else {
            MarkerStyle::colored(self.colors.color_of(stop.category.as_deref()))
        };

        // Markers sit on the stop's own coordinates, not the snapped
        // waypoints the backend reports per segment.
        MarkerElement {
            location: stop.point,
            style,
            popup: popup_for(stop),
        }
    }
}

pub(crate) fn popup_for(stop: &Stop) -> Option<String> {
    let order_id = stop.order_id.as_ref()?;

    let mut popup = format!("Order ID: {order_id}");
    if let Some(weight) = stop.weight {
        popup.push_str(&format!(" \n Order Weight: {weight} lbs"));
    }
    if let Some(service_time) = stop.service_time_minutes {
        popup.push_str(&format!(" \n Service time: {service_time} mins"));
    }

    Some(popup)
}
