use geo_types::Point;

use crate::{
    map_elements::{MapElement, MapView, MarkerElement},
    route_map::popup_for,
    stop::Stop,
    style::{CategoryColors, MarkerStyle},
};

/// One category-coloured marker per stop, no polylines. Used to plot an
/// order book before (or without) routing it.
pub fn order_markers(stops: &[Stop], colors: &CategoryColors) -> Vec<MapElement> {
    stops
        .iter()
        .map(|stop| {
            MapElement::Marker(MarkerElement {
                location: stop.point,
                style: MarkerStyle::colored(colors.color_of(stop.category.as_deref())),
                popup: popup_for(stop),
            })
        })
        .collect()
}

pub const ORDER_MAP_ZOOM: u8 = 10;

/// Viewport centered on the mean stop coordinate.
pub fn order_map_view(stops: &[Stop]) -> MapView {
    let count = stops.len().max(1) as f64;
    let lon = stops.iter().map(Stop::lon).sum::<f64>() / count;
    let lat = stops.iter().map(Stop::lat).sum::<f64>() / count;

    MapView {
        center: Point::new(lon, lat),
        zoom: ORDER_MAP_ZOOM,
    }
}

#[cfg(test)]
mod tests {
    use crate::style::MarkerColor;

    use super::*;

    #[test]
    fn test_order_markers_only_mark() {
        let stops = vec![
            Stop::new(50.0, 4.0).with_category("DEPOT"),
            Stop::new(51.0, 5.0).with_category("Restaurant"),
            Stop::new(52.0, 6.0),
        ];

        let elements = order_markers(&stops, &CategoryColors::last_mile());

        assert_eq!(elements.len(), 3);

        let colors: Vec<MarkerColor> = elements
            .iter()
            .map(|element| match element {
                MapElement::Marker(marker) => marker.style.color,
                MapElement::Polyline(_) => panic!("no polylines expected"),
            })
            .collect();

        assert_eq!(
            colors,
            vec![MarkerColor::Red, MarkerColor::Green, MarkerColor::Gray]
        );
    }

    #[test]
    fn test_view_centers_on_mean_coordinate() {
        let stops = vec![Stop::new(50.0, 4.0), Stop::new(52.0, 6.0)];

        let view = order_map_view(&stops);

        assert_eq!(view.center, Point::new(5.0, 51.0));
        assert_eq!(view.zoom, ORDER_MAP_ZOOM);
    }
}
