use geo_types::Point;
use serde::{Deserialize, Serialize};

/// A geographic point visited in sequence, with optional order metadata
/// carried into marker popups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stop {
    /// x is longitude, y is latitude
    pub point: Point,

    /// Category label, e.g. "DEPOT", "Pickup", "Delivery"
    pub category: Option<String>,

    pub order_id: Option<String>,

    /// Order weight in pounds
    pub weight: Option<f64>,

    /// Service time in minutes
    pub service_time_minutes: Option<f64>,
}

impl Stop {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            point: Point::new(lon, lat),
            category: None,
            order_id: None,
            weight: None,
            service_time_minutes: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn lat(&self) -> f64 {
        self.point.y()
    }

    pub fn lon(&self) -> f64 {
        self.point.x()
    }

    pub fn has_valid_coordinates(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat()) && (-180.0..=180.0).contains(&self.lon())
    }
}
