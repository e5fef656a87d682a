use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Marker colours understood by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Red,
    Green,
    Blue,
    Orange,
    Gray,
}

impl std::fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                MarkerColor::Red => "red",
                MarkerColor::Green => "green",
                MarkerColor::Blue => "blue",
                MarkerColor::Orange => "orange",
                MarkerColor::Gray => "gray",
            }
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub color: MarkerColor,
    pub icon: Option<String>,
}

impl MarkerStyle {
    pub fn colored(color: MarkerColor) -> Self {
        Self { color, icon: None }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolylineStyle {
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
}

impl Default for PolylineStyle {
    fn default() -> Self {
        Self {
            color: String::from("blue"),
            weight: 5,
            opacity: 0.6,
        }
    }
}

/// Category-to-colour mapping with a mandatory default. Unknown or missing
/// categories degrade to the default colour instead of failing.
#[derive(Debug, Clone)]
pub struct CategoryColors {
    colors: FxHashMap<String, MarkerColor>,
    default: MarkerColor,
}

impl CategoryColors {
    pub fn new(default: MarkerColor) -> Self {
        Self {
            colors: FxHashMap::default(),
            default,
        }
    }

    pub fn with(mut self, category: impl Into<String>, color: MarkerColor) -> Self {
        self.colors.insert(category.into(), color);
        self
    }

    pub fn color_of(&self, category: Option<&str>) -> MarkerColor {
        category
            .and_then(|category| self.colors.get(category).copied())
            .unwrap_or(self.default)
    }

    /// Pickup-delivery scheme.
    pub fn pdp() -> Self {
        Self::new(MarkerColor::Gray)
            .with("DEPOT", MarkerColor::Red)
            .with("Pickup", MarkerColor::Green)
            .with("Delivery", MarkerColor::Blue)
    }

    /// Last-mile-delivery scheme.
    pub fn last_mile() -> Self {
        Self::new(MarkerColor::Gray)
            .with("DEPOT", MarkerColor::Red)
            .with("Restaurant", MarkerColor::Green)
            .with("Retailer", MarkerColor::Blue)
            .with("Business", MarkerColor::Orange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_falls_back_to_default() {
        let colors = CategoryColors::pdp();

        assert_eq!(colors.color_of(Some("Pickup")), MarkerColor::Green);
        assert_eq!(colors.color_of(Some("Warehouse")), MarkerColor::Gray);
        assert_eq!(colors.color_of(None), MarkerColor::Gray);
    }
}
