use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Malformed solver response: {0}")]
pub struct MalformedResponseError(#[from] serde_json::Error);

/// A location identifier as assigned by the solver. Waypoint-graph
/// responses use numeric indices, others use names; both deserialize to
/// the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LocationId(pub String);

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LocationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for LocationId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum StringOrInt {
            String(String),
            Int(i64),
        }

        Ok(match StringOrInt::deserialize(deserializer)? {
            StringOrInt::String(id) => LocationId(id),
            StringOrInt::Int(id) => LocationId(id.to_string()),
        })
    }
}

/// One vehicle's assignment in the solver output.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VehicleData {
    /// Visited locations in driving order.
    pub route: Vec<LocationId>,

    /// Per-location category labels aligned with `route`. Optional; some
    /// solvers omit it entirely.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
}

/// Raw solver output keyed by vehicle id. Vehicle iteration order is the
/// order the response arrived in, not sorted.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SolverResponse {
    pub vehicle_data: IndexMap<String, VehicleData>,
}

impl SolverResponse {
    pub fn from_json_str(json: &str) -> Result<Self, MalformedResponseError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, MalformedResponseError> {
        Ok(serde_json::from_value(value)?)
    }
}
