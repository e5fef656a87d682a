use serde::Serialize;

use crate::response::{LocationId, SolverResponse};

/// One stop of one vehicle's route, flattened. `route` mirrors `location`
/// deliberately; the upstream tabular shape carries both columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionRow {
    pub route: LocationId,
    pub truck_id: String,
    pub location: LocationId,
}

/// Flat per-stop view of a solver response.
///
/// The `types` column is all-or-nothing per response: it is omitted when no
/// vehicle reported a `type` list. When only some vehicles report one, the
/// column is shorter than the row list and misaligns silently. That
/// fragility mirrors the upstream convention and is kept as-is.
#[derive(Debug, Clone, Serialize)]
pub struct SolutionTable {
    pub rows: Vec<SolutionRow>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
}

impl SolutionTable {
    /// Flattens per-vehicle route lists into rows: vehicles in received
    /// order, locations in route order.
    pub fn from_response(response: &SolverResponse) -> Self {
        let mut rows = Vec::new();
        let mut types = Vec::new();

        for (vehicle_id, vehicle) in &response.vehicle_data {
            for location in &vehicle.route {
                rows.push(SolutionRow {
                    route: location.clone(),
                    truck_id: vehicle_id.clone(),
                    location: location.clone(),
                });
            }

            if let Some(vehicle_types) = &vehicle.types {
                types.extend(vehicle_types.iter().cloned());
            }
        }

        Self {
            rows,
            types: if types.is_empty() { None } else { Some(types) },
        }
    }
}
