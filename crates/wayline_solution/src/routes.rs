use crate::response::SolverResponse;

/// Renders each vehicle's route as an arrow-joined path, e.g. "A->B->C",
/// in received vehicle order. Mapping ids to display labels is left to the
/// caller.
pub fn vehicle_route_paths(response: &SolverResponse) -> Vec<(String, String)> {
    response
        .vehicle_data
        .iter()
        .map(|(vehicle_id, vehicle)| {
            let path = vehicle
                .route
                .iter()
                .map(|location| location.to_string())
                .collect::<Vec<_>>()
                .join("->");

            (vehicle_id.clone(), path)
        })
        .collect()
}
