//! Test utilities for handler testing.
//!
//! Provides request bodies and state shared by the service crates' tests.

use serde_json::{json, Value};

use crate::config::ServiceConfig;
use crate::state::AppState;

/// State with the default configuration.
pub fn test_state() -> AppState {
    AppState::new(ServiceConfig::default())
}

/// Known ids in the fixture bodies.
pub mod fixture_ids {
    /// Entrance hall; the only location in [`single_step_body`](super::single_step_body).
    pub const LOBBY: &str = "lobby";

    /// Waypoint next to the lobby.
    pub const STAIRS: &str = "stairs";

    /// Second-floor lecture hall, reachable from the lobby.
    pub const LECTURE_HALL: &str = "lecture-hall";

    /// Room that no navigation step touches.
    pub const STORAGE: &str = "storage";
}

/// One location and one waypoint joined by a single navigation step.
pub fn single_step_body() -> Value {
    json!({
        "locations": [
            {"id": fixture_ids::LOBBY, "name": "Lobby", "floor_id": "g", "building_id": "main"}
        ],
        "waypoints": [
            {"id": fixture_ids::STAIRS, "name": "Main stairs", "floor_id": "g", "building_id": "main"}
        ],
        "navigationSteps": [
            {
                "id": "step-1",
                "from_location_id": fixture_ids::LOBBY,
                "to_location_id": fixture_ids::LOBBY,
                "waypoint_id": fixture_ids::STAIRS,
                "step_number": 1,
                "instruction": "Walk to the main stairs"
            }
        ],
        "startLocationId": fixture_ids::LOBBY,
        "endLocationId": fixture_ids::STAIRS
    })
}

/// Small campus: lobby to lecture hall through the stairs, plus an
/// unconnected storage room. All nodes carry coordinates.
pub fn campus_body(start: &str, end: &str) -> Value {
    json!({
        "locations": [
            {"id": fixture_ids::LOBBY, "name": "Lobby", "floor_id": "g",
             "coordinates": {"x": 0.0, "y": 0.0}},
            {"id": fixture_ids::LECTURE_HALL, "name": "Lecture Hall", "floor_id": "1",
             "coordinates": {"x": 30.0, "y": 40.0}},
            {"id": fixture_ids::STORAGE, "name": "Storage", "floor_id": "b",
             "coordinates": {"x": 100.0, "y": 100.0}}
        ],
        "waypoints": [
            {"id": fixture_ids::STAIRS, "name": "Main stairs", "building_id": "main",
             "coordinates": {"x": 0.0, "y": 40.0}}
        ],
        "navigationSteps": [
            {"from_location_id": fixture_ids::LOBBY,
             "to_location_id": fixture_ids::LECTURE_HALL,
             "waypoint_id": fixture_ids::STAIRS,
             "instruction": "Take the stairs to the first floor"}
        ],
        "startLocationId": start,
        "endLocationId": end
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusnav_lib::{plan_route, PathfindingRequest};

    #[test]
    fn test_single_step_body_plans() {
        let request: PathfindingRequest = serde_json::from_value(single_step_body()).unwrap();
        let plan = plan_route(&request, &test_state().plan_options()).unwrap();
        assert_eq!(plan.path.len(), 2);
    }

    #[test]
    fn test_campus_body_distances() {
        let body = campus_body(fixture_ids::LOBBY, fixture_ids::LECTURE_HALL);
        let request: PathfindingRequest = serde_json::from_value(body).unwrap();
        let plan = plan_route(&request, &test_state().plan_options()).unwrap();
        assert_eq!(plan.total_distance, 70);
        assert_eq!(plan.estimated_time, 50);
    }
}
