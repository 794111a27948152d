//! Raw location, waypoint and navigation-step records and the graph built from them.
//!
//! Records come from the external data store. Only the identifiers, floor and
//! building ids, and the step endpoints matter here; everything else is kept
//! opaquely in `extra` so it can be echoed back unchanged.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::Result;
use crate::graph::{Coordinates, Edge, GraphStore, Node, NodeKind};
use crate::layout::CoordinateLayout;

/// A room or destination as stored by the data store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub floor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An intermediate landmark as stored by the data store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaypointRecord {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub building_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One step of a stored route: walk from a location via a waypoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStepRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub from_location_id: String,
    pub to_location_id: String,
    pub waypoint_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LocationRecord {
    fn to_node(&self, layout: CoordinateLayout) -> Node {
        Node {
            id: self.id.clone(),
            name: self.name.clone(),
            kind: NodeKind::Location,
            floor_id: self.floor_id.clone(),
            building_id: self.building_id.clone().unwrap_or_default(),
            coordinates: layout.place(&self.id, self.coordinates),
            image_url: self.image_url.clone(),
        }
    }
}

impl WaypointRecord {
    fn to_node(&self, layout: CoordinateLayout) -> Node {
        Node {
            id: self.id.clone(),
            name: self.name.clone(),
            kind: NodeKind::Waypoint,
            floor_id: self.floor_id.clone().unwrap_or_default(),
            building_id: self.building_id.clone(),
            coordinates: layout.place(&self.id, self.coordinates),
            image_url: self.image_url.clone(),
        }
    }
}

/// Treat an explicit `null` like a missing string field.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Build a routable graph from raw records.
///
/// Each navigation step makes its waypoint mutually adjacent with both the
/// `from` and the `to` location. Edge distance is the straight-line distance
/// between the endpoints and edge time is that distance at `walking_speed`.
/// A step that names an unknown location or waypoint fails the whole build.
pub fn build_record_graph(
    locations: &[LocationRecord],
    waypoints: &[WaypointRecord],
    steps: &[NavigationStepRecord],
    layout: CoordinateLayout,
    walking_speed: f64,
) -> Result<GraphStore> {
    let mut graph = GraphStore::new();
    for location in locations {
        graph.add_node(location.to_node(layout));
    }
    for waypoint in waypoints {
        graph.add_node(waypoint.to_node(layout));
    }

    for step in steps {
        connect(&mut graph, step, &step.from_location_id, walking_speed)?;
        connect(&mut graph, step, &step.to_location_id, walking_speed)?;
    }

    debug!(
        %layout,
        nodes = graph.len(),
        edges = graph.edge_count(),
        "record graph built"
    );
    Ok(graph)
}

fn connect(
    graph: &mut GraphStore,
    step: &NavigationStepRecord,
    location_id: &str,
    walking_speed: f64,
) -> Result<()> {
    let waypoint_id = step.waypoint_id.as_str();
    for (from, to) in [(location_id, waypoint_id), (waypoint_id, location_id)] {
        if graph.adjacent_nodes(from).iter().any(|id| id == to) {
            continue;
        }

        let distance = match (graph.node(from), graph.node(to)) {
            (Some(a), Some(b)) => a.coordinates.distance_to(&b.coordinates),
            _ => 0.0,
        };
        let time = if walking_speed > 0.0 {
            distance / walking_speed
        } else {
            0.0
        };

        let mut edge = Edge::new(from, to, distance, time)
            .with_description(step.instruction.clone().unwrap_or_default());
        edge.id = step.id.clone();
        // Unknown endpoints are rejected here.
        graph.add_edge(edge)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn location(id: &str, x: f64, y: f64) -> LocationRecord {
        LocationRecord {
            id: id.to_string(),
            name: format!("Room {id}"),
            floor_id: "f1".to_string(),
            building_id: None,
            image_url: None,
            coordinates: Some(Coordinates::new(x, y)),
            extra: Map::new(),
        }
    }

    fn waypoint(id: &str, x: f64, y: f64) -> WaypointRecord {
        WaypointRecord {
            id: id.to_string(),
            name: format!("Waypoint {id}"),
            floor_id: None,
            building_id: "b1".to_string(),
            image_url: None,
            coordinates: Some(Coordinates::new(x, y)),
            extra: Map::new(),
        }
    }

    fn step(from: &str, to: &str, waypoint: &str) -> NavigationStepRecord {
        NavigationStepRecord {
            id: Some(format!("{from}-{to}")),
            from_location_id: from.to_string(),
            to_location_id: to.to_string(),
            waypoint_id: waypoint.to_string(),
            step_number: Some(1),
            instruction: Some("Pass the fountain".to_string()),
            extra: Map::new(),
        }
    }

    #[test]
    fn steps_make_locations_and_waypoints_mutually_adjacent() {
        let graph = build_record_graph(
            &[location("l1", 0.0, 0.0), location("l2", 6.0, 8.0)],
            &[waypoint("w1", 3.0, 4.0)],
            &[step("l1", "l2", "w1")],
            CoordinateLayout::Hashed,
            1.4,
        )
        .expect("graph builds");

        assert_eq!(graph.adjacent_nodes("l1"), ["w1".to_string()]);
        assert_eq!(graph.adjacent_nodes("l2"), ["w1".to_string()]);
        assert_eq!(
            graph.adjacent_nodes("w1"),
            ["l1".to_string(), "l2".to_string()]
        );
        assert_eq!(graph.edge_count(), 4);

        let edge = &graph.edges("l1")[0];
        assert_eq!(edge.distance, 5.0);
        assert!((edge.time - 5.0 / 1.4).abs() < 1e-12);
        assert_eq!(edge.description, "Pass the fountain");
    }

    #[test]
    fn repeated_steps_do_not_duplicate_edges() {
        let graph = build_record_graph(
            &[location("l1", 0.0, 0.0), location("l2", 1.0, 0.0)],
            &[waypoint("w1", 0.5, 0.0)],
            &[step("l1", "l2", "w1"), step("l2", "l1", "w1")],
            CoordinateLayout::Hashed,
            1.4,
        )
        .unwrap();
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn unknown_step_reference_fails() {
        let error = build_record_graph(
            &[location("l1", 0.0, 0.0)],
            &[],
            &[step("l1", "l1", "missing")],
            CoordinateLayout::Hashed,
            1.4,
        )
        .unwrap_err();
        assert!(matches!(error, Error::InvalidReference { ref missing, .. } if missing == "missing"));
    }

    #[test]
    fn records_keep_unknown_fields() {
        let json = r#"{
            "id": "l1", "name": "Library", "floor_id": "f2",
            "room_number": "101", "role_access": ["student"]
        }"#;
        let record: LocationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.floor_id, "f2");
        assert_eq!(record.extra["room_number"], "101");
        assert!(record.coordinates.is_none());

        let node = record.to_node(CoordinateLayout::Hashed);
        assert_eq!(node.kind, NodeKind::Location);
        assert_eq!(node.building_id, "");
    }
}
