use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::{Edge, GraphStore, Node};
use crate::records::{LocationRecord, NavigationStepRecord, WaypointRecord};
use crate::routing::PathfindingRequest;

/// On-disk graph with explicit nodes and weighted edges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphFile {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphFile {
    /// Load every node, then every edge, into a fresh [`GraphStore`].
    ///
    /// Fails on the first edge whose endpoints are not both declared.
    pub fn into_graph(self) -> Result<GraphStore> {
        let mut graph = GraphStore::new();
        for node in self.nodes {
            graph.add_node(node);
        }
        for edge in self.edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }
}

/// On-disk export of the raw location, waypoint and step records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordFile {
    #[serde(default)]
    pub locations: Vec<LocationRecord>,
    #[serde(default)]
    pub waypoints: Vec<WaypointRecord>,
    #[serde(default)]
    pub navigation_steps: Vec<NavigationStepRecord>,
}

impl RecordFile {
    /// Turn the records into a pathfinding request between two ids.
    pub fn into_request(
        self,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> PathfindingRequest {
        PathfindingRequest {
            locations: self.locations,
            waypoints: self.waypoints,
            navigation_steps: self.navigation_steps,
            start_location_id: Some(start.into()),
            end_location_id: Some(end.into()),
        }
    }
}

/// Read a [`GraphFile`] from JSON and build the graph it describes.
pub fn load_graph_file(path: &Path) -> Result<GraphStore> {
    let file: GraphFile = read_json(path)?;
    debug!(
        path = %path.display(),
        nodes = file.nodes.len(),
        edges = file.edges.len(),
        "graph file decoded"
    );
    let graph = file.into_graph()?;
    info!(
        path = %path.display(),
        nodes = graph.len(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

/// Read a [`RecordFile`] from JSON.
pub fn load_record_file(path: &Path) -> Result<RecordFile> {
    let file: RecordFile = read_json(path)?;
    info!(
        path = %path.display(),
        locations = file.locations.len(),
        waypoints = file.waypoints.len(),
        steps = file.navigation_steps.len(),
        "record file loaded"
    );
    Ok(file)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}
