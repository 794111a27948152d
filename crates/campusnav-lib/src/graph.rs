use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Planar coordinates of a node on its floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate the Euclidean distance to another point.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Classification of a navigable point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A room or other destination users can pick.
    Location,
    /// An intermediate landmark used by navigation steps.
    Waypoint,
    /// A corridor crossing with no user-facing meaning.
    Junction,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            NodeKind::Location => "location",
            NodeKind::Waypoint => "waypoint",
            NodeKind::Junction => "junction",
        };
        f.write_str(value)
    }
}

/// A navigable point in the campus graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub floor_id: String,
    #[serde(default)]
    pub building_id: String,
    pub coordinates: Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Directed, weighted connection between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub from: String,
    pub to: String,
    /// Weight minimised by the shortest-path engine.
    pub distance: f64,
    /// Carried alongside `distance`; accumulated but never minimised.
    #[serde(default)]
    pub time: f64,
    #[serde(default)]
    pub description: String,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: f64, time: f64) -> Self {
        Self {
            id: None,
            from: from.into(),
            to: to.into(),
            distance,
            time,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// In-memory store of nodes, directed edges and the adjacency index.
///
/// Nodes keep their insertion order; re-adding an id replaces the node in
/// place. Outgoing edges and adjacency are stored per source node, so the
/// per-node vectors always line up with `nodes`.
///
/// The store has no internal locking. Build it with a single writer, then
/// share it immutably between concurrent queries.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    edges: Vec<Vec<Edge>>,
    adjacency: Vec<Vec<String>>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, or overwrite the node with the same id.
    pub fn add_node(&mut self, node: Node) {
        if let Some(&position) = self.index.get(&node.id) {
            debug!(id = %node.id, "overwriting existing node");
            self.nodes[position] = node;
            return;
        }

        self.index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
        self.edges.push(Vec::new());
        self.adjacency.push(Vec::new());
    }

    /// Append an edge to its source node.
    ///
    /// Fails without touching the store when either endpoint is unknown.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        let Some(&source) = self.index.get(&edge.from) else {
            return Err(invalid_reference(&edge, &edge.from));
        };
        if !self.index.contains_key(&edge.to) {
            return Err(invalid_reference(&edge, &edge.to));
        }

        let neighbours = &mut self.adjacency[source];
        if !neighbours.iter().any(|id| *id == edge.to) {
            neighbours.push(edge.to.clone());
        }
        self.edges[source].push(edge);
        Ok(())
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&position| &self.nodes[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Outgoing edges of `from` in insertion order.
    pub fn edges(&self, from: &str) -> &[Edge] {
        self.index
            .get(from)
            .map(|&position| self.edges[position].as_slice())
            .unwrap_or(&[])
    }

    /// Destination ids reachable from `id` over at least one edge, deduplicated.
    pub fn adjacent_nodes(&self, id: &str) -> &[String] {
        self.index
            .get(id)
            .map(|&position| self.adjacency[position].as_slice())
            .unwrap_or(&[])
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Every edge, grouped by source in node order.
    pub fn all_edges(&self) -> Vec<&Edge> {
        self.edges.iter().flatten().collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn edges_at(&self, position: usize) -> &[Edge] {
        &self.edges[position]
    }
}

fn invalid_reference(edge: &Edge, missing: &str) -> Error {
    Error::InvalidReference {
        from: edge.from.clone(),
        to: edge.to.clone(),
        missing: missing.to_string(),
    }
}
