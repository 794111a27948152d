use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::{Coordinates, Edge, GraphStore, Node};

/// Default search radius for [`find_nearest_node`].
pub const DEFAULT_NEAREST_MAX_DISTANCE: f64 = 50.0;

/// Supplies the per-edge weights the search optimises over.
///
/// `distance` is minimised; `time` is only accumulated along whichever path
/// minimises distance.
pub trait Weighting {
    fn distance(&self, graph: &GraphStore, edge: &Edge) -> f64;
    fn time(&self, graph: &GraphStore, edge: &Edge) -> f64;
}

/// Uses the `distance` and `time` stored on each edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoredWeighting;

impl Weighting for StoredWeighting {
    fn distance(&self, _graph: &GraphStore, edge: &Edge) -> f64 {
        edge.distance
    }

    fn time(&self, _graph: &GraphStore, edge: &Edge) -> f64 {
        edge.time
    }
}

/// Recomputes each edge as the straight-line distance between its endpoints.
///
/// Time is the distance divided by `walking_speed` (distance units per second).
/// A speed that is not positive yields zero time on every edge; callers that
/// publish times validate the speed first, as [`crate::plan_route`] does.
#[derive(Debug, Clone, Copy)]
pub struct EuclideanWeighting {
    pub walking_speed: f64,
}

impl EuclideanWeighting {
    pub fn new(walking_speed: f64) -> Self {
        Self { walking_speed }
    }
}

impl Weighting for EuclideanWeighting {
    fn distance(&self, graph: &GraphStore, edge: &Edge) -> f64 {
        match (graph.node(&edge.from), graph.node(&edge.to)) {
            (Some(from), Some(to)) => from.coordinates.distance_to(&to.coordinates),
            _ => f64::INFINITY,
        }
    }

    fn time(&self, graph: &GraphStore, edge: &Edge) -> f64 {
        if self.walking_speed <= 0.0 {
            return 0.0;
        }
        self.distance(graph, edge) / self.walking_speed
    }
}

/// How the next node to settle is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// Linear scan over unvisited nodes, O(V²).
    #[default]
    Linear,
    /// Binary heap frontier, O((V + E) log V).
    Heap,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SearchStrategy::Linear => "linear",
            SearchStrategy::Heap => "heap",
        };
        f.write_str(value)
    }
}

/// Ordered path from start to end with its accumulated weights.
///
/// `edges` has one element fewer than `nodes`. An empty result signals that
/// the end node was not reachable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResult {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub total_distance: f64,
    pub total_time: f64,
}

impl PathResult {
    /// The unreachable result: no nodes, no edges, zero totals.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node_ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|node| node.id.as_str()).collect()
    }
}

/// Find the shortest path using stored edge distances and the linear scan.
pub fn find_shortest_path(graph: &GraphStore, start: &str, end: &str) -> PathResult {
    find_shortest_path_with(graph, start, end, &StoredWeighting, SearchStrategy::Linear)
}

/// Run Dijkstra's algorithm with the given weight supplier and frontier strategy.
///
/// Among nodes with equal tentative distance the one inserted first into the
/// graph is settled first. Between parallel edges the lowest weight wins, and
/// the earlier edge wins equal weights. Totals are read from the tentative
/// tables at `end`.
pub fn find_shortest_path_with<W: Weighting + ?Sized>(
    graph: &GraphStore,
    start: &str,
    end: &str,
    weighting: &W,
    strategy: SearchStrategy,
) -> PathResult {
    let (Some(start_pos), Some(end_pos)) = (graph.position(start), graph.position(end)) else {
        debug!(start, end, "start or end node missing from graph");
        return PathResult::empty();
    };

    let mut tables = SearchTables::new(graph.len(), start_pos);
    let settled = match strategy {
        SearchStrategy::Linear => linear_search(graph, weighting, &mut tables, end_pos),
        SearchStrategy::Heap => heap_search(graph, weighting, &mut tables, start_pos, end_pos),
    };
    debug!(start, end, %strategy, settled, "search finished");

    reconstruct(graph, weighting, &tables, start_pos, end_pos)
}

/// Return the node closest to `point`, if it lies strictly within `max_distance`.
///
/// The first node found at the minimum distance wins ties.
pub fn find_nearest_node<'g>(
    graph: &'g GraphStore,
    point: &Coordinates,
    max_distance: f64,
) -> Option<&'g Node> {
    let mut nearest = None;
    let mut min_distance = max_distance;

    for node in graph.nodes() {
        let distance = node.coordinates.distance_to(point);
        if distance < min_distance {
            min_distance = distance;
            nearest = Some(node);
        }
    }

    nearest
}

struct SearchTables {
    distances: Vec<f64>,
    times: Vec<f64>,
    previous: Vec<Option<usize>>,
    visited: Vec<bool>,
}

impl SearchTables {
    fn new(len: usize, start: usize) -> Self {
        let mut distances = vec![f64::INFINITY; len];
        let mut times = vec![f64::INFINITY; len];
        distances[start] = 0.0;
        times[start] = 0.0;
        Self {
            distances,
            times,
            previous: vec![None; len],
            visited: vec![false; len],
        }
    }

    /// Relax every outgoing edge of `current`, returning the nodes whose
    /// tentative distance improved.
    fn relax<W: Weighting + ?Sized>(
        &mut self,
        graph: &GraphStore,
        weighting: &W,
        current: usize,
    ) -> Vec<usize> {
        let mut improved = Vec::new();
        for edge in graph.edges_at(current) {
            let Some(next) = graph.position(&edge.to) else {
                continue;
            };
            if self.visited[next] {
                continue;
            }

            let candidate = self.distances[current] + weighting.distance(graph, edge);
            if candidate < self.distances[next] {
                self.distances[next] = candidate;
                self.times[next] = self.times[current] + weighting.time(graph, edge);
                self.previous[next] = Some(current);
                improved.push(next);
            }
        }
        improved
    }
}

fn linear_search<W: Weighting + ?Sized>(
    graph: &GraphStore,
    weighting: &W,
    tables: &mut SearchTables,
    end: usize,
) -> usize {
    let mut settled = 0;
    loop {
        let mut current = None;
        let mut min_distance = f64::INFINITY;
        for (position, &distance) in tables.distances.iter().enumerate() {
            if !tables.visited[position] && distance < min_distance {
                min_distance = distance;
                current = Some(position);
            }
        }

        // Nothing left, or only unreachable nodes remain.
        let Some(current) = current else {
            break;
        };
        if current == end {
            break;
        }

        tables.visited[current] = true;
        settled += 1;
        tables.relax(graph, weighting, current);
    }
    settled
}

fn heap_search<W: Weighting + ?Sized>(
    graph: &GraphStore,
    weighting: &W,
    tables: &mut SearchTables,
    start: usize,
    end: usize,
) -> usize {
    let mut settled = 0;
    let mut queue = BinaryHeap::new();
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        if tables.visited[entry.node] || entry.cost.0 > tables.distances[entry.node] {
            continue;
        }
        if entry.node == end {
            break;
        }

        tables.visited[entry.node] = true;
        settled += 1;
        for next in tables.relax(graph, weighting, entry.node) {
            queue.push(QueueEntry::new(next, tables.distances[next]));
        }
    }
    settled
}

fn reconstruct<W: Weighting + ?Sized>(
    graph: &GraphStore,
    weighting: &W,
    tables: &SearchTables,
    start: usize,
    end: usize,
) -> PathResult {
    let mut positions = vec![end];
    let mut current = end;
    while let Some(previous) = tables.previous[current] {
        positions.push(previous);
        current = previous;
    }
    positions.reverse();

    if positions.first() != Some(&start) {
        return PathResult::empty();
    }

    let all_nodes = graph.nodes();
    let nodes: Vec<Node> = positions
        .iter()
        .map(|&position| all_nodes[position].clone())
        .collect();
    let edges: Vec<Edge> = positions
        .windows(2)
        .filter_map(|pair| cheapest_edge(graph, weighting, pair[0], &all_nodes[pair[1]].id))
        .cloned()
        .collect();

    PathResult {
        nodes,
        edges,
        total_distance: tables.distances[end],
        total_time: tables.times[end],
    }
}

fn cheapest_edge<'g, W: Weighting + ?Sized>(
    graph: &'g GraphStore,
    weighting: &W,
    from: usize,
    to: &str,
) -> Option<&'g Edge> {
    graph
        .edges_at(from)
        .iter()
        .filter(|edge| edge.to == to)
        .min_by(|a, b| {
            weighting
                .distance(graph, a)
                .total_cmp(&weighting.distance(graph, b))
        })
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: usize,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: usize, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then by
        // insertion position to match the linear scan.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
