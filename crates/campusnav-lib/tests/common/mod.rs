#![allow(dead_code)]

use campusnav_lib::{Coordinates, Edge, GraphStore, Node, NodeKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn node(id: &str, x: f64, y: f64) -> Node {
    Node {
        id: id.to_string(),
        name: format!("Node {id}"),
        kind: NodeKind::Location,
        floor_id: "floor-1".to_string(),
        building_id: "main".to_string(),
        coordinates: Coordinates::new(x, y),
        image_url: None,
    }
}

/// Nodes A(0,0), B(10,0), C(10,10) with A->B 10, B->C 10, A->C 25,
/// plus an isolated node D.
pub fn triangle_graph() -> GraphStore {
    let mut graph = GraphStore::new();
    graph.add_node(node("A", 0.0, 0.0));
    graph.add_node(node("B", 10.0, 0.0));
    graph.add_node(node("C", 10.0, 10.0));
    graph.add_node(node("D", 50.0, 50.0));
    graph
        .add_edge(Edge::new("A", "B", 10.0, 8.0).with_description("east corridor"))
        .expect("A->B");
    graph
        .add_edge(Edge::new("B", "C", 10.0, 7.0).with_description("north stairs"))
        .expect("B->C");
    graph
        .add_edge(Edge::new("A", "C", 25.0, 5.0).with_description("outdoor path"))
        .expect("A->C");
    graph
}

/// Deterministic pseudo-random graph for property-style checks.
///
/// Weights are distinct so that every strategy must agree on the path.
pub fn generated_graph(seed: u64, nodes: usize, edges: usize) -> GraphStore {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut graph = GraphStore::new();
    for i in 0..nodes {
        graph.add_node(node(&format!("n{i}"), i as f64, 0.0));
    }
    for i in 0..edges {
        let from = rng.gen_range(0..nodes);
        let to = rng.gen_range(0..nodes);
        let distance = f64::from(rng.gen_range(0..1000u32)) + (i as f64) / (edges as f64 + 1.0);
        graph
            .add_edge(Edge::new(
                format!("n{from}"),
                format!("n{to}"),
                distance,
                distance / 2.0,
            ))
            .expect("generated edge");
    }
    graph
}

/// Bellman-Ford reference distances from `start`.
pub fn reference_distance(graph: &GraphStore, start: &str, end: &str) -> Option<f64> {
    let ids: Vec<&str> = graph.nodes().iter().map(|n| n.id.as_str()).collect();
    let index = |id: &str| ids.iter().position(|candidate| *candidate == id);
    let mut dist = vec![f64::INFINITY; ids.len()];
    dist[index(start)?] = 0.0;

    for _ in 0..ids.len() {
        for edge in graph.all_edges() {
            let (Some(u), Some(v)) = (index(&edge.from), index(&edge.to)) else {
                continue;
            };
            if dist[u] + edge.distance < dist[v] {
                dist[v] = dist[u] + edge.distance;
            }
        }
    }

    let d = dist[index(end)?];
    d.is_finite().then_some(d)
}
