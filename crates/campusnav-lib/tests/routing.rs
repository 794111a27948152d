mod common;

use std::sync::Arc;
use std::thread;

use campusnav_lib::{
    find_nearest_node, find_shortest_path, find_shortest_path_with, Coordinates, Edge,
    EuclideanWeighting, GraphStore, SearchStrategy, StoredWeighting,
    DEFAULT_NEAREST_MAX_DISTANCE,
};

use common::{generated_graph, node, reference_distance, triangle_graph};

#[test]
fn triangle_prefers_two_short_hops() {
    let graph = triangle_graph();
    let result = find_shortest_path(&graph, "A", "C");

    assert_eq!(result.node_ids(), vec!["A", "B", "C"]);
    assert_eq!(result.total_distance, 20.0);
    assert_eq!(result.total_time, 15.0);

    let legs: Vec<_> = result
        .edges
        .iter()
        .map(|e| (e.from.as_str(), e.to.as_str()))
        .collect();
    assert_eq!(legs, vec![("A", "B"), ("B", "C")]);
}

#[test]
fn isolated_node_is_unreachable() {
    let graph = triangle_graph();
    let result = find_shortest_path(&graph, "A", "D");

    assert!(result.is_empty());
    assert!(result.edges.is_empty());
    assert_eq!(result.total_distance, 0.0);
    assert_eq!(result.total_time, 0.0);
}

#[test]
fn edges_are_directed() {
    let graph = triangle_graph();
    assert!(find_shortest_path(&graph, "C", "A").is_empty());
}

#[test]
fn heap_strategy_matches_linear_on_triangle() {
    let graph = triangle_graph();
    let linear = find_shortest_path_with(&graph, "A", "C", &StoredWeighting, SearchStrategy::Linear);
    let heap = find_shortest_path_with(&graph, "A", "C", &StoredWeighting, SearchStrategy::Heap);
    assert_eq!(linear, heap);
}

#[test]
fn paths_are_optimal_on_generated_graphs() {
    for seed in 0..25 {
        let graph = generated_graph(seed, 12, 30);
        for (start, end) in [("n0", "n11"), ("n3", "n7"), ("n5", "n5"), ("n9", "n1")] {
            let expected = reference_distance(&graph, start, end);
            let result = find_shortest_path(&graph, start, end);

            match expected {
                Some(distance) => {
                    assert_eq!(result.nodes.first().map(|n| n.id.as_str()), Some(start));
                    assert_eq!(result.nodes.last().map(|n| n.id.as_str()), Some(end));
                    assert_eq!(result.edges.len() + 1, result.nodes.len());
                    assert!(
                        (result.total_distance - distance).abs() < 1e-9,
                        "seed {seed} {start}->{end}: {} vs {distance}",
                        result.total_distance
                    );
                    let summed: f64 = result.edges.iter().map(|e| e.distance).sum();
                    assert!((summed - result.total_distance).abs() < 1e-9);
                }
                None => assert!(result.is_empty(), "seed {seed} {start}->{end}"),
            }
        }
    }
}

#[test]
fn strategies_agree_on_distance() {
    for seed in 100..120 {
        let graph = generated_graph(seed, 20, 60);
        for end in ["n4", "n10", "n19"] {
            let linear =
                find_shortest_path_with(&graph, "n0", end, &StoredWeighting, SearchStrategy::Linear);
            let heap =
                find_shortest_path_with(&graph, "n0", end, &StoredWeighting, SearchStrategy::Heap);
            assert_eq!(linear.is_empty(), heap.is_empty(), "seed {seed} -> {end}");
            assert!(
                (linear.total_distance - heap.total_distance).abs() < 1e-9,
                "seed {seed} -> {end}"
            );
        }
    }
}

#[test]
fn euclidean_weighting_uses_coordinates() {
    let mut graph = GraphStore::new();
    graph.add_node(node("a", 0.0, 0.0));
    graph.add_node(node("b", 30.0, 40.0));
    graph.add_node(node("c", 0.0, 10.0));
    // Stored weights would favour the detour through c.
    graph.add_edge(Edge::new("a", "b", 100.0, 0.0)).unwrap();
    graph.add_edge(Edge::new("a", "c", 1.0, 0.0)).unwrap();
    graph.add_edge(Edge::new("c", "b", 1.0, 0.0)).unwrap();

    let stored = find_shortest_path(&graph, "a", "b");
    assert_eq!(stored.node_ids(), vec!["a", "c", "b"]);

    let live = find_shortest_path_with(
        &graph,
        "a",
        "b",
        &EuclideanWeighting::new(1.4),
        SearchStrategy::Linear,
    );
    assert_eq!(live.node_ids(), vec!["a", "b"]);
    assert_eq!(live.total_distance, 50.0);
    assert!((live.total_time - 50.0 / 1.4).abs() < 1e-9);
}

#[test]
fn concurrent_queries_share_one_graph() {
    let graph = Arc::new(generated_graph(7, 30, 90));
    let expected = find_shortest_path(&graph, "n0", "n29");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let graph = Arc::clone(&graph);
            thread::spawn(move || find_shortest_path(&graph, "n0", "n29"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("query thread"), expected);
    }
}

#[test]
fn nearest_node_within_default_radius() {
    let graph = triangle_graph();

    let hit = find_nearest_node(&graph, &Coordinates::new(9.0, 1.0), DEFAULT_NEAREST_MAX_DISTANCE);
    assert_eq!(hit.map(|n| n.id.as_str()), Some("B"));

    let far = find_nearest_node(&graph, &Coordinates::new(500.0, 500.0), DEFAULT_NEAREST_MAX_DISTANCE);
    assert!(far.is_none());
}

#[test]
fn nearest_node_limit_is_exclusive() {
    let graph = triangle_graph();
    // A is exactly 5 away; every other node is further.
    let point = Coordinates::new(-5.0, 0.0);
    assert!(find_nearest_node(&graph, &point, 5.0).is_none());
    assert_eq!(
        find_nearest_node(&graph, &point, 5.0001).map(|n| n.id.as_str()),
        Some("A")
    );
}
