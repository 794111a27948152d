//! Campus Compass library entry points.
//!
//! This crate holds the in-memory campus graph, the shortest-path engine that
//! runs over it, and the helpers that turn raw location/waypoint/step records
//! into a routable graph. Higher-level consumers (CLI, HTTP service) should
//! only depend on the functions exported here instead of reimplementing
//! behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod graph;
pub mod layout;
pub mod output;
pub mod path;
pub mod records;
pub mod routing;

pub use dataset::{load_graph_file, load_record_file, GraphFile, RecordFile};
pub use error::{Error, Result};
pub use graph::{Coordinates, Edge, GraphStore, Node, NodeKind};
pub use layout::{CoordinateLayout, LAYOUT_EXTENT};
pub use output::{PathEndpoint, PathStep, PathSummary, RenderMode};
pub use path::{
    find_nearest_node, find_shortest_path, find_shortest_path_with, EuclideanWeighting,
    PathResult, SearchStrategy, StoredWeighting, Weighting, DEFAULT_NEAREST_MAX_DISTANCE,
};
pub use records::{build_record_graph, LocationRecord, NavigationStepRecord, WaypointRecord};
pub use routing::{
    plan_route, PathfindingRequest, PlanOptions, RoutePlan, DEFAULT_WALKING_SPEED,
};
