//! Request-level route planning over raw records.
//!
//! This module provides:
//! - [`PathfindingRequest`] - Records plus start/end ids, as posted by clients
//! - [`PlanOptions`] - Coordinate layout, walking speed and search strategy
//! - [`RoutePlan`] - Rounded distance and walking-time estimate for a path
//! - [`plan_route`] - Main entry point: validate, build the graph, search
//!
//! Every call builds its own graph from the request, so concurrent calls share
//! no mutable state.
//!
//! # Example
//!
//! ```ignore
//! use campusnav_lib::{plan_route, PathfindingRequest, PlanOptions};
//!
//! let request: PathfindingRequest = serde_json::from_str(body)?;
//! let plan = plan_route(&request, &PlanOptions::default())?;
//! println!("{} units, ~{} seconds", plan.total_distance, plan.estimated_time);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Node, NodeKind};
use crate::layout::CoordinateLayout;
use crate::path::{find_shortest_path_with, EuclideanWeighting, SearchStrategy};
use crate::records::{build_record_graph, LocationRecord, NavigationStepRecord, WaypointRecord};

/// Average walking speed in distance units per second.
pub const DEFAULT_WALKING_SPEED: f64 = 1.4;

/// Pathfinding request carrying the raw records to route over.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathfindingRequest {
    #[serde(default)]
    pub locations: Vec<LocationRecord>,
    #[serde(default)]
    pub waypoints: Vec<WaypointRecord>,
    #[serde(default)]
    pub navigation_steps: Vec<NavigationStepRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_location_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_location_id: Option<String>,
}

impl PathfindingRequest {
    /// Start id, if present and not blank.
    pub fn start(&self) -> Option<&str> {
        non_blank(self.start_location_id.as_deref())
    }

    /// End id, if present and not blank.
    pub fn end(&self) -> Option<&str> {
        non_blank(self.end_location_id.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|id| !id.trim().is_empty())
}

/// Knobs applied when turning a request into a plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanOptions {
    pub layout: CoordinateLayout,
    /// Distance units per second. Must be finite and positive; [`plan_route`]
    /// rejects anything else with [`Error::InvalidWalkingSpeed`].
    pub walking_speed: f64,
    pub strategy: SearchStrategy,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            layout: CoordinateLayout::default(),
            walking_speed: DEFAULT_WALKING_SPEED,
            strategy: SearchStrategy::default(),
        }
    }
}

/// Planned route returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    pub path: Vec<Node>,
    /// Path length rounded to whole distance units.
    pub total_distance: u64,
    /// Walking time in seconds, derived from `total_distance`.
    pub estimated_time: u64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Ids of the locations (rooms) along the path, skipping waypoints.
    pub fn location_ids(&self) -> Vec<&str> {
        self.path
            .iter()
            .filter(|node| node.kind == NodeKind::Location)
            .map(|node| node.id.as_str())
            .collect()
    }
}

/// Compute a route for a pathfinding request.
///
/// Missing endpoints and a non-positive walking speed are rejected before the
/// graph is built. An unreachable end yields [`Error::RouteNotFound`].
///
/// `estimatedTime` is derived from the rounded `totalDistance`, so the two
/// published figures always agree with each other.
pub fn plan_route(request: &PathfindingRequest, options: &PlanOptions) -> Result<RoutePlan> {
    let start = request.start().ok_or(Error::MissingEndpoint {
        field: "startLocationId",
    })?;
    let end = request.end().ok_or(Error::MissingEndpoint {
        field: "endLocationId",
    })?;
    if !(options.walking_speed.is_finite() && options.walking_speed > 0.0) {
        return Err(Error::InvalidWalkingSpeed {
            value: options.walking_speed,
        });
    }

    let graph = build_record_graph(
        &request.locations,
        &request.waypoints,
        &request.navigation_steps,
        options.layout,
        options.walking_speed,
    )?;

    let weighting = EuclideanWeighting::new(options.walking_speed);
    let result = find_shortest_path_with(&graph, start, end, &weighting, options.strategy);
    if result.is_empty() {
        return Err(Error::RouteNotFound {
            start: start.to_string(),
            goal: end.to_string(),
        });
    }

    let total_distance = result.total_distance.round();
    let estimated_time = (total_distance / options.walking_speed).round();
    debug!(
        start,
        end,
        hops = result.hop_count(),
        total_distance,
        estimated_time,
        "route planned"
    );

    Ok(RoutePlan {
        path: result.nodes,
        total_distance: total_distance as u64,
        estimated_time: estimated_time as u64,
    })
}
