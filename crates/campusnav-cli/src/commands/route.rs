//! Route command handler for shortest paths over a graph file.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use campusnav_lib::{
    find_shortest_path_with, load_graph_file, Error as LibError, PathSummary, StoredWeighting,
};

use crate::commands::StrategyArg;
use crate::output::{render_summary, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs<'a> {
    pub graph: &'a Path,
    pub from: &'a str,
    pub to: &'a str,
    pub strategy: StrategyArg,
    pub format: OutputFormat,
}

/// Compute the shortest path between two node ids and render it.
///
/// Unknown ids and unreachable targets are reported as errors so the process
/// exits non-zero.
pub fn handle_route(args: &RouteCommandArgs<'_>) -> Result<String> {
    let graph = load_graph_file(args.graph)
        .with_context(|| format!("failed to load graph from {}", args.graph.display()))?;

    for id in [args.from, args.to] {
        if !graph.contains(id) {
            return Err(LibError::NodeNotFound { id: id.to_string() }.into());
        }
    }

    let strategy = args.strategy.into();
    let result = find_shortest_path_with(&graph, args.from, args.to, &StoredWeighting, strategy);
    debug!(hops = result.hop_count(), %strategy, "search finished");

    if result.is_empty() {
        return Err(LibError::RouteNotFound {
            start: args.from.to_string(),
            goal: args.to.to_string(),
        }
        .into());
    }

    let summary = PathSummary::from_result(&result, strategy)?;
    render_summary(&summary, args.format)
}
