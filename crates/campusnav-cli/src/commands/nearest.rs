use std::path::Path;

use anyhow::{ensure, Context, Result};

use campusnav_lib::{find_nearest_node, load_graph_file, Coordinates};

use crate::output::{render_nearest, OutputFormat};

/// Find the node closest to `(x, y)` within `max_distance`.
///
/// Finding nothing is not an error; the output says so.
pub fn handle_nearest(
    graph_path: &Path,
    point: Coordinates,
    max_distance: f64,
    format: OutputFormat,
) -> Result<String> {
    ensure!(
        max_distance.is_finite() && max_distance > 0.0,
        "--max-distance must be a positive number"
    );
    let graph = load_graph_file(graph_path)
        .with_context(|| format!("failed to load graph from {}", graph_path.display()))?;

    render_nearest(find_nearest_node(&graph, &point, max_distance), format)
}
