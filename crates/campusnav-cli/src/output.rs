//! Output formatting for CLI results.

use clap::ValueEnum;
use serde::Serialize;

use campusnav_lib::{Node, PathSummary, RenderMode, RoutePlan};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line per node, for terminals.
    #[default]
    Text,
    /// Markdown-flavoured listing.
    Rich,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    fn render_mode(self) -> RenderMode {
        match self {
            OutputFormat::Rich => RenderMode::RichText,
            _ => RenderMode::PlainText,
        }
    }
}

/// Render a path summary in the requested format.
pub fn render_summary(summary: &PathSummary, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => to_json(summary),
        other => Ok(summary.render(other.render_mode())),
    }
}

/// Render a record-based plan in the requested format.
///
/// Text and rich output list the path; JSON matches the service response body.
pub fn render_plan(plan: &RoutePlan, format: OutputFormat) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return to_json(plan);
    }

    let mut out = format!(
        "Plan: {} nodes, distance {}, about {}s on foot\n",
        plan.path.len(),
        plan.total_distance,
        plan.estimated_time
    );
    for (index, node) in plan.path.iter().enumerate() {
        let line = match format {
            OutputFormat::Rich => format!("* {:>2}. **{}** (`{}`)\n", index, label(node), node.id),
            _ => format!("{:>3}: {} ({}, {})\n", index, label(node), node.id, node.kind),
        };
        out.push_str(&line);
    }
    Ok(out)
}

/// Render the node closest to a query point, or a not-found line.
pub fn render_nearest(node: Option<&Node>, format: OutputFormat) -> anyhow::Result<String> {
    match (node, format) {
        (node, OutputFormat::Json) => to_json(&node),
        (Some(node), _) => Ok(format!(
            "Nearest: {} ({}, {}) at ({:.1}, {:.1})\n",
            label(node),
            node.id,
            node.kind,
            node.coordinates.x,
            node.coordinates.y
        )),
        (None, _) => Ok("No node within range\n".to_string()),
    }
}

fn label(node: &Node) -> &str {
    if node.name.is_empty() {
        &node.id
    } else {
        &node.name
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}
