use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::NodeKind;
use crate::path::{PathResult, SearchStrategy};

/// Presentation style for turning a [`PathSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    PlainText,
    RichText,
}

/// Endpoint within a summarised path.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PathEndpoint {
    pub id: String,
    pub name: String,
}

impl PathEndpoint {
    fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// Node visited along a summarised path, with the leg that reached it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PathStep {
    pub index: usize,
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
}

impl PathStep {
    fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// Structured representation of a path that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PathSummary {
    pub strategy: SearchStrategy,
    pub hops: usize,
    pub start: PathEndpoint,
    pub goal: PathEndpoint,
    pub total_distance: f64,
    pub total_time: f64,
    pub steps: Vec<PathStep>,
}

impl PathSummary {
    /// Convert a [`PathResult`] into a summary with per-leg weights.
    ///
    /// The leg weights come from the edges recorded on the result.
    pub fn from_result(result: &PathResult, strategy: SearchStrategy) -> Result<Self> {
        let (Some(first), Some(last)) = (result.nodes.first(), result.nodes.last()) else {
            return Err(Error::EmptyPath);
        };

        let steps = result
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| {
                let leg = index.checked_sub(1).and_then(|i| result.edges.get(i));
                PathStep {
                    index,
                    id: node.id.clone(),
                    name: node.name.clone(),
                    kind: node.kind,
                    distance: leg.map(|edge| edge.distance),
                    time: leg.map(|edge| edge.time),
                    instruction: leg
                        .map(|edge| edge.description.clone())
                        .filter(|text| !text.is_empty()),
                }
            })
            .collect();

        Ok(Self {
            strategy,
            hops: result.hop_count(),
            start: PathEndpoint {
                id: first.id.clone(),
                name: first.name.clone(),
            },
            goal: PathEndpoint {
                id: last.id.clone(),
                name: last.name.clone(),
            },
            total_distance: result.total_distance,
            total_time: result.total_time,
            steps,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RenderMode) -> String {
        match mode {
            RenderMode::PlainText => self.render_plain(),
            RenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Path: {} -> {} ({} hops, distance {:.1}, time {:.0}s, search: {})",
            self.start.display_name(),
            self.goal.display_name(),
            self.hops,
            self.total_distance,
            self.total_time,
            self.strategy
        );
        for step in &self.steps {
            let _ = write!(
                buffer,
                "{:>3}: {} ({}, {})",
                step.index,
                step.display_name(),
                step.id,
                step.kind
            );
            if let Some(distance) = step.distance {
                let _ = write!(buffer, " +{distance:.1}");
            }
            if let Some(instruction) = &step.instruction {
                let _ = write!(buffer, " - {instruction}");
            }
            let _ = writeln!(buffer);
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Path**: _{} -> {}_ ({} hops, {:.1} units, ~{:.0}s)",
            self.start.display_name(),
            self.goal.display_name(),
            self.hops,
            self.total_distance,
            self.total_time
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** (`{}`)",
                step.index,
                step.display_name(),
                step.id
            );
        }
        buffer
    }
}
