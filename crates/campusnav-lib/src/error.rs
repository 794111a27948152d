use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the Campus Compass library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an edge names a node that is not in the graph.
    #[error("edge {from} -> {to} references unknown node {missing}")]
    InvalidReference {
        from: String,
        to: String,
        missing: String,
    },

    /// Raised when a pathfinding request omits its start or end identifier.
    #[error("missing {field} in pathfinding request")]
    MissingEndpoint { field: &'static str },

    /// Raised when no route could be found between two nodes.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when summarising a path result that holds no nodes.
    #[error("path result was empty")]
    EmptyPath,

    /// Raised when a lookup by node identifier fails.
    #[error("unknown node id: {id}")]
    NodeNotFound { id: String },

    /// Raised when a walking speed is zero, negative or not finite.
    #[error("walking speed must be a positive number, got {value}")]
    InvalidWalkingSpeed { value: f64 },

    /// Raised when a coordinate layout name cannot be parsed.
    #[error("unknown coordinate layout '{value}'; expected 'hashed' or 'random'")]
    InvalidLayout { value: String },

    /// Raised when a graph or record file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for JSON decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
