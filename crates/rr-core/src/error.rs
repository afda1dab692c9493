//! Graph-model error type.
//!
//! Graph implementations and the planner crate define their own error enums
//! on top of this one where they need richer context; `GraphError` covers
//! exactly the failures the [`crate::GraphModel`] seam can produce.

use thiserror::Error;

use crate::NodeId;

/// Errors produced by a [`crate::GraphModel`] implementation.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    #[error("neighbor discovery failed at {node}: {reason}")]
    Discovery { node: NodeId, reason: String },
}

pub type GraphResult<T> = Result<T, GraphError>;
