//! Planner error type.

use thiserror::Error;

use rr_core::NodeId;

/// Errors produced by `rr-planner`.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The graph produced no nearest node for an endpoint — it has no nodes.
    #[error("cannot plan on an empty graph: no node to snap endpoints to")]
    EmptyGraph,

    /// The open set was exhausted before the end node was reached.
    #[error("no path from {from} to {to}")]
    NoPath { from: NodeId, to: NodeId },

    /// The parent chain did not lead back to the start node.  Indicates a
    /// bug in expansion bookkeeping, never expected in a correct build.
    #[error("broken parent chain at {node} during path reconstruction")]
    BrokenParentChain { node: NodeId },
}

pub type PlanResult<T> = Result<T, PlanError>;
