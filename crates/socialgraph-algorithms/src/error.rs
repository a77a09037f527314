//! Error types for graph algorithms

use super::common::NodeId;
use thiserror::Error;

/// Errors raised by the analytics algorithms
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgoError {
    /// A node id was referenced that the view does not contain
    #[error("Node {0} not found in graph view")]
    NodeNotFound(NodeId),

    /// The iteration vector collapsed to zero (no edges, or all edge costs zero)
    #[error("Degenerate graph: zero normalization vector at iteration {iteration}")]
    DegenerateGraph { iteration: usize },

    /// Centrality was queried before any successful calculation
    #[error("Centrality has not been calculated yet")]
    NotReady,
}

pub type AlgoResult<T> = Result<T, AlgoError>;
