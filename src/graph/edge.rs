//! Edge implementation for the social graph

use super::types::{EdgeId, EdgeType, NodeId};
use serde::{Deserialize, Serialize};

/// An undirected, typed edge between two distinct nodes
///
/// `source` and `target` record the orientation the edge was created with; the
/// relationship itself is symmetric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier for this edge
    pub id: EdgeId,

    /// Node the edge was created from
    pub source: NodeId,

    /// Node the edge was created towards
    pub target: NodeId,

    /// Type of relationship (e.g., "is_friend")
    pub edge_type: EdgeType,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, source: NodeId, target: NodeId, edge_type: EdgeType) -> Self {
        Edge {
            id,
            source,
            target,
            edge_type,
        }
    }

    /// Check if this edge connects two specific nodes (in either direction)
    pub fn connects(&self, node1: NodeId, node2: NodeId) -> bool {
        (self.source == node1 && self.target == node2)
            || (self.source == node2 && self.target == node1)
    }

    /// The endpoint opposite to `node`, if `node` is an endpoint
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.source == node {
            Some(self.target)
        } else if self.target == node {
            Some(self.source)
        } else {
            None
        }
    }

    /// Endpoints as an ordered pair, smallest id first
    pub fn key(&self) -> (NodeId, NodeId) {
        edge_key(self.source, self.target)
    }
}

/// Canonical unordered key for a node pair
pub(crate) fn edge_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}
