//! Graph analytics module
//!
//! Algorithms are implemented in the `socialgraph-algorithms` crate.
//! This module provides the integration/adapter layer: it projects the store
//! onto a dense [`GraphView`] and translates ids and errors back.

pub mod snapshot;

use crate::graph::{EdgeType, GraphResult, GraphStore, NodeId};
use socialgraph_algorithms::{GraphView, NodeId as AlgoNodeId};

// Re-export algorithms
pub use snapshot::{CentralityEngine, FriendSuggestion, GraphSnapshot, NodeCost, Traversal};
pub use socialgraph_algorithms::{CentralityState, EdgeCost, EigenvectorConfig, UniformCost};

/// Build an undirected GraphView over every node of the store, keeping only
/// edges of `edge_type`.
///
/// Node `i` of the store lands at dense index `i` of the view.
pub fn build_view(store: &GraphStore, edge_type: &EdgeType) -> GraphView {
    let index_to_node: Vec<AlgoNodeId> = store
        .all_nodes()
        .iter()
        .map(|node| node.id.as_u64())
        .collect();

    let adjacency: Vec<Vec<usize>> = store
        .all_nodes()
        .iter()
        .map(|node| {
            store
                .neighbor_ids(node.id, edge_type)
                .map(|neighbor| neighbor.index())
                .collect()
        })
        .collect();

    GraphView::from_adjacency_list(index_to_node, adjacency)
}

/// Bounded breadth-first traversal from `start` over `edge_type`.
///
/// Builds a fresh projection per call; use a [`GraphSnapshot`] when running
/// many queries against the same store.
pub fn traverse(
    store: &GraphStore,
    start: NodeId,
    max_depth: usize,
    edge_type: &EdgeType,
) -> GraphResult<Traversal> {
    GraphSnapshot::new(store, edge_type).traverse(start, max_depth)
}

/// Ranked friend-of-friend suggestions for `start` over `edge_type`.
pub fn suggest_friends(
    store: &GraphStore,
    start: NodeId,
    edge_type: &EdgeType,
) -> GraphResult<Vec<FriendSuggestion>> {
    GraphSnapshot::new(store, edge_type).suggest_friends(start)
}
