//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of the graph topology for algorithm execution.

use rustc_hash::FxHashMap;

/// Node Identifier type (u64)
pub type NodeId = u64;

/// A dense, integer-indexed view of an undirected graph in Compressed Sparse Row (CSR) format.
///
/// Every undirected edge `{u, v}` is stored twice, once in the row of `u` and once
/// in the row of `v`, so `neighbors(i)` is the full symmetric neighborhood of `i`.
/// The view owns its data: once built it is unaffected by later changes to the
/// graph it was projected from.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: FxHashMap<NodeId, usize>,

    /// Offsets into `targets`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbor indices, each row sorted ascending
    pub targets: Vec<usize>,
}

impl GraphView {
    /// Get the degree of a node (by index)
    pub fn degree(&self, idx: usize) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Get the neighbors of a node (by index)
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.targets[start..end]
    }

    /// Dense index of a node, if the node is part of this view
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.node_to_index.get(&node).copied()
    }

    /// Node id stored at a dense index
    pub fn node_at(&self, idx: usize) -> NodeId {
        self.index_to_node[idx]
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.targets.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// Build a view from per-node neighbor lists.
    ///
    /// `adjacency[i]` lists the dense indices adjacent to `index_to_node[i]`. Lists
    /// are expected to be symmetric already; duplicates are removed and rows sorted.
    pub fn from_adjacency_list(index_to_node: Vec<NodeId>, adjacency: Vec<Vec<usize>>) -> Self {
        let node_count = index_to_node.len();
        let node_to_index = index_to_node
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();

        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::new();

        offsets.push(0);
        for mut row in adjacency.into_iter().take(node_count) {
            row.sort_unstable();
            row.dedup();
            targets.extend(row);
            offsets.push(targets.len());
        }
        // Rows missing from a short adjacency list are isolated nodes
        while offsets.len() < node_count + 1 {
            offsets.push(targets.len());
        }

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            offsets,
            targets,
        }
    }

    /// Build a view over `node_count` nodes with ids `0..node_count` from a list of
    /// undirected index pairs. Self-loops are ignored.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut adjacency = vec![Vec::new(); node_count];
        for &(u, v) in edges {
            if u == v || u >= node_count || v >= node_count {
                continue;
            }
            adjacency[u].push(v);
            adjacency[v].push(u);
        }
        Self::from_adjacency_list((0..node_count as NodeId).collect(), adjacency)
    }
}
