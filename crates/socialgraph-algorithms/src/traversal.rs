//! Bounded-depth breadth-first traversal
//!
//! Expands a graph level by level from a source node and records, for every
//! depth, the set of nodes first reached at exactly that depth.

use super::common::{GraphView, NodeId};
use super::error::{AlgoError, AlgoResult};

/// Result of a bounded BFS
///
/// `frontiers[d - 1]` holds the nodes discovered at depth `d`, sorted by id.
/// The source never appears in any frontier, and a node appears in at most one.
/// Depths past the last non-empty level are not stored and read as empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraversalResult {
    pub source: NodeId,
    pub max_depth: usize,
    pub frontiers: Vec<Vec<NodeId>>,
}

impl TraversalResult {
    /// Nodes discovered at exactly `depth`. Depth 0 and depths beyond
    /// `max_depth` are always empty.
    pub fn frontier(&self, depth: usize) -> &[NodeId] {
        if depth == 0 {
            return &[];
        }
        self.frontiers
            .get(depth - 1)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All nodes discovered at any depth, in discovery order by depth
    pub fn reached(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.frontiers.iter().flatten().copied()
    }

    /// Total number of discovered nodes (excluding the source)
    pub fn reached_count(&self) -> usize {
        self.frontiers.iter().map(Vec::len).sum()
    }

    /// Depth at which `node` was discovered, if at all
    pub fn depth_of(&self, node: NodeId) -> Option<usize> {
        self.frontiers
            .iter()
            .position(|frontier| frontier.binary_search(&node).is_ok())
            .map(|pos| pos + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.frontiers.iter().all(Vec::is_empty)
    }
}

/// Breadth-First Search bounded by `max_depth` levels.
///
/// Visitation is membership based: each node is marked visited the first time any
/// frontier reaches it, regardless of how many equal-length paths lead there.
/// Stops as soon as a level discovers nothing new, so `frontiers` only holds
/// non-empty levels and may be shorter than `max_depth`.
pub fn bounded_bfs(view: &GraphView, source: NodeId, max_depth: usize) -> AlgoResult<TraversalResult> {
    let source_idx = view.index_of(source).ok_or(AlgoError::NodeNotFound(source))?;

    let mut visited = vec![false; view.node_count];
    visited[source_idx] = true;

    let mut frontiers = Vec::new();
    let mut current = vec![source_idx];

    for _ in 0..max_depth {
        let mut next = Vec::new();
        for &idx in &current {
            for &neighbor in view.neighbors(idx) {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    next.push(neighbor);
                }
            }
        }

        if next.is_empty() {
            break;
        }

        let mut ids: Vec<NodeId> = next.iter().map(|&idx| view.node_at(idx)).collect();
        ids.sort_unstable();
        frontiers.push(ids);
        current = next;
    }

    Ok(TraversalResult {
        source,
        max_depth,
        frontiers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> GraphView {
        // 0-1, 0-2, 1-3, 2-3
        GraphView::from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)])
    }

    #[test]
    fn test_depth_zero_is_empty() {
        let view = diamond();
        let result = bounded_bfs(&view, 0, 0).unwrap();
        assert!(result.is_empty());
        assert!(result.frontiers.is_empty());
        assert!(result.frontier(1).is_empty());
    }

    #[test]
    fn test_diamond_levels() {
        let view = diamond();
        let result = bounded_bfs(&view, 0, 2).unwrap();
        assert_eq!(result.frontier(1), &[1, 2]);
        // Reached through both 1 and 2, recorded once
        assert_eq!(result.frontier(2), &[3]);
        assert_eq!(result.reached_count(), 3);
        assert_eq!(result.depth_of(3), Some(2));
        assert_eq!(result.depth_of(0), None);
    }

    #[test]
    fn test_source_never_in_frontier() {
        // Triangle: going around returns to the source at depth 2
        let view = GraphView::from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
        let result = bounded_bfs(&view, 0, 3).unwrap();
        assert_eq!(result.frontier(1), &[1, 2]);
        assert!(result.frontier(2).is_empty());
        assert!(result.frontier(3).is_empty());
        assert!(result.reached().all(|n| n != 0));
    }

    #[test]
    fn test_stops_at_empty_frontier() {
        let view = GraphView::from_edges(2, &[(0, 1)]);
        let result = bounded_bfs(&view, 0, 4).unwrap();
        assert_eq!(result.frontiers.len(), 1);
        assert_eq!(result.max_depth, 4);
        assert_eq!(result.frontier(1), &[1]);
        assert!(result.frontier(2).is_empty());
        assert!(result.frontier(4).is_empty());
    }

    #[test]
    fn test_unbounded_depth() {
        let view = GraphView::from_edges(3, &[(0, 1), (1, 2)]);
        let result = bounded_bfs(&view, 0, usize::MAX).unwrap();
        assert_eq!(result.frontiers, vec![vec![1], vec![2]]);
        assert!(result.frontier(usize::MAX).is_empty());
    }

    #[test]
    fn test_isolated_source_has_no_frontiers() {
        let view = GraphView::from_edges(2, &[]);
        let result = bounded_bfs(&view, 0, 3).unwrap();
        assert!(result.frontiers.is_empty());
        assert!(result.is_empty());
    }

    #[test]
    fn test_unknown_source() {
        let view = diamond();
        assert_eq!(bounded_bfs(&view, 42, 1), Err(AlgoError::NodeNotFound(42)));
    }

    #[test]
    fn test_chain_respects_bound() {
        let view = GraphView::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]);
        let result = bounded_bfs(&view, 0, 2).unwrap();
        assert_eq!(result.frontier(2), &[2]);
        assert_eq!(result.depth_of(3), None);
    }
}
