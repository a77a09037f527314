//! Friend-of-friend suggestion scoring and ranking
//!
//! A candidate is a node two hops from the source that is neither the source nor a
//! direct neighbor. Its score is the number of distinct length-2 paths from the
//! source, i.e. the number of neighbors it shares with the source.

use super::common::{GraphView, NodeId};
use super::error::{AlgoError, AlgoResult};
use super::traversal::TraversalResult;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;

/// A ranked suggestion
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Suggestion {
    pub node: NodeId,
    /// Number of shared direct relations
    pub score: usize,
}

/// Count shared neighbors between `traversal.source` and each friend-of-friend.
///
/// The traversal must have been run to at least depth 2 on the same view.
/// The returned pairs are in ascending node order and carry no ranking yet.
pub fn score_candidates(view: &GraphView, traversal: &TraversalResult) -> AlgoResult<Vec<(NodeId, usize)>> {
    let source = traversal.source;
    if view.index_of(source).is_none() {
        return Err(AlgoError::NodeNotFound(source));
    }

    let direct: FxHashSet<NodeId> = traversal.frontier(1).iter().copied().collect();
    let candidates: FxHashSet<NodeId> = traversal
        .frontier(2)
        .iter()
        .copied()
        .filter(|node| *node != source && !direct.contains(node))
        .collect();

    let mut scores: FxHashMap<NodeId, usize> = FxHashMap::default();
    for &friend in traversal.frontier(1) {
        let friend_idx = view.index_of(friend).ok_or(AlgoError::NodeNotFound(friend))?;
        for &idx in view.neighbors(friend_idx) {
            let node = view.node_at(idx);
            if candidates.contains(&node) {
                *scores.entry(node).or_insert(0) += 1;
            }
        }
    }

    let mut scored: Vec<(NodeId, usize)> = scores.into_iter().collect();
    scored.sort_unstable_by_key(|&(node, _)| node);
    Ok(scored)
}

/// Order scored candidates: score descending, then display name ascending.
///
/// Candidates without a display name sort after named ones with the same score,
/// and any remaining tie falls back to node id, so the order is total and does
/// not depend on the input order.
pub fn rank_suggestions<F, K>(scored: Vec<(NodeId, usize)>, display_name: F) -> Vec<Suggestion>
where
    F: Fn(NodeId) -> Option<K>,
    K: Ord,
{
    let mut keyed: Vec<(Suggestion, Option<K>)> = scored
        .into_iter()
        .map(|(node, score)| (Suggestion { node, score }, display_name(node)))
        .collect();

    keyed.sort_by(|(a, a_name), (b, b_name)| {
        b.score
            .cmp(&a.score)
            .then_with(|| compare_names(a_name, b_name))
            .then_with(|| a.node.cmp(&b.node))
    });

    keyed.into_iter().map(|(suggestion, _)| suggestion).collect()
}

fn compare_names<K: Ord>(a: &Option<K>, b: &Option<K>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
