//! Read-only analytics over a populated store
//!
//! A [`GraphSnapshot`] borrows the store immutably and projects one relation
//! type onto a CSR [`GraphView`] once, so repeated traversals, suggestion
//! queries and centrality runs share the same projection.

use super::build_view;
use crate::config::AnalyticsConfig;
use crate::graph::{EdgeType, GraphResult, GraphStore, NodeId};
use rayon::prelude::*;
use serde::Serialize;
use socialgraph_algorithms::{
    bounded_bfs, rank_suggestions, score_candidates, CentralityState, EdgeCost,
    EigenvectorCentrality, EigenvectorConfig, GraphView, NodeId as AlgoNodeId, TraversalResult,
    UniformCost,
};
use std::collections::HashMap;
use tracing::debug;

/// Nodes reached by a bounded traversal, grouped by depth
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traversal {
    pub start: NodeId,
    pub max_depth: usize,
    frontiers: Vec<Vec<NodeId>>,
}

impl Traversal {
    fn from_result(result: TraversalResult) -> Self {
        Self {
            start: NodeId::new(result.source),
            max_depth: result.max_depth,
            frontiers: result
                .frontiers
                .into_iter()
                .map(|frontier| frontier.into_iter().map(NodeId::new).collect())
                .collect(),
        }
    }

    /// Nodes first reached at exactly `depth`, sorted by id
    pub fn frontier(&self, depth: usize) -> &[NodeId] {
        if depth == 0 {
            return &[];
        }
        self.frontiers
            .get(depth - 1)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Non-empty frontiers from depth 1 on; deeper levels are empty
    pub fn frontiers(&self) -> &[Vec<NodeId>] {
        &self.frontiers
    }

    pub fn reached(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.frontiers.iter().flatten().copied()
    }

    pub fn reached_count(&self) -> usize {
        self.frontiers.iter().map(Vec::len).sum()
    }

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

/// A suggested new relation for some user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FriendSuggestion {
    pub node: NodeId,
    /// Display attribute of the candidate, if it has one
    pub name: Option<String>,
    /// Number of relations shared with the user
    pub score: usize,
}

/// Adapts a cost over store ids to the algorithms crate's raw ids
pub struct NodeCost<F>(pub F);

impl<F> EdgeCost for NodeCost<F>
where
    F: Fn(NodeId, NodeId) -> f64,
{
    fn cost(&self, from: AlgoNodeId, to: AlgoNodeId) -> f64 {
        (self.0)(NodeId::new(from), NodeId::new(to))
    }
}

/// Immutable analytics view of a [`GraphStore`] for one relation type
pub struct GraphSnapshot<'g> {
    store: &'g GraphStore,
    relation: EdgeType,
    display_attribute: String,
    suggestion_limit: Option<usize>,
    view: GraphView,
}

impl<'g> GraphSnapshot<'g> {
    pub fn new(store: &'g GraphStore, relation: impl Into<EdgeType>) -> Self {
        let relation = relation.into();
        let view = build_view(store, &relation);
        debug!(
            "Built snapshot over '{}': {} nodes, {} edges",
            relation,
            view.node_count,
            view.edge_count()
        );
        Self {
            store,
            relation,
            display_attribute: "name".to_string(),
            suggestion_limit: None,
            view,
        }
    }

    /// Snapshot with relation, display attribute and suggestion limit taken from `config`
    pub fn from_config(store: &'g GraphStore, config: &AnalyticsConfig) -> Self {
        Self::new(store, &config.relation)
            .with_display_attribute(config.display_attribute.clone())
            .with_suggestion_limit(config.suggestion_limit)
    }

    /// Attribute used to break ties between equally scored suggestions
    pub fn with_display_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.display_attribute = attribute.into();
        self
    }

    pub fn with_suggestion_limit(mut self, limit: Option<usize>) -> Self {
        self.suggestion_limit = limit;
        self
    }

    pub fn store(&self) -> &'g GraphStore {
        self.store
    }

    pub fn relation(&self) -> &EdgeType {
        &self.relation
    }

    pub fn display_attribute(&self) -> &str {
        &self.display_attribute
    }

    pub fn view(&self) -> &GraphView {
        &self.view
    }

    /// Bounded breadth-first traversal from `start`.
    ///
    /// Depth `d` of the result holds the nodes whose shortest distance from
    /// `start` is exactly `d`; `max_depth == 0` yields an empty traversal.
    pub fn traverse(&self, start: NodeId, max_depth: usize) -> GraphResult<Traversal> {
        let result = bounded_bfs(&self.view, start.as_u64(), max_depth)?;
        Ok(Traversal::from_result(result))
    }

    /// Friend-of-friend suggestions for `start`, best first.
    ///
    /// Ordered by number of shared relations descending, then by display
    /// attribute ascending. Candidates without the attribute come after named
    /// ones with the same score.
    pub fn suggest_friends(&self, start: NodeId) -> GraphResult<Vec<FriendSuggestion>> {
        let traversal = bounded_bfs(&self.view, start.as_u64(), 2)?;
        let scored = score_candidates(&self.view, &traversal)?;

        let display_name = |node: AlgoNodeId| {
            self.store
                .get_node(NodeId::new(node))
                .and_then(|n| n.get_str(&self.display_attribute))
        };

        let mut suggestions: Vec<FriendSuggestion> = rank_suggestions(scored, display_name)
            .into_iter()
            .map(|suggestion| {
                let node = NodeId::new(suggestion.node);
                FriendSuggestion {
                    node,
                    name: display_name(suggestion.node).map(str::to_owned),
                    score: suggestion.score,
                }
            })
            .collect();

        if let Some(limit) = self.suggestion_limit {
            suggestions.truncate(limit);
        }

        debug!("{} suggestions for {}", suggestions.len(), start);
        Ok(suggestions)
    }

    /// Suggestions for many users at once, in input order.
    ///
    /// Fails if any of the users is unknown.
    pub fn suggest_friends_batch(&self, starts: &[NodeId]) -> GraphResult<Vec<Vec<FriendSuggestion>>> {
        starts
            .par_iter()
            .map(|&start| self.suggest_friends(start))
            .collect()
    }

    /// Eigenvector centrality with every edge costing 1.0
    pub fn centrality(&self, config: EigenvectorConfig) -> CentralityEngine<'_, UniformCost> {
        CentralityEngine {
            inner: EigenvectorCentrality::new(&self.view, config),
        }
    }

    /// Eigenvector centrality with a caller supplied edge cost.
    ///
    /// `cost(from, to)` weighs the contribution of `from` to `to`.
    pub fn centrality_with_cost<F>(
        &self,
        config: EigenvectorConfig,
        cost: F,
    ) -> CentralityEngine<'_, NodeCost<F>>
    where
        F: Fn(NodeId, NodeId) -> f64,
    {
        CentralityEngine {
            inner: EigenvectorCentrality::with_cost(&self.view, config, NodeCost(cost)),
        }
    }
}

/// Eigenvector centrality bound to a snapshot
pub struct CentralityEngine<'s, C = UniformCost> {
    inner: EigenvectorCentrality<'s, C>,
}

impl<'s, C: EdgeCost> CentralityEngine<'s, C> {
    /// Run power iteration to convergence or to the iteration limit.
    ///
    /// `MaxIterationsReached` is returned as `Ok`; only a vanishing vector is an error.
    pub fn calculate(&mut self) -> GraphResult<CentralityState> {
        Ok(self.inner.calculate()?)
    }

    pub fn centrality(&self, id: NodeId) -> GraphResult<f64> {
        Ok(self.inner.centrality(id.as_u64())?)
    }

    pub fn scores(&self) -> GraphResult<HashMap<NodeId, f64>> {
        Ok(self
            .inner
            .scores()?
            .into_iter()
            .map(|(node, value)| (NodeId::new(node), value))
            .collect())
    }

    /// The `k` most central nodes, highest first
    pub fn top(&self, k: usize) -> GraphResult<Vec<(NodeId, f64)>> {
        Ok(self
            .inner
            .ranked()?
            .into_iter()
            .take(k)
            .map(|(node, value)| (NodeId::new(node), value))
            .collect())
    }

    pub fn state(&self) -> CentralityState {
        self.inner.state()
    }

    pub fn iterations(&self) -> usize {
        self.inner.state().iterations()
    }

    pub fn delta(&self) -> Option<f64> {
        self.inner.state().delta()
    }

    pub fn config(&self) -> &EigenvectorConfig {
        self.inner.config()
    }
}
