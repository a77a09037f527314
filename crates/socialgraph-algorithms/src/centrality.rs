//! Eigenvector centrality via power iteration
//!
//! A node is important when its neighbors are important. Starting from a uniform
//! unit vector, each iteration replaces every value with the cost-weighted sum of
//! its neighbors' values and renormalizes by the L2 norm, until the change between
//! two successive vectors drops below the tolerance or the iteration budget runs out.
//!
//! Power iteration on bipartite graphs (stars, even cycles) oscillates instead of
//! converging; such runs end in [`CentralityState::MaxIterationsReached`] with the
//! last normalized vector kept as the best-effort answer.

use super::common::{GraphView, NodeId};
use super::error::{AlgoError, AlgoResult};
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

/// Eigenvector centrality configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EigenvectorConfig {
    /// Convergence tolerance (L2 distance between successive vectors)
    pub tolerance: f64,
    /// Maximum number of iterations (0 is treated as 1)
    pub max_iterations: usize,
}

impl Default for EigenvectorConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.01,
            max_iterations: 10_000,
        }
    }
}

/// Cost of following an edge during power iteration.
///
/// `cost(from, to)` weights the contribution of `from`'s value to `to`. Any
/// `Fn(NodeId, NodeId) -> f64` closure is an `EdgeCost`.
pub trait EdgeCost {
    fn cost(&self, from: NodeId, to: NodeId) -> f64;
}

impl<F> EdgeCost for F
where
    F: Fn(NodeId, NodeId) -> f64,
{
    fn cost(&self, from: NodeId, to: NodeId) -> f64 {
        self(from, to)
    }
}

/// Constant cost of 1.0 for every edge
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCost;

impl EdgeCost for UniformCost {
    fn cost(&self, _from: NodeId, _to: NodeId) -> f64 {
        1.0
    }
}

/// Lifecycle of a centrality computation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CentralityState {
    Uninitialized,
    Iterating { iteration: usize },
    Converged { iterations: usize, delta: f64 },
    MaxIterationsReached { iterations: usize, delta: f64 },
}

impl CentralityState {
    /// True once a run has produced values, converged or not
    pub fn is_complete(&self) -> bool {
        matches!(
            self,
            CentralityState::Converged { .. } | CentralityState::MaxIterationsReached { .. }
        )
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, CentralityState::Converged { .. })
    }

    /// Iterations performed so far (0 before the first run)
    pub fn iterations(&self) -> usize {
        match *self {
            CentralityState::Uninitialized => 0,
            CentralityState::Iterating { iteration } => iteration,
            CentralityState::Converged { iterations, .. }
            | CentralityState::MaxIterationsReached { iterations, .. } => iterations,
        }
    }

    /// Final L2 delta of a completed run
    pub fn delta(&self) -> Option<f64> {
        match *self {
            CentralityState::Converged { delta, .. }
            | CentralityState::MaxIterationsReached { delta, .. } => Some(delta),
            _ => None,
        }
    }
}

/// Power-iteration eigenvector centrality over a [`GraphView`].
///
/// All iteration vectors are local to [`calculate`](Self::calculate); the engine
/// only keeps the last successful result, so several engines can run over the
/// same view at once.
pub struct EigenvectorCentrality<'v, C = UniformCost> {
    view: &'v GraphView,
    config: EigenvectorConfig,
    cost: C,
    state: CentralityState,
    values: Option<Vec<f64>>,
}

impl<'v> EigenvectorCentrality<'v, UniformCost> {
    pub fn new(view: &'v GraphView, config: EigenvectorConfig) -> Self {
        Self::with_cost(view, config, UniformCost)
    }
}

impl<'v, C: EdgeCost> EigenvectorCentrality<'v, C> {
    /// Create an engine with a custom edge cost
    pub fn with_cost(view: &'v GraphView, config: EigenvectorConfig, cost: C) -> Self {
        Self {
            view,
            config,
            cost,
            state: CentralityState::Uninitialized,
            values: None,
        }
    }

    pub fn config(&self) -> &EigenvectorConfig {
        &self.config
    }

    pub fn state(&self) -> CentralityState {
        self.state
    }

    /// Run power iteration.
    ///
    /// Returns the final state (`Converged` or `MaxIterationsReached`). On
    /// `DegenerateGraph` the previous state and values are kept as they were.
    pub fn calculate(&mut self) -> AlgoResult<CentralityState> {
        let n = self.view.node_count;
        let previous_state = self.state;

        if n == 0 {
            return Err(AlgoError::DegenerateGraph { iteration: 1 });
        }

        // Initial vector is uniform with unit L2 norm
        let initial = 1.0 / (n as f64).sqrt();
        let mut scores = vec![initial; n];
        let mut next_scores = vec![0.0; n];
        let mut delta = f64::INFINITY;

        // A zero limit still runs one iteration
        let max_iterations = self.config.max_iterations.max(1);

        for iteration in 1..=max_iterations {
            self.state = CentralityState::Iterating { iteration };

            for i in 0..n {
                let to = self.view.node_at(i);
                let mut sum = 0.0;
                for &j in self.view.neighbors(i) {
                    sum += self.cost.cost(self.view.node_at(j), to) * scores[j];
                }
                next_scores[i] = sum;
            }

            let norm = next_scores.iter().map(|x| x * x).sum::<f64>().sqrt();
            if norm == 0.0 {
                self.state = previous_state;
                warn!("Eigenvector centrality aborted: zero vector at iteration {}", iteration);
                return Err(AlgoError::DegenerateGraph { iteration });
            }
            for value in next_scores.iter_mut() {
                *value /= norm;
            }

            delta = scores
                .iter()
                .zip(next_scores.iter())
                .map(|(old, new)| (old - new).powi(2))
                .sum::<f64>()
                .sqrt();

            std::mem::swap(&mut scores, &mut next_scores);
            debug!("Eigenvector iteration {}: delta {}", iteration, delta);

            if delta < self.config.tolerance {
                self.state = CentralityState::Converged {
                    iterations: iteration,
                    delta,
                };
                self.values = Some(scores);
                info!("Eigenvector centrality converged after {} iterations (delta {})", iteration, delta);
                return Ok(self.state);
            }
        }

        let iterations = max_iterations;
        self.state = CentralityState::MaxIterationsReached { iterations, delta };
        self.values = Some(scores);
        warn!(
            "Eigenvector centrality stopped after {} iterations without converging (delta {})",
            iterations, delta
        );
        Ok(self.state)
    }

    /// Centrality of a single node from the last successful run
    pub fn centrality(&self, node: NodeId) -> AlgoResult<f64> {
        let values = self.values.as_ref().ok_or(AlgoError::NotReady)?;
        let idx = self.view.index_of(node).ok_or(AlgoError::NodeNotFound(node))?;
        Ok(values[idx])
    }

    /// All centrality values from the last successful run
    pub fn scores(&self) -> AlgoResult<FxHashMap<NodeId, f64>> {
        let values = self.values.as_ref().ok_or(AlgoError::NotReady)?;
        Ok(values
            .iter()
            .enumerate()
            .map(|(idx, &value)| (self.view.node_at(idx), value))
            .collect())
    }

    /// Nodes sorted by centrality descending (ties by id)
    pub fn ranked(&self) -> AlgoResult<Vec<(NodeId, f64)>> {
        let values = self.values.as_ref().ok_or(AlgoError::NotReady)?;
        let mut ranked: Vec<(NodeId, f64)> = values
            .iter()
            .enumerate()
            .map(|(idx, &value)| (self.view.node_at(idx), value))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Ok(ranked)
    }
}
