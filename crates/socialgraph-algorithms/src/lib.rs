//! Social graph analytics over a dense, read-only graph projection.
//!
//! Algorithms work on a [`GraphView`] and know nothing about how the graph is
//! stored; the `socialgraph` crate builds views from its store.

pub mod common;
pub mod error;
pub mod traversal;
pub mod suggestion;
pub mod centrality;

pub use common::{GraphView, NodeId};
pub use error::{AlgoError, AlgoResult};
pub use traversal::{bounded_bfs, TraversalResult};
pub use suggestion::{rank_suggestions, score_candidates, Suggestion};
pub use centrality::{
    CentralityState, EdgeCost, EigenvectorCentrality, EigenvectorConfig, UniformCost,
};
