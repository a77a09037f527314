//! Social Graph Analytics
//!
//! An in-memory social graph with attribute indexing and read-only analytics:
//! bounded breadth-first traversal, friend-of-friend suggestions and
//! eigenvector centrality.
//!
//! # Lifecycle
//!
//! The graph is populated once through `&mut GraphStore` (bulk import) and then
//! queried through a [`GraphSnapshot`], which borrows the store immutably.
//! Interleaving writes with running analytics is therefore rejected at compile
//! time.
//!
//! ## Example Usage
//!
//! ```rust
//! use socialgraph::graph::{attributes, EdgeType, GraphStore};
//! use socialgraph::{EigenvectorConfig, GraphSnapshot};
//!
//! let mut store = GraphStore::new();
//! store.create_index("age");
//!
//! let alice = store.create_node(attributes([("name", "alice".into()), ("age", 33.into())]));
//! let bob = store.create_node(attributes([("name", "bob".into()), ("age", 41.into())]));
//! let carol = store.create_node(attributes([("name", "carol".into()), ("age", 33.into())]));
//! let dave = store.create_node(attributes([("name", "dave".into()), ("age", 27.into())]));
//!
//! store.add_edge(alice, bob, EdgeType::friend()).unwrap();
//! store.add_edge(bob, carol, EdgeType::friend()).unwrap();
//! store.add_edge(bob, dave, EdgeType::friend()).unwrap();
//! store.add_edge(carol, dave, EdgeType::friend()).unwrap();
//!
//! assert_eq!(store.index_lookup("age", &33.into()).len(), 2);
//!
//! let snapshot = GraphSnapshot::new(&store, EdgeType::friend());
//! let suggestions = snapshot.suggest_friends(alice).unwrap();
//! assert_eq!(suggestions.len(), 2);
//! assert_eq!(suggestions[0].node, carol);
//! assert_eq!(suggestions[1].node, dave);
//!
//! let mut centrality = snapshot.centrality(EigenvectorConfig::default());
//! assert!(centrality.calculate().unwrap().is_converged());
//! assert!(centrality.centrality(bob).unwrap() > centrality.centrality(alice).unwrap());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod graph;
pub mod index;

// Re-export main types for convenience
pub use graph::{
    attributes, AttributeMap, AttributeValue, Direction, Edge, EdgeId, EdgeType, GraphError,
    GraphResult, GraphStore, Node, NodeId,
};

pub use algo::{
    CentralityEngine, CentralityState, EdgeCost, EigenvectorConfig, FriendSuggestion,
    GraphSnapshot, Traversal, UniformCost,
};

pub use config::{AnalyticsConfig, ConfigError, ConfigResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
