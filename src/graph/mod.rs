//! Core social graph implementation
//!
//! This module implements the graph data model with:
//! - Nodes with dense ids and immutable attributes
//! - Undirected, typed edges with symmetric adjacency
//! - Attribute indices for exact-match lookups

pub mod attribute;
pub mod edge;
pub mod node;
pub mod store;
pub mod types;

// Re-export main types
pub use attribute::{attributes, AttributeMap, AttributeValue};
pub use edge::Edge;
pub use node::Node;
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::{Direction, EdgeId, EdgeType, NodeId};
