//! Attribute indexing module
//!
//! Provides B-Tree indices for exact-match attribute lookups.

pub mod attribute_index;
pub mod manager;

pub use attribute_index::AttributeIndex;
pub use manager::IndexManager;
