//! Manager for attribute indices
//!
//! Handles registration of and access to attribute indices. The store drives
//! the updates: every created node is offered to `index_insert` once per
//! attribute it carries.

use super::attribute_index::AttributeIndex;
use crate::graph::{AttributeValue, NodeId};
use std::collections::HashMap;
use tracing::debug;

/// Manager for all attribute indices, keyed by attribute name
#[derive(Debug, Default)]
pub struct IndexManager {
    indices: HashMap<String, AttributeIndex>,
}

impl IndexManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an index for an attribute. Returns false if one already existed.
    pub fn create_index(&mut self, attribute: impl Into<String>) -> bool {
        let attribute = attribute.into();
        if self.indices.contains_key(&attribute) {
            return false;
        }
        debug!("Creating attribute index on '{}'", attribute);
        self.indices.insert(attribute, AttributeIndex::new());
        true
    }

    /// Record a node's value if the attribute is indexed
    pub fn index_insert(&mut self, attribute: &str, value: &AttributeValue, node_id: NodeId) {
        if let Some(index) = self.indices.get_mut(attribute) {
            index.insert(value.clone(), node_id);
        }
    }

    /// Check if an index exists
    pub fn has_index(&self, attribute: &str) -> bool {
        self.indices.contains_key(attribute)
    }

    /// Get index for querying
    pub fn get_index(&self, attribute: &str) -> Option<&AttributeIndex> {
        self.indices.get(attribute)
    }

    /// Names of all indexed attributes, sorted
    pub fn indexed_attributes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.indices.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
