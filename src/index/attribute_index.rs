//! B-Tree based attribute index for exact-match lookups

use crate::graph::{AttributeValue, NodeId};
use std::collections::{BTreeMap, BTreeSet};

/// Index for a single attribute: value -> ids of the nodes holding it
#[derive(Debug, Clone, Default)]
pub struct AttributeIndex {
    index: BTreeMap<AttributeValue, BTreeSet<NodeId>>,
    entries: usize,
}

impl AttributeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, value: AttributeValue, node_id: NodeId) {
        if self.index.entry(value).or_default().insert(node_id) {
            self.entries += 1;
        }
    }

    /// Nodes holding exactly `value`; empty when nothing matches
    pub fn get(&self, value: &AttributeValue) -> BTreeSet<NodeId> {
        self.index.get(value).cloned().unwrap_or_default()
    }

    /// Number of nodes holding exactly `value`, without copying the set
    pub fn count(&self, value: &AttributeValue) -> usize {
        self.index.get(value).map_or(0, BTreeSet::len)
    }

    /// Number of distinct values
    pub fn distinct_values(&self) -> usize {
        self.index.len()
    }

    /// Number of indexed (value, node) entries
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }
}
