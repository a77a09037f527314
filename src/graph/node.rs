//! Node implementation for the social graph

use super::attribute::{AttributeMap, AttributeValue};
use super::types::NodeId;
use serde::{Deserialize, Serialize};

/// A node in the social graph
///
/// Nodes have a dense id assigned by the store and an attribute map that is
/// fixed at creation time. There is no mutable access once a node is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Attributes associated with this node (e.g. name, gender, age)
    attributes: AttributeMap,
}

impl Node {
    pub(crate) fn new(id: NodeId, attributes: AttributeMap) -> Self {
        Node { id, attributes }
    }

    /// Get an attribute value
    pub fn get_attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Get a string attribute, if present and a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get_attribute(key).and_then(AttributeValue::as_string)
    }

    /// Check if attribute exists
    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// All attributes of this node
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Get number of attributes
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
