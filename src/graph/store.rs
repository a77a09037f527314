//! In-memory graph storage implementation
//!
//! Nodes and edges live in dense arenas indexed by their ids. Adjacency is kept
//! per node and per relation type as sets of neighbor ids, so the graph holds no
//! references between nodes.

use super::attribute::{AttributeMap, AttributeValue};
use super::edge::{edge_key, Edge};
use super::node::Node;
use super::types::{Direction, EdgeId, EdgeType, NodeId};
use crate::index::IndexManager;
use rustc_hash::FxHashMap;
use socialgraph_algorithms::AlgoError;
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("Invalid edge: self-loop on node {0}")]
    InvalidEdge(NodeId),

    #[error("Degenerate graph: centrality vector vanished at iteration {iteration}")]
    DegenerateGraph { iteration: usize },

    #[error("Centrality has not been calculated yet")]
    CentralityNotReady,
}

pub type GraphResult<T> = Result<T, GraphError>;

impl From<AlgoError> for GraphError {
    fn from(err: AlgoError) -> Self {
        match err {
            AlgoError::NodeNotFound(id) => GraphError::NodeNotFound(NodeId::new(id)),
            AlgoError::DegenerateGraph { iteration } => GraphError::DegenerateGraph { iteration },
            AlgoError::NotReady => GraphError::CentralityNotReady,
        }
    }
}

/// Neighbors of one node under one relation type
#[derive(Debug, Clone, Default)]
struct Adjacency {
    /// Targets of edges created from this node
    outgoing: BTreeSet<NodeId>,
    /// Sources of edges created towards this node
    incoming: BTreeSet<NodeId>,
}

/// In-memory graph storage
///
/// - nodes: dense arena, `NodeId(i)` lives at index `i`
/// - edges: dense arena, `EdgeId(i)` lives at index `i`
/// - adjacency: NodeId -> EdgeType -> neighbor sets
/// - edge_lookup: (EdgeType, unordered pair) -> EdgeId, for idempotent inserts
/// - edge_type_index: EdgeType -> edges of that type
/// - attribute_index: attribute name -> value -> node ids
///
/// Writes take `&mut self` and reads `&self`, so a bulk import can never
/// interleave with analytics running on the same store.
#[derive(Debug, Default)]
pub struct GraphStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    adjacency: Vec<HashMap<EdgeType, Adjacency>>,
    edge_lookup: FxHashMap<(EdgeType, NodeId, NodeId), EdgeId>,
    edge_type_index: HashMap<EdgeType, Vec<EdgeId>>,
    attribute_index: IndexManager,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with room for `nodes` nodes and `edges` edges
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        GraphStore {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            adjacency: Vec::with_capacity(nodes),
            ..Self::default()
        }
    }

    /// Create a node with the next free id.
    ///
    /// Every registered attribute index covering one of the node's attributes is
    /// updated before this returns.
    pub fn create_node(&mut self, attributes: AttributeMap) -> NodeId {
        let node_id = NodeId::new(self.nodes.len() as u64);

        for (key, value) in &attributes {
            self.attribute_index.index_insert(key, value, node_id);
        }

        self.nodes.push(Node::new(node_id, attributes));
        self.adjacency.push(HashMap::new());
        node_id
    }

    /// Register an attribute index, backfilling it from the nodes created so far.
    ///
    /// Returns false if the attribute was already indexed.
    pub fn create_index(&mut self, attribute: impl Into<String>) -> bool {
        let attribute = attribute.into();
        if !self.attribute_index.create_index(attribute.clone()) {
            return false;
        }

        let mut backfilled = 0usize;
        for node in &self.nodes {
            if let Some(value) = node.get_attribute(&attribute) {
                self.attribute_index.index_insert(&attribute, value, node.id);
                backfilled += 1;
            }
        }
        debug!("Index on '{}' backfilled with {} nodes", attribute, backfilled);
        true
    }

    /// Check if an attribute is indexed
    pub fn has_index(&self, attribute: &str) -> bool {
        self.attribute_index.has_index(attribute)
    }

    /// Access the attribute indices
    pub fn indexes(&self) -> &IndexManager {
        &self.attribute_index
    }

    /// Exact-match lookup of nodes by attribute value.
    ///
    /// Uses the attribute index when one is registered and scans all nodes
    /// otherwise; both paths return the same set.
    pub fn index_lookup(&self, attribute: &str, value: &AttributeValue) -> BTreeSet<NodeId> {
        if let Some(index) = self.attribute_index.get_index(attribute) {
            return index.get(value);
        }

        debug!("No index on '{}', scanning {} nodes", attribute, self.nodes.len());
        self.nodes
            .iter()
            .filter(|node| node.get_attribute(attribute) == Some(value))
            .map(|node| node.id)
            .collect()
    }

    /// Get a node by ID
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Check if node exists
    pub fn has_node(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Connect two distinct nodes with an undirected edge of the given type.
    ///
    /// Adding an edge that already exists (in either orientation) is a no-op and
    /// returns the existing edge's id.
    pub fn add_edge(
        &mut self,
        a: NodeId,
        b: NodeId,
        edge_type: impl Into<EdgeType>,
    ) -> GraphResult<EdgeId> {
        if a == b {
            return Err(GraphError::InvalidEdge(a));
        }
        if !self.has_node(a) {
            return Err(GraphError::NodeNotFound(a));
        }
        if !self.has_node(b) {
            return Err(GraphError::NodeNotFound(b));
        }

        let edge_type = edge_type.into();
        let (low, high) = edge_key(a, b);
        let lookup_key = (edge_type.clone(), low, high);
        if let Some(&existing) = self.edge_lookup.get(&lookup_key) {
            return Ok(existing);
        }

        let edge_id = EdgeId::new(self.edges.len() as u64);

        self.adjacency[a.index()]
            .entry(edge_type.clone())
            .or_default()
            .outgoing
            .insert(b);
        self.adjacency[b.index()]
            .entry(edge_type.clone())
            .or_default()
            .incoming
            .insert(a);

        self.edge_type_index
            .entry(edge_type.clone())
            .or_default()
            .push(edge_id);
        self.edge_lookup.insert(lookup_key, edge_id);
        self.edges.push(Edge::new(edge_id, a, b, edge_type));

        Ok(edge_id)
    }

    /// Get an edge by ID
    pub fn get_edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.as_u64() as usize)
    }

    /// Find the edge of a given type between two nodes, in either orientation
    pub fn find_edge(&self, a: NodeId, b: NodeId, edge_type: &EdgeType) -> Option<&Edge> {
        let (low, high) = edge_key(a, b);
        self.edge_lookup
            .get(&(edge_type.clone(), low, high))
            .and_then(|&id| self.get_edge(id))
    }

    /// Neighbors of a node over one relation type
    pub fn get_neighbors(
        &self,
        id: NodeId,
        edge_type: &EdgeType,
        direction: Direction,
    ) -> GraphResult<BTreeSet<NodeId>> {
        let adjacency = self
            .adjacency
            .get(id.index())
            .ok_or(GraphError::NodeNotFound(id))?;

        let Some(adj) = adjacency.get(edge_type) else {
            return Ok(BTreeSet::new());
        };

        Ok(match direction {
            Direction::Outgoing => adj.outgoing.clone(),
            Direction::Incoming => adj.incoming.clone(),
            Direction::Both => adj.outgoing.union(&adj.incoming).copied().collect(),
        })
    }

    /// Iterate the undirected neighbors of a node without allocating.
    ///
    /// Yields nothing for unknown nodes.
    pub fn neighbor_ids<'a>(
        &'a self,
        id: NodeId,
        edge_type: &EdgeType,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.adjacency
            .get(id.index())
            .and_then(|adjacency| adjacency.get(edge_type))
            .into_iter()
            .flat_map(|adj| adj.outgoing.iter().chain(adj.incoming.iter()).copied())
    }

    /// Number of undirected neighbors of a node over one relation type
    pub fn degree(&self, id: NodeId, edge_type: &EdgeType) -> GraphResult<usize> {
        let adjacency = self
            .adjacency
            .get(id.index())
            .ok_or(GraphError::NodeNotFound(id))?;
        Ok(adjacency
            .get(edge_type)
            .map_or(0, |adj| adj.outgoing.len() + adj.incoming.len()))
    }

    /// Get all edges of a specific type
    pub fn get_edges_by_type(&self, edge_type: &EdgeType) -> Vec<&Edge> {
        self.edge_type_index
            .get(edge_type)
            .map(|edge_ids| {
                edge_ids
                    .iter()
                    .filter_map(|&id| self.get_edge(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Relation types present in the graph, sorted
    pub fn edge_types(&self) -> Vec<&EdgeType> {
        let mut types: Vec<&EdgeType> = self.edge_type_index.keys().collect();
        types.sort();
        types
    }

    /// Get total number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get total number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get all nodes in id order
    pub fn all_nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Get all edges in id order
    pub fn all_edges(&self) -> &[Edge] {
        &self.edges
    }
}
