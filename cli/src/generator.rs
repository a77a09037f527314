//! Seeded random social graph generation

use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;
use socialgraph::{attributes, AttributeValue, EdgeType, GraphResult, GraphStore, NodeId};
use tracing::debug;

/// Ages are drawn uniformly from `0..MAX_AGE`
pub const MAX_AGE: i64 = 90;

/// Outcome of a random relation import
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelationStats {
    /// Relations that created a new edge
    pub created: usize,
    /// Draws that hit an already existing pair
    pub duplicates: usize,
    /// Draws that picked the same user twice
    pub self_loops: usize,
}

/// Create `count` users named `user{i}` with a random gender and age
pub fn import_users(store: &mut GraphStore, count: usize, rng: &mut StdRng) -> Vec<NodeId> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let gender = if rng.gen_bool(0.5) { "male" } else { "female" };
        let age = rng.gen_range(0..MAX_AGE);
        let id = store.create_node(attributes([
            ("name", AttributeValue::from(format!("user{}", i))),
            ("gender", AttributeValue::from(gender)),
            ("age", AttributeValue::from(age)),
        ]));
        ids.push(id);
    }
    debug!("Imported {} users", count);
    ids
}

/// Draw `count` random pairs of users and relate them.
///
/// Self-loops are skipped and duplicate pairs leave the graph unchanged; both
/// are counted.
pub fn import_relations(
    store: &mut GraphStore,
    users: &[NodeId],
    count: usize,
    relation: &EdgeType,
    rng: &mut StdRng,
) -> GraphResult<RelationStats> {
    let mut stats = RelationStats::default();
    if users.is_empty() {
        return Ok(stats);
    }

    for _ in 0..count {
        let a = users[rng.gen_range(0..users.len())];
        let b = users[rng.gen_range(0..users.len())];
        if a == b {
            stats.self_loops += 1;
            continue;
        }

        let before = store.edge_count();
        store.add_edge(a, b, relation)?;
        if store.edge_count() > before {
            stats.created += 1;
        } else {
            stats.duplicates += 1;
        }
    }

    debug!(
        "Imported {} relations ({} duplicates, {} self-loops skipped)",
        stats.created, stats.duplicates, stats.self_loops
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn generate(seed: u64) -> (GraphStore, RelationStats) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut store = GraphStore::new();
        let users = import_users(&mut store, 200, &mut rng);
        let stats = import_relations(&mut store, &users, 1000, &EdgeType::friend(), &mut rng).unwrap();
        (store, stats)
    }

    #[test]
    fn test_users_have_expected_attributes() {
        let (store, _) = generate(7);
        assert_eq!(store.node_count(), 200);

        let user = store.get_node(NodeId::new(17)).unwrap();
        assert_eq!(user.get_str("name"), Some("user17"));
        assert!(matches!(user.get_str("gender"), Some("male") | Some("female")));
        let age = user.get_attribute("age").and_then(AttributeValue::as_integer).unwrap();
        assert!((0..MAX_AGE).contains(&age));
    }

    #[test]
    fn test_relation_accounting() {
        let (store, stats) = generate(7);
        assert_eq!(stats.created + stats.duplicates + stats.self_loops, 1000);
        assert_eq!(store.edge_count(), stats.created);
    }

    #[test]
    fn test_same_seed_same_graph() {
        let (a, stats_a) = generate(42);
        let (b, stats_b) = generate(42);
        assert_eq!(stats_a, stats_b);

        let edges_a: Vec<(NodeId, NodeId)> = a.all_edges().iter().map(|e| (e.source, e.target)).collect();
        let edges_b: Vec<(NodeId, NodeId)> = b.all_edges().iter().map(|e| (e.source, e.target)).collect();
        assert_eq!(edges_a, edges_b);
    }

    #[test]
    fn test_no_users_no_relations() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut store = GraphStore::new();
        let stats = import_relations(&mut store, &[], 10, &EdgeType::friend(), &mut rng).unwrap();
        assert_eq!(stats, RelationStats::default());
    }
}
