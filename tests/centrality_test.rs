use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use socialgraph::graph::{AttributeMap, EdgeType, GraphError, GraphStore, NodeId};
use socialgraph::{CentralityState, EigenvectorConfig, GraphSnapshot};
use std::cell::Cell;

fn graph(nodes: usize, edges: &[(usize, usize)]) -> (GraphStore, Vec<NodeId>) {
    let mut store = GraphStore::new();
    let ids: Vec<NodeId> = (0..nodes).map(|_| store.create_node(AttributeMap::new())).collect();
    for &(a, b) in edges {
        store.add_edge(ids[a], ids[b], EdgeType::friend()).unwrap();
    }
    (store, ids)
}

fn config(tolerance: f64, max_iterations: usize) -> EigenvectorConfig {
    EigenvectorConfig {
        tolerance,
        max_iterations,
    }
}

#[test]
fn test_pair_converges_to_unit_vector() {
    let (store, u) = graph(2, &[(0, 1)]);
    let snapshot = GraphSnapshot::new(&store, EdgeType::friend());
    let mut engine = snapshot.centrality(config(1e-6, 10_000));

    let state = engine.calculate().unwrap();
    assert!(state.is_converged());
    for &id in &u {
        assert!((engine.centrality(id).unwrap() - 0.70710678).abs() < 1e-8);
    }
}

#[test]
fn test_wheel_hub_is_most_central() {
    // Hub 0 joined to a rim of five nodes forming a cycle
    let edges = [(0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (1, 2), (2, 3), (3, 4), (4, 5), (5, 1)];
    let (store, u) = graph(6, &edges);
    let snapshot = GraphSnapshot::new(&store, EdgeType::friend());
    let mut engine = snapshot.centrality(config(1e-9, 10_000));
    assert!(engine.calculate().unwrap().is_converged());

    let scores = engine.scores().unwrap();
    let sum_of_squares: f64 = scores.values().map(|v| v * v).sum();
    assert!((sum_of_squares - 1.0).abs() < 1e-9);

    let rim = scores[&u[1]];
    for &id in &u[2..] {
        assert!((scores[&id] - rim).abs() < 1e-9);
    }
    assert!(scores[&u[0]] > rim);
    assert_eq!(engine.top(1).unwrap()[0].0, u[0]);
}

#[test]
fn test_isolated_node_is_zero() {
    let (store, u) = graph(4, &[(0, 1), (1, 2), (2, 0)]);
    let snapshot = GraphSnapshot::new(&store, EdgeType::friend());
    let mut engine = snapshot.centrality(config(1e-6, 10_000));
    assert!(engine.calculate().unwrap().is_converged());
    assert_eq!(engine.centrality(u[3]).unwrap(), 0.0);
    assert!(engine.centrality(u[0]).unwrap() > 0.0);
}

#[test]
fn test_graph_without_edges_is_degenerate() {
    let (store, u) = graph(3, &[]);
    let snapshot = GraphSnapshot::new(&store, EdgeType::friend());
    let mut engine = snapshot.centrality(EigenvectorConfig::default());

    assert_eq!(engine.calculate().unwrap_err(), GraphError::DegenerateGraph { iteration: 1 });
    assert_eq!(engine.state(), CentralityState::Uninitialized);
    assert_eq!(engine.centrality(u[0]).unwrap_err(), GraphError::CentralityNotReady);
}

#[test]
fn test_empty_graph_is_degenerate() {
    let store = GraphStore::new();
    let snapshot = GraphSnapshot::new(&store, EdgeType::friend());
    let mut engine = snapshot.centrality(EigenvectorConfig::default());
    assert!(matches!(engine.calculate(), Err(GraphError::DegenerateGraph { .. })));
}

#[test]
fn test_not_ready_and_unknown_node() {
    let (store, u) = graph(2, &[(0, 1)]);
    let snapshot = GraphSnapshot::new(&store, EdgeType::friend());
    let mut engine = snapshot.centrality(EigenvectorConfig::default());

    assert_eq!(engine.centrality(u[0]).unwrap_err(), GraphError::CentralityNotReady);
    assert_eq!(engine.scores().unwrap_err(), GraphError::CentralityNotReady);

    engine.calculate().unwrap();
    assert_eq!(
        engine.centrality(NodeId::new(5)).unwrap_err(),
        GraphError::NodeNotFound(NodeId::new(5))
    );
}

#[test]
fn test_iteration_limit_is_not_an_error() {
    // A path oscillates under power iteration and never settles
    let (store, u) = graph(3, &[(0, 1), (1, 2)]);
    let snapshot = GraphSnapshot::new(&store, EdgeType::friend());
    let mut engine = snapshot.centrality(config(1e-6, 5));

    let state = engine.calculate().unwrap();
    assert!(matches!(state, CentralityState::MaxIterationsReached { iterations: 5, .. }));
    assert!(!state.is_converged());
    assert!(state.is_complete());
    assert_eq!(engine.iterations(), 5);

    let sum_of_squares: f64 = u.iter().map(|&id| engine.centrality(id).unwrap().powi(2)).sum();
    assert!((sum_of_squares - 1.0).abs() < 1e-9);
}

#[test]
fn test_degenerate_run_keeps_previous_values() {
    let (store, u) = graph(3, &[(0, 1), (1, 2), (2, 0)]);
    let snapshot = GraphSnapshot::new(&store, EdgeType::friend());
    let vanish = Cell::new(false);
    let mut engine = snapshot.centrality_with_cost(config(1e-6, 100), |_from: NodeId, _to: NodeId| {
        if vanish.get() {
            0.0
        } else {
            1.0
        }
    });

    let first = engine.calculate().unwrap();
    assert!(first.is_converged());
    let before = engine.centrality(u[0]).unwrap();

    vanish.set(true);
    assert_eq!(engine.calculate().unwrap_err(), GraphError::DegenerateGraph { iteration: 1 });
    assert_eq!(engine.state(), first);
    assert_eq!(engine.centrality(u[0]).unwrap(), before);
}

#[test]
fn test_uniform_closure_matches_default_cost() {
    let (store, _) = graph(5, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4)]);
    let snapshot = GraphSnapshot::new(&store, EdgeType::friend());

    let mut uniform = snapshot.centrality(config(1e-9, 10_000));
    uniform.calculate().unwrap();
    let mut closure = snapshot.centrality_with_cost(config(1e-9, 10_000), |_: NodeId, _: NodeId| 1.0);
    closure.calculate().unwrap();

    assert_eq!(uniform.scores().unwrap(), closure.scores().unwrap());
    assert_eq!(uniform.state(), closure.state());
}

#[test]
fn test_random_graph_vector_is_normalized() {
    let mut rng = StdRng::seed_from_u64(42);
    let edges: Vec<(usize, usize)> = (0..1000)
        .map(|_| (rng.gen_range(0..200), rng.gen_range(0..200)))
        .filter(|(a, b)| a != b)
        .collect();
    let (store, _) = graph(200, &edges);
    let snapshot = GraphSnapshot::new(&store, EdgeType::friend());
    let mut engine = snapshot.centrality(EigenvectorConfig::default());

    assert!(engine.calculate().unwrap().is_complete());
    let scores = engine.scores().unwrap();
    assert_eq!(scores.len(), 200);
    assert!(scores.values().all(|v| *v >= 0.0));
    let sum_of_squares: f64 = scores.values().map(|v| v * v).sum();
    assert!((sum_of_squares - 1.0).abs() < 1e-9);
}
