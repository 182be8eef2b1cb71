//! Tests for the public generation API.

mod common;

use common::{alphabet, edge_pairs, node_list};
use rand::{SeedableRng, rngs::SmallRng};
use randgraph_core::{
    GenerationError, GenerationErrorCode, GraphStore, Node, RandomGraphBuilder, generate_graph,
};
use randgraph_test_support::{reachability::is_weakly_connected, tracing::RecordingLayer};
use rstest::{fixture, rstest};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

#[fixture]
fn abcd() -> Vec<&'static str> {
    vec!["a", "b", "c", "d"]
}

#[rstest]
fn four_nodes_three_edges_form_a_spanning_tree(abcd: Vec<&'static str>) {
    for seed in 0..64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let graph = generate_graph(4, 4, 3, 3, &abcd, false, &mut rng).expect("valid request");

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert!(is_weakly_connected(&node_list(&graph), &edge_pairs(&graph)));
        for label in &abcd {
            assert!(graph.contains_node(&Node::new(*label)));
        }
    }
}

#[rstest]
fn node_bound_above_pool_is_a_range_error() {
    let mut rng = SmallRng::seed_from_u64(0);
    let err = generate_graph(5, 5, 0, 0, &["a", "b", "c"], false, &mut rng)
        .expect_err("three labels cannot back five nodes");
    assert_eq!(err.code(), GenerationErrorCode::NodeRangeExceedsPool);
    assert!(err.is_range_error());
}

#[rstest]
fn edge_target_above_capacity_is_a_capacity_error() {
    let mut rng = SmallRng::seed_from_u64(0);
    let err = generate_graph(3, 3, 4, 4, &["a", "b", "c"], false, &mut rng)
        .expect_err("three undirected nodes hold at most three edges");
    assert_eq!(
        err,
        GenerationError::EdgeCapacityExceeded {
            requested: 4,
            capacity: 3,
            nodes: 3,
            directed: false,
        }
    );
}

#[rstest]
#[case::undirected(false, 45)]
#[case::directed(true, 90)]
fn dense_requests_stay_simple(#[case] directed: bool, #[case] capacity: usize) {
    let labels = alphabet(10);
    for seed in 0..16 {
        let graph = RandomGraphBuilder::new(labels.clone())
            .with_edge_range(capacity - 5, capacity)
            .with_directed(directed)
            .generate_seeded(seed)
            .expect("dense targets fit");

        let pairs = edge_pairs(&graph);
        assert!(pairs.iter().all(|(source, target)| source != target));
        assert!((capacity - 5..=capacity).contains(&graph.edge_count()));
        assert_eq!(pairs.len(), graph.edge_count());
    }
}

#[rstest]
fn undirected_results_are_symmetric() {
    let graph: GraphStore<String> = RandomGraphBuilder::new(alphabet(12))
        .with_node_range(6, 12)
        .with_edge_range(10, 15)
        .generate_seeded(77)
        .expect("valid request");
    for edge in graph.edges() {
        assert_eq!(graph.weight(edge.target, edge.source), Some(edge.weight));
        assert_eq!(*edge.weight, 1);
    }
}

#[rstest]
fn generation_records_tracing(abcd: Vec<&'static str>) {
    let builder = RandomGraphBuilder::new(abcd)
        .with_edge_range(3, 3)
        .with_directed(true);
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let graph = tracing::subscriber::with_default(subscriber, || builder.generate_seeded(21))
        .expect("valid request");
    assert_eq!(graph.node_count(), 4);

    let span = layer
        .span("generator.generate")
        .expect("generator.generate span must exist");
    assert_eq!(span.field("min_nodes"), Some("4"));
    assert_eq!(span.field("max_edges"), Some("3"));
    assert_eq!(span.field("pool"), Some("4"));
    assert_eq!(span.field("directed"), Some("true"));

    assert!(layer.has_event(Level::DEBUG, "spanning backbone built"));
    assert!(layer.has_event(Level::INFO, "graph generation completed"));
    let completed = layer
        .events()
        .into_iter()
        .find(|event| event.message() == Some("graph generation completed"))
        .expect("completion event must exist");
    assert_eq!(
        completed.fields.get("edges"),
        Some(&graph.edge_count().to_string())
    );
}

#[rstest]
fn failed_generation_records_error(abcd: Vec<&'static str>) {
    let builder = RandomGraphBuilder::new(abcd).with_edge_range(7, 7);
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let err = tracing::subscriber::with_default(subscriber, || builder.generate_seeded(0))
        .expect_err("seven edges exceed four undirected nodes");
    assert_eq!(err.code(), GenerationErrorCode::EdgeCapacityExceeded);

    assert!(layer.span("generator.generate").is_some());
    assert!(layer.events().iter().any(|event| event.level == Level::ERROR));
    assert!(!layer.has_event(Level::INFO, "graph generation completed"));
}

#[rstest]
fn generic_rng_sources_are_accepted(abcd: Vec<&'static str>) {
    let mut rng = rand::thread_rng();
    let graph = RandomGraphBuilder::new(abcd)
        .with_node_range(2, 4)
        .with_edge_range(1, 1)
        .generate(&mut rng)
        .expect("valid request");
    assert!((2..=4).contains(&graph.node_count()));
    assert!(is_weakly_connected(&node_list(&graph), &edge_pairs(&graph)));
}
