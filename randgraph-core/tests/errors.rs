use randgraph_core::{GenerationError, GenerationErrorCode};
use rstest::rstest;

#[rstest]
#[case(
    GenerationError::NodeRangeExceedsPool { min: 5, max: 5, pool: 3 },
    GenerationErrorCode::NodeRangeExceedsPool,
    "GENERATOR_NODE_RANGE_EXCEEDS_POOL",
)]
#[case(
    GenerationError::EdgeCapacityExceeded { requested: 4, capacity: 3, nodes: 3, directed: false },
    GenerationErrorCode::EdgeCapacityExceeded,
    "GENERATOR_EDGE_CAPACITY_EXCEEDED",
)]
#[case(
    GenerationError::InvalidNodeRange { min: 2, max: 1 },
    GenerationErrorCode::InvalidNodeRange,
    "GENERATOR_INVALID_NODE_RANGE",
)]
#[case(
    GenerationError::InvalidEdgeRange { min: 2, max: 1 },
    GenerationErrorCode::InvalidEdgeRange,
    "GENERATOR_INVALID_EDGE_RANGE",
)]
fn returns_expected_generation_code(
    #[case] error: GenerationError,
    #[case] expected: GenerationErrorCode,
    #[case] code: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), code);
    assert_eq!(error.code().to_string(), code);
}

#[rstest]
fn messages_name_the_offending_bounds() {
    let err = GenerationError::EdgeCapacityExceeded {
        requested: 4,
        capacity: 3,
        nodes: 3,
        directed: false,
    };
    assert_eq!(
        err.to_string(),
        "edge target 4 exceeds the maximum of 3 edges for 3 nodes (directed: false)"
    );

    let err = GenerationError::NodeRangeExceedsPool {
        min: 5,
        max: 5,
        pool: 3,
    };
    assert_eq!(
        err.to_string(),
        "node range 5..=5 exceeds the label pool of 3 labels"
    );
}

#[rstest]
#[case(GenerationError::NodeRangeExceedsPool { min: 5, max: 5, pool: 3 }, true)]
#[case(GenerationError::InvalidNodeRange { min: 2, max: 1 }, true)]
#[case(GenerationError::InvalidEdgeRange { min: 2, max: 1 }, true)]
#[case(
    GenerationError::EdgeCapacityExceeded { requested: 4, capacity: 3, nodes: 3, directed: false },
    false,
)]
fn range_errors_are_classified(#[case] error: GenerationError, #[case] expected: bool) {
    assert_eq!(error.is_range_error(), expected);
}
