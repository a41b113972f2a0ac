//! Test assertions for sequences.

use crate::errors::{PipelineError, Result};
use crate::sequence::Sequence;

/// Asserts that the result is an `InvalidState` error.
pub fn assert_invalid_state<T: std::fmt::Debug>(result: &Result<T>) {
    assert!(
        matches!(result, Err(PipelineError::InvalidState(_))),
        "Expected InvalidState, got: {result:?}"
    );
}

/// Asserts that the result is the given stage failure.
pub fn assert_stage_failed<T: std::fmt::Debug>(result: &Result<T>, stage: &str) {
    match result {
        Err(PipelineError::Stage(err)) => assert_eq!(
            err.stage, stage,
            "Expected failure from stage '{stage}', got '{}'",
            err.stage
        ),
        other => panic!("Expected stage failure from '{stage}', got: {other:?}"),
    }
}

/// Asserts that a sequence renders as the expected description.
pub fn assert_describes<T>(sequence: &Sequence<T>, expected: &str) {
    let actual = sequence.describe();
    assert_eq!(
        actual, expected,
        "Expected description {expected:?}, got {actual:?}"
    );
}
