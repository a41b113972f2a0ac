//! Testing utilities for stagechain pipelines.
//!
//! This module provides:
//! - Stub stages that record, stay silent, fail, or count
//! - Assertions for sequence results

mod assertions;
mod mocks;

pub use assertions::{assert_describes, assert_invalid_state, assert_stage_failed};
pub use mocks::{CountingStage, FailingStage, RecordingHandle, RecordingStage, SilentStage};
