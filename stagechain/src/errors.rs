//! Error types for stagechain.
//!
//! A single [`PipelineError`] is shared by sequences and the stages they
//! hold, so a stage failure reaches the caller of [`Sequence::push`]
//! as the very value the stage returned.
//!
//! [`Sequence::push`]: crate::sequence::Sequence::push

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = PipelineError> = std::result::Result<T, E>;

/// The main error type for pipeline operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// An operation was attempted in a state that does not allow it.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A stage rejected the input it was given.
    #[error("Invalid input for stage '{stage}': {reason}")]
    InvalidInput {
        /// The rejecting stage.
        stage: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// A stage failed while processing.
    #[error("{0}")]
    Stage(#[from] StageError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PipelineError {
    /// Creates an invalid state error.
    #[must_use]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// Error for an operation on a sequence holding no stages.
    #[must_use]
    pub fn no_stages() -> Self {
        Self::invalid_state("the pipeline is empty: add a stage before using it")
    }

    /// Error for a stage that holds no output after consuming an input.
    #[must_use]
    pub fn stage_empty(stage: &str) -> Self {
        Self::invalid_state(format!(
            "pipeline stage {stage} produced no output after consuming its input"
        ))
    }

    /// Error for asking a stage for output it does not hold.
    #[must_use]
    pub fn no_output(stage: &str) -> Self {
        Self::invalid_state(format!("pipeline stage {stage} has no output available"))
    }

    /// Returns true if this is an invalid state error.
    #[must_use]
    pub const fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }
}

/// Error raised when a stage fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Stage {stage} failed: {message}")]
pub struct StageError {
    /// Stage that failed.
    pub stage: String,
    /// Original error message.
    pub message: String,
}

impl StageError {
    /// Creates a new stage error.
    #[must_use]
    pub fn new(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            message: message.into(),
        }
    }
}
