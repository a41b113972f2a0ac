//! Sequences of pipeline stages.
//!
//! This module provides:
//! - [`Sequence`], an owned linear chain of stages
//! - [`Iter`], in-order traversal over a sequence's stages

mod chain;
mod iter;

pub use chain::Sequence;
pub use iter::Iter;

/// Rendering of a sequence that holds no stages.
pub const EMPTY_SEQUENCE_MARKER: &str = "(empty)";
