//! # Stagechain
//!
//! Linear composition of processing stages into a single pipeline.
//!
//! Stagechain provides:
//!
//! - **Stage contract**: a small trait every processing unit implements
//! - **Sequences**: an owned chain of stages that pushes one value through
//!   every stage in order
//! - **Descriptions**: a fully parenthesized rendering of a chain's layout
//! - **Testing helpers**: stub stages for exercising pipelines
//!
//! ## Quick Start
//!
//! ```rust
//! use stagechain::prelude::*;
//!
//! let mut seq = Sequence::<i64>::new()
//!     .then(Box::new(FnStage::new("Double", |x: &i64| Ok(x * 2))))
//!     .then(Box::new(FnStage::new("Increment", |x: &i64| Ok(x + 1))));
//!
//! seq.push(&3)?;
//! assert_eq!(*seq.front()?, 7);
//! assert_eq!(seq.describe(), "(Double (Increment))");
//! # Ok::<(), stagechain::errors::PipelineError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod errors;
pub mod sequence;
pub mod stages;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::SequenceConfig;
    pub use crate::errors::{PipelineError, Result, StageError};
    pub use crate::sequence::{Sequence, EMPTY_SEQUENCE_MARKER};
    pub use crate::stages::{FnStage, OutputSlot, PassThroughStage, Stage};
}
