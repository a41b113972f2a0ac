//! Stage trait and implementations.
//!
//! Stages are the fundamental units of work in a stagechain pipeline.

mod slot;

pub use slot::OutputSlot;

use crate::errors::Result;
use std::fmt::{self, Debug};

/// Trait for pipeline stages.
///
/// A stage consumes one input at a time and afterwards either holds an
/// output or does not. Sequences only ever talk to stages through these
/// four operations.
pub trait Stage<T>: Send {
    /// Consumes an input, updating the stage's held output.
    fn push(&mut self, input: &T) -> Result<()>;

    /// Returns the output currently held.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidState` when the stage holds no output.
    fn front(&self) -> Result<&T>;

    /// Returns true if the stage holds no output.
    fn is_empty(&self) -> bool;

    /// Returns a short text describing the stage.
    fn describe(&self) -> String;
}

/// A simple function-based stage.
///
/// Each push replaces the held output with the closure's result. If the
/// closure fails, the previous output is left untouched.
pub struct FnStage<T, F>
where
    F: Fn(&T) -> Result<T> + Send,
{
    name: String,
    func: F,
    output: OutputSlot<T>,
}

impl<T, F> FnStage<T, F>
where
    F: Fn(&T) -> Result<T> + Send,
{
    /// Creates a new function-based stage.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
            output: OutputSlot::new(),
        }
    }

    /// Returns the name of the stage.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T, F> Debug for FnStage<T, F>
where
    F: Fn(&T) -> Result<T> + Send,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStage")
            .field("name", &self.name)
            .field("has_output", &!self.output.is_empty())
            .finish()
    }
}

impl<T, F> Stage<T> for FnStage<T, F>
where
    T: Send,
    F: Fn(&T) -> Result<T> + Send,
{
    fn push(&mut self, input: &T) -> Result<()> {
        let value = (self.func)(input)?;
        self.output.set(value);
        Ok(())
    }

    fn front(&self) -> Result<&T> {
        self.output.get(&self.name)
    }

    fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

/// A stage that forwards its input unchanged.
#[derive(Debug, Clone)]
pub struct PassThroughStage<T> {
    output: OutputSlot<T>,
}

impl<T> PassThroughStage<T> {
    /// Creates a new pass-through stage.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            output: OutputSlot::new(),
        }
    }
}

impl<T> Default for PassThroughStage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send> Stage<T> for PassThroughStage<T> {
    fn push(&mut self, input: &T) -> Result<()> {
        self.output.set(input.clone());
        Ok(())
    }

    fn front(&self) -> Result<&T> {
        self.output.get("PassThrough")
    }

    fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    fn describe(&self) -> String {
        "PassThrough".to_string()
    }
}
