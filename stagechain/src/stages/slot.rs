//! Held-output storage for stages.

use crate::errors::{PipelineError, Result};

/// The single output a stage holds between pushes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSlot<T> {
    value: Option<T>,
}

impl<T> OutputSlot<T> {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Stores a value, replacing any previous one.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Removes and returns the held value.
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Empties the slot.
    pub fn clear(&mut self) {
        self.value = None;
    }

    /// Returns the held value.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidState` naming `stage` when the slot is empty.
    pub fn get(&self, stage: &str) -> Result<&T> {
        self.value
            .as_ref()
            .ok_or_else(|| PipelineError::no_output(stage))
    }

    /// Returns true if no value is held.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

impl<T> Default for OutputSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
