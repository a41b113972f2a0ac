//! Stub stages for testing.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::{PipelineError, Result, StageError};
use crate::stages::{OutputSlot, Stage};

/// Shared view of what a [`RecordingStage`] has consumed.
///
/// Stays valid after the stage itself has been moved into a sequence.
#[derive(Debug)]
pub struct RecordingHandle<T> {
    inputs: Arc<Mutex<Vec<T>>>,
}

impl<T> Clone for RecordingHandle<T> {
    fn clone(&self) -> Self {
        Self {
            inputs: Arc::clone(&self.inputs),
        }
    }
}

impl<T: Clone> RecordingHandle<T> {
    /// Returns every input consumed so far, oldest first.
    #[must_use]
    pub fn inputs(&self) -> Vec<T> {
        self.inputs.lock().clone()
    }

    /// Returns the number of pushes seen.
    #[must_use]
    pub fn push_count(&self) -> usize {
        self.inputs.lock().len()
    }

    /// Clears recorded inputs.
    pub fn reset(&self) {
        self.inputs.lock().clear();
    }
}

/// A stage that records its inputs and forwards them unchanged.
#[derive(Debug)]
pub struct RecordingStage<T> {
    name: String,
    inputs: Arc<Mutex<Vec<T>>>,
    output: OutputSlot<T>,
}

impl<T> RecordingStage<T> {
    /// Creates a new recording stage.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inputs: Arc::new(Mutex::new(Vec::new())),
            output: OutputSlot::new(),
        }
    }

    /// Returns a handle onto the recorded inputs.
    #[must_use]
    pub fn handle(&self) -> RecordingHandle<T> {
        RecordingHandle {
            inputs: Arc::clone(&self.inputs),
        }
    }
}

impl<T: Clone + Send> Stage<T> for RecordingStage<T> {
    fn push(&mut self, input: &T) -> Result<()> {
        self.inputs.lock().push(input.clone());
        self.output.set(input.clone());
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

/// A stage that accepts every input and never holds an output.
#[derive(Debug)]
pub struct SilentStage {
    name: String,
    pushes: Arc<AtomicUsize>,
}

impl SilentStage {
    /// Creates a new silent stage.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pushes: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Returns a shared counter of pushes received.
    #[must_use]
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.pushes)
    }
}

impl<T> Stage<T> for SilentStage {
    fn push(&mut self, _input: &T) -> Result<()> {
        self.pushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn front(&self) -> Result<&T> {
        Err(PipelineError::no_output(&self.name))
    }

    fn is_empty(&self) -> bool {
        true
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

/// A stage that always fails.
#[derive(Debug)]
pub struct FailingStage {
    name: String,
    error: String,
}

impl FailingStage {
    /// Creates a new failing stage.
    #[must_use]
    pub fn new(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            error: error.into(),
        }
    }

    /// Returns the error this stage raises on every push.
    #[must_use]
    pub fn error(&self) -> PipelineError {
        StageError::new(&self.name, &self.error).into()
    }
}

impl<T> Stage<T> for FailingStage {
    fn push(&mut self, _input: &T) -> Result<()> {
        Err(self.error())
    }

    fn front(&self) -> Result<&T> {
        Err(PipelineError::no_output(&self.name))
    }

    fn is_empty(&self) -> bool {
        true
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

/// An integer stage that adds a fixed step to its input and counts pushes.
#[derive(Debug)]
pub struct CountingStage {
    name: String,
    step: i64,
    pushes: Arc<AtomicUsize>,
    output: OutputSlot<i64>,
}

impl CountingStage {
    /// Creates a new counting stage.
    #[must_use]
    pub fn new(name: impl Into<String>, step: i64) -> Self {
        Self {
            name: name.into(),
            step,
            pushes: Arc::new(AtomicUsize::new(0)),
            output: OutputSlot::new(),
        }
    }

    /// Returns a shared counter of pushes received.
    #[must_use]
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.pushes)
    }
}

impl Stage<i64> for CountingStage {
    fn push(&mut self, input: &i64) -> Result<()> {
        self.pushes.fetch_add(1, Ordering::SeqCst);
        let value = input
            .checked_add(self.step)
            .ok_or_else(|| PipelineError::invalid_input(&self.name, "integer overflow"))?;
        self.output.set(value);
        Ok(())
    }

    fn front(&self) -> Result<&i64> {
        self.output.get(&self.name)
    }

    fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_stage() {
        let mut stage = RecordingStage::new("rec");
        let handle = stage.handle();

        stage.push(&1).unwrap();
        stage.push(&2).unwrap();

        assert_eq!(handle.inputs(), vec![1, 2]);
        assert_eq!(handle.push_count(), 2);
        assert_eq!(*stage.front().unwrap(), 2);

        handle.reset();
        assert_eq!(handle.push_count(), 0);
    }

    #[test]
    fn test_silent_stage() {
        let mut stage = SilentStage::new("silent");
        let counter = stage.counter();

        Stage::<i32>::push(&mut stage, &7).unwrap();
        assert!(Stage::<i32>::is_empty(&stage));
        assert!(Stage::<i32>::front(&stage).unwrap_err().is_invalid_state());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failing_stage() {
        let mut stage = FailingStage::new("broken", "sensor offline");
        let err = Stage::<i32>::push(&mut stage, &1).unwrap_err();
        assert_eq!(err, stage.error());
        assert!(err.to_string().contains("sensor offline"));
    }

    #[test]
    fn test_counting_stage_overflow() {
        let mut stage = CountingStage::new("inc", 1);
        let err = stage.push(&i64::MAX).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidInput { .. }));
        assert!(stage.is_empty());
        assert_eq!(stage.counter().load(Ordering::SeqCst), 1);
    }
}
