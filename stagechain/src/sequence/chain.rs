//! The owned linear chain of stages.

use super::iter::Iter;
use crate::config::SequenceConfig;
use crate::errors::{PipelineError, Result};
use crate::stages::Stage;
use std::fmt;
use tracing::{debug, debug_span, trace, warn};

/// One position in a sequence: a stage and the remainder of the chain.
pub(super) struct Link<T> {
    pub(super) stage: Box<dyn Stage<T>>,
    pub(super) next: Option<Box<Link<T>>>,
}

impl<T> Link<T> {
    fn new(stage: Box<dyn Stage<T>>) -> Self {
        Self { stage, next: None }
    }
}

/// A linear pipeline of stages.
///
/// A sequence is either empty or holds a head stage followed by an optional
/// tail. Pushing a value feeds it to the head, then hands each stage's output
/// to the stage after it; the last stage's output is read back with
/// [`front`](Self::front).
///
/// Every stage except the last must hold an output after consuming its
/// input, otherwise the push fails with `InvalidState`.
pub struct Sequence<T> {
    first: Option<Box<Link<T>>>,
    len: usize,
    config: SequenceConfig,
}

impl<T> Sequence<T> {
    /// Creates a sequence with no stages.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SequenceConfig::default())
    }

    /// Creates a sequence holding a single stage.
    #[must_use]
    pub fn with_stage(stage: Box<dyn Stage<T>>) -> Self {
        let mut seq = Self::new();
        seq.append(stage);
        seq
    }

    /// Creates an empty sequence with the given configuration.
    #[must_use]
    pub const fn with_config(config: SequenceConfig) -> Self {
        Self {
            first: None,
            len: 0,
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &SequenceConfig {
        &self.config
    }

    /// Adds a stage at the end of the sequence.
    pub fn append(&mut self, stage: Box<dyn Stage<T>>) {
        self.extend(std::iter::once(stage));
    }

    fn tail_slot(&mut self) -> &mut Option<Box<Link<T>>> {
        let mut slot = &mut self.first;
        while let Some(link) = slot {
            slot = &mut link.next;
        }
        slot
    }

    /// Adds a stage at the end and returns the sequence.
    #[must_use]
    pub fn then(mut self, stage: Box<dyn Stage<T>>) -> Self {
        self.append(stage);
        self
    }

    /// Returns the number of stages.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if at least one stage has been added.
    #[must_use]
    pub const fn has_stages(&self) -> bool {
        self.first.is_some()
    }

    /// Iterates over the stages in execution order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.first.as_deref())
    }

    fn last_stage(&self) -> Result<&dyn Stage<T>> {
        self.iter().last().ok_or_else(PipelineError::no_stages)
    }

    /// Returns true if the last stage holds no output.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidState` if the sequence holds no stages.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.last_stage()?.is_empty())
    }

    /// Returns the output held by the last stage.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidState` if the sequence holds no stages, or with
    /// whatever the last stage reports when it has no output.
    pub fn front(&self) -> Result<&T> {
        self.last_stage()?.front()
    }

    /// Pushes a value through every stage, head first.
    ///
    /// Stage errors are returned as raised. Stages that consumed input
    /// before a failure keep their new state.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidState` if the sequence holds no stages, or if a
    /// stage other than the last holds no output after consuming.
    pub fn push(&mut self, input: &T) -> Result<()> {
        let strict_terminal = self.config.strict_terminal;
        let _span = debug_span!(
            "sequence.push",
            name = self.config.name.as_deref().unwrap_or("unnamed"),
            stages = self.len
        )
        .entered();

        let Some(first) = self.first.as_deref_mut() else {
            return Err(PipelineError::no_stages());
        };
        first.stage.push(input)?;

        let mut link = first;
        let mut index = 0usize;
        loop {
            let Link { stage, next } = link;
            let terminal = next.is_none();

            if stage.is_empty() && (!terminal || strict_terminal) {
                let description = stage.describe();
                warn!(stage = %description, index, "Stage produced no output");
                return Err(PipelineError::stage_empty(&description));
            }
            debug!(stage = %stage.describe(), index, "Stage consumed input");

            let Some(next) = next.as_deref_mut() else {
                return Ok(());
            };
            next.stage.push(stage.front()?)?;
            link = next;
            index += 1;
        }
    }

    /// Renders the sequence in fully parenthesized list notation.
    ///
    /// Stages `A`, `B` and `C` render as `(A (B (C)))`; a sequence with no
    /// stages renders as the configured empty marker.
    pub fn describe(&self) -> String {
        let mut rendered = String::new();
        for (index, stage) in self.iter().enumerate() {
            if index > 0 {
                rendered.push(' ');
            }
            rendered.push('(');
            rendered.push_str(&stage.describe());
        }
        if self.first.is_none() {
            return self.config.empty_marker.clone();
        }

        rendered.extend(std::iter::repeat(')').take(self.len));
        rendered
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Sequence<T> {
    fn drop(&mut self) {
        // Unlink one node at a time so long chains do not recurse on drop.
        let mut next = self.first.take();
        while let Some(mut link) = next {
            next = link.next.take();
        }
    }
}

impl<T> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl<T> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("stages", &self.describe())
            .field("len", &self.len)
            .field("config", &self.config)
            .finish()
    }
}

impl<T> Extend<Box<dyn Stage<T>>> for Sequence<T> {
    fn extend<I: IntoIterator<Item = Box<dyn Stage<T>>>>(&mut self, iter: I) {
        let mut position = self.len;
        let mut slot = self.tail_slot();
        for stage in iter {
            trace!(stage = %stage.describe(), position, "Appending stage");
            let link = slot.insert(Box::new(Link::new(stage)));
            slot = &mut link.next;
            position += 1;
        }
        self.len = position;
    }
}

impl<T> FromIterator<Box<dyn Stage<T>>> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = Box<dyn Stage<T>>>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a dyn Stage<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A sequence can itself be a stage of another sequence.
///
/// Through this contract a sequence with no stages reports itself empty
/// instead of failing.
impl<T> Stage<T> for Sequence<T> {
    fn push(&mut self, input: &T) -> Result<()> {
        Self::push(self, input)
    }

    fn front(&self) -> Result<&T> {
        Self::front(self)
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self).unwrap_or(true)
    }

    fn describe(&self) -> String {
        Self::describe(self)
    }
}
