//! In-order traversal over a sequence's stages.

use super::chain::Link;
use crate::stages::Stage;

/// Iterator over the stages of a [`Sequence`](super::Sequence), head first.
pub struct Iter<'a, T> {
    next: Option<&'a Link<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) const fn new(first: Option<&'a Link<T>>) -> Self {
        Self { next: first }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a dyn Stage<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.next?;
        self.next = link.next.as_deref();
        let stage: &'a dyn Stage<T> = &*link.stage;
        Some(stage)
    }
}
