//! Fuse and peekable combinators
use super::core::{FusedSequence, Sequence};

// Fuse
/// Remembers exhaustion: once `sequence` returned `None` it is never pulled
/// again and every later call returns `None`.
#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Fuse<S> {
    pub(crate) sequence: S,
    pub(crate) done: bool
}

impl<S> Fuse<S> {
    pub fn new(sequence: S) -> Self {
        Self { sequence, done: false }
    }

    /// Whether the wrapped sequence has reported exhaustion
    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl<S> Sequence for Fuse<S>
where S: Sequence {
    type Item = S::Item;
    const FINITE: bool = S::FINITE;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.sequence.next() {
            Some(item) => Some(item),
            None => {
                log::trace!("fuse: base sequence exhausted");
                self.done = true;
                None
            }
        }
    }
}

impl<S: Sequence> FusedSequence for Fuse<S> {}

// Peekable
/// Adds one element of look-ahead on top of `next`.
///
/// A peeked exhaustion is remembered too, so `peek` followed by `next` pulls
/// the base exactly once.
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Peekable<S>
where S: Sequence
{
    pub(crate) sequence: S,
    pub(crate) peeked: Option<Option<S::Item>>
}

impl<S> Clone for Peekable<S>
where
    S: Sequence + Clone,
    S::Item: Clone,
{
    fn clone(&self) -> Self {
        Self { sequence: self.sequence.clone(), peeked: self.peeked.clone() }
    }
}

impl<S> Sequence for Peekable<S>
where S: Sequence {
    type Item = S::Item;
    const FINITE: bool = S::FINITE;

    fn next(&mut self) -> Option<Self::Item> {
        match self.peeked.take() {
            Some(peeked) => peeked,
            None => self.sequence.next(),
        }
    }
}

impl<S: FusedSequence> FusedSequence for Peekable<S> {}

impl<S> Peekable<S>
where S: Sequence {
    /// Look at the next element without consuming it
    pub fn peek(&mut self) -> Option<&S::Item> {
        let sequence = &mut self.sequence;
        self.peeked.get_or_insert_with(|| sequence.next()).as_ref()
    }

    /// Mutable access to the next element without consuming it
    pub fn peek_mut(&mut self) -> Option<&mut S::Item> {
        let sequence = &mut self.sequence;
        self.peeked.get_or_insert_with(|| sequence.next()).as_mut()
    }

    /// Whether a following call to `next` will produce an element
    pub fn has_next(&mut self) -> bool {
        self.peek().is_some()
    }

    /// Whether a following call to `next` will report exhaustion
    pub fn is_exhausted(&mut self) -> bool {
        !self.has_next()
    }
}

// Extension trait for these
pub trait SelectSequenceExt: Sequence + Sized {
    fn fuse(self) -> Fuse<Self> { Fuse::new(self) }
    fn peekable(self) -> Peekable<Self> { Peekable { sequence: self, peeked: None } }
}

impl<T> SelectSequenceExt for T where T: Sequence {}
