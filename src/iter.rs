//! Bridge from sequences to `std::iter::Iterator`
//!
//! Lets any pipeline drive a `for` loop or feed the standard iterator
//! adaptors. The bridge only forwards `next`; all laziness stays in the
//! sequence.

use std::iter::FusedIterator;

use crate::sequence::{FusedSequence, Sequence};

/// Iterator over the elements of a sequence
#[derive(Clone, Debug)]
pub struct Iter<S> {
    sequence: S,
}

impl<S> Iter<S> {
    pub fn new(sequence: S) -> Self {
        Self { sequence }
    }

    /// Give back the wrapped sequence
    pub fn into_inner(self) -> S {
        self.sequence
    }
}

impl<S: Sequence> Iterator for Iter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.sequence.next()
    }
}

impl<S: FusedSequence> FusedIterator for Iter<S> {}

/// Extension trait turning any sequence into an iterator
pub trait IterSequenceExt: Sequence + Sized {
    fn iterate(self) -> Iter<Self> {
        Iter::new(self)
    }
}

impl<T> IterSequenceExt for T where T: Sequence {}
