//! Utility sequence combinators: stride, inspect, enumerate, chain, and the
//! short-circuiting queries nth, last, all, any, find, position, count,
//! contains, sum
use std::ops::Add;

use super::core::{FusedSequence, Sequence, SequenceExt};
use super::select::Fuse;
use crate::error::{SequenceError, SequenceResult};

// Stride
/// Yields the first element, then every `step`-th element after it.
///
/// The base is fused so that skip runs past its end keep reporting
/// exhaustion instead of resurrecting it.
#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Stride<S> {
    pub(crate) sequence: Fuse<S>,
    pub(crate) step: usize,
    pub(crate) started: bool,
}

impl<S> Stride<S> {
    pub fn new(sequence: S, step: usize) -> Self {
        assert!(step > 0, "Stride::new: step parameter must be greater than 0, got {}", step);
        Self { sequence: Fuse::new(sequence), step, started: false }
    }

    pub fn try_new(sequence: S, step: usize) -> SequenceResult<Self> {
        if step == 0 {
            return Err(SequenceError::ZeroStride);
        }
        Ok(Self::new(sequence, step))
    }
}

impl<S> Sequence for Stride<S>
where
    S: Sequence,
{
    type Item = S::Item;
    const FINITE: bool = S::FINITE;

    fn next(&mut self) -> Option<Self::Item> {
        if self.started {
            for skipped in 1..self.step {
                if self.sequence.next().is_none() {
                    // The base is fused, the remaining skips would be no-ops.
                    log::trace!("stride: base exhausted after {} of {} skips", skipped - 1, self.step - 1);
                    break;
                }
            }
        } else {
            self.started = true;
        }
        self.sequence.next()
    }
}

impl<S: Sequence> FusedSequence for Stride<S> {}

// Inspect
/// Hands every element to `f` by mutable reference, then yields it.
///
/// The element is passed on exactly as `f` left it.
#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Inspect<S, F> {
    pub(crate) sequence: S,
    pub(crate) f: F,
}

impl<S, F> Sequence for Inspect<S, F>
where
    S: Sequence,
    F: FnMut(&mut S::Item),
{
    type Item = S::Item;
    const FINITE: bool = S::FINITE;

    fn next(&mut self) -> Option<Self::Item> {
        let mut item = self.sequence.next()?;
        (self.f)(&mut item);
        Some(item)
    }
}

impl<S, F> FusedSequence for Inspect<S, F>
where
    S: FusedSequence,
    F: FnMut(&mut S::Item),
{}

// Chain
#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Chain<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
    pub(crate) first_done: bool,
}

impl<A, B> Sequence for Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    const FINITE: bool = A::FINITE && B::FINITE;

    fn next(&mut self) -> Option<Self::Item> {
        // `first` is never pulled again once it reported exhaustion.
        if !self.first_done {
            match self.first.next() {
                Some(item) => return Some(item),
                None => self.first_done = true,
            }
        }

        self.second.next()
    }
}

impl<A, B> FusedSequence for Chain<A, B>
where
    A: Sequence,
    B: FusedSequence<Item = A::Item>,
{}

// Enumerate
#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Enumerate<S> {
    pub(crate) sequence: S,
    pub(crate) index: usize,
}

impl<S> Sequence for Enumerate<S>
where
    S: Sequence,
{
    type Item = (usize, S::Item);
    const FINITE: bool = S::FINITE;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.sequence.next()?;
        let idx = self.index;
        self.index = self.index.saturating_add(1);
        Some((idx, item))
    }
}

impl<S: FusedSequence> FusedSequence for Enumerate<S> {}

// Extension trait for these combinators
pub trait UtilitySequenceExt: Sequence + Sized {
    /// Pull the `n`-th remaining element (0-based), discarding the ones before
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        for _ in 0..n {
            self.next()?;
        }
        self.next()
    }

    fn last(self) -> Option<Self::Item> {
        self.fold(None, |_, item| Some(item))
    }

    fn all<F>(&mut self, mut f: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool
    {
        while let Some(item) = self.next() {
            if !f(&item) {
                return false;
            }
        }
        true
    }

    fn any<F>(&mut self, mut f: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool
    {
        while let Some(item) = self.next() {
            if f(&item) {
                return true;
            }
        }
        false
    }

    fn find<F>(&mut self, mut f: F) -> Option<Self::Item>
    where
        F: FnMut(&Self::Item) -> bool
    {
        while let Some(item) = self.next() {
            if f(&item) {
                return Some(item);
            }
        }
        None
    }

    fn position<F>(&mut self, mut f: F) -> Option<usize>
    where
        F: FnMut(&Self::Item) -> bool
    {
        let mut pos = 0usize;
        while let Some(item) = self.next() {
            if f(&item) {
                return Some(pos);
            }
            pos = pos.saturating_add(1);
        }
        None
    }

    fn count(self) -> usize {
        self.fold(0usize, |count, _| count.saturating_add(1))
    }

    /// Whether any remaining element equals `value`; stops at the first match
    fn contains<T>(&mut self, value: &T) -> bool
    where
        Self::Item: PartialEq<T>,
        T: ?Sized,
    {
        self.any(|item| item == value)
    }

    fn sum(self) -> Self::Item
    where
        Self::Item: Default + Add<Output = Self::Item>,
    {
        self.fold(<Self::Item as Default>::default(), |acc, item| acc + item)
    }

    /// Keep the first element and every `step`-th one after it.
    ///
    /// # Panics
    ///
    /// Panics if `step` is 0.
    fn stride(self, step: usize) -> Stride<Self> {
        Stride::new(self, step)
    }

    /// Like [`stride`](Self::stride), but reports a zero step as an error
    fn try_stride(self, step: usize) -> SequenceResult<Stride<Self>> {
        Stride::try_new(self, step)
    }

    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        F: FnMut(&mut Self::Item),
    {
        Inspect { sequence: self, f }
    }

    fn enumerate(self) -> Enumerate<Self> {
        Enumerate { sequence: self, index: 0 }
    }

    fn enumerate_from(self, start: usize) -> Enumerate<Self> {
        Enumerate { sequence: self, index: start }
    }

    fn chain<B>(self, other: B) -> Chain<Self, B>
    where
        B: Sequence<Item = Self::Item>,
    {
        Chain { first: self, second: other, first_done: false }
    }
}

impl<T> UtilitySequenceExt for T where T: Sequence + Sized {}
