//! Core sequence protocol and the basic combinators built directly on it

use super::terminal;

/// A single-cursor, pull-based producer of elements.
///
/// `next` either hands out the next element by value or returns `None` to
/// report exhaustion. Calling `next` again after `None` is allowed; only
/// sequences that implement [`FusedSequence`] promise to keep returning
/// `None`.
pub trait Sequence {
    type Item;

    /// Whether the sequence is guaranteed to end after a bounded number of
    /// pulls. Infinite producers and the combinators built on them override
    /// this; everything else is finite by convention.
    const FINITE: bool = true;

    fn next(&mut self) -> Option<Self::Item>;
}

/// Marker for sequences that keep returning `None` once exhausted.
pub trait FusedSequence: Sequence {}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;
    const FINITE: bool = S::FINITE;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

impl<S: FusedSequence + ?Sized> FusedSequence for &mut S {}

/// Extension trait providing the basic combinators and terminal operations
pub trait SequenceExt: Sequence + Sized {
    /// Borrow the sequence so that a consuming adaptor leaves it usable
    fn by_ref(&mut self) -> &mut Self;
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where F: FnMut(Self::Item) -> U;
    fn filter<F>(self, f: F) -> Filter<Self, F>
    where F: FnMut(&Self::Item) -> bool;
    fn take(self, n: usize) -> Take<Self>;
    fn skip(self, n: usize) -> Skip<Self>;
    fn fold<B, F>(self, init: B, f: F) -> B
    where F: FnMut(B, Self::Item) -> B;
    fn for_each<F>(self, f: F)
    where F: FnMut(Self::Item);
    /// Pull the sequence to completion, discarding every element
    fn exhaust(self);
    fn copy_into<E>(self, dest: &mut E)
    where E: Extend<Self::Item>;
    fn collect<B>(self) -> B
    where B: Default + Extend<Self::Item>;
}

impl<S: Sequence + Sized> SequenceExt for S {
    fn by_ref(&mut self) -> &mut Self {
        self
    }

    fn map<U, F>(self, f: F) -> Map<Self, F>
    where F: FnMut(Self::Item) -> U,
    {
        Map { sequence: self, f }
    }

    fn filter<F>(self, f: F) -> Filter<Self, F>
    where F: FnMut(&Self::Item) -> bool,
    {
        Filter { sequence: self, f }
    }

    fn take(self, n: usize) -> Take<Self> {
        Take { sequence: self, remaining: n }
    }

    fn skip(self, n: usize) -> Skip<Self> {
        Skip { sequence: self, remaining: n }
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where F: FnMut(B, Self::Item) -> B,
    {
        terminal::fold(self, init, f)
    }

    fn for_each<F>(self, mut f: F)
    where F: FnMut(Self::Item),
    {
        self.fold((), move |(), item| f(item))
    }

    fn exhaust(self) {
        terminal::exhaust(self)
    }

    fn copy_into<E>(self, dest: &mut E)
    where E: Extend<Self::Item>,
    {
        terminal::copy_into(self, dest)
    }

    fn collect<B>(self) -> B
    where B: Default + Extend<Self::Item>,
    {
        let mut collection = B::default();
        terminal::copy_into(self, &mut collection);
        collection
    }
}

// Combinator structs

#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Map<S, F> {
    pub(crate) sequence: S,
    pub(crate) f: F,
}

impl<S, U, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    type Item = U;
    const FINITE: bool = S::FINITE;

    fn next(&mut self) -> Option<Self::Item> {
        self.sequence.next().map(&mut self.f)
    }
}

impl<S, U, F> FusedSequence for Map<S, F>
where
    S: FusedSequence,
    F: FnMut(S::Item) -> U,
{}

#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Filter<S, F> {
    pub(crate) sequence: S,
    pub(crate) f: F,
}

impl<S, F> Sequence for Filter<S, F>
where
    S: Sequence,
    F: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;
    const FINITE: bool = S::FINITE;

    fn next(&mut self) -> Option<Self::Item> {
        // No bound on the number of rejected elements: a predicate that never
        // accepts on an infinite upstream never returns.
        loop {
            let item = self.sequence.next()?;
            if (self.f)(&item) {
                return Some(item);
            }
        }
    }
}

impl<S, F> FusedSequence for Filter<S, F>
where
    S: FusedSequence,
    F: FnMut(&S::Item) -> bool,
{}

#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Take<S> {
    pub(crate) sequence: S,
    pub(crate) remaining: usize,
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    const FINITE: bool = true;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.sequence.next()?;
        self.remaining -= 1;
        Some(item)
    }
}

impl<S: FusedSequence> FusedSequence for Take<S> {}

#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Skip<S> {
    pub(crate) sequence: S,
    pub(crate) remaining: usize,
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;
    const FINITE: bool = S::FINITE;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            self.sequence.next()?;
            self.remaining -= 1;
        }
        self.sequence.next()
    }
}

impl<S: FusedSequence> FusedSequence for Skip<S> {}
