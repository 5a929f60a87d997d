//! Advanced sequence combinators: zip, flatten, flat_map, cycle, filter_map,
//! map2, dereference
use std::ops::Deref;

use super::core::{FusedSequence, Map, Sequence, SequenceExt};

// ================================
// FilterMap
// ================================

#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct FilterMap<S, F> {
    pub(crate) sequence: S,
    pub(crate) f: F
}

impl<S, U, F> Sequence for FilterMap<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> Option<U>
{
    type Item = U;
    const FINITE: bool = S::FINITE;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.sequence.next()?;
            if let Some(mapped) = (self.f)(item) {
                return Some(mapped);
            }
        }
    }
}

impl<S, U, F> FusedSequence for FilterMap<S, F>
where
    S: FusedSequence,
    F: FnMut(S::Item) -> Option<U>
{}

// ================================
// Map2
// ================================

/// Maps pair elements through a two-argument function
#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Map2<S, F> {
    pub(crate) sequence: S,
    pub(crate) f: F,
}

impl<S, A, B, U, F> Sequence for Map2<S, F>
where
    S: Sequence<Item = (A, B)>,
    F: FnMut(A, B) -> U,
{
    type Item = U;
    const FINITE: bool = S::FINITE;

    fn next(&mut self) -> Option<Self::Item> {
        let (a, b) = self.sequence.next()?;
        Some((self.f)(a, b))
    }
}

impl<S, A, B, U, F> FusedSequence for Map2<S, F>
where
    S: FusedSequence<Item = (A, B)>,
    F: FnMut(A, B) -> U,
{}

// ================================
// Dereference
// ================================

/// Yields a copy of the value behind each pointer-like element.
///
/// The element type decides what "valid" means; for references and smart
/// pointers the compiler already guarantees it, and nothing is checked here.
#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Dereference<S> {
    pub(crate) sequence: S,
}

impl<S, P, T> Sequence for Dereference<S>
where
    S: Sequence<Item = P>,
    P: Deref<Target = T>,
    T: Clone,
{
    type Item = T;
    const FINITE: bool = S::FINITE;

    fn next(&mut self) -> Option<Self::Item> {
        self.sequence.next().map(|pointer| (*pointer).clone())
    }
}

impl<S, P, T> FusedSequence for Dereference<S>
where
    S: FusedSequence<Item = P>,
    P: Deref<Target = T>,
    T: Clone,
{}

// ================================
// Zip
// ================================

/// Pairs up the elements of two sequences.
///
/// `second` is only pulled after `first` produced an element, so neither side
/// has to be fused. The pair is dropped as soon as one side is exhausted.
#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Zip<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> Sequence for Zip<A, B>
where
    A: Sequence,
    B: Sequence,
{
    type Item = (A::Item, B::Item);
    const FINITE: bool = A::FINITE || B::FINITE;

    fn next(&mut self) -> Option<Self::Item> {
        let a = self.first.next()?;
        let b = self.second.next()?;
        Some((a, b))
    }
}

impl<A, B> FusedSequence for Zip<A, B>
where
    A: FusedSequence,
    B: FusedSequence,
{}

// ================================
// Flatten
// ================================

/// Drains a sequence of sequences one inner sequence at a time.
///
/// The outer sequence is only pulled once the current inner sequence is
/// exhausted, so a mapping that builds the inner sequences runs lazily.
#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Flatten<S, U> {
    pub(crate) outer: S,
    pub(crate) inner: Option<U>,
}

impl<S, U> Sequence for Flatten<S, U>
where
    S: Sequence<Item = U>,
    U: Sequence,
{
    type Item = U::Item;
    const FINITE: bool = S::FINITE && U::FINITE;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = &mut self.inner {
                match inner.next() {
                    Some(item) => return Some(item),
                    None => self.inner = None,
                }
            }

            // A `None` from the outer sequence ends the flattening.
            let inner = self.outer.next()?;
            log::trace!("flatten: advancing to the next inner sequence");
            self.inner = Some(inner);
        }
    }
}

impl<S, U> FusedSequence for Flatten<S, U>
where
    S: FusedSequence<Item = U>,
    U: Sequence,
{}

// ================================
// Cycle
// ================================

/// Repeats the elements of `base` forever.
///
/// Keeps the untouched `base` plus the copy currently being drained, and
/// restarts from a fresh clone of `base` whenever that copy is exhausted. An
/// empty `base` is detected once, by pulling a throwaway clone at
/// construction, and makes the cycle exhausted for good.
#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Cycle<S> {
    pub(crate) base: S,
    pub(crate) active: S,
    pub(crate) nonempty: bool,
}

impl<S> Cycle<S>
where S: Sequence + Clone {
    pub fn new(base: S) -> Self {
        let nonempty = base.clone().next().is_some();
        if !nonempty {
            log::debug!("cycle: base sequence is empty, cycle will stay exhausted");
        }
        let active = base.clone();
        Self { base, active, nonempty }
    }
}

impl<S> Sequence for Cycle<S>
where S: Sequence + Clone {
    type Item = S::Item;
    const FINITE: bool = false;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.nonempty {
            return None;
        }
        match self.active.next() {
            Some(item) => Some(item),
            None => {
                log::trace!("cycle: restarting from the base sequence");
                self.active = self.base.clone();
                self.active.next()
            }
        }
    }
}

// A non-empty cycle never ends and an empty one never starts.
impl<S> FusedSequence for Cycle<S>
where S: Sequence + Clone {}

// ================================
// Extension Trait
// ================================

pub trait AdvancedSequenceExt: Sequence + Sized {
    /// Map each element to a sequence and flatten the results
    fn flat_map<U, F>(self, f: F) -> Flatten<Map<Self, F>, U>
    where
        U: Sequence,
        F: FnMut(Self::Item) -> U,
    {
        self.map(f).flatten()
    }

    /// Filter and map elements in one operation
    fn filter_map<U, F>(self, f: F) -> FilterMap<Self, F>
    where
        F: FnMut(Self::Item) -> Option<U>,
    {
        FilterMap { sequence: self, f }
    }

    /// Map pair elements through a two-argument function
    fn map2<A, B, U, F>(self, f: F) -> Map2<Self, F>
    where
        Self: Sequence<Item = (A, B)>,
        F: FnMut(A, B) -> U,
    {
        Map2 { sequence: self, f }
    }

    /// Combine two sequences element by element
    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        B: Sequence,
    {
        Zip { first: self, second: other }
    }

    /// Flatten a sequence of sequences
    fn flatten(self) -> Flatten<Self, Self::Item>
    where
        Self::Item: Sequence,
    {
        Flatten { outer: self, inner: None }
    }

    /// Repeat the sequence indefinitely
    fn cycle(self) -> Cycle<Self>
    where
        Self: Clone,
    {
        Cycle::new(self)
    }

    /// Replace each pointer-like element by a copy of its target
    fn dereference<T>(self) -> Dereference<Self>
    where
        Self::Item: Deref<Target = T>,
        T: Clone,
    {
        Dereference { sequence: self }
    }
}

impl<T: Sequence + Sized> AdvancedSequenceExt for T {}
