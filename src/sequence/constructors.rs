//! Sequence constructors: elements, reference, successors, mutation, unfold,
//! empty, once, repeat
use std::marker::PhantomData;
use std::ops::AddAssign;

use super::core::{FusedSequence, Sequence};

// ================================
// Container Sources
// ================================

/// Yields the elements of a collection by value, in collection order.
///
/// Finite by convention. Wrapping an unbounded iterator such as `0..` is
/// allowed but the `FINITE` marker will not reflect it; use [`successors`]
/// for counters.
#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Elements<I> {
    pub(crate) iter: I,
}

impl<I> Sequence for Elements<I>
where I: Iterator {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

impl<I> FusedSequence for Elements<I> where I: std::iter::FusedIterator {}

/// Yields references into a borrowed collection, in collection order.
///
/// Built by [`reference`] (shared, `&T`) or [`reference_mut`] (`&mut T`); the
/// latter lets downstream stages such as `inspect` write through to the
/// collection.
#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Reference<I> {
    pub(crate) iter: I,
}

impl<I> Sequence for Reference<I>
where I: Iterator {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

impl<I> FusedSequence for Reference<I> where I: std::iter::FusedIterator {}

// ================================
// Basic Constructors
// ================================

#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Empty<T> {
    pub(crate) _phantom: PhantomData<T>
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        Empty { _phantom: PhantomData }
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        None
    }
}

impl<T> FusedSequence for Empty<T> {}

#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Once<T> {
    pub(crate) value: Option<T>
}

impl<T> Sequence for Once<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.value.take()
    }
}

impl<T> FusedSequence for Once<T> {}

#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Repeat<T> {
    pub(crate) value: T
}

impl<T: Clone> Sequence for Repeat<T> {
    type Item = T;
    const FINITE: bool = false;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.value.clone())
    }
}

impl<T: Clone> FusedSequence for Repeat<T> {}

#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct RepeatWith<F> {
    pub(crate) f: F
}

impl<T, F> Sequence for RepeatWith<F>
where F: FnMut() -> T {
    type Item = T;
    const FINITE: bool = false;

    fn next(&mut self) -> Option<Self::Item> {
        Some((self.f)())
    }
}

impl<T, F> FusedSequence for RepeatWith<F> where F: FnMut() -> T {}

// ================================
// Generator Sources
// ================================

/// Infinite sequence `seed, step(seed), step(step(seed)), ...`.
///
/// `step` runs only when the following element is requested, so the k-th
/// pull costs exactly `k - 1` calls to `step`.
#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Successors<T, F> {
    pub(crate) value: T,
    pub(crate) step: F,
    pub(crate) started: bool,
}

impl<T, F> Sequence for Successors<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Item = T;
    const FINITE: bool = false;

    fn next(&mut self) -> Option<Self::Item> {
        if self.started {
            self.value = (self.step)(&self.value);
        } else {
            self.started = true;
        }
        Some(self.value.clone())
    }
}

impl<T, F> FusedSequence for Successors<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{}

/// Infinite sequence driven by an in-place mutation of a held value.
///
/// Each pulled element is a copy of the value after all mutations so far;
/// like [`Successors`], the mutation for an element runs only when that
/// element is pulled.
#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Mutation<T, F> {
    pub(crate) value: T,
    pub(crate) mutate: F,
    pub(crate) started: bool,
}

impl<T, F> Sequence for Mutation<T, F>
where
    T: Clone,
    F: FnMut(&mut T),
{
    type Item = T;
    const FINITE: bool = false;

    fn next(&mut self) -> Option<Self::Item> {
        if self.started {
            (self.mutate)(&mut self.value);
        } else {
            self.started = true;
        }
        Some(self.value.clone())
    }
}

impl<T, F> FusedSequence for Mutation<T, F>
where
    T: Clone,
    F: FnMut(&mut T),
{}

/// Sequence driven by `f(state) -> Option<(item, next_state)>`.
///
/// Once `f` returns `None` the state is dropped and the sequence stays
/// exhausted. Treated as finite; an `f` that never stops must be bounded by
/// the caller.
#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Unfold<St, F> {
    pub(crate) state: Option<St>,
    pub(crate) f: F,
}

impl<St, T, F> Sequence for Unfold<St, F>
where
    F: FnMut(St) -> Option<(T, St)>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let state = self.state.take()?;
        let (item, next_state) = (self.f)(state)?;
        self.state = Some(next_state);
        Some(item)
    }
}

impl<St, T, F> FusedSequence for Unfold<St, F>
where
    F: FnMut(St) -> Option<(T, St)>,
{}

// ================================
// Conditional Sequence Adapters
// ================================

#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct SkipWhile<S, F> {
    pub(crate) sequence: S,
    pub(crate) f: F,
    pub(crate) skipping: bool
}

impl<S, F> Sequence for SkipWhile<S, F>
where S: Sequence, F: FnMut(&S::Item) -> bool {
    type Item = S::Item;
    const FINITE: bool = S::FINITE;

    fn next(&mut self) -> Option<Self::Item> {
        if self.skipping {
            loop {
                let item = self.sequence.next()?;
                if !(self.f)(&item) {
                    self.skipping = false;
                    return Some(item);
                }
            }
        } else {
            self.sequence.next()
        }
    }
}

impl<S, F> FusedSequence for SkipWhile<S, F>
where S: FusedSequence, F: FnMut(&S::Item) -> bool {}

#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct TakeWhile<S, F> {
    pub(crate) sequence: S,
    pub(crate) f: F,
    pub(crate) done: bool
}

impl<S, F> Sequence for TakeWhile<S, F>
where S: Sequence, F: FnMut(&S::Item) -> bool {
    type Item = S::Item;
    const FINITE: bool = S::FINITE;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = self.sequence.next()?;
        if (self.f)(&item) {
            Some(item)
        } else {
            self.done = true;
            None
        }
    }
}

impl<S, F> FusedSequence for TakeWhile<S, F>
where S: FusedSequence, F: FnMut(&S::Item) -> bool {}

// ================================
// Extension Trait for Additional Adapters
// ================================

pub trait ConstructorSequenceExt: Sequence + Sized {
    fn skip_while<F>(self, f: F) -> SkipWhile<Self, F>
    where F: FnMut(&Self::Item) -> bool
    {
        SkipWhile {
            sequence: self,
            f,
            skipping: true
        }
    }

    fn take_while<F>(self, f: F) -> TakeWhile<Self, F>
    where F: FnMut(&Self::Item) -> bool
    {
        TakeWhile {
            sequence: self,
            f,
            done: false
        }
    }
}

impl<T> ConstructorSequenceExt for T where T: Sequence {}

// ================================
// Constructor Functions
// ================================

/// Create a sequence over the elements of a collection, by value
pub fn elements<C>(collection: C) -> Elements<C::IntoIter>
where C: IntoIterator {
    Elements { iter: collection.into_iter() }
}

/// Create a sequence of shared references into a collection
pub fn reference<'a, C>(collection: &'a C) -> Reference<<&'a C as IntoIterator>::IntoIter>
where
    C: ?Sized,
    &'a C: IntoIterator,
{
    Reference { iter: collection.into_iter() }
}

/// Create a sequence of mutable references into a collection
pub fn reference_mut<'a, C>(collection: &'a mut C) -> Reference<<&'a mut C as IntoIterator>::IntoIter>
where
    C: ?Sized,
    &'a mut C: IntoIterator,
{
    Reference { iter: collection.into_iter() }
}

/// Create an empty sequence
pub fn empty<T>() -> Empty<T> {
    Empty { _phantom: PhantomData }
}

/// Create a sequence that yields a single value
pub fn once<T>(value: T) -> Once<T> {
    Once { value: Some(value) }
}

/// Create a sequence that repeats a value indefinitely
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value }
}

/// Create a sequence that repeatedly calls a closure
pub fn repeat_with<T, F>(f: F) -> RepeatWith<F>
where F: FnMut() -> T {
    RepeatWith { f }
}

/// Create an infinite sequence from a seed and a step function
pub fn successors<T, F>(seed: T, step: F) -> Successors<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    Successors { value: seed, step, started: false }
}

/// Create an infinite sequence from a seed and an in-place mutation
pub fn mutation<T, F>(seed: T, mutate: F) -> Mutation<T, F>
where
    T: Clone,
    F: FnMut(&mut T),
{
    Mutation { value: seed, mutate, started: false }
}

/// Create the arithmetic sequence `start, start + step, start + 2 * step, ...`
pub fn linear<T>(start: T, step: T) -> Mutation<T, impl FnMut(&mut T) + Clone>
where T: Clone + AddAssign {
    mutation(start, move |value: &mut T| *value += step.clone())
}

/// Create a sequence from a state and a step function
pub fn unfold<St, T, F>(init: St, f: F) -> Unfold<St, F>
where F: FnMut(St) -> Option<(T, St)> {
    Unfold { state: Some(init), f }
}
