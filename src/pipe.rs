//! Pipeline composition with the `|` operator.
//!
//! A [`Pipe`] turns one sequence into another. `sequence | pipe` moves the
//! sequence into the pipe and returns whatever the pipe builds, so
//!
//! ```
//! use seqflow::prelude::*;
//!
//! let squares: Vec<i32> = (elements(vec![1, 2, 3, 4, 5, 6])
//!     | filter(|n: &i32| n % 2 == 0)
//!     | map(|n: i32| n * n)
//!     | take(2))
//!     .collect();
//! assert_eq!(squares, vec![4, 16]);
//! ```
//!
//! builds a `Take<Map<Filter<Elements<_>, _>, _>>`: every stage has its own
//! concrete type and nothing is boxed. Any closure `FnOnce(S) -> T` with `T`
//! a sequence is a pipe as well.

use std::ops::{BitOr, Deref};

use crate::error::SequenceResult;
use crate::iter::Iter;
use crate::sequence::*;

/// A pipe represents a sequence transformation from one type to another.
pub trait Pipe<S: Sequence> {
    type Output: Sequence;

    /// Apply this pipe to a sequence
    fn apply(self, input: S) -> Self::Output;
}

impl<S, F, T> Pipe<S> for F
where
    S: Sequence,
    F: FnOnce(S) -> T,
    T: Sequence,
{
    type Output = T;

    fn apply(self, input: S) -> T {
        self(input)
    }
}

// ================================
// Stages
// ================================

#[derive(Clone, Debug)]
pub struct MapPipe<F> {
    f: F,
}

impl<S, U, F> Pipe<S> for MapPipe<F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    type Output = Map<S, F>;

    fn apply(self, input: S) -> Self::Output {
        input.map(self.f)
    }
}

#[derive(Clone, Debug)]
pub struct FilterPipe<F> {
    predicate: F,
}

impl<S, F> Pipe<S> for FilterPipe<F>
where
    S: Sequence,
    F: FnMut(&S::Item) -> bool,
{
    type Output = Filter<S, F>;

    fn apply(self, input: S) -> Self::Output {
        input.filter(self.predicate)
    }
}

#[derive(Clone, Debug)]
pub struct FilterMapPipe<F> {
    f: F,
}

impl<S, U, F> Pipe<S> for FilterMapPipe<F>
where
    S: Sequence,
    F: FnMut(S::Item) -> Option<U>,
{
    type Output = FilterMap<S, F>;

    fn apply(self, input: S) -> Self::Output {
        input.filter_map(self.f)
    }
}

#[derive(Clone, Debug)]
pub struct Map2Pipe<F> {
    f: F,
}

impl<S, A, B, U, F> Pipe<S> for Map2Pipe<F>
where
    S: Sequence<Item = (A, B)>,
    F: FnMut(A, B) -> U,
{
    type Output = Map2<S, F>;

    fn apply(self, input: S) -> Self::Output {
        input.map2(self.f)
    }
}

#[derive(Clone, Debug)]
pub struct InspectPipe<F> {
    f: F,
}

impl<S, F> Pipe<S> for InspectPipe<F>
where
    S: Sequence,
    F: FnMut(&mut S::Item),
{
    type Output = Inspect<S, F>;

    fn apply(self, input: S) -> Self::Output {
        input.inspect(self.f)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DereferencePipe;

impl<S, P, T> Pipe<S> for DereferencePipe
where
    S: Sequence<Item = P>,
    P: Deref<Target = T>,
    T: Clone,
{
    type Output = Dereference<S>;

    fn apply(self, input: S) -> Self::Output {
        input.dereference()
    }
}

#[derive(Clone, Debug)]
pub struct ChainPipe<B> {
    second: B,
}

impl<S, B> Pipe<S> for ChainPipe<B>
where
    S: Sequence,
    B: Sequence<Item = S::Item>,
{
    type Output = Chain<S, B>;

    fn apply(self, input: S) -> Self::Output {
        input.chain(self.second)
    }
}

#[derive(Clone, Debug)]
pub struct ZipPipe<B> {
    second: B,
}

impl<S, B> Pipe<S> for ZipPipe<B>
where
    S: Sequence,
    B: Sequence,
{
    type Output = Zip<S, B>;

    fn apply(self, input: S) -> Self::Output {
        input.zip(self.second)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EnumeratePipe {
    start: usize,
}

impl<S: Sequence> Pipe<S> for EnumeratePipe {
    type Output = Enumerate<S>;

    fn apply(self, input: S) -> Self::Output {
        input.enumerate_from(self.start)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FlattenPipe;

impl<S> Pipe<S> for FlattenPipe
where
    S: Sequence,
    S::Item: Sequence,
{
    type Output = Flatten<S, S::Item>;

    fn apply(self, input: S) -> Self::Output {
        input.flatten()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CyclePipe;

impl<S> Pipe<S> for CyclePipe
where
    S: Sequence + Clone,
{
    type Output = Cycle<S>;

    fn apply(self, input: S) -> Self::Output {
        input.cycle()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct StridePipe {
    step: usize,
}

impl<S: Sequence> Pipe<S> for StridePipe {
    type Output = Stride<S>;

    fn apply(self, input: S) -> Self::Output {
        input.stride(self.step)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FusePipe;

impl<S: Sequence> Pipe<S> for FusePipe {
    type Output = Fuse<S>;

    fn apply(self, input: S) -> Self::Output {
        input.fuse()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PeekablePipe;

impl<S: Sequence> Pipe<S> for PeekablePipe {
    type Output = Peekable<S>;

    fn apply(self, input: S) -> Self::Output {
        input.peekable()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TakePipe {
    n: usize,
}

impl<S: Sequence> Pipe<S> for TakePipe {
    type Output = Take<S>;

    fn apply(self, input: S) -> Self::Output {
        input.take(self.n)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SkipPipe {
    n: usize,
}

impl<S: Sequence> Pipe<S> for SkipPipe {
    type Output = Skip<S>;

    fn apply(self, input: S) -> Self::Output {
        input.skip(self.n)
    }
}

#[derive(Clone, Debug)]
pub struct TakeWhilePipe<F> {
    predicate: F,
}

impl<S, F> Pipe<S> for TakeWhilePipe<F>
where
    S: Sequence,
    F: FnMut(&S::Item) -> bool,
{
    type Output = TakeWhile<S, F>;

    fn apply(self, input: S) -> Self::Output {
        input.take_while(self.predicate)
    }
}

#[derive(Clone, Debug)]
pub struct SkipWhilePipe<F> {
    predicate: F,
}

impl<S, F> Pipe<S> for SkipWhilePipe<F>
where
    S: Sequence,
    F: FnMut(&S::Item) -> bool,
{
    type Output = SkipWhile<S, F>;

    fn apply(self, input: S) -> Self::Output {
        input.skip_while(self.predicate)
    }
}

/// Identity pipe that doesn't transform the sequence
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl<S: Sequence> Pipe<S> for Identity {
    type Output = S;

    fn apply(self, input: S) -> S {
        input
    }
}

/// Two pipes applied one after the other
#[derive(Clone, Debug)]
pub struct Compose<P1, P2> {
    first: P1,
    second: P2,
}

impl<S, P1, P2> Pipe<S> for Compose<P1, P2>
where
    S: Sequence,
    P1: Pipe<S>,
    P2: Pipe<P1::Output>,
{
    type Output = P2::Output;

    fn apply(self, input: S) -> Self::Output {
        self.second.apply(self.first.apply(input))
    }
}

// ================================
// Stage constructors
// ================================

/// Create a pipe that applies the given function to each element
pub fn map<F>(f: F) -> MapPipe<F> {
    MapPipe { f }
}

/// Create a pipe that filters elements based on the predicate
pub fn filter<F>(predicate: F) -> FilterPipe<F> {
    FilterPipe { predicate }
}

/// Create a pipe that maps and filters in one step
pub fn filter_map<F>(f: F) -> FilterMapPipe<F> {
    FilterMapPipe { f }
}

/// Create a pipe that maps pair elements through a two-argument function
pub fn map2<F>(f: F) -> Map2Pipe<F> {
    Map2Pipe { f }
}

/// Create a pipe that shows each element to `f` before passing it on
pub fn inspect<F>(f: F) -> InspectPipe<F> {
    InspectPipe { f }
}

/// Create a pipe that replaces pointer-like elements by copies of their targets
pub fn dereference() -> DereferencePipe {
    DereferencePipe
}

/// Create a pipe that appends `second` after the piped sequence
pub fn chain<B: Sequence>(second: B) -> ChainPipe<B> {
    ChainPipe { second }
}

/// Create a pipe that pairs the piped sequence with `second`
pub fn zip<B: Sequence>(second: B) -> ZipPipe<B> {
    ZipPipe { second }
}

/// Create a pipe that numbers elements from 0
pub fn enumerate() -> EnumeratePipe {
    EnumeratePipe { start: 0 }
}

/// Create a pipe that numbers elements from `start`
pub fn enumerate_from(start: usize) -> EnumeratePipe {
    EnumeratePipe { start }
}

/// Create a pipe that flattens a sequence of sequences
pub fn flatten() -> FlattenPipe {
    FlattenPipe
}

/// Create a pipe that maps each element to a sequence and flattens the result
pub fn flat_map<F>(f: F) -> Compose<MapPipe<F>, FlattenPipe> {
    compose(map(f), flatten())
}

/// Create a pipe that repeats the piped sequence forever
pub fn cycle() -> CyclePipe {
    CyclePipe
}

/// Create a pipe that keeps the first element and every `step`-th after it.
///
/// # Panics
///
/// Panics if `step` is 0.
pub fn stride(step: usize) -> StridePipe {
    assert!(step > 0, "stride: step parameter must be greater than 0, got {}", step);
    StridePipe { step }
}

/// Like [`stride`], but reports a zero step as an error
pub fn try_stride(step: usize) -> SequenceResult<StridePipe> {
    if step == 0 {
        return Err(crate::error::SequenceError::ZeroStride);
    }
    Ok(StridePipe { step })
}

/// Create a pipe that fuses the piped sequence
pub fn fuse() -> FusePipe {
    FusePipe
}

/// Create a pipe that adds one element of look-ahead
pub fn peekable() -> PeekablePipe {
    PeekablePipe
}

/// Create a pipe that yields at most `n` elements
pub fn take(n: usize) -> TakePipe {
    TakePipe { n }
}

/// Create a pipe that discards the first `n` elements
pub fn skip(n: usize) -> SkipPipe {
    SkipPipe { n }
}

/// Create a pipe that stops at the first element failing `predicate`
pub fn take_while<F>(predicate: F) -> TakeWhilePipe<F> {
    TakeWhilePipe { predicate }
}

/// Create a pipe that discards elements while `predicate` holds
pub fn skip_while<F>(predicate: F) -> SkipWhilePipe<F> {
    SkipWhilePipe { predicate }
}

/// Identity pipe that doesn't transform the sequence
pub fn identity() -> Identity {
    Identity
}

/// Compose two pipes together
pub fn compose<P1, P2>(first: P1, second: P2) -> Compose<P1, P2> {
    Compose { first, second }
}

/// Extension trait for pipes
pub trait PipeExt: Sized {
    /// Compose this pipe with another pipe
    fn compose<P>(self, other: P) -> Compose<Self, P> {
        compose(self, other)
    }
}

macro_rules! pipe_ext {
    ($($name:ident $(<$($param:ident),+>)?),+ $(,)?) => {$(
        impl$(<$($param),+>)? PipeExt for $name$(<$($param),+>)? {}
    )+};
}

pipe_ext!(
    MapPipe<F>, FilterPipe<F>, FilterMapPipe<F>, Map2Pipe<F>, InspectPipe<F>, DereferencePipe,
    ChainPipe<B>, ZipPipe<B>, EnumeratePipe, FlattenPipe, CyclePipe, StridePipe, FusePipe,
    PeekablePipe, TakePipe, SkipPipe, TakeWhilePipe<F>, SkipWhilePipe<F>, Identity,
    Compose<P1, P2>,
);

/// Extension trait applying a pipe with method syntax
pub trait PipeSequenceExt: Sequence + Sized {
    fn pipe<P>(self, pipe: P) -> P::Output
    where
        P: Pipe<Self>,
    {
        pipe.apply(self)
    }
}

impl<T> PipeSequenceExt for T where T: Sequence {}

// ================================
// Flow
// ================================

/// Wraps any sequence so that it can start a `|` pipeline.
///
/// The library's own sequence types support `|` directly; `Flow` is for
/// sequences defined elsewhere.
#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Flow<S> {
    sequence: S,
}

impl<S> Flow<S> {
    pub fn new(sequence: S) -> Self {
        Self { sequence }
    }

    pub fn into_inner(self) -> S {
        self.sequence
    }
}

impl<S: Sequence> Sequence for Flow<S> {
    type Item = S::Item;
    const FINITE: bool = S::FINITE;

    fn next(&mut self) -> Option<Self::Item> {
        self.sequence.next()
    }
}

impl<S: FusedSequence> FusedSequence for Flow<S> {}

/// Start a pipeline from any sequence
pub fn flow<S: Sequence>(sequence: S) -> Flow<S> {
    Flow::new(sequence)
}

// `|` and `for` support for every sequence type of the crate.
macro_rules! sequence_operators {
    ($($name:ident<$($param:ident $(: $bound:path)?),+>),+ $(,)?) => {$(
        impl<$($param $(: $bound)?,)+ P> BitOr<P> for $name<$($param),+>
        where
            Self: Sequence,
            P: Pipe<Self>,
        {
            type Output = P::Output;

            fn bitor(self, pipe: P) -> Self::Output {
                pipe.apply(self)
            }
        }

        impl<$($param $(: $bound)?),+> IntoIterator for $name<$($param),+>
        where
            Self: Sequence,
        {
            type Item = <Self as Sequence>::Item;
            type IntoIter = Iter<Self>;

            fn into_iter(self) -> Self::IntoIter {
                Iter::new(self)
            }
        }
    )+};
}

sequence_operators!(
    Flow<S>,
    Elements<I>, Reference<I>, Empty<T>, Once<T>, Repeat<T>, RepeatWith<F>,
    Successors<T, F>, Mutation<T, F>, Unfold<St, F>, SkipWhile<S, F>, TakeWhile<S, F>,
    Map<S, F>, Filter<S, F>, Take<S>, Skip<S>,
    FilterMap<S, F>, Map2<S, F>, Dereference<S>, Zip<A, B>, Flatten<S, U>, Cycle<S>,
    Stride<S>, Inspect<S, F>, Chain<A, B>, Enumerate<S>,
    Fuse<S>, Peekable<S: Sequence>,
);
