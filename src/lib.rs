//! # seqflow: lazy, pull-based sequence pipelines
//!
//! A [`Sequence`](sequence::Sequence) hands out one element per call to
//! `next` and returns `None` once it is exhausted. Combinators own their
//! upstream by value and are composed either with method syntax or with the
//! `|` operator:
//!
//! ```
//! use seqflow::prelude::*;
//!
//! let pairs: Vec<(usize, char)> = (elements(vec!['a', 'b', 'c']) | enumerate()).collect();
//! assert_eq!(pairs, vec![(0, 'a'), (1, 'b'), (2, 'c')]);
//!
//! let sum = successors(1, |n: &i32| n + 1).take(4).fold(0, |acc, n| acc + n);
//! assert_eq!(sum, 10);
//! ```
//!
//! Nothing runs until a terminal operation or a `for` loop pulls the
//! outermost node. Infinite sources (`successors`, `repeat`, `cycle`) must be
//! bounded by the caller, e.g. with `take`.

pub mod error;
pub mod iter;
pub mod pipe;
pub mod sequence;
pub mod sequence_configuration;

pub use error::{SequenceError, SequenceResult};
pub use sequence_configuration::{BufferConfig, GrowthStrategy};

/// Everything needed to build and drain pipelines
pub mod prelude {
    pub use crate::error::{SequenceError, SequenceResult};
    pub use crate::iter::{Iter, IterSequenceExt};
    pub use crate::pipe::{
        chain, compose, cycle, dereference, enumerate, enumerate_from, filter, filter_map,
        flat_map, flatten, flow, fuse, identity, inspect, map, map2, peekable, skip, skip_while,
        stride, take, take_while, try_stride, zip, Flow, Pipe, PipeExt, PipeSequenceExt,
    };
    pub use crate::sequence::{
        collect_with, copy_into, copy_into_with, elements, empty, exhaust, fold, linear, mutation,
        once, reference, reference_mut, repeat, repeat_with, successors, unfold,
        AdvancedSequenceExt, ConstructorSequenceExt, FusedSequence, SelectSequenceExt, Sequence,
        SequenceExt, UtilitySequenceExt,
    };
    pub use crate::sequence_configuration::{BufferConfig, GrowthStrategy};
}
