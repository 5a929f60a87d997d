//! Pull-based sequences and their combinators
//!
//! Every combinator is a plain struct that owns its upstream by value, so a
//! pipeline is one concrete nested type with no boxing and no virtual calls.

pub mod core;
pub mod constructors;
pub mod advanced;
pub mod utility;
pub mod select;
pub mod terminal;

// Re-export core types
pub use self::core::{Sequence, SequenceExt, FusedSequence, Map, Filter, Take, Skip};

// Re-export constructors
pub use constructors::{
    elements, reference, reference_mut, empty, once, repeat, repeat_with, successors,
    mutation, linear, unfold,
    Elements, Reference, Empty, Once, Repeat, RepeatWith, Successors, Mutation, Unfold,
    SkipWhile, TakeWhile, ConstructorSequenceExt
};

// Re-export advanced combinators
pub use advanced::{
    FilterMap, Map2, Dereference, Zip, Flatten, Cycle, AdvancedSequenceExt
};

// Re-export utility combinators
pub use utility::{
    Stride, Inspect, Chain, Enumerate, UtilitySequenceExt,
};

// Re-export fuse/peekable combinators
pub use select::{
    Fuse, Peekable, SelectSequenceExt
};

// Re-export terminal operations
pub use terminal::{fold, exhaust, copy_into, collect_with, copy_into_with};
