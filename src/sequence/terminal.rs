//! Terminal operations: drain a sequence into a value or a container

use super::core::Sequence;
use crate::error::{SequenceError, SequenceResult};
use crate::iter::Iter;
use crate::sequence_configuration::BufferConfig;

/// Pull `sequence` until it is exhausted, threading an accumulator through `f`
pub fn fold<S, B, F>(mut sequence: S, init: B, mut f: F) -> B
where
    S: Sequence,
    F: FnMut(B, S::Item) -> B,
{
    let mut acc = init;
    while let Some(item) = sequence.next() {
        acc = f(acc, item);
    }
    acc
}

/// Pull `sequence` to the end for its side effects, dropping every element
pub fn exhaust<S: Sequence>(mut sequence: S) {
    while sequence.next().is_some() {}
}

/// Append every element of `sequence` to `dest`, in yield order
pub fn copy_into<S, E>(sequence: S, dest: &mut E)
where
    S: Sequence,
    E: Extend<S::Item>,
{
    dest.extend(Iter::new(sequence));
}

/// Collect into a `Vec` sized and bounded by `config`
pub fn collect_with<S>(sequence: S, config: &BufferConfig) -> SequenceResult<Vec<S::Item>>
where
    S: Sequence,
{
    config.validate()?;
    let initial = match config.limit() {
        Some(limit) => config.initial_capacity.min(limit),
        None => config.initial_capacity,
    };
    let mut collection = Vec::new();
    reserve_up_to(&mut collection, initial);
    copy_into_with(sequence, &mut collection, config)?;
    Ok(collection)
}

/// Append to `dest`, growing it as `config` prescribes.
///
/// The limit applies to the total length of `dest`, including elements that
/// were already there. On overflow the element that did not fit is dropped
/// and the rest of `sequence` is left unpulled.
pub fn copy_into_with<S>(
    mut sequence: S,
    dest: &mut Vec<S::Item>,
    config: &BufferConfig,
) -> SequenceResult<()>
where
    S: Sequence,
{
    config.validate()?;
    let limit = config.limit();
    while let Some(item) = sequence.next() {
        if let Some(limit) = limit {
            if dest.len() >= limit {
                log::warn!("bounded collection stopped at its limit of {} elements", limit);
                return Err(SequenceError::CapacityExceeded { limit });
            }
        }
        if dest.len() == dest.capacity() {
            let target = config.next_capacity(dest.capacity());
            reserve_up_to(dest, target.saturating_sub(dest.len()).max(1));
        }
        dest.push(item);
    }
    Ok(())
}

/// Reserve `additional` slots if the allocator allows it.
///
/// A request the allocator refuses is not an error: `push` then grows the
/// buffer on its own, one amortized step at a time.
fn reserve_up_to<T>(dest: &mut Vec<T>, additional: usize) {
    if dest.try_reserve_exact(additional).is_err() {
        log::debug!(
            "bounded collection: could not reserve {} more slots, falling back to push growth",
            additional
        );
    }
}
