use std::iter::FusedIterator;

use seqflow::prelude::*;

fn assert_fused_iterator<I: FusedIterator>(_: &I) {}

#[test]
fn test_for_loop_over_sequence() {
    let mut collected = Vec::new();
    for value in elements(vec![1, 2, 3]).map(|n| n + 1) {
        collected.push(value);
    }
    assert_eq!(collected, vec![2, 3, 4]);
}

#[test]
fn test_for_loop_with_early_break_on_infinite_sequence() {
    let mut last = 0;
    for value in successors(1u32, |n| n * 2) {
        if value > 100 {
            break;
        }
        last = value;
    }
    assert_eq!(last, 64);
}

#[test]
fn test_iterate_feeds_std_adaptors() {
    let doubled: Vec<i32> = elements(vec![1, 2, 3])
        .iterate()
        .map(|n| n * 2)
        .collect();
    assert_eq!(doubled, vec![2, 4, 6]);
}

#[test]
fn test_iterate_and_back() {
    let mut iter = elements(vec!['a', 'b', 'c']).iterate();
    assert_eq!(iter.next(), Some('a'));
    let mut sequence = iter.into_inner();
    assert_eq!(sequence.next(), Some('b'));
}

#[test]
fn test_iter_is_fused_when_sequence_is() {
    let iter = elements(vec![1, 2]).fuse().iterate();
    assert_fused_iterator(&iter);

    let iter = once(1).into_iter();
    assert_fused_iterator(&iter);

    let iter = elements(vec!['a', 'b']).cycle().iterate();
    assert_fused_iterator(&iter);
    assert_eq!(iter.take(5).collect::<String>(), "ababa");
}

#[test]
fn test_std_iterator_chain() {
    let total: i32 = elements(vec![1, 2, 3, 4])
        .filter(|n| n % 2 == 0)
        .into_iter()
        .chain(std::iter::once(100))
        .sum();
    assert_eq!(total, 106);
}

#[test]
fn test_nested_for_loops() {
    let mut pairs = Vec::new();
    for a in elements(vec![1, 2]) {
        for b in elements(vec!['x', 'y']) {
            pairs.push((a, b));
        }
    }
    assert_eq!(pairs, vec![(1, 'x'), (1, 'y'), (2, 'x'), (2, 'y')]);
}
