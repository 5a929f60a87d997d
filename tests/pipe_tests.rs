use std::cell::Cell;
use std::rc::Rc;

use seqflow::prelude::*;
use seqflow::sequence::{Elements, Map, Take};

// Test sequence that yields numbers
#[derive(Clone)]
struct TestSequence {
    values: Vec<i32>,
    index: usize,
}

impl TestSequence {
    fn new(values: Vec<i32>) -> Self {
        Self { values, index: 0 }
    }
}

impl Sequence for TestSequence {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.values.len() {
            let value = self.values[self.index];
            self.index += 1;
            Some(value)
        } else {
            None
        }
    }
}

fn double(n: i32) -> i32 {
    n * 2
}

// Generic function used as a pipe stage
fn doubled<S: Sequence<Item = i32>>(sequence: S) -> Map<S, fn(i32) -> i32> {
    sequence.map(double as fn(i32) -> i32)
}

#[test]
fn test_basic_pipe() {
    let result: Vec<i32> = (elements(vec![1, 2, 3, 4, 5]) | map(|n: i32| n * 2)).collect();
    assert_eq!(result, vec![2, 4, 6, 8, 10]);
}

#[test]
fn test_pipe_builds_concrete_types() {
    let pipeline: Take<Map<Elements<std::vec::IntoIter<i32>>, fn(i32) -> i32>> =
        elements(vec![1, 2, 3]) | map(double as fn(i32) -> i32) | take(2);
    let result: Vec<i32> = pipeline.collect();
    assert_eq!(result, vec![2, 4]);
}

#[test]
fn test_filter_map_take_pipeline() {
    let result: Vec<i32> = (elements(1..=20)
        | filter(|n: &i32| n % 3 == 0)
        | map(|n: i32| n * n)
        | take(3))
        .collect();
    assert_eq!(result, vec![9, 36, 81]);
}

#[test]
fn test_skip_and_while_pipes() {
    let result: Vec<i32> = (elements(vec![1, 2, 3, 4, 5, 6, 7, 1])
        | skip(1)
        | skip_while(|n: &i32| *n < 4)
        | take_while(|n: &i32| *n < 7))
        .collect();
    assert_eq!(result, vec![4, 5, 6]);
}

#[test]
fn test_generic_function_as_pipe() {
    let result: Vec<i32> = (elements(vec![1, 2, 3]) | doubled | take(2)).collect();
    assert_eq!(result, vec![2, 4]);
}

#[test]
fn test_closure_as_pipe() {
    let result: Vec<i32> = (TestSequence::new(vec![5, 6, 7, 8]).pipe(|s: TestSequence| s.skip(1))
        | (|s: seqflow::sequence::Skip<TestSequence>| s.take(2)))
    .collect();
    assert_eq!(result, vec![6, 7]);
}

#[test]
fn test_flow_starts_pipeline_from_foreign_sequence() {
    let result: Vec<i32> = (flow(TestSequence::new(vec![1, 2, 3, 4]))
        | filter(|n: &i32| n % 2 == 1)
        | map(|n: i32| n + 100))
        .collect();
    assert_eq!(result, vec![101, 103]);

    let wrapped = Flow::new(TestSequence::new(vec![9]));
    let mut inner = wrapped.into_inner();
    assert_eq!(inner.next(), Some(9));
}

#[test]
fn test_pipe_method() {
    let result: Vec<(usize, i32)> = TestSequence::new(vec![3, 4]).pipe(enumerate()).collect();
    assert_eq!(result, vec![(0, 3), (1, 4)]);
}

#[test]
fn test_enumerate_from_pipe() {
    let result: Vec<(usize, char)> = (elements(vec!['x', 'y']) | enumerate_from(5)).collect();
    assert_eq!(result, vec![(5, 'x'), (6, 'y')]);
}

#[test]
fn test_zip_and_map2_pipes() {
    let result: Vec<i32> = (elements(vec![1, 2, 3])
        | zip(elements(vec![10, 20]))
        | map2(|a: i32, b: i32| a * b))
        .collect();
    assert_eq!(result, vec![10, 40]);
}

#[test]
fn test_chain_pipe() {
    let result: Vec<i32> = (elements(vec![1, 2]) | chain(elements(vec![3, 4]))).collect();
    assert_eq!(result, vec![1, 2, 3, 4]);
}

#[test]
fn test_filter_map_pipe() {
    let result: Vec<u8> = (elements(vec!["7", "x", "9"])
        | filter_map(|s: &str| s.parse::<u8>().ok()))
        .collect();
    assert_eq!(result, vec![7, 9]);
}

#[test]
fn test_flatten_pipe_is_lazy() {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let groups = vec![vec![1, 2], vec![3, 4]];

    let pipeline = elements(groups)
        | map(move |group: Vec<i32>| {
            counter.set(counter.get() + 1);
            elements(group)
        })
        | flatten();
    assert_eq!(calls.get(), 0);

    let leaves: Vec<i32> = pipeline.collect();
    assert_eq!(leaves, vec![1, 2, 3, 4]);
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_flat_map_pipe() {
    let result: Vec<i32> = (elements(vec![1, 2, 3])
        | flat_map(|n: i32| repeat(n).take(n as usize)))
        .collect();
    assert_eq!(result, vec![1, 2, 2, 3, 3, 3]);
}

#[test]
fn test_cycle_and_stride_pipes() {
    let result: Vec<i32> = (elements(vec![1, 2, 3]) | cycle() | stride(2) | take(5)).collect();
    assert_eq!(result, vec![1, 3, 2, 1, 3]);
}

#[test]
#[should_panic(expected = "step parameter must be greater than 0")]
fn test_stride_pipe_rejects_zero() {
    let _ = stride(0);
}

#[test]
fn test_try_stride_pipe() {
    assert!(matches!(try_stride(0), Err(SequenceError::ZeroStride)));

    let pipe = try_stride(4).expect("non-zero stride");
    let result: Vec<i32> = (elements(0..10) | pipe).collect();
    assert_eq!(result, vec![0, 4, 8]);
}

#[test]
fn test_inspect_and_dereference_pipes() {
    let values = vec![1, 2, 3];
    let mut seen = Vec::new();
    let result: Vec<i32> = (reference(&values)
        | inspect(|n: &mut &i32| seen.push(**n))
        | dereference())
        .collect();
    assert_eq!(result, vec![1, 2, 3]);
    assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn test_fuse_and_peekable_pipes() {
    let mut peekable = elements(vec![1, 2]) | fuse() | peekable();
    assert_eq!(peekable.peek(), Some(&1));
    assert_eq!(peekable.next(), Some(1));
    assert_eq!(peekable.next(), Some(2));
    assert!(peekable.is_exhausted());
}

#[test]
fn test_identity_pipe() {
    let result: Vec<i32> = (elements(vec![1, 2]) | identity()).collect();
    assert_eq!(result, vec![1, 2]);
}

#[test]
fn test_compose_pipes() {
    let squares_of_evens = compose(filter(|n: &i32| n % 2 == 0), map(|n: i32| n * n));
    let result: Vec<i32> = (elements(1..=6) | squares_of_evens).collect();
    assert_eq!(result, vec![4, 16, 36]);
}

#[test]
fn test_pipe_ext_compose_chains() {
    let pipe = skip(1).compose(take(2)).compose(map(|n: i32| n - 1));
    let result: Vec<i32> = TestSequence::new(vec![10, 20, 30, 40]).pipe(pipe).collect();
    assert_eq!(result, vec![19, 29]);
}

#[test]
fn test_reusable_pipe_by_clone() {
    let pipe = filter(|n: &i32| *n > 1).compose(take(2));
    let first: Vec<i32> = (elements(vec![1, 2, 3, 4]) | pipe.clone()).collect();
    let second: Vec<i32> = (elements(vec![5, 0, 6]) | pipe).collect();
    assert_eq!(first, vec![2, 3]);
    assert_eq!(second, vec![5, 6]);
}

#[test]
fn test_pipeline_in_for_loop() {
    let mut total = 0;
    for n in elements(vec![1, 2, 3, 4]) | map(|n: i32| n * 10) {
        total += n;
    }
    assert_eq!(total, 100);
}

#[test]
fn test_infinite_pipeline_bounded_by_take() {
    let result: Vec<u64> = (successors(1u64, |n| n * 2) | filter(|n: &u64| *n > 10) | take(3)).collect();
    assert_eq!(result, vec![16, 32, 64]);
}
