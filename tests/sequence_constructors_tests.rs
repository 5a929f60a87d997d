use std::cell::Cell;
use std::rc::Rc;

use seqflow::prelude::*;

#[test]
fn test_elements_by_value() {
    let words: Vec<String> = elements(vec!["a".to_string(), "b".to_string()]).collect();
    assert_eq!(words, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_elements_of_empty_collection() {
    let mut sequence = elements(Vec::<i32>::new());
    assert_eq!(sequence.next(), None);
    assert_eq!(sequence.next(), None);
}

#[test]
fn test_reference_yields_shared_references() {
    let values = vec![10, 20, 30];
    let mut sequence = reference(&values);
    assert_eq!(sequence.next(), Some(&10));
    assert_eq!(sequence.next(), Some(&20));
    assert_eq!(sequence.next(), Some(&30));
    assert_eq!(sequence.next(), None);
    // The collection is only borrowed
    assert_eq!(values.len(), 3);
}

#[test]
fn test_reference_mut_writes_through() {
    let mut values = vec![1, 2, 3];
    let mut sequence = reference_mut(&mut values);
    while let Some(value) = sequence.next() {
        *value *= 10;
    }
    assert_eq!(values, vec![10, 20, 30]);
}

#[test]
fn test_empty() {
    let mut sequence = empty::<u8>();
    assert_eq!(sequence.next(), None);
    assert_eq!(sequence.next(), None);
}

#[test]
fn test_once() {
    let mut sequence = once("only");
    assert_eq!(sequence.next(), Some("only"));
    assert_eq!(sequence.next(), None);
    assert_eq!(sequence.next(), None);
}

#[test]
fn test_repeat() {
    let values: Vec<char> = repeat('x').take(3).collect();
    assert_eq!(values, vec!['x', 'x', 'x']);
}

#[test]
fn test_repeat_with() {
    let mut counter = 0;
    let values: Vec<i32> = repeat_with(|| {
        counter += 1;
        counter * counter
    })
    .take(4)
    .collect();
    assert_eq!(values, vec![1, 4, 9, 16]);
}

#[test]
fn test_successors() {
    let values: Vec<u32> = successors(1u32, |n| n * 3).take(5).collect();
    assert_eq!(values, vec![1, 3, 9, 27, 81]);
}

#[test]
fn test_successors_steps_only_on_demand() {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let mut sequence = successors(0, move |n: &i32| {
        counter.set(counter.get() + 1);
        n + 1
    });

    // Building the sequence calls nothing, the first pull returns the seed
    assert_eq!(calls.get(), 0);
    assert_eq!(sequence.next(), Some(0));
    assert_eq!(calls.get(), 0);

    assert_eq!(sequence.next(), Some(1));
    assert_eq!(sequence.next(), Some(2));
    assert_eq!(sequence.next(), Some(3));
    // k-th pull costs k - 1 steps
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_mutation() {
    let values: Vec<String> = mutation(String::from("a"), |s: &mut String| s.push('a'))
        .take(3)
        .collect();
    assert_eq!(values, vec!["a".to_string(), "aa".to_string(), "aaa".to_string()]);
}

#[test]
fn test_mutation_runs_only_when_pulled() {
    let mut counter = 0;
    {
        let mut sequence = mutation(0, |n: &mut i32| {
            counter += 1;
            *n += 1;
        })
        .take(5);

        assert_eq!(sequence.next(), Some(0));
        assert_eq!(sequence.next(), Some(1));
        assert_eq!(sequence.next(), Some(2));
        assert_eq!(sequence.next(), Some(3));
        assert_eq!(sequence.next(), Some(4));
        assert_eq!(sequence.next(), None);
    }
    // Five elements need four mutations, the exhausted pull runs none
    assert_eq!(counter, 4);
}

#[test]
fn test_linear() {
    let values: Vec<i64> = linear(5i64, -2).take(4).collect();
    assert_eq!(values, vec![5, 3, 1, -1]);

    let halves: Vec<f64> = linear(0.0, 0.5).take(3).collect();
    assert_eq!(halves, vec![0.0, 0.5, 1.0]);
}

#[test]
fn test_unfold_counts_down() {
    let values: Vec<i32> = unfold(4, |n| if n > 0 { Some((n, n - 1)) } else { None }).collect();
    assert_eq!(values, vec![4, 3, 2, 1]);
}

#[test]
fn test_unfold_stays_exhausted() {
    let mut calls = 0;
    let mut sequence = unfold((), |()| {
        calls += 1;
        None::<((), ())>
    });
    assert_eq!(sequence.next(), None);
    assert_eq!(sequence.next(), None);
    drop(sequence);
    assert_eq!(calls, 1);
}

#[test]
fn test_unfold_fibonacci() {
    let values: Vec<u64> = unfold((0u64, 1u64), |(a, b)| Some((a, (b, a + b))))
        .take(8)
        .collect();
    assert_eq!(values, vec![0, 1, 1, 2, 3, 5, 8, 13]);
}

#[test]
fn test_take_while() {
    let values: Vec<i32> = elements(vec![1, 2, 3, 10, 4, 5])
        .take_while(|n| *n < 5)
        .collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_take_while_on_infinite_source() {
    let values: Vec<u32> = successors(1u32, |n| n * 2).take_while(|n| *n < 20).collect();
    assert_eq!(values, vec![1, 2, 4, 8, 16]);
}

#[test]
fn test_skip_while() {
    let values: Vec<i32> = elements(vec![1, 2, 6, 3, 7])
        .skip_while(|n| *n < 5)
        .collect();
    assert_eq!(values, vec![6, 3, 7]);
}
