//! End-to-end stack behavior through the public API.

use adaptive_slices::{AdaptiveStack, ContainerError, Stack, StackConfig, MIN_REALLOCATION_CAPACITY};

fn drain<S: Stack<u32>>(stack: &mut S) -> Vec<u32> {
    let mut out = Vec::with_capacity(stack.len());
    while let Ok(value) = stack.pop() {
        out.push(value);
    }
    out
}

#[test]
fn lifo_order_with_and_without_reallocation() {
    for config in [StackConfig::default(), StackConfig::no_optimizations()] {
        let mut stack = AdaptiveStack::with_config(config, [1, 2, 3]).unwrap();
        stack.push(4);
        assert_eq!(stack.pop(), Ok(4));
        assert_eq!(stack.peek(), Ok(&3));
        stack.push(5);

        assert_eq!(drain(&mut stack), [5, 3, 2, 1]);
        assert_eq!(stack.pop(), Err(ContainerError::EmptyStack));
    }
}

#[test]
fn matches_vec_behind_the_trait() {
    let mut adaptive: AdaptiveStack<u32> = AdaptiveStack::new();
    let mut reference: Vec<u32> = Vec::new();

    for round in 0..400u32 {
        for i in 0..3 {
            Stack::push(&mut adaptive, round * 3 + i);
            Stack::push(&mut reference, round * 3 + i);
        }
        for _ in 0..2 {
            assert_eq!(Stack::pop(&mut adaptive), Stack::pop(&mut reference));
        }
        assert_eq!(Stack::peek(&adaptive), Stack::peek(&reference));
    }

    assert_eq!(drain(&mut adaptive), drain(&mut reference));
}

#[test]
fn shrinks_after_popping_most_elements() {
    let mut stack = AdaptiveStack::new();
    for i in 0..1_000u32 {
        stack.push(i);
    }
    let peak = stack.capacity();
    assert!(peak >= 1_000);

    while stack.len() > 100 {
        stack.pop().unwrap();
    }

    assert!(
        stack.capacity() < peak,
        "capacity {} not released from {}",
        stack.capacity(),
        peak
    );
    assert!(stack.capacity() >= MIN_REALLOCATION_CAPACITY);
    assert!(stack.iter().copied().eq((0..100).rev()));
}

#[test]
fn disabled_reallocation_keeps_the_allocation() {
    let mut stack =
        AdaptiveStack::with_config(StackConfig::no_optimizations(), 0..1_000u32).unwrap();
    let peak = stack.capacity();

    while stack.len() > 1 {
        stack.pop().unwrap();
    }

    assert_eq!(stack.capacity(), peak);
    assert_eq!(stack.peek(), Ok(&0));
}
