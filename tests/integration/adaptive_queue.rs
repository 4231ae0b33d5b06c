//! End-to-end queue behavior through the public API.

use std::collections::VecDeque;

use adaptive_slices::{AdaptiveQueue, ContainerError, Queue, QueueConfig};

fn presets() -> [(&'static str, QueueConfig); 4] {
    [
        ("none", QueueConfig::no_optimizations()),
        ("compact", QueueConfig::compact_only()),
        ("reallocate", QueueConfig::reallocate_only()),
        ("both", QueueConfig::default()),
    ]
}

/// Drains any queue implementation, so adaptive and std queues can be
/// checked side by side.
fn drain<Q: Queue<u32>>(queue: &mut Q) -> Vec<u32> {
    let mut out = Vec::with_capacity(queue.len());
    while let Ok(value) = queue.dequeue() {
        out.push(value);
    }
    out
}

#[test]
fn fifo_order_holds_for_every_preset() {
    for (name, config) in presets() {
        let mut queue = AdaptiveQueue::with_config(config, [1, 2, 3]).unwrap();
        queue.enqueue(4);
        queue.enqueue(5);

        assert_eq!(queue.dequeue(), Ok(1), "{name}");
        assert_eq!(queue.dequeue(), Ok(2), "{name}");
        queue.enqueue(6);
        assert_eq!(drain(&mut queue), [3, 4, 5, 6], "{name}");
        assert_eq!(queue.dequeue(), Err(ContainerError::EmptyQueue), "{name}");
    }
}

#[test]
fn default_queue_round_trips_ten_thousand_values() {
    let mut queue = AdaptiveQueue::new();
    for i in 0..10_000u32 {
        queue.enqueue(i);
    }
    assert_eq!(queue.len(), 10_000);

    assert_eq!(drain(&mut queue), (0..10_000).collect::<Vec<_>>());
    assert!(queue.is_empty());
    assert_eq!(queue.peek(), Err(ContainerError::EmptyQueue));
}

#[test]
fn matches_vecdeque_behind_the_trait() {
    let mut adaptive: AdaptiveQueue<u32> = AdaptiveQueue::new();
    let mut reference: VecDeque<u32> = VecDeque::new();

    for round in 0..500u32 {
        for i in 0..3 {
            Queue::enqueue(&mut adaptive, round * 3 + i);
            Queue::enqueue(&mut reference, round * 3 + i);
        }
        for _ in 0..2 {
            assert_eq!(Queue::dequeue(&mut adaptive), Queue::dequeue(&mut reference));
        }
        assert_eq!(Queue::peek(&adaptive), Queue::peek(&reference));
        assert_eq!(Queue::len(&adaptive), Queue::len(&reference));
    }

    assert_eq!(drain(&mut adaptive), drain(&mut reference));
}

#[test]
fn reallocation_releases_capacity_after_a_burst() {
    let mut queue = AdaptiveQueue::new();
    for i in 0..10_000u32 {
        queue.enqueue(i);
    }
    let peak = queue.capacity();

    for expected in 0..9_900u32 {
        assert_eq!(queue.dequeue(), Ok(expected));
    }

    assert_eq!(queue.len(), 100);
    assert!(
        queue.capacity() < peak / 4,
        "capacity {} not released from {}",
        queue.capacity(),
        peak
    );
    assert!(queue.iter().copied().eq(9_900..10_000));
}

#[test]
fn disabled_optimizations_keep_the_allocation() {
    let mut queue = AdaptiveQueue::with_config(QueueConfig::no_optimizations(), 0..1_000u32)
        .unwrap();
    let peak = queue.capacity();

    for expected in 0..999u32 {
        assert_eq!(queue.dequeue(), Ok(expected));
    }

    assert_eq!(queue.capacity(), peak);
    assert_eq!(queue.peek(), Ok(&999));
}

#[test]
fn collects_and_extends() {
    let mut queue: AdaptiveQueue<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
    queue.extend(["c".to_string()]);

    if let Ok(front) = queue.peek_mut() {
        front.push('!');
    }

    assert_eq!(queue.dequeue().as_deref(), Ok("a!"));
    assert_eq!(queue.iter().cloned().collect::<Vec<_>>(), ["b", "c"]);
}
