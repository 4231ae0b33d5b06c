#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;

use adaptive_slices::{AdaptiveQueue, ContainerError, QueueConfig};

// Interprets a byte stream as an operation sequence against `AdaptiveQueue`,
// checking every result against a `VecDeque` ground-truth model.
//
// Byte layout:
// - Bytes 0..4 → config: flags, `min_optimization_length`, compact waste,
//   reallocate waste (percentages clamped to 0..=100). The reallocate buffer
//   reuses byte 3 clamped to 0..=99.
// - Remaining bytes as `(opcode, operand)` pairs:
//   - 0 → `enqueue(operand)`
//   - 1 → `dequeue()`
//   - 2 → `peek()`
//   - 3 → enqueue `operand` values in a burst
//   - 4 → dequeue up to `operand` values
//   - 5 → `clear()`
fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    let config = QueueConfig {
        compact_on_enqueue: data[0] & 1 != 0,
        reallocate_on_dequeue: data[0] & 2 != 0,
        min_optimization_length: data[1] as usize,
        compact_waste_percent: data[2] as usize % 101,
        reallocate_waste_percent: data[3] as usize % 101,
        reallocate_waste_buffer: data[3] as usize % 100,
    };
    let mut queue = AdaptiveQueue::with_config(config, []).expect("config is in range");
    let mut model: VecDeque<u32> = VecDeque::new();
    let mut next = 0u32;

    let ops = &data[4..];
    let mut i = 0;
    while i + 1 < ops.len() {
        let opcode = ops[i];
        let operand = ops[i + 1];
        i += 2;

        match opcode % 6 {
            // enqueue
            0 => {
                queue.enqueue(operand as u32);
                model.push_back(operand as u32);
            }
            // dequeue
            1 => {
                let expected = model.pop_front().ok_or(ContainerError::EmptyQueue);
                assert_eq!(queue.dequeue(), expected, "dequeue mismatch");
            }
            // peek
            2 => {
                let expected = model.front().ok_or(ContainerError::EmptyQueue);
                assert_eq!(queue.peek(), expected, "peek mismatch");
            }
            // burst enqueue
            3 => {
                for _ in 0..operand {
                    queue.enqueue(next);
                    model.push_back(next);
                    next = next.wrapping_add(1);
                }
            }
            // burst dequeue
            4 => {
                for _ in 0..operand {
                    let expected = model.pop_front().ok_or(ContainerError::EmptyQueue);
                    assert_eq!(queue.dequeue(), expected, "burst dequeue mismatch");
                }
            }
            // clear
            _ => {
                queue.clear();
                model.clear();
            }
        }

        assert_eq!(queue.len(), model.len(), "len mismatch");
        assert_eq!(queue.is_empty(), model.is_empty(), "is_empty mismatch");
    }

    assert!(queue.iter().eq(model.iter()), "final contents mismatch");
});
