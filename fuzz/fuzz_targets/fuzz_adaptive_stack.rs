#![no_main]

use libfuzzer_sys::fuzz_target;

use adaptive_slices::{AdaptiveStack, ContainerError, StackConfig};

// Interprets a byte stream as an operation sequence against `AdaptiveStack`,
// checking every result against a `Vec` ground-truth model.
//
// Byte layout:
// - Bytes 0..3 → config: flag, `min_optimization_length`, reallocate waste
//   (clamped to 0..=100). The reallocate buffer reuses byte 2 clamped to 0..=99.
// - Remaining bytes as `(opcode, operand)` pairs:
//   - 0 → `push(operand)`
//   - 1 → `pop()`
//   - 2 → `peek()`
//   - 3 → push `operand` values in a burst
//   - 4 → pop up to `operand` values
//   - 5 → `clear()`
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let config = StackConfig {
        reallocate_on_pop: data[0] & 1 != 0,
        min_optimization_length: data[1] as usize,
        reallocate_waste_percent: data[2] as usize % 101,
        reallocate_waste_buffer: data[2] as usize % 100,
    };
    let mut stack = AdaptiveStack::with_config(config, []).expect("config is in range");
    let mut model: Vec<u32> = Vec::new();
    let mut next = 0u32;

    let ops = &data[3..];
    let mut i = 0;
    while i + 1 < ops.len() {
        let opcode = ops[i];
        let operand = ops[i + 1];
        i += 2;

        match opcode % 6 {
            // push
            0 => {
                stack.push(operand as u32);
                model.push(operand as u32);
            }
            // pop
            1 => {
                let expected = model.pop().ok_or(ContainerError::EmptyStack);
                assert_eq!(stack.pop(), expected, "pop mismatch");
            }
            // peek
            2 => {
                let expected = model.last().ok_or(ContainerError::EmptyStack);
                assert_eq!(stack.peek(), expected, "peek mismatch");
            }
            // burst push
            3 => {
                for _ in 0..operand {
                    stack.push(next);
                    model.push(next);
                    next = next.wrapping_add(1);
                }
            }
            // burst pop
            4 => {
                for _ in 0..operand {
                    let expected = model.pop().ok_or(ContainerError::EmptyStack);
                    assert_eq!(stack.pop(), expected, "burst pop mismatch");
                }
            }
            // clear
            _ => {
                stack.clear();
                model.clear();
            }
        }

        assert_eq!(stack.len(), model.len(), "len mismatch");
    }

    assert!(stack.iter().eq(model.iter().rev()), "final contents mismatch");
});
