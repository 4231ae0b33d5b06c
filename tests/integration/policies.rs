//! The standalone policies, driven through the crate-root re-exports.

use adaptive_slices::{
    compact, reallocate, CompactionParams, ParamError, ReallocationParams,
    MIN_REALLOCATION_CAPACITY,
};

#[test]
fn compaction_moves_live_window_to_front() {
    let mut buf = vec![10, 11, 12, 13, 14, 1, 2, 3];
    let capacity = buf.capacity();
    let params = CompactionParams {
        start: 5,
        min_size: 1,
        waste_percent: 50,
    };

    let outcome = compact(&mut buf, &params).unwrap();

    assert!(outcome.compacted);
    assert_eq!(outcome.start, 0);
    assert_eq!(buf, [1, 2, 3]);
    assert_eq!(buf.capacity(), capacity);
}

#[test]
fn compaction_below_threshold_is_a_no_op() {
    let mut buf = vec![0, 1, 2, 3, 4, 5, 6, 7];
    let params = CompactionParams {
        start: 2,
        min_size: 1,
        waste_percent: 50,
    };

    let outcome = compact(&mut buf, &params).unwrap();

    assert!(!outcome.compacted);
    assert_eq!(outcome.start, 2);
    assert_eq!(buf, [0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn compaction_rejects_out_of_range_start() {
    let mut buf = vec![1, 2, 3];
    let params = CompactionParams {
        start: 5,
        min_size: 0,
        waste_percent: 50,
    };

    let err = compact(&mut buf, &params).unwrap_err();

    assert_eq!(err.to_string(), r#""start index" must be < 3, got 5"#);
    assert_eq!(buf, [1, 2, 3]);
}

#[test]
fn reallocation_shrinks_to_the_live_window() {
    let mut buf: Vec<u32> = Vec::with_capacity(20);
    buf.extend(0..10);
    let params = ReallocationParams {
        start: 2,
        end: 7,
        min_size: 3,
        waste_percent: 50,
        waste_buffer: 80,
    };

    let outcome = reallocate(&mut buf, &params).unwrap();

    assert!(outcome.reallocated);
    assert_eq!((outcome.start, outcome.end), (0, 5));
    assert_eq!(buf, [2, 3, 4, 5, 6]);
    assert!(buf.capacity() >= MIN_REALLOCATION_CAPACITY);
    assert!(buf.capacity() < 20);
}

#[test]
fn reallocation_below_min_size_is_a_no_op() {
    let mut buf: Vec<u32> = Vec::with_capacity(1_000);
    buf.extend(0..10);
    let ptr = buf.as_ptr();
    let params = ReallocationParams {
        start: 0,
        end: 10,
        min_size: 11,
        waste_percent: 50,
        waste_buffer: 80,
    };

    let outcome = reallocate(&mut buf, &params).unwrap();

    assert!(!outcome.reallocated);
    assert_eq!((outcome.start, outcome.end), (0, 10));
    assert_eq!(buf.as_ptr(), ptr);
}

#[test]
fn reallocation_rejects_empty_window_on_non_empty_buffer() {
    let mut buf = vec![1, 2, 3];
    let params = ReallocationParams {
        start: 2,
        end: 2,
        min_size: 0,
        waste_percent: 50,
        waste_buffer: 80,
    };

    let err = reallocate(&mut buf, &params).unwrap_err();

    assert_eq!(
        err,
        ParamError::NotLessThan {
            name: "start index",
            limit: 2,
            value: 2,
        }
    );
}
