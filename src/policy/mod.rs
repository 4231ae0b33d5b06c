//! Capacity policies for slice-backed containers.
//!
//! Both policies operate on a `Vec<T>` holding a contiguous *live window*
//! `[start, end)`; slots outside the window are dead (already handed back to
//! the caller, or never filled). They decide on every call whether to act:
//!
//! - [`compaction`]: shift the live window to index 0 in place. Reuses the
//!   existing allocation; waste is measured against the buffer *length*.
//! - [`reallocation`]: move the live window into a freshly sized buffer.
//!   Returns memory to the allocator; waste is measured against the buffer
//!   *capacity*.
//!
//! Waste arithmetic truncates (`100 - 100 * live / denominator`) so boundary
//! thresholds are reproducible.
//!
//! Parameters are validated on every public call and rejected with a
//! [`ParamError`](crate::errors::ParamError) before the buffer is touched.

pub mod compaction;
pub mod reallocation;

pub use compaction::{compact, CompactionOutcome, CompactionParams};
pub use reallocation::{
    reallocate, ReallocationOutcome, ReallocationParams, MIN_REALLOCATION_CAPACITY,
};

/// Percentage of `denominator` slots not covered by `live`, truncated.
///
/// Requires `live <= denominator` and `denominator > 0`.
#[inline]
pub fn waste_percent(live: usize, denominator: usize) -> usize {
    debug_assert!(denominator > 0, "waste denominator must be non-zero");
    debug_assert!(live <= denominator, "live count exceeds denominator");

    // u128 keeps `100 * live` from overflowing on very large buffers.
    let used = (live as u128 * 100 / denominator as u128) as usize;
    100 - used
}
