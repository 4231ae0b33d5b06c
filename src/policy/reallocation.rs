//! Replacement of an over-provisioned buffer with a right-sized one.
//!
//! Reallocation triggers when:
//! - `live = end - start >= min_size`
//! - `100 - 100 * live / capacity >= waste_percent`
//!
//! The replacement is sized so that it starts with a fraction of the trigger
//! threshold already wasted, leaving headroom before the next trigger:
//!
//! ```text
//! target_waste    = waste_percent * waste_buffer / 100
//! target_capacity = max(live * 100 / (100 - target_waste), MIN_REALLOCATION_CAPACITY)
//! ```
//!
//! For example a trigger at 50% with `waste_buffer = 80` targets 40% waste:
//! six live elements land in a buffer of capacity 10.

use tracing::trace;

use super::waste_percent;
use crate::errors::{require_at_most, require_equal, require_less_than, ParamError};

/// Smallest capacity a reallocation ever produces. Keeps tiny live counts
/// from reallocating on every removal.
pub const MIN_REALLOCATION_CAPACITY: usize = 10;

/// Inputs to [`reallocate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReallocationParams {
    /// Index of the first live element.
    pub start: usize,
    /// Exclusive end of the live window.
    pub end: usize,
    /// Minimum live count before reallocation is considered.
    pub min_size: usize,
    /// Reallocate when capacity-relative waste is at least this percent (0-100).
    pub waste_percent: usize,
    /// Headroom of the new buffer, as a percent of `waste_percent` (0-99).
    pub waste_buffer: usize,
}

impl ReallocationParams {
    /// Checks the parameters against a buffer of length `len`.
    ///
    /// A non-empty buffer needs a non-empty window `start < end <= len`; an
    /// empty buffer needs `start == end == 0`. `waste_percent <= 100` and
    /// `waste_buffer <= 99`.
    pub fn validate(&self, len: usize) -> Result<(), ParamError> {
        if len > 0 {
            require_less_than(self.start, self.end, "start index")?;
            require_at_most(self.end, len, "end index")?;
        } else {
            require_equal(self.start, 0, "start index")?;
            require_equal(self.end, 0, "end index")?;
        }
        require_at_most(self.waste_percent, 100, "waste percent")?;
        // 100 would size the new buffer with zero headroom (division by zero).
        require_at_most(self.waste_buffer, 99, "waste buffer")?;
        Ok(())
    }

    /// Capacity a triggered reallocation allocates for `live` elements.
    pub fn target_capacity(&self, live: usize) -> usize {
        let target_waste = self.waste_percent * self.waste_buffer / 100;
        debug_assert!(target_waste < 100);

        let sized = (live as u128 * 100 / (100 - target_waste) as u128) as usize;
        sized.max(MIN_REALLOCATION_CAPACITY)
    }
}

/// Result of a [`reallocate`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReallocationOutcome {
    /// New start of the live window (`0` if reallocated).
    pub start: usize,
    /// New exclusive end of the live window (`live` if reallocated).
    pub end: usize,
    /// Whether the buffer was replaced.
    pub reallocated: bool,
}

/// Moves the live window `[params.start, params.end)` of `buf` into a new,
/// smaller buffer when the current one is wasteful enough.
///
/// On trigger `buf` is replaced: the new buffer holds exactly the live
/// elements at `[0, live)` with capacity
/// [`target_capacity`](ReallocationParams::target_capacity), and everything
/// outside the window is dropped with the old allocation. Otherwise `buf` is
/// left exactly as it was.
///
/// # Errors
/// Returns [`ParamError`] without touching `buf` if `params` fail
/// [`ReallocationParams::validate`].
///
/// # Complexity
/// O(live) plus one allocation when triggered, O(1) otherwise.
///
/// # Example
/// ```
/// use adaptive_slices::policy::{reallocate, ReallocationParams};
///
/// let mut buf: Vec<u32> = Vec::with_capacity(20);
/// buf.extend(0..10);
/// let params = ReallocationParams {
///     start: 2,
///     end: 7,
///     min_size: 3,
///     waste_percent: 50,
///     waste_buffer: 80,
/// };
///
/// let outcome = reallocate(&mut buf, &params).unwrap();
/// assert!(outcome.reallocated);
/// assert_eq!((outcome.start, outcome.end), (0, 5));
/// assert_eq!(buf, [2, 3, 4, 5, 6]);
/// assert!(buf.capacity() >= 10 && buf.capacity() < 20);
/// ```
pub fn reallocate<T>(
    buf: &mut Vec<T>,
    params: &ReallocationParams,
) -> Result<ReallocationOutcome, ParamError> {
    params.validate(buf.len())?;
    Ok(reallocate_validated(buf, params))
}

/// [`reallocate`] for callers whose cursor invariants already guarantee
/// valid parameters.
pub(crate) fn reallocate_validated<T>(
    buf: &mut Vec<T>,
    params: &ReallocationParams,
) -> ReallocationOutcome {
    debug_assert!(params.validate(buf.len()).is_ok());

    if buf.is_empty() {
        return ReallocationOutcome {
            start: 0,
            end: 0,
            reallocated: false,
        };
    }

    let live = params.end - params.start;
    let capacity = buf.capacity();
    let waste = waste_percent(live, capacity);
    let should_reallocate = live >= params.min_size && waste >= params.waste_percent;

    if !should_reallocate {
        return ReallocationOutcome {
            start: params.start,
            end: params.end,
            reallocated: false,
        };
    }

    let target_capacity = params.target_capacity(live);
    let mut fresh = Vec::with_capacity(target_capacity);
    fresh.extend(buf.drain(params.start..params.end));
    // Dead slots on both sides of the window go with the old allocation.
    *buf = fresh;

    debug_assert_eq!(buf.len(), live);
    trace!(
        start = params.start,
        live,
        old_capacity = capacity,
        new_capacity = buf.capacity(),
        waste,
        "reallocated live window"
    );

    ReallocationOutcome {
        start: 0,
        end: live,
        reallocated: true,
    }
}
