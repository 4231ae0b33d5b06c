//! In-place compaction of a live window to the front of its buffer.
//!
//! ```text
//! before:  [ x  x  x  x  x  1  2  3 ]   len 8, start 5, live 3
//!            ^---- dead ----^ ^live^
//! after:   [ 1  2  3 ]                  len 3, start 0, capacity unchanged
//! ```
//!
//! Compaction triggers only when all of the following hold:
//! - `live >= min_size`
//! - `100 - 100 * live / len >= waste_percent`
//! - `start > 0`
//!
//! The dead prefix is dropped and the live elements are moved down with an
//! overlap-safe forward move. No allocation happens on either path.

use tracing::trace;

use super::waste_percent;
use crate::errors::{require_at_most, require_equal, require_less_than, ParamError};

/// Inputs to [`compact`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompactionParams {
    /// Index of the first live element.
    pub start: usize,
    /// Minimum live count before compaction is considered. `0` compacts
    /// whenever the waste threshold is met.
    pub min_size: usize,
    /// Compact when length-relative waste is at least this percent (0-100).
    pub waste_percent: usize,
}

impl CompactionParams {
    /// Checks the parameters against a buffer of length `len`.
    ///
    /// `start` must index a slot of a non-empty buffer, or be `0` for an
    /// empty one. `waste_percent` must not exceed 100.
    pub fn validate(&self, len: usize) -> Result<(), ParamError> {
        if len > 0 {
            require_less_than(self.start, len, "start index")?;
        } else {
            require_equal(self.start, len, "start index")?;
        }
        require_at_most(self.waste_percent, 100, "waste percent")?;
        Ok(())
    }
}

/// Result of a [`compact`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompactionOutcome {
    /// New index of the first live element: `0` if compacted, otherwise the
    /// input start.
    pub start: usize,
    /// Whether elements were moved.
    pub compacted: bool,
}

/// Shifts the live window `[params.start, buf.len())` to the front of `buf`
/// when enough of the buffer is dead prefix.
///
/// On trigger the buffer is truncated to the live count and the returned
/// start is `0`. Otherwise `buf` is left exactly as it was.
///
/// # Errors
/// Returns [`ParamError`] without touching `buf` if `params` fail
/// [`CompactionParams::validate`].
///
/// # Complexity
/// O(live) when compaction triggers, O(1) otherwise. Never allocates.
///
/// # Example
/// ```
/// use adaptive_slices::policy::{compact, CompactionParams};
///
/// let mut buf = vec![0, 0, 0, 0, 0, 1, 2, 3];
/// let params = CompactionParams { start: 5, min_size: 1, waste_percent: 50 };
///
/// let outcome = compact(&mut buf, &params).unwrap();
/// assert!(outcome.compacted);
/// assert_eq!(outcome.start, 0);
/// assert_eq!(buf, [1, 2, 3]);
/// ```
pub fn compact<T>(
    buf: &mut Vec<T>,
    params: &CompactionParams,
) -> Result<CompactionOutcome, ParamError> {
    params.validate(buf.len())?;
    Ok(compact_validated(buf, params))
}

/// [`compact`] for callers whose cursor invariants already guarantee valid
/// parameters.
pub(crate) fn compact_validated<T>(buf: &mut Vec<T>, params: &CompactionParams) -> CompactionOutcome {
    debug_assert!(params.validate(buf.len()).is_ok());

    let len = buf.len();
    if len == 0 {
        return CompactionOutcome {
            start: 0,
            compacted: false,
        };
    }

    let live = len - params.start;
    let waste = waste_percent(live, len);
    let should_compact =
        live >= params.min_size && waste >= params.waste_percent && params.start > 0;

    if !should_compact {
        return CompactionOutcome {
            start: params.start,
            compacted: false,
        };
    }

    // `drain` drops the dead prefix and moves the tail down with an
    // overlapping copy; capacity is untouched.
    buf.drain(..params.start);

    debug_assert_eq!(buf.len(), live);
    trace!(
        start = params.start,
        live,
        length = len,
        waste,
        "compacted live window"
    );

    CompactionOutcome {
        start: 0,
        compacted: true,
    }
}
