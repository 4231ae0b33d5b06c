//! Tuning knobs for [`AdaptiveQueue`](super::AdaptiveQueue) and
//! [`AdaptiveStack`](super::AdaptiveStack).
//!
//! Both configs are plain values: `Copy`, serde-friendly with every field
//! optional (missing fields take the defaults), and validated once when a
//! container is built.
//!
//! Rough tuning guide for `min_optimization_length`:
//! - 50-100: general purpose
//! - 500-1000: high-throughput systems that should rarely pay for an optimization
//! - 10-50: memory-constrained environments
//!
//! Waste thresholds trade CPU for memory: lower values optimize more often
//! and keep buffers tighter.

use serde::{Deserialize, Serialize};

use crate::errors::{require_at_most, ParamError};

/// Optimization settings for [`AdaptiveQueue`](super::AdaptiveQueue).
///
/// Defaults: both optimizations on, `min_optimization_length = 100`,
/// `compact_waste_percent = 50`, `reallocate_waste_percent = 75`,
/// `reallocate_waste_buffer = 80`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Shift live elements to the front of the buffer before an enqueue when
    /// the dead prefix is large enough. Reuses capacity; never allocates.
    pub compact_on_enqueue: bool,
    /// Move live elements into a smaller buffer after a dequeue when the
    /// allocation is mostly unused. Returns memory to the allocator.
    pub reallocate_on_dequeue: bool,
    /// Floor below which no optimization runs. Compaction compares it to the
    /// live count; reallocation to the number of dequeued slots at the front.
    pub min_optimization_length: usize,
    /// Compaction threshold, percent of buffer length that is dead (0-100).
    pub compact_waste_percent: usize,
    /// Reallocation threshold, percent of capacity that is unused (0-100).
    /// Should sit above `compact_waste_percent`.
    pub reallocate_waste_percent: usize,
    /// Headroom left after reallocating, as a percent of
    /// `reallocate_waste_percent` (0-99).
    pub reallocate_waste_buffer: usize,
}

impl QueueConfig {
    /// Both optimizations off: the buffer only grows until the queue drains.
    pub const fn no_optimizations() -> Self {
        Self {
            compact_on_enqueue: false,
            reallocate_on_dequeue: false,
            ..Self::DEFAULT
        }
    }

    /// Compaction only. Suits balanced or oscillating workloads.
    pub const fn compact_only() -> Self {
        Self {
            reallocate_on_dequeue: false,
            ..Self::DEFAULT
        }
    }

    /// Reallocation only. Suits queues that grow once and then shrink for good.
    pub const fn reallocate_only() -> Self {
        Self {
            compact_on_enqueue: false,
            ..Self::DEFAULT
        }
    }

    const DEFAULT: Self = Self {
        compact_on_enqueue: true,
        reallocate_on_dequeue: true,
        min_optimization_length: 100,
        compact_waste_percent: 50,
        reallocate_waste_percent: 75,
        reallocate_waste_buffer: 80,
    };

    /// Rejects thresholds outside their documented ranges.
    pub fn validate(&self) -> Result<(), ParamError> {
        require_at_most(self.compact_waste_percent, 100, "compact waste percent")?;
        require_at_most(self.reallocate_waste_percent, 100, "reallocate waste percent")?;
        require_at_most(self.reallocate_waste_buffer, 99, "reallocate waste buffer")?;
        Ok(())
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Optimization settings for [`AdaptiveStack`](super::AdaptiveStack).
///
/// Defaults: reallocation on, `min_optimization_length = 100`,
/// `reallocate_waste_percent = 75`, `reallocate_waste_buffer = 80`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Move live elements into a smaller buffer after a pop when the
    /// allocation is mostly unused.
    pub reallocate_on_pop: bool,
    /// Minimum live count before reallocation is considered.
    pub min_optimization_length: usize,
    /// Reallocation threshold, percent of capacity that is unused (0-100).
    pub reallocate_waste_percent: usize,
    /// Headroom left after reallocating, as a percent of
    /// `reallocate_waste_percent` (0-99).
    pub reallocate_waste_buffer: usize,
}

impl StackConfig {
    /// Reallocation off: capacity is kept for reuse by later pushes.
    pub const fn no_optimizations() -> Self {
        Self {
            reallocate_on_pop: false,
            ..Self::DEFAULT
        }
    }

    const DEFAULT: Self = Self {
        reallocate_on_pop: true,
        min_optimization_length: 100,
        reallocate_waste_percent: 75,
        reallocate_waste_buffer: 80,
    };

    /// Rejects thresholds outside their documented ranges.
    pub fn validate(&self) -> Result<(), ParamError> {
        require_at_most(self.reallocate_waste_percent, 100, "reallocate waste percent")?;
        require_at_most(self.reallocate_waste_buffer, 99, "reallocate waste buffer")?;
        Ok(())
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
