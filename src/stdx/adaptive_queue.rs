//! FIFO queue over a `Vec` with adaptive capacity management.
//!
//! # Layout
//!
//! ```text
//!   buf:  [ None  None  None | Some(a)  Some(b)  Some(c) ]  (spare capacity)
//!                             ^ head                       ^ buf.len()
//!          <-- dequeued -->  <-------- live -------->
//! ```
//!
//! Dequeue takes the element at `head` and advances it; enqueue appends. The
//! dead prefix is reclaimed by two independent, configurable policies:
//!
//! - **Compaction on enqueue**: when the dead prefix is a large enough share
//!   of the buffer length, live elements are shifted to index 0 before the
//!   append, so the append reuses capacity instead of growing.
//! - **Reallocation on dequeue**: when the live count is a small enough share
//!   of the capacity, live elements move into a smaller allocation.
//!
//! # Invariants
//! - `head < buf.len()` when the buffer is non-empty, `head == 0` otherwise.
//! - Slots `[0, head)` are `None`; slots `[head, buf.len())` are `Some`.
//! - Elements leave in exactly the order they arrived, whatever the policies do.
//!
//! # Threading
//! Not synchronized; single-threaded use only.

use std::fmt;

use tracing::trace;

use super::config::QueueConfig;
use super::traits::Queue;
use crate::errors::{ContainerError, ParamError};
use crate::policy::compaction::{compact_validated, CompactionParams};
use crate::policy::reallocation::{reallocate_validated, ReallocationParams};
use crate::policy::MIN_REALLOCATION_CAPACITY;

/// Slice-backed FIFO queue that compacts and shrinks its buffer on demand.
///
/// # Example
/// ```
/// use adaptive_slices::stdx::AdaptiveQueue;
///
/// let mut queue = AdaptiveQueue::from_values([1, 2, 3]);
/// queue.enqueue(4);
///
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.peek(), Ok(&2));
/// assert_eq!(queue.len(), 3);
/// ```
pub struct AdaptiveQueue<T> {
    buf: Vec<Option<T>>,
    /// Index of the front element.
    head: usize,
    config: QueueConfig,
}

impl<T> AdaptiveQueue<T> {
    /// Creates an empty queue with the default [`QueueConfig`].
    pub fn new() -> Self {
        Self::with_validated_config(QueueConfig::default(), [])
    }

    /// Creates a queue with the default [`QueueConfig`], enqueuing `values`
    /// in iteration order.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_validated_config(QueueConfig::default(), values)
    }

    /// Creates a queue with a custom configuration, enqueuing `values` in
    /// iteration order.
    ///
    /// # Errors
    /// Returns [`ParamError`] if `config` fails [`QueueConfig::validate`].
    pub fn with_config<I>(config: QueueConfig, values: I) -> Result<Self, ParamError>
    where
        I: IntoIterator<Item = T>,
    {
        config.validate()?;
        Ok(Self::with_validated_config(config, values))
    }

    fn with_validated_config<I>(config: QueueConfig, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        let mut queue = Self {
            buf: Vec::with_capacity(values.size_hint().0),
            head: 0,
            config,
        };
        queue.extend(values);
        queue
    }

    /// Adds `value` at the back.
    ///
    /// With `compact_on_enqueue`, the live window is first shifted to the
    /// front when at least `min_optimization_length` elements are live and
    /// at least `compact_waste_percent` of the buffer length is dead.
    ///
    /// # Complexity
    /// O(1) amortized, O(n) when compaction triggers.
    pub fn enqueue(&mut self, value: T) {
        if self.config.compact_on_enqueue {
            let params = CompactionParams {
                start: self.head,
                min_size: self.config.min_optimization_length,
                waste_percent: self.config.compact_waste_percent,
            };
            self.head = compact_validated(&mut self.buf, &params).start;
        }

        self.buf.push(Some(value));
        self.debug_check();
    }

    /// Removes and returns the front element.
    ///
    /// With `reallocate_on_dequeue`, once `min_optimization_length` elements
    /// have been dequeued from the front, the remaining elements move into a
    /// smaller buffer whenever at least `reallocate_waste_percent` of the
    /// capacity is unused.
    ///
    /// # Errors
    /// [`ContainerError::EmptyQueue`] if the queue has no elements; the queue
    /// is unchanged.
    ///
    /// # Complexity
    /// O(1) amortized, O(n) when reallocation triggers.
    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        let Some(value) = self.buf.get_mut(self.head).and_then(Option::take) else {
            return Err(ContainerError::EmptyQueue);
        };
        self.head += 1;

        let reached_floor = self.head >= self.config.min_optimization_length;
        let reallocate = self.config.reallocate_on_dequeue && reached_floor;

        if self.head == self.buf.len() {
            self.reset_drained(reallocate);
        } else if reallocate {
            let params = ReallocationParams {
                start: self.head,
                end: self.buf.len(),
                // The dequeued-prefix floor above already gates this call.
                min_size: 0,
                waste_percent: self.config.reallocate_waste_percent,
                waste_buffer: self.config.reallocate_waste_buffer,
            };
            self.head = reallocate_validated(&mut self.buf, &params).start;
        }

        self.debug_check();
        Ok(value)
    }

    /// A drained queue restarts at index 0. Its whole capacity is waste, so
    /// when reallocation is due the allocation shrinks to the policy floor.
    fn reset_drained(&mut self, reallocate: bool) {
        self.buf.clear();
        self.head = 0;

        if reallocate && self.buf.capacity() > MIN_REALLOCATION_CAPACITY {
            let old_capacity = self.buf.capacity();
            self.buf.shrink_to(MIN_REALLOCATION_CAPACITY);
            trace!(
                old_capacity,
                new_capacity = self.buf.capacity(),
                "released drained queue buffer"
            );
        }
    }

    /// Returns the front element without removing it.
    ///
    /// # Errors
    /// [`ContainerError::EmptyQueue`] if the queue has no elements.
    #[inline]
    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.buf
            .get(self.head)
            .and_then(Option::as_ref)
            .ok_or(ContainerError::EmptyQueue)
    }

    /// Mutable access to the front element.
    ///
    /// # Errors
    /// [`ContainerError::EmptyQueue`] if the queue has no elements.
    #[inline]
    pub fn peek_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.buf
            .get_mut(self.head)
            .and_then(Option::as_mut)
            .ok_or(ContainerError::EmptyQueue)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len() - self.head
    }

    /// Slots allocated by the backing buffer, live or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[inline]
    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Drops every element, keeping the allocation for reuse.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.head = 0;
    }

    /// Iterates front to back without removing anything.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.buf[self.head..].iter().flatten()
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert!(
            self.head < self.buf.len() || (self.head == 0 && self.buf.is_empty()),
            "queue head out of bounds"
        );
        debug_assert!(self.buf.len() <= self.buf.capacity());
    }
}

impl<T> Default for AdaptiveQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for AdaptiveQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for AdaptiveQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T: fmt::Debug> fmt::Debug for AdaptiveQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Queue<T> for AdaptiveQueue<T> {
    fn enqueue(&mut self, value: T) {
        AdaptiveQueue::enqueue(self, value);
    }

    fn dequeue(&mut self) -> Result<T, ContainerError> {
        AdaptiveQueue::dequeue(self)
    }

    fn peek(&self) -> Result<&T, ContainerError> {
        AdaptiveQueue::peek(self)
    }

    fn is_empty(&self) -> bool {
        AdaptiveQueue::is_empty(self)
    }

    fn len(&self) -> usize {
        AdaptiveQueue::len(self)
    }
}


// Property-based tests are in the sibling module adaptive_queue_tests.rs
#[cfg(all(test, feature = "stdx-proptest"))]
#[path = "adaptive_queue_tests.rs"]
mod adaptive_queue_tests;
