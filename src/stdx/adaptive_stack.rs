//! LIFO stack over a `Vec` that can hand memory back after shrinking.
//!
//! `top` is one past the top element. Popping leaves the vacated slot in the
//! buffer (as `None`) so the next push overwrites it instead of growing. With
//! `reallocate_on_pop`, a stack whose capacity is mostly unused moves its
//! elements into a smaller allocation.
//!
//! # Invariants
//! - `top <= buf.len()`; slots `[0, top)` are `Some`, `[top, len)` are `None`.
//! - A stack that pops its last element truncates the buffer to length 0.
//! - Elements leave in exactly the reverse order they arrived.
//!
//! # Threading
//! Not synchronized; single-threaded use only.

use std::fmt;

use super::config::StackConfig;
use super::traits::Stack;
use crate::errors::{ContainerError, ParamError};
use crate::policy::reallocation::{reallocate_validated, ReallocationParams};

/// Slice-backed LIFO stack with optional capacity reclamation on pop.
///
/// # Example
/// ```
/// use adaptive_slices::stdx::AdaptiveStack;
///
/// let mut stack = AdaptiveStack::from_values([1, 2]);
/// stack.push(3);
///
/// assert_eq!(stack.pop(), Ok(3));
/// assert_eq!(stack.peek(), Ok(&2));
/// assert_eq!(stack.len(), 2);
/// ```
pub struct AdaptiveStack<T> {
    buf: Vec<Option<T>>,
    top: usize,
    config: StackConfig,
}

impl<T> AdaptiveStack<T> {
    /// Creates an empty stack with the default [`StackConfig`].
    pub fn new() -> Self {
        Self::with_validated_config(StackConfig::default(), [])
    }

    /// Creates a stack with the default [`StackConfig`], pushing `values` in
    /// iteration order (the last value ends up on top).
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_validated_config(StackConfig::default(), values)
    }

    /// Creates a stack with a custom configuration, pushing `values` in
    /// iteration order.
    ///
    /// # Errors
    /// Returns [`ParamError`] if `config` fails [`StackConfig::validate`].
    pub fn with_config<I>(config: StackConfig, values: I) -> Result<Self, ParamError>
    where
        I: IntoIterator<Item = T>,
    {
        config.validate()?;
        Ok(Self::with_validated_config(config, values))
    }

    fn with_validated_config<I>(config: StackConfig, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let buf: Vec<Option<T>> = values.into_iter().map(Some).collect();
        Self {
            top: buf.len(),
            buf,
            config,
        }
    }

    /// Pushes `value` on top, reusing a slot vacated by an earlier pop when
    /// one is available.
    ///
    /// # Complexity
    /// O(1) amortized.
    pub fn push(&mut self, value: T) {
        if self.top == self.buf.len() {
            self.buf.push(Some(value));
        } else {
            self.buf[self.top] = Some(value);
        }
        self.top += 1;
        self.debug_check();
    }

    /// Removes and returns the top element.
    ///
    /// Popping the last element resets the buffer length to 0. Otherwise,
    /// with `reallocate_on_pop`, the remaining elements move into a smaller
    /// buffer when at least `min_optimization_length` are left and at least
    /// `reallocate_waste_percent` of the capacity is unused.
    ///
    /// # Errors
    /// [`ContainerError::EmptyStack`] if the stack has no elements; the stack
    /// is unchanged.
    ///
    /// # Complexity
    /// O(1) amortized, O(n) when reallocation triggers.
    pub fn pop(&mut self) -> Result<T, ContainerError> {
        let Some(value) = self
            .top
            .checked_sub(1)
            .and_then(|idx| self.buf.get_mut(idx))
            .and_then(Option::take)
        else {
            return Err(ContainerError::EmptyStack);
        };
        self.top -= 1;

        if self.top == 0 {
            self.buf.clear();
        } else if self.config.reallocate_on_pop {
            let params = ReallocationParams {
                start: 0,
                end: self.top,
                min_size: self.config.min_optimization_length,
                waste_percent: self.config.reallocate_waste_percent,
                waste_buffer: self.config.reallocate_waste_buffer,
            };
            self.top = reallocate_validated(&mut self.buf, &params).end;
        }

        self.debug_check();
        Ok(value)
    }

    /// Returns the top element without removing it.
    ///
    /// # Errors
    /// [`ContainerError::EmptyStack`] if the stack has no elements.
    #[inline]
    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.top
            .checked_sub(1)
            .and_then(|idx| self.buf.get(idx))
            .and_then(Option::as_ref)
            .ok_or(ContainerError::EmptyStack)
    }

    /// Mutable access to the top element.
    ///
    /// # Errors
    /// [`ContainerError::EmptyStack`] if the stack has no elements.
    #[inline]
    pub fn peek_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.top
            .checked_sub(1)
            .and_then(|idx| self.buf.get_mut(idx))
            .and_then(Option::as_mut)
            .ok_or(ContainerError::EmptyStack)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.top
    }

    /// Slots allocated by the backing buffer, live or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[inline]
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Drops every element, keeping the allocation for reuse.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.top = 0;
    }

    /// Iterates from the top of the stack down to the bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.buf[..self.top].iter().rev().flatten()
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert!(self.top <= self.buf.len(), "stack top out of bounds");
        debug_assert!(self.top > 0 || self.buf.is_empty());
    }
}

impl<T> Default for AdaptiveStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for AdaptiveStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for AdaptiveStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T: fmt::Debug> fmt::Debug for AdaptiveStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Stack<T> for AdaptiveStack<T> {
    fn push(&mut self, value: T) {
        AdaptiveStack::push(self, value);
    }

    fn pop(&mut self) -> Result<T, ContainerError> {
        AdaptiveStack::pop(self)
    }

    fn peek(&self) -> Result<&T, ContainerError> {
        AdaptiveStack::peek(self)
    }

    fn is_empty(&self) -> bool {
        AdaptiveStack::is_empty(self)
    }

    fn len(&self) -> usize {
        AdaptiveStack::len(self)
    }
}


// Property-based tests are in the sibling module adaptive_stack_tests.rs
#[cfg(all(test, feature = "stdx-proptest"))]
#[path = "adaptive_stack_tests.rs"]
mod adaptive_stack_tests;
