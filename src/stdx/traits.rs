//! Container interfaces shared by every queue and stack variant.
//!
//! No bounds are placed on `T`: the core operations never compare elements.
//! The std collections implement these too, which makes them usable as
//! reference models and as drop-in alternatives behind the same interface.

use std::collections::VecDeque;

use crate::errors::ContainerError;

/// First-in, first-out container.
pub trait Queue<T> {
    /// Adds `value` at the back.
    fn enqueue(&mut self, value: T);

    /// Removes and returns the front element.
    ///
    /// # Errors
    /// [`ContainerError::EmptyQueue`] when there is nothing to remove.
    fn dequeue(&mut self) -> Result<T, ContainerError>;

    /// Returns the front element without removing it.
    ///
    /// # Errors
    /// [`ContainerError::EmptyQueue`] when there is nothing to observe.
    fn peek(&self) -> Result<&T, ContainerError>;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;
}

/// Last-in, first-out container.
pub trait Stack<T> {
    /// Adds `value` on top.
    fn push(&mut self, value: T);

    /// Removes and returns the top element.
    ///
    /// # Errors
    /// [`ContainerError::EmptyStack`] when there is nothing to remove.
    fn pop(&mut self) -> Result<T, ContainerError>;

    /// Returns the top element without removing it.
    ///
    /// # Errors
    /// [`ContainerError::EmptyStack`] when there is nothing to observe.
    fn peek(&self) -> Result<&T, ContainerError>;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;
}

impl<T> Queue<T> for VecDeque<T> {
    fn enqueue(&mut self, value: T) {
        self.push_back(value);
    }

    fn dequeue(&mut self) -> Result<T, ContainerError> {
        self.pop_front().ok_or(ContainerError::EmptyQueue)
    }

    fn peek(&self) -> Result<&T, ContainerError> {
        self.front().ok_or(ContainerError::EmptyQueue)
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T> Stack<T> for Vec<T> {
    fn push(&mut self, value: T) {
        Vec::push(self, value);
    }

    fn pop(&mut self) -> Result<T, ContainerError> {
        Vec::pop(self).ok_or(ContainerError::EmptyStack)
    }

    fn peek(&self) -> Result<&T, ContainerError> {
        self.last().ok_or(ContainerError::EmptyStack)
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}
