//! Error types shared by the capacity policies and the adaptive containers.
//!
//! Two disjoint classes:
//! - [`ContainerError`]: operational conditions (removing from an empty
//!   container). Recoverable; the container is left untouched.
//! - [`ParamError`]: malformed policy parameters or container configuration.
//!   These are caller bugs and are reported before any state is mutated.

use thiserror::Error;

/// Operational failures of container reads and removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// `dequeue` or `peek` on a queue with no live elements.
    #[error("queue is empty")]
    EmptyQueue,
    /// `pop` or `peek` on a stack with no live elements.
    #[error("stack is empty")]
    EmptyStack,
}

/// A violated precondition on policy parameters or container configuration.
///
/// Each variant names the parameter, the limit it was checked against and
/// the offending value. Values are never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("{name:?} must be < {limit}, got {value}")]
    NotLessThan {
        name: &'static str,
        limit: usize,
        value: usize,
    },
    #[error("{name:?} must be <= {limit}, got {value}")]
    NotAtMost {
        name: &'static str,
        limit: usize,
        value: usize,
    },
    #[error("{name:?} must be == {expected}, got {value}")]
    NotEqual {
        name: &'static str,
        expected: usize,
        value: usize,
    },
}

impl ParamError {
    /// Returns the name of the parameter that failed validation.
    pub fn param(&self) -> &'static str {
        match self {
            Self::NotLessThan { name, .. }
            | Self::NotAtMost { name, .. }
            | Self::NotEqual { name, .. } => name,
        }
    }
}

#[inline]
pub(crate) fn require_less_than(
    value: usize,
    limit: usize,
    name: &'static str,
) -> Result<(), ParamError> {
    if value >= limit {
        return Err(ParamError::NotLessThan { name, limit, value });
    }
    Ok(())
}

#[inline]
pub(crate) fn require_at_most(
    value: usize,
    limit: usize,
    name: &'static str,
) -> Result<(), ParamError> {
    if value > limit {
        return Err(ParamError::NotAtMost { name, limit, value });
    }
    Ok(())
}

#[inline]
pub(crate) fn require_equal(
    value: usize,
    expected: usize,
    name: &'static str,
) -> Result<(), ParamError> {
    if value != expected {
        return Err(ParamError::NotEqual {
            name,
            expected,
            value,
        });
    }
    Ok(())
}
