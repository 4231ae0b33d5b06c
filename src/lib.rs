//! Slice-backed FIFO and LIFO containers with adaptive capacity management.
//!
//! ## Scope
//! A `Vec`-backed queue leaves dead slots at the front as it dequeues; a
//! stack that grew large keeps its allocation after shrinking. This crate
//! provides the two policies that reclaim that space and the containers that
//! apply them on every insertion and removal.
//!
//! ## Key invariants
//! - Containers preserve strict FIFO / LIFO order regardless of which
//!   policies fire; optimizations only affect length and capacity.
//! - Compaction never allocates. Reallocation always replaces the buffer
//!   when it triggers, sized with headroom so the next removal does not
//!   immediately trigger again.
//! - Waste percentages use truncating integer arithmetic.
//! - Malformed parameters are rejected with [`ParamError`] before anything is
//!   mutated; empty-container reads fail with [`ContainerError`].
//!
//! ## Notable entry points
//! - [`policy::compact`] / [`policy::reallocate`]: the standalone policies.
//! - [`AdaptiveQueue`] / [`AdaptiveStack`] with [`QueueConfig`] /
//!   [`StackConfig`].
//! - [`Queue`] / [`Stack`]: the container interfaces.
//!
//! ## Threading
//! Everything here is single-threaded. Wrap a container in a lock to share
//! it across threads.

pub mod errors;
pub mod policy;
pub mod stdx;

pub use errors::{ContainerError, ParamError};
pub use policy::{
    compact, reallocate, CompactionOutcome, CompactionParams, ReallocationOutcome,
    ReallocationParams, MIN_REALLOCATION_CAPACITY,
};
pub use stdx::{AdaptiveQueue, AdaptiveStack, Queue, QueueConfig, Stack, StackConfig};
