//! Slice-backed containers with adaptive capacity management.

pub mod adaptive_queue;
pub mod adaptive_stack;
pub mod config;
pub mod traits;

pub use adaptive_queue::AdaptiveQueue;
pub use adaptive_stack::AdaptiveStack;
pub use config::{QueueConfig, StackConfig};
pub use traits::{Queue, Stack};
