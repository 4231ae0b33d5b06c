//! Integration tests for the adaptive containers and capacity policies.
//!
//! Run with: `cargo test --test integration`

mod adaptive_queue;
mod adaptive_stack;
mod config;
mod policies;
