//! Deterministic, pure logic shared by the SDK components.
//!
//! Core modules must be free of I/O side effects. Filesystem probes and clocks
//! are passed in, so every decision here is testable in isolation.

pub mod layout;
pub mod record;
