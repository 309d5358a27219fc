//! Side-effecting adapters for the SDK components.

pub mod env;
pub mod log;
pub mod secrets;
pub mod workspace;
