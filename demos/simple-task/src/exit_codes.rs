//! Stable exit codes for the task agent.

/// Task finished and its result file was written.
pub const OK: i32 = 0;
/// Task failed; a `task failed` record was written to stderr.
pub const FAILED: i32 = 1;
