//! Thin in-VM helpers for agents running inside Aegis microVMs.
//!
//! Three independent, stateless components:
//!
//! - **Workspace** ([`workspace`]): resolves the workspace root and the
//!   conventional `data/`, `output/` and `.cache/` subdirectories.
//! - **Secrets** ([`secrets`]): reads platform-injected secrets from the
//!   process environment.
//! - **Log** ([`log`]): writes one JSON record per call to stdout (or stderr
//!   for errors).
//!
//! The crate keeps the runner's split between **[`core`]** (pure decisions
//! and rendering, no I/O) and **[`io`]** (environment, filesystem and stream
//! adapters). The top-level modules re-export the surface agents call.

pub mod core;
pub mod error;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::error::{Error, Result};
pub use crate::io::env::{Environment, ProcessEnv};

/// Workspace path helpers.
pub mod workspace {
    pub use crate::core::layout::{WorkspaceLayout, WorkspacePaths};
    pub use crate::io::workspace::{
        Workspace, cache_path, data_path, ensure_dirs, output_path, resolve_root,
    };
}

/// Secret access helpers.
pub mod secrets {
    pub use crate::io::secrets::{Secrets, get_secret, require_secret};
}

/// Structured JSON logging to stdout/stderr.
pub mod log {
    pub use crate::core::record::{Level, Stream, Value};
    pub use crate::io::log::{LineSink, Logger, debug, error, info, warn};
}
