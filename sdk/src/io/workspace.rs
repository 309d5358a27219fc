//! Workspace path helpers.
//!
//! The root is recomputed on every call: `AEGIS_WORKSPACE_PATH` when set and
//! non-empty, else `/workspace` when it is a directory, else `./workspace`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::layout::{WorkspaceLayout, WorkspacePaths, select_root};
use crate::error::Result;
use crate::io::env::{Environment, ProcessEnv};

/// Workspace resolver bound to an environment and a layout.
#[derive(Debug, Clone)]
pub struct Workspace<E = ProcessEnv> {
    env: E,
    layout: WorkspaceLayout,
}

impl Workspace<ProcessEnv> {
    /// Resolver over the process environment and the platform layout.
    pub fn from_env() -> Self {
        Self::new(ProcessEnv)
    }
}

impl Default for Workspace<ProcessEnv> {
    fn default() -> Self {
        Self::from_env()
    }
}

impl<E: Environment> Workspace<E> {
    pub fn new(env: E) -> Self {
        Self::with_layout(env, WorkspaceLayout::default())
    }

    pub fn with_layout(env: E, layout: WorkspaceLayout) -> Self {
        Self { env, layout }
    }

    /// Return the workspace root. Only probes the mount path; never fails.
    pub fn resolve_root(&self) -> PathBuf {
        let override_value = self.env.var(&self.layout.override_var);
        let (root, source) = select_root(&self.layout, override_value.as_deref(), Path::is_dir);
        debug!(root = %root.display(), ?source, "resolved workspace root");
        root
    }

    /// Conventional paths under the current root.
    pub fn paths(&self) -> WorkspacePaths {
        WorkspacePaths::new(self.resolve_root())
    }

    /// Create `data/`, `output/` and `.cache/` under the root if missing.
    ///
    /// Idempotent. Filesystem errors are returned unchanged.
    pub fn ensure_dirs(&self) -> Result<WorkspacePaths> {
        let paths = self.paths();
        for dir in paths.subdirs() {
            fs::create_dir_all(dir)?;
        }
        debug!(root = %paths.root.display(), "workspace directories ready");
        Ok(paths)
    }

    /// `resolve_root()/data`.
    pub fn data_path(&self) -> PathBuf {
        self.paths().data_dir
    }

    /// `resolve_root()/output`.
    pub fn output_path(&self) -> PathBuf {
        self.paths().output_dir
    }

    /// `resolve_root()/.cache`.
    pub fn cache_path(&self) -> PathBuf {
        self.paths().cache_dir
    }
}

/// Workspace root for the current process.
pub fn resolve_root() -> PathBuf {
    Workspace::from_env().resolve_root()
}

/// Create the standard workspace subdirectories for the current process.
pub fn ensure_dirs() -> Result<WorkspacePaths> {
    Workspace::from_env().ensure_dirs()
}

pub fn data_path() -> PathBuf {
    Workspace::from_env().data_path()
}

pub fn output_path() -> PathBuf {
    Workspace::from_env().output_path()
}

pub fn cache_path() -> PathBuf {
    Workspace::from_env().cache_path()
}
