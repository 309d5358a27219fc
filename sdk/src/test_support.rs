//! Test-only helpers: a fake environment, capturing sinks and layouts that
//! keep tests away from the real `/workspace`.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tempfile::TempDir;

use crate::core::layout::{OVERRIDE_VAR, WorkspaceLayout};
use crate::io::env::Environment;
use crate::io::log::{LineSink, Logger};
use crate::io::workspace::Workspace;

/// In-memory environment.
#[derive(Debug, Clone, Default)]
pub struct FakeEnv {
    vars: BTreeMap<String, String>,
}

impl FakeEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `set`.
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.vars.insert(name.to_string(), value.into());
        self
    }
}

impl Environment for FakeEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Layout whose mount path is guaranteed not to exist under `scratch`.
pub fn missing_mount_layout(scratch: &Path) -> WorkspaceLayout {
    WorkspaceLayout {
        mount_path: scratch.join("no-such-mount"),
        ..WorkspaceLayout::default()
    }
}

/// Scratch workspace: a tempdir root selected through the override variable,
/// with the mount path pointed somewhere that does not exist.
pub struct TestWorkspace {
    temp: TempDir,
    root: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> io::Result<Self> {
        let temp = tempfile::tempdir()?;
        let root = temp.path().join("ws");
        Ok(Self { temp, root })
    }

    /// Root the workspace resolves to. Not created until `ensure_dirs`.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Environment with the override set to [`TestWorkspace::root`].
    pub fn env(&self) -> FakeEnv {
        FakeEnv::new().with(OVERRIDE_VAR, self.root.to_string_lossy())
    }

    pub fn layout(&self) -> WorkspaceLayout {
        missing_mount_layout(self.temp.path())
    }

    pub fn workspace(&self) -> Workspace<FakeEnv> {
        Workspace::with_layout(self.env(), self.layout())
    }
}

/// Sink that collects everything written to it. Clones share the buffer.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Parse every line as JSON. Panics on a malformed line.
    pub fn records(&self) -> Vec<serde_json::Value> {
        self.lines()
            .iter()
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|err| panic!("invalid JSON line {line:?}: {err}"))
            })
            .collect()
    }
}

impl LineSink for CaptureSink {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        self.buf.write_line(line)
    }
}

/// Sink that always fails, standing in for a closed stream.
#[derive(Debug, Clone, Copy)]
pub struct FailingSink {
    kind: io::ErrorKind,
}

impl FailingSink {
    pub fn new(kind: io::ErrorKind) -> Self {
        Self { kind }
    }
}

impl LineSink for FailingSink {
    fn write_line(&self, _line: &[u8]) -> io::Result<()> {
        Err(io::Error::new(self.kind, "stream closed"))
    }
}

/// Logger over two fresh capture sinks, plus handles to read them back.
pub fn capture_logger() -> (Logger<CaptureSink, CaptureSink>, CaptureSink, CaptureSink) {
    let out = CaptureSink::new();
    let err = CaptureSink::new();
    (Logger::new(out.clone(), err.clone()), out, err)
}
