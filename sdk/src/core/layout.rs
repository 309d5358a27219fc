//! Workspace root resolution and the conventional subdirectory layout.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable that overrides every other resolution step.
pub const OVERRIDE_VAR: &str = "AEGIS_WORKSPACE_PATH";
/// Conventional workspace mount inside an Aegis microVM.
pub const MOUNT_PATH: &str = "/workspace";
/// Relative fallback for local development outside a VM.
pub const FALLBACK_PATH: &str = "./workspace";

pub const DATA_DIR: &str = "data";
pub const OUTPUT_DIR: &str = "output";
pub const CACHE_DIR: &str = ".cache";

/// Inputs to workspace root resolution.
///
/// The defaults match what the platform mounts; other values exist for hosts
/// with a different convention and for tests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WorkspaceLayout {
    /// Environment variable holding an explicit root.
    pub override_var: String,
    /// Directory used when it exists and no override is set.
    pub mount_path: PathBuf,
    /// Root used when neither of the above applies.
    pub fallback_path: PathBuf,
}

impl Default for WorkspaceLayout {
    fn default() -> Self {
        Self {
            override_var: OVERRIDE_VAR.to_string(),
            mount_path: PathBuf::from(MOUNT_PATH),
            fallback_path: PathBuf::from(FALLBACK_PATH),
        }
    }
}

/// Which resolution step produced the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    Override,
    Mount,
    Fallback,
}

/// Pick the workspace root.
///
/// Order: non-empty `override_value`, then `layout.mount_path` if `is_dir`
/// says it is a directory, then `layout.fallback_path`. Total: always returns.
pub fn select_root(
    layout: &WorkspaceLayout,
    override_value: Option<&str>,
    is_dir: impl Fn(&Path) -> bool,
) -> (PathBuf, RootSource) {
    if let Some(value) = override_value.filter(|value| !value.is_empty()) {
        return (PathBuf::from(value), RootSource::Override);
    }
    if is_dir(&layout.mount_path) {
        return (layout.mount_path.clone(), RootSource::Mount);
    }
    (layout.fallback_path.clone(), RootSource::Fallback)
}

/// Canonical paths under a workspace root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspacePaths {
    pub root: PathBuf,
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub cache_dir: PathBuf,
}

impl WorkspacePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            data_dir: root.join(DATA_DIR),
            output_dir: root.join(OUTPUT_DIR),
            cache_dir: root.join(CACHE_DIR),
            root,
        }
    }

    /// The three subdirectories, in creation order.
    pub fn subdirs(&self) -> [&Path; 3] {
        [&self.data_dir, &self.output_dir, &self.cache_dir]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn never(_: &Path) -> bool {
        false
    }

    fn always(_: &Path) -> bool {
        true
    }

    #[test]
    fn override_wins_regardless_of_mount() {
        let layout = WorkspaceLayout::default();
        for probe in [never as fn(&Path) -> bool, always] {
            let (root, source) = select_root(&layout, Some("/tmp/run1"), probe);
            assert_eq!(root, PathBuf::from("/tmp/run1"));
            assert_eq!(source, RootSource::Override);
        }
    }

    #[test]
    fn empty_override_falls_through_to_mount() {
        let layout = WorkspaceLayout::default();
        let (root, source) = select_root(&layout, Some(""), always);
        assert_eq!(root, PathBuf::from(MOUNT_PATH));
        assert_eq!(source, RootSource::Mount);
    }

    #[test]
    fn falls_back_when_mount_missing() {
        let layout = WorkspaceLayout::default();
        let (root, source) = select_root(&layout, None, never);
        assert_eq!(root, PathBuf::from(FALLBACK_PATH));
        assert_eq!(source, RootSource::Fallback);
    }

    #[test]
    fn probe_only_sees_mount_path() {
        let layout = WorkspaceLayout {
            mount_path: PathBuf::from("/srv/agent"),
            ..WorkspaceLayout::default()
        };
        let (root, _) = select_root(&layout, None, |path| path == Path::new("/srv/agent"));
        assert_eq!(root, PathBuf::from("/srv/agent"));
    }

    #[test]
    fn paths_join_conventional_names() {
        let paths = WorkspacePaths::new("./workspace");
        assert_eq!(paths.data_dir, Path::new("./workspace").join("data"));
        assert_eq!(paths.output_dir, Path::new("./workspace").join("output"));
        assert_eq!(paths.cache_dir, Path::new("./workspace").join(".cache"));
        assert_eq!(
            paths.subdirs(),
            [
                paths.data_dir.as_path(),
                paths.output_dir.as_path(),
                paths.cache_dir.as_path()
            ]
        );
    }

    #[test]
    fn layout_deserializes_with_defaults() {
        let layout: WorkspaceLayout =
            serde_json::from_str(r#"{"mount_path":"/mnt/ws"}"#).expect("parse layout");
        assert_eq!(layout.override_var, OVERRIDE_VAR);
        assert_eq!(layout.mount_path, PathBuf::from("/mnt/ws"));
        assert_eq!(layout.fallback_path, PathBuf::from(FALLBACK_PATH));
    }
}
