//! Workspace resolver behavior through the public API.
//!
//! Each test gets its own tempdir root selected via the override variable, so
//! nothing touches the real `/workspace` or `./workspace`.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use aegis_sdk::test_support::{FakeEnv, TestWorkspace, missing_mount_layout};
use aegis_sdk::workspace::{Workspace, WorkspaceLayout};

fn entries(root: &std::path::Path) -> BTreeSet<String> {
    fs::read_dir(root)
        .expect("read root")
        .map(|entry| {
            entry
                .expect("dir entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}

#[test]
fn ensure_dirs_twice_leaves_exactly_three_subdirectories() {
    let ws = TestWorkspace::new().expect("test workspace");
    let workspace = ws.workspace();

    workspace.ensure_dirs().expect("first ensure");
    workspace.ensure_dirs().expect("second ensure");

    let expected: BTreeSet<String> = ["data", "output", ".cache"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(entries(ws.root()), expected);
    for name in &expected {
        assert!(ws.root().join(name).is_dir(), "{name} should be a directory");
    }
}

#[test]
fn ensure_dirs_keeps_existing_contents() {
    let ws = TestWorkspace::new().expect("test workspace");
    let paths = ws.workspace().ensure_dirs().expect("ensure");
    let marker = paths.output_dir.join("result.txt");
    fs::write(&marker, "keep me").expect("write marker");

    ws.workspace().ensure_dirs().expect("ensure again");

    assert_eq!(fs::read_to_string(marker).expect("read marker"), "keep me");
}

#[test]
fn ensure_dirs_returns_resolved_paths() {
    let ws = TestWorkspace::new().expect("test workspace");
    let workspace = ws.workspace();
    let paths = workspace.ensure_dirs().expect("ensure");

    assert_eq!(paths.root, workspace.resolve_root());
    assert_eq!(paths.data_dir, workspace.data_path());
    assert_eq!(paths.output_dir, workspace.output_path());
    assert_eq!(paths.cache_dir, workspace.cache_path());
}

#[test]
fn override_beats_missing_mount_and_fallback() {
    let temp = tempfile::tempdir().expect("tempdir");
    let env = FakeEnv::new().with("AEGIS_WORKSPACE_PATH", "/tmp/run1");
    let workspace = Workspace::with_layout(env, missing_mount_layout(temp.path()));

    assert_eq!(workspace.resolve_root(), PathBuf::from("/tmp/run1"));
    assert_ne!(workspace.resolve_root(), PathBuf::from("./workspace"));
}

#[test]
fn unset_override_and_missing_mount_use_fallback() {
    let temp = tempfile::tempdir().expect("tempdir");
    let workspace = Workspace::with_layout(FakeEnv::new(), missing_mount_layout(temp.path()));
    assert_eq!(workspace.resolve_root(), PathBuf::from("./workspace"));
    assert_eq!(
        workspace.output_path(),
        PathBuf::from("./workspace").join("output")
    );
}

#[test]
fn root_is_recomputed_on_every_call() {
    let temp = tempfile::tempdir().expect("tempdir");
    let mount = temp.path().join("mount");
    let layout = WorkspaceLayout {
        mount_path: mount.clone(),
        ..WorkspaceLayout::default()
    };
    let workspace = Workspace::with_layout(FakeEnv::new(), layout);

    assert_eq!(workspace.resolve_root(), PathBuf::from("./workspace"));
    fs::create_dir(&mount).expect("create mount");
    assert_eq!(workspace.resolve_root(), mount);
}
