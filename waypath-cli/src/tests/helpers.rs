//! Test helpers for writing CLI input files into a scratch directory.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Landmarks for the right-angle triangle plus a far shortcut pair.
pub(super) const LANDMARKS_JSON: &str = r#"{
    "A": [0, 0],
    "B": [10, 0],
    "C": [10, 10],
    "BirdStart": [500, 500],
    "BirdEnd": [900, 900]
}"#;

/// Labels keyed by map variant.
pub(super) const LABELS_JSON: &str = r#"{
    "Gladius-Default-0": {"A": "Crucible Knight", "C": "Bloodhound Knight"},
    "Gladius-Default-1": {}
}"#;

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test input");
}

/// Scratch directory holding CLI input files.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write `contents` to `name` and return its path.
    pub(super) fn file(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}
