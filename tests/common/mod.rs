#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::path::{Path, PathBuf};

/// Registry fixture shared by the integration tests.
pub fn fixture_registry() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("api.yml")
}

pub mod temp_files {
    use std::path::{Path, PathBuf};

    /// Write `content` to `dir/name`, creating parent directories.
    pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Write a registry document into a fresh temporary directory.
    pub fn create_temp_registry(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "api.yml", content);
        (dir, path)
    }
}
