use std::path::PathBuf;

use tempfile::TempDir;

use crate::store::FsBackend;

pub struct TestEnv {
    // keep _temp_dir so the directory outlives the test
    pub _temp_dir: TempDir,
    pub backend: FsBackend,
    pub path: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("books.csv");
        let backend = FsBackend::new(&path);
        Self {
            _temp_dir: temp_dir,
            backend,
            path,
        }
    }
}
