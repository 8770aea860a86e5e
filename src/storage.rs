use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// Storage backend for store snapshots.
///
/// The core only needs a basic keyed byte store; the default backend is a
/// directory on local disk, but tests substitute mocks through this trait.
#[async_trait]
pub trait SnapshotStorage {
    async fn upload_file(&self, filename: &str, data: &[u8]) -> Result<(), String>;
    async fn download_file(&self, filename: &str) -> Result<Vec<u8>, String>;
}

/// Local-disk snapshot storage rooted at the configured data directory.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl SnapshotStorage for FileStorage {
    async fn upload_file(&self, filename: &str, data: &[u8]) -> Result<(), String> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| format!("failed to create data directory: {}", e))?;
        let path = self.root.join(filename);
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| format!("failed to write {}: {}", path.display(), e))
    }

    async fn download_file(&self, filename: &str) -> Result<Vec<u8>, String> {
        let path = self.root.join(filename);
        tokio::fs::read(&path)
            .await
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))
    }
}
