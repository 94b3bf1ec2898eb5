//! File system operations abstraction for testing
//!
//! The bootstrapper only ever checks existence, creates a directory tree and
//! overwrites a file. This trait covers exactly those three operations so the
//! setup sequence can run against `MockFileSystemOperations` in unit tests.
//!
//! # Examples
//!
//! ```rust,no_run
//! use masjid_setup::fs::{FileSystemOperations, StandardFileSystem};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let fs_ops: Arc<dyn FileSystemOperations> = Arc::new(StandardFileSystem);
//!
//!     fs_ops.create_dir_all(Path::new("/home/runner/.n8n")).await?;
//!     fs_ops.write(Path::new("README.md"), b"# Masjid AI").await?;
//!
//!     if fs_ops.exists(Path::new("n8n_masjid_workflow_replit.json")) {
//!         println!("Workflow file is in place");
//!     }
//!
//!     Ok(())
//! }
//! ```

use anyhow::Result;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

/// Trait for file system operations that can be mocked in tests
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait FileSystemOperations: Send + Sync {
    /// Create a directory and all its parent directories.
    ///
    /// Succeeds when the directory already exists, including when another
    /// process created it between an existence check and this call.
    async fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Write data to a file, creating it or truncating existing content.
    async fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;
}

/// Production implementation backed by `tokio::fs`.
pub struct StandardFileSystem;

#[async_trait::async_trait]
impl FileSystemOperations for StandardFileSystem {
    async fn create_dir_all(&self, path: &Path) -> Result<()> {
        tokio::fs::create_dir_all(path).await.map_err(Into::into)
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        tokio::fs::write(path, contents).await.map_err(Into::into)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_dir_all_is_idempotent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let target = temp_dir.path().join("home").join(".n8n");
        let fs_ops = StandardFileSystem;

        fs_ops.create_dir_all(&target).await.unwrap();
        fs_ops.create_dir_all(&target).await.unwrap();

        assert!(fs_ops.exists(&target));
        assert!(target.is_dir());
    }

    #[tokio::test]
    async fn write_replaces_existing_content() {
        let temp_dir = tempfile::tempdir().unwrap();
        let target = temp_dir.path().join("README.md");
        std::fs::write(&target, "old content that is much longer than the new one").unwrap();

        StandardFileSystem.write(&target, b"new").await.unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn exists_reports_missing_paths() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(!StandardFileSystem.exists(&temp_dir.path().join("missing.json")));
    }
}
