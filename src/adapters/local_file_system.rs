//! Local Filesystem Adapter - tokio::fs implementation of ScratchFileSystem.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::ports::{FileSystemError, ScratchFileSystem};

/// Scratch filesystem backed by the local disk.
///
/// Temp files are created under the platform temp root with a
/// `scratch-{uuid}` stem, so concurrent processes and calls never collide.
#[derive(Debug, Clone, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    /// Creates a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ScratchFileSystem for LocalFileSystem {
    async fn create_directory(&self, path: &Path) -> Result<(), FileSystemError> {
        fs::create_dir_all(path).await.map_err(|e| {
            FileSystemError::io(format!("Failed to create {}: {}", path.display(), e))
        })
    }

    async fn delete_directory(&self, path: &Path) -> Result<(), FileSystemError> {
        fs::remove_dir_all(path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FileSystemError::not_found(path.display().to_string()),
            std::io::ErrorKind::PermissionDenied => {
                FileSystemError::permission_denied(path.display().to_string())
            }
            _ => FileSystemError::io(format!("Failed to delete {}: {}", path.display(), e)),
        })
    }

    async fn write_file(&self, path: &Path, content: &str) -> Result<(), FileSystemError> {
        fs::write(path, content).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FileSystemError::not_found(path.display().to_string()),
            std::io::ErrorKind::PermissionDenied => {
                FileSystemError::permission_denied(path.display().to_string())
            }
            _ => FileSystemError::io(format!("Failed to write {}: {}", path.display(), e)),
        })
    }

    async fn copy_file(&self, src: &Path, dst: &Path) -> Result<(), FileSystemError> {
        fs::copy(src, dst).await.map(|_| ()).map_err(|e| {
            FileSystemError::io(format!(
                "Failed to copy {} to {}: {}",
                src.display(),
                dst.display(),
                e
            ))
        })
    }

    async fn create_temp_file(&self, suffix: &str) -> Result<PathBuf, FileSystemError> {
        let path = std::env::temp_dir().join(format!("scratch-{}{}", Uuid::new_v4(), suffix));
        fs::File::create(&path).await.map_err(|e| {
            FileSystemError::io(format!("Failed to create {}: {}", path.display(), e))
        })?;
        Ok(path)
    }

    async fn delete_file(&self, path: &Path) -> Result<(), FileSystemError> {
        fs::remove_file(path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FileSystemError::not_found(path.display().to_string()),
            std::io::ErrorKind::PermissionDenied => {
                FileSystemError::permission_denied(path.display().to_string())
            }
            _ => FileSystemError::io(format!("Failed to delete {}: {}", path.display(), e)),
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn create_and_delete_directory() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFileSystem::new();
        let dir = temp.path().join("a/b/c");

        fs.create_directory(&dir).await.unwrap();
        assert!(dir.is_dir());

        fs.delete_directory(&temp.path().join("a")).await.unwrap();
        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn delete_missing_directory_is_not_found() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFileSystem::new();

        let result = fs.delete_directory(&temp.path().join("nope")).await;

        assert!(matches!(result, Err(FileSystemError::NotFound { .. })));
    }

    #[tokio::test]
    async fn write_file_round_trips_utf8() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFileSystem::new();
        let path = temp.path().join("note.txt");

        fs.write_file(&path, "héllo ∑").await.unwrap();

        let read = std::fs::read_to_string(&path).unwrap();
        assert_eq!(read, "héllo ∑");
    }

    #[tokio::test]
    async fn copy_file_replicates_content() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFileSystem::new();
        let src = temp.path().join("src.ipynb");
        let dst = temp.path().join(".ipynb");

        fs.write_file(&src, "{\"cells\":[]}").await.unwrap();
        fs.copy_file(&src, &dst).await.unwrap();

        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "{\"cells\":[]}");
    }

    #[tokio::test]
    async fn create_temp_file_uses_suffix_and_is_unique() {
        let fs = LocalFileSystem::new();

        let a = fs.create_temp_file(".ipynb").await.unwrap();
        let b = fs.create_temp_file(".ipynb").await.unwrap();

        assert!(a.to_string_lossy().ends_with(".ipynb"));
        assert_ne!(a, b);
        assert!(a.exists());

        fs.delete_file(&a).await.unwrap();
        fs.delete_file(&b).await.unwrap();
    }
}
