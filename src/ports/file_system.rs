//! Scratch Filesystem Port - filesystem operations interface.
//!
//! This port defines the contract for the scratch filesystem operations the
//! bridge needs. The application layer depends on this trait, while adapters
//! (like `LocalFileSystem`) provide the implementation. The disposable
//! `TempDirectory` and `TempFile` handles live here too, since their cleanup
//! semantics are part of the filesystem contract.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Number of delete attempts a temp directory makes before giving up.
const DISPOSE_ATTEMPTS: u32 = 10;

/// Port for scratch filesystem operations.
///
/// # Contract
///
/// Implementations must:
/// - Create directories including missing parents
/// - Delete directories recursively
/// - Write file content as UTF-8 text
/// - Create temp files under the platform temp root with the given suffix
///
/// # Usage
///
/// ```rust,ignore
/// let fs: &dyn ScratchFileSystem = get_fs();
///
/// fs.create_directory(Path::new("/tmp/scratch-abc")).await?;
/// fs.write_file(Path::new("/tmp/scratch-abc/nb.ipynb"), "{}").await?;
/// ```
#[async_trait]
pub trait ScratchFileSystem: Send + Sync {
    /// Create a directory, including any missing parents.
    async fn create_directory(&self, path: &Path) -> Result<(), FileSystemError>;

    /// Delete a directory and everything beneath it.
    async fn delete_directory(&self, path: &Path) -> Result<(), FileSystemError>;

    /// Write `content` to `path` as UTF-8 text, replacing any existing file.
    async fn write_file(&self, path: &Path, content: &str) -> Result<(), FileSystemError>;

    /// Copy the file at `src` to `dst`, replacing any existing file.
    async fn copy_file(&self, src: &Path, dst: &Path) -> Result<(), FileSystemError>;

    /// Create an empty temp file whose name ends with `suffix` and return
    /// its path. The file lives under the platform temp root; the caller
    /// owns its cleanup (see [`TempFile`]).
    async fn create_temp_file(&self, suffix: &str) -> Result<PathBuf, FileSystemError>;

    /// Delete a single file.
    async fn delete_file(&self, path: &Path) -> Result<(), FileSystemError>;
}

/// A scratch directory owned by the caller.
///
/// Created by `TempModelBridge::generate_temp_dir`; the path embeds a fresh
/// UUID so concurrent callers never collide. Call [`dispose`](Self::dispose)
/// exactly once when done - consuming `self` makes a double dispose a
/// compile error.
pub struct TempDirectory {
    path: PathBuf,
    fs: Arc<dyn ScratchFileSystem>,
}

impl TempDirectory {
    /// Wraps an already-created directory in a disposable handle.
    pub fn new(path: impl Into<PathBuf>, fs: Arc<dyn ScratchFileSystem>) -> Self {
        Self {
            path: path.into(),
            fs,
        }
    }

    /// The directory's absolute path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Best-effort recursive deletion.
    ///
    /// Tries up to ten times; the host process may still hold handles inside
    /// the directory. Every failure is swallowed - after the tenth attempt
    /// the directory is left for the OS to reclaim with the rest of the temp
    /// root. Each attempt is awaited before the next, so the call always
    /// resolves after a bounded number of operations.
    pub async fn dispose(self) {
        for attempt in 1..=DISPOSE_ATTEMPTS {
            match self.fs.delete_directory(&self.path).await {
                Ok(()) => return,
                Err(err) => {
                    debug!(
                        path = %self.path.display(),
                        attempt,
                        error = %err,
                        "temp directory delete attempt failed"
                    );
                }
            }
        }
    }
}

impl std::fmt::Debug for TempDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TempDirectory")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// A scratch file owned by the caller.
///
/// Single best-effort delete on [`dispose`](Self::dispose); a leftover temp
/// file is harmless and reclaimed with the temp root.
pub struct TempFile {
    path: PathBuf,
    fs: Arc<dyn ScratchFileSystem>,
}

impl TempFile {
    /// Wraps an already-created file in a disposable handle.
    pub fn new(path: impl Into<PathBuf>, fs: Arc<dyn ScratchFileSystem>) -> Self {
        Self {
            path: path.into(),
            fs,
        }
    }

    /// The file's absolute path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Best-effort deletion; failure is swallowed.
    pub async fn dispose(self) {
        if let Err(err) = self.fs.delete_file(&self.path).await {
            debug!(
                path = %self.path.display(),
                error = %err,
                "temp file delete failed"
            );
        }
    }
}

impl std::fmt::Debug for TempFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TempFile")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Errors that can occur during scratch filesystem operations.
#[derive(Debug, Clone, Error)]
pub enum FileSystemError {
    /// File or directory was not found.
    #[error("Path not found: {path}")]
    NotFound { path: String },

    /// Permission denied accessing the path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// Any other IO error.
    #[error("IO error: {message}")]
    Io { message: String },
}

impl FileSystemError {
    /// Creates a not found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Creates a permission denied error.
    pub fn permission_denied(path: impl Into<String>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for FileSystemError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FileSystemError::not_found(err.to_string()),
            std::io::ErrorKind::PermissionDenied => {
                FileSystemError::permission_denied(err.to_string())
            }
            _ => FileSystemError::io(err.to_string()),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
