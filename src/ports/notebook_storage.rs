//! Notebook Storage Port - loads notebook models from disk.
//!
//! The storage collaborator owns the notebook file format and the model it
//! produces. The bridge only ever loads a model from a path and reads its
//! serialized content back.

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// An in-memory notebook owned by the storage collaborator.
///
/// Opaque to the bridge apart from producing its serialized text; the
/// bridge never inspects or mutates model internals.
pub trait NotebookModel: Send + Sync {
    /// The model's serialized textual content, as it would be written to
    /// disk.
    fn serialized_content(&self) -> Result<String, StorageError>;
}

/// Port for loading notebook models.
///
/// # Usage
///
/// ```rust,ignore
/// let storage: &dyn NotebookStorage = get_storage();
/// let model = storage.load(Path::new("/tmp/scratch/.ipynb")).await?;
/// println!("{}", model.serialized_content()?);
/// ```
#[async_trait]
pub trait NotebookStorage: Send + Sync {
    /// Load a model from the notebook file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no file exists at `path`, or
    /// `StorageError::Malformed` if the file is not a parseable notebook.
    async fn load(&self, path: &Path) -> Result<Box<dyn NotebookModel>, StorageError>;
}

/// Errors that can occur loading a model or reading its content.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Notebook file was not found.
    #[error("Notebook not found: {path}")]
    NotFound { path: String },

    /// Notebook file exists but could not be parsed.
    #[error("Malformed notebook {path}: {message}")]
    Malformed { path: String, message: String },

    /// Model content could not be produced.
    #[error("Failed to serialize notebook content: {message}")]
    Content { message: String },

    /// IO error while reading the notebook.
    #[error("IO error: {message}")]
    Io { message: String },
}

impl StorageError {
    /// Creates a not found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Creates a malformed notebook error.
    pub fn malformed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a content serialization error.
    pub fn content(message: impl Into<String>) -> Self {
        Self::Content {
            message: message.into(),
        }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
