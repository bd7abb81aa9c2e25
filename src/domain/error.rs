//! BridgeError - crate-level error composing the port errors.

use thiserror::Error;

use crate::ports::{ExportError, FileSystemError, StorageError};

/// Errors surfaced by the bridge's propagating operations.
///
/// Each variant wraps one collaborator's error; the bridge adds no failure
/// modes of its own.
#[derive(Debug, Clone, Error)]
pub enum BridgeError {
    /// A scratch filesystem operation failed.
    #[error(transparent)]
    FileSystem(#[from] FileSystemError),

    /// Loading a model or reading its content failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Exporting cells to a notebook file failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
