//! Notebook Exporter Port - serializes cells into an on-disk notebook.
//!
//! The exporter collaborator owns the conversion from cells to notebook
//! format; the bridge only hands it an ordered cell list and a destination.

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use crate::domain::Cell;

/// Port for exporting cells to a notebook file.
#[async_trait]
pub trait NotebookExporter: Send + Sync {
    /// Serialize `cells`, in order, into a notebook file at `path`.
    ///
    /// When `interactive` is false the exporter must not prompt or surface
    /// UI; the bridge always exports non-interactively.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if conversion or the write fails.
    async fn export_to_file(
        &self,
        cells: &[Cell],
        path: &Path,
        interactive: bool,
    ) -> Result<(), ExportError>;
}

/// Errors that can occur exporting cells.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// Converting cells to notebook format failed.
    #[error("Export failed: {message}")]
    ExportFailed { message: String },

    /// IO error writing the notebook file.
    #[error("IO error during export: {message}")]
    Io { message: String },
}

impl ExportError {
    /// Creates an export failure error.
    pub fn export_failed(message: impl Into<String>) -> Self {
        Self::ExportFailed {
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
