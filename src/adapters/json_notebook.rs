//! JSON Notebook Adapters - minimal nbformat-4 storage and exporter.
//!
//! Reference implementations of `NotebookStorage` and `NotebookExporter`
//! over a bare-bones notebook JSON structure. A host application with a real
//! notebook stack supplies its own adapters; these exist so the bridge is
//! usable (and testable end to end) on its own.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use tokio::fs;
use tracing::debug;

use crate::domain::{Cell, CellKind};
use crate::ports::{ExportError, NotebookExporter, NotebookModel, NotebookStorage, StorageError};

const NBFORMAT: u32 = 4;
const NBFORMAT_MINOR: u32 = 2;

/// On-disk notebook shape, just enough of nbformat 4 to round-trip cells.
#[derive(Debug, Serialize, Deserialize)]
struct RawNotebook {
    cells: Vec<RawCell>,
    metadata: Map<String, Value>,
    nbformat: u32,
    nbformat_minor: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawCell {
    id: String,
    cell_type: String,
    metadata: Map<String, Value>,
    source: Vec<String>,
}

impl RawCell {
    fn from_cell(cell: &Cell) -> Self {
        let cell_type = match cell.kind {
            CellKind::Code => "code",
            CellKind::Markdown => "markdown",
            CellKind::Raw => "raw",
        };
        Self {
            id: cell.id.to_string(),
            cell_type: cell_type.to_string(),
            metadata: Map::new(),
            source: split_source(&cell.source),
        }
    }
}

/// Split source into nbformat's line-list form, newlines retained.
fn split_source(source: &str) -> Vec<String> {
    source.split_inclusive('\n').map(str::to_owned).collect()
}

/// Exporter that writes cells as minimal notebook JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonNotebookExporter;

impl JsonNotebookExporter {
    /// Creates a new JSON exporter.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotebookExporter for JsonNotebookExporter {
    async fn export_to_file(
        &self,
        cells: &[Cell],
        path: &Path,
        interactive: bool,
    ) -> Result<(), ExportError> {
        if interactive {
            // This adapter is headless; an interactive export degrades to a
            // silent one.
            debug!(path = %path.display(), "interactive export requested, exporting silently");
        }

        let raw = RawNotebook {
            cells: cells.iter().map(RawCell::from_cell).collect(),
            metadata: Map::new(),
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        };
        let text = serde_json::to_string_pretty(&raw)
            .map_err(|e| ExportError::export_failed(e.to_string()))?;

        fs::write(path, text).await.map_err(|e| {
            ExportError::io(format!("Failed to write {}: {}", path.display(), e))
        })
    }
}

/// Storage that loads the JSON notebooks the exporter writes.
#[derive(Debug, Clone, Default)]
pub struct JsonNotebookStorage;

impl JsonNotebookStorage {
    /// Creates a new JSON storage.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotebookStorage for JsonNotebookStorage {
    async fn load(&self, path: &Path) -> Result<Box<dyn NotebookModel>, StorageError> {
        let text = fs::read_to_string(path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::not_found(path.display().to_string()),
            _ => StorageError::io(format!("Failed to read {}: {}", path.display(), e)),
        })?;

        // Parse for validation only; the model keeps the exact on-disk text
        // so serialized_content round-trips byte for byte.
        serde_json::from_str::<RawNotebook>(&text)
            .map_err(|e| StorageError::malformed(path.display().to_string(), e.to_string()))?;

        Ok(Box::new(JsonNotebookModel { content: text }))
    }
}

/// Model handle produced by [`JsonNotebookStorage`].
#[derive(Debug, Clone)]
struct JsonNotebookModel {
    content: String,
}

impl NotebookModel for JsonNotebookModel {
    fn serialized_content(&self) -> Result<String, StorageError> {
        Ok(self.content.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
