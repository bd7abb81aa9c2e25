//! Ports - interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! bridge and the outside world. Adapters implement these ports.
//!
//! - `ScratchFileSystem` - scratch directory/file operations, plus the
//!   `TempDirectory` and `TempFile` disposable handles
//! - `ErrorReporter` - side-effecting failure sink (logging/telemetry)
//! - `NotebookStorage` - loads a `NotebookModel` from a file path
//! - `NotebookExporter` - serializes cells into an on-disk notebook file

mod error_reporter;
mod file_system;
mod notebook_exporter;
mod notebook_storage;

pub use error_reporter::ErrorReporter;
pub use file_system::{FileSystemError, ScratchFileSystem, TempDirectory, TempFile};
pub use notebook_exporter::{ExportError, NotebookExporter};
pub use notebook_storage::{NotebookModel, NotebookStorage, StorageError};
