//! Adapters - production implementations of the ports.

mod json_notebook;
mod local_file_system;
mod tracing_reporter;

pub use json_notebook::{JsonNotebookExporter, JsonNotebookStorage};
pub use local_file_system::LocalFileSystem;
pub use tracing_reporter::TracingReporter;
