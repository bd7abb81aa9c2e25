//! TempModelBridge - scratch storage and notebook model round-trips.
//!
//! The single orchestrating service of this crate. All real work happens in
//! the injected collaborators; the bridge owns scratch path generation, the
//! export/copy/load round-trip, and the cleanup discipline around it. No
//! state is retained between calls.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::ScratchConfig;
use crate::domain::{BridgeError, Cell};
use crate::ports::{
    ErrorReporter, FileSystemError, NotebookExporter, NotebookModel, NotebookStorage,
    ScratchFileSystem, TempDirectory, TempFile,
};

/// File name the round-tripped notebook is copied to inside its scratch
/// directory. Exactly `.ipynb`, extension only.
const SCRATCH_NOTEBOOK_NAME: &str = ".ipynb";

/// Bridges in-memory notebook cell data and temporary on-disk notebook
/// files.
///
/// Collaborators are constructor-injected; there is no global registry.
/// Every call operates on freshly generated, UUID-named scratch paths, so
/// concurrent calls never contend.
pub struct TempModelBridge {
    file_system: Arc<dyn ScratchFileSystem>,
    error_reporter: Arc<dyn ErrorReporter>,
    storage: Arc<dyn NotebookStorage>,
    exporter: Arc<dyn NotebookExporter>,
    temp_root: PathBuf,
}

impl TempModelBridge {
    /// Creates a bridge rooted at the platform temp directory.
    pub fn new(
        file_system: Arc<dyn ScratchFileSystem>,
        error_reporter: Arc<dyn ErrorReporter>,
        storage: Arc<dyn NotebookStorage>,
        exporter: Arc<dyn NotebookExporter>,
    ) -> Self {
        Self::with_config(
            file_system,
            error_reporter,
            storage,
            exporter,
            &ScratchConfig::default(),
        )
    }

    /// Creates a bridge with an explicit [`ScratchConfig`].
    pub fn with_config(
        file_system: Arc<dyn ScratchFileSystem>,
        error_reporter: Arc<dyn ErrorReporter>,
        storage: Arc<dyn NotebookStorage>,
        exporter: Arc<dyn NotebookExporter>,
        config: &ScratchConfig,
    ) -> Self {
        Self {
            file_system,
            error_reporter,
            storage,
            exporter,
            temp_root: config.effective_temp_root(),
        }
    }

    /// Create a fresh scratch directory under the temp root.
    ///
    /// The directory name is a new v4 UUID, so concurrent callers get
    /// distinct paths. Creation failure propagates; cleanup is the returned
    /// handle's job (see [`TempDirectory::dispose`]).
    pub async fn generate_temp_dir(&self) -> Result<TempDirectory, FileSystemError> {
        let path = self.temp_root.join(Uuid::new_v4().to_string());
        self.file_system.create_directory(&path).await?;
        Ok(TempDirectory::new(path, self.file_system.clone()))
    }

    /// Write a model's serialized content (empty string when `model` is
    /// `None`) to `file_name` inside `dir_path`, which the caller ensures
    /// exists.
    ///
    /// Known surprising contract, preserved deliberately: any failure
    /// obtaining the content or writing the file is forwarded to the error
    /// reporter and masked - the computed path is returned as if the write
    /// succeeded. Callers cannot detect the failure from the return value,
    /// only through the reporter side channel.
    pub async fn make_file_in_directory(
        &self,
        model: Option<&dyn NotebookModel>,
        file_name: &str,
        dir_path: &Path,
    ) -> PathBuf {
        let new_file_path = dir_path.join(file_name);

        let written: Result<(), BridgeError> = async {
            let content = match model {
                Some(model) => model.serialized_content()?,
                None => String::new(),
            };
            self.file_system.write_file(&new_file_path, &content).await?;
            Ok(())
        }
        .await;

        if let Err(err) = written {
            self.error_reporter.report(&err).await;
        }

        new_file_path
    }

    /// Build a notebook model from an ordered cell list.
    ///
    /// Exports the cells to a scratch temp file (non-interactively), copies
    /// it to `<temp dir>/.ipynb`, and loads a model from the copy. The temp
    /// file and temp directory are disposed on every exit path; export,
    /// copy, and load failures propagate to the caller after cleanup runs.
    pub async fn get_model_from_cells(
        &self,
        cells: &[Cell],
    ) -> Result<Box<dyn NotebookModel>, BridgeError> {
        let temp_dir = self.generate_temp_dir().await?;

        let result = match self.file_system.create_temp_file(SCRATCH_NOTEBOOK_NAME).await {
            Ok(path) => {
                let temp_file = TempFile::new(path, self.file_system.clone());
                let result = self
                    .round_trip(cells, temp_file.path(), temp_dir.path())
                    .await;
                temp_file.dispose().await;
                result
            }
            Err(err) => Err(err.into()),
        };

        temp_dir.dispose().await;
        result
    }

    async fn round_trip(
        &self,
        cells: &[Cell],
        temp_file: &Path,
        temp_dir: &Path,
    ) -> Result<Box<dyn NotebookModel>, BridgeError> {
        self.exporter.export_to_file(cells, temp_file, false).await?;

        let target = temp_dir.join(SCRATCH_NOTEBOOK_NAME);
        self.file_system.copy_file(temp_file, &target).await?;

        let model = self.storage.load(&target).await?;
        Ok(model)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
