use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Context, Result};
use crate::utils::{list_files_with_extensions, FileEntry};

pub mod content;
pub mod form;
pub mod matrix;
pub mod media;
pub mod metrics;
pub mod order;
pub mod series;
pub mod sidebar;
pub mod stats;
pub mod table;
pub mod upload;

pub use order::{summarize, Catalog, OrderSummary, Quantity, QuantitySelection};
pub use stats::{describe, describe_age, Describe};
pub use table::{sample_people, CellValue, DataTable};
pub use upload::{AcceptPolicy, UploadError, UploadPreview};

/// Facade over the directories the application reads from and logs into.
pub struct Workspace {
    root: PathBuf,
    uploads_dir: PathBuf,
    logs_dir: PathBuf,
}

impl Workspace {
    pub fn from_config(root: impl Into<PathBuf>, config: &Config) -> Self {
        Self {
            root: root.into(),
            uploads_dir: config.paths.uploads_dir.clone(),
            logs_dir: config.paths.logs_dir.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn uploads_dir(&self) -> &Path {
        &self.uploads_dir
    }

    pub fn logs_dir(&self) -> &Path {
        &self.logs_dir
    }

    /// Ensure the target directories exist before the UI starts.
    pub fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.uploads_dir).with_context(|| {
            format!(
                "Failed to create uploads directory {}",
                self.uploads_dir.display()
            )
        })?;
        fs::create_dir_all(&self.logs_dir).with_context(|| {
            format!("Failed to create logs directory {}", self.logs_dir.display())
        })?;
        Ok(())
    }

    /// Files in the uploads directory matching the declared accepted types, newest first.
    pub fn upload_candidates(&self, policy: &AcceptPolicy) -> Vec<FileEntry> {
        list_files_with_extensions(&self.uploads_dir, policy.extensions())
    }
}
