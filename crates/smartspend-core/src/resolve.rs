//! Input file location

use std::path::PathBuf;

use tracing::debug;

use crate::error::{Error, Result};

/// Default name of the expenses file
pub const DEFAULT_INPUT_FILE: &str = "expenses.csv";

/// Default name of the generated report
pub const DEFAULT_REPORT_FILE: &str = "Expense_Report.txt";

/// Locates the expenses file inside a base directory
#[derive(Debug, Clone)]
pub struct InputResolver {
    base_dir: PathBuf,
    file_name: String,
}

impl InputResolver {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self::with_file_name(base_dir, DEFAULT_INPUT_FILE)
    }

    pub fn with_file_name(base_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            file_name: file_name.into(),
        }
    }

    /// Path the input is expected at, whether or not it exists
    pub fn expected_path(&self) -> PathBuf {
        self.base_dir.join(&self.file_name)
    }

    /// Return the input path, failing with [`Error::NotFound`] if nothing is there
    ///
    /// Only existence is checked; content is validated at load time.
    pub fn resolve(&self) -> Result<PathBuf> {
        let path = self.expected_path();
        if !path.is_file() {
            return Err(Error::NotFound { path });
        }
        debug!("Resolved input file: {}", path.display());
        Ok(path)
    }
}
