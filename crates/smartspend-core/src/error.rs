//! Error types for SmartSpend

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not find input file\nExpected at: {}\nMake sure the file is inside the same folder as the program", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read CSV file: {message}")]
    Load {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    #[error("CSV format incorrect!\nRequired columns: {}\nFound columns: {}", required.join(", "), found.join(", "))]
    Schema {
        required: Vec<String>,
        found: Vec<String>,
    },

    #[error("No transactions found in input; nothing to analyze")]
    EmptyInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Load {
            message: "malformed CSV data".to_string(),
            source: Some(err),
        }
    }
}

impl Error {
    /// Load failure with no underlying parser error (bad cell values)
    pub fn load(message: impl Into<String>) -> Self {
        Error::Load {
            message: message.into(),
            source: None,
        }
    }

    /// Columns that were required but absent (empty for non-schema errors)
    pub fn missing_columns(&self) -> Vec<&str> {
        match self {
            Error::Schema { required, found } => required
                .iter()
                .filter(|r| !found.contains(r))
                .map(String::as_str)
                .collect(),
            _ => Vec::new(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
