// ⚠️ Error Kinds
// Every failure the library can raise. No recovery happens at any layer:
// errors travel up to the runner, which logs and stops.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AddressBookError {
    /// A line failed validation. Aborts the whole ingestion.
    #[error("Address in line {line} contains an invalid {reason}")]
    InvalidRecord { line: usize, reason: String },

    /// The input could not be opened, read or closed.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("no records to analyse")]
    EmptyInput,

    #[error("no record with a name starting with {prefix:?}")]
    NotFound { prefix: String },
}

impl AddressBookError {
    pub fn invalid(line: usize, reason: impl Into<String>) -> Self {
        AddressBookError::InvalidRecord {
            line,
            reason: reason.into(),
        }
    }

    /// Line number for validation failures
    pub fn line(&self) -> Option<usize> {
        match self {
            AddressBookError::InvalidRecord { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AddressBookError>;
