// Address Book Analyser - Core Library
// Ingestion (source + validator) and reporting, shared by the CLI and tests

pub mod error;
pub mod record;
pub mod validator;
pub mod source;
pub mod report;
pub mod config;

// Re-export commonly used types
pub use error::{AddressBookError, Result};
pub use record::{Record, Sex};
pub use validator::RecordValidator;
pub use source::{
    RecordSource, FileRecordSource, MemoryRecordSource,
    parse_records, DEFAULT_PATH,
};
pub use report::{Report, ReportEngine};
pub use config::{Config, OutputFormat};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
