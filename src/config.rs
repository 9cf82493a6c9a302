// ⚙️ Runtime configuration
// Read from the environment; no command-line flags.
//
//   ADDRESS_BOOK_PATH    address book file   (default: data/addressBook.dat)
//   ADDRESS_BOOK_OUTPUT  "text" or "json"    (default: text)
//   RUST_LOG             log filter, handled by env_logger

use crate::source::DEFAULT_PATH;
use anyhow::{anyhow, Result};
use std::path::PathBuf;

pub const PATH_VAR: &str = "ADDRESS_BOOK_PATH";
pub const OUTPUT_VAR: &str = "ADDRESS_BOOK_OUTPUT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow!("Unknown output format '{}' (expected text or json)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_path: PathBuf,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: PathBuf::from(DEFAULT_PATH),
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (lets tests avoid touching process env)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup(PATH_VAR).filter(|p| !p.trim().is_empty()) {
            config.data_path = PathBuf::from(path);
        }
        if let Some(output) = lookup(OUTPUT_VAR) {
            config.output = OutputFormat::parse(&output)?;
        }

        Ok(config)
    }
}
