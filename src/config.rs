// Runtime configuration: where the course list lives.
//
// Resolution order is command-line flag, then `GPA_DATA_FILE`, then
// `gpa_data.txt` in the working directory.

use crate::storage::DEFAULT_DATA_FILE;
use std::path::PathBuf;

pub const DATA_FILE_ENV: &str = "GPA_DATA_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
}

impl Config {
    /// Create a Config from the environment, falling back to the default
    /// data file when `GPA_DATA_FILE` is unset or blank.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_file = lookup(DATA_FILE_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
        Self { data_file }
    }

    /// Apply a command-line override on top of whatever was configured.
    pub fn with_data_file(mut self, data_file: Option<PathBuf>) -> Self {
        if let Some(path) = data_file {
            self.data_file = path;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}
