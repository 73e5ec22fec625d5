//! Configuration for names-file discovery.

use std::env;
use std::path::{Path, PathBuf};

use crate::discovery::Version;

/// Environment variable that overrides the bundled data directory.
pub const DATA_DIR_ENV: &str = "STDNAMES_DATA_DIR";

/// Directory holding the names files shipped with this crate.
pub const BUNDLED_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

/// Where and how to look for versioned names files.
///
/// Names files are called `<prefix><version><suffix>`, for example
/// `names-2.0.0.txt`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// Directory to search.
    pub data_dir: PathBuf,

    /// File name prefix before the version.
    pub prefix: String,

    /// File name suffix after the version.
    pub suffix: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        let data_dir = env::var_os(DATA_DIR_ENV)
            .filter(|dir| !dir.is_empty())
            .map_or_else(|| PathBuf::from(BUNDLED_DATA_DIR), PathBuf::from);

        Self {
            data_dir,
            prefix: "names-".to_string(),
            suffix: ".txt".to_string(),
        }
    }
}

impl DiscoveryConfig {
    /// Creates a configuration that searches `data_dir` with the default
    /// prefix and suffix.
    #[must_use]
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self::default().with_data_dir(data_dir)
    }

    /// Builder method to set the data directory.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Builder method to set the file name prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Builder method to set the file name suffix.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// The directory being searched.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Extracts the version part of a file name, if it has the expected
    /// prefix and suffix.
    #[must_use]
    pub fn version_str<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        file_name
            .strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())
    }

    /// The file name used for `version`.
    #[must_use]
    pub fn file_name(&self, version: &Version) -> String {
        format!("{}{version}{}", self.prefix, self.suffix)
    }
}
