//! Discovery of the newest versioned names file.
//!
//! Versions are compared numerically component by component, so
//! `0.10.0` is newer than `0.9.0`. File names whose version part does not
//! parse are not candidates.

use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::config::DiscoveryConfig;

/// A dotted numeric release version such as `2.0.0`.
///
/// Missing trailing components compare as zero, so `1.0` equals `1.0.0`.
#[derive(Clone, Debug)]
pub struct Version {
    components: Vec<u64>,
}

/// Error returned when a string is not a version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}: not a version string")]
pub struct ParseVersionError(pub String);

impl Version {
    /// Creates a `major.minor.patch` version.
    #[must_use]
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            components: vec![major, minor, patch],
        }
    }

    /// The numeric components, most significant first.
    #[must_use]
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    fn component(&self, index: usize) -> u64 {
        self.components.get(index).copied().unwrap_or(0)
    }
}

impl FromStr for Version {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components = s
            .split('.')
            .map(|part| {
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                part.parse::<u64>().ok()
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| ParseVersionError(s.to_string()))?;

        Ok(Self { components })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|i| self.component(i).cmp(&other.component(i)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

/// Finds the names file with the highest version in a data directory.
///
/// Returns the file's path and its version, or `None` if the directory
/// cannot be read or holds no file named `<prefix><version><suffix>`.
#[must_use]
pub fn latest_names_file(config: &DiscoveryConfig) -> Option<(PathBuf, Version)> {
    let entries = match fs::read_dir(config.data_dir()) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::debug!(dir = %config.data_dir().display(), "cannot read data directory: {err}");
            return None;
        }
    };

    let mut file_names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    file_names.sort();

    let mut newest: Option<(String, Version)> = None;
    for file_name in file_names {
        let Some(version_str) = config.version_str(&file_name) else {
            continue;
        };
        let version = match version_str.parse::<Version>() {
            Ok(version) => version,
            Err(err) => {
                tracing::debug!("skipping {file_name}: {err}");
                continue;
            }
        };
        if newest.as_ref().is_none_or(|(_, best)| version > *best) {
            newest = Some((file_name, version));
        }
    }

    newest.map(|(file_name, version)| {
        tracing::debug!("latest names file is {file_name} (version {version})");
        (config.data_dir().join(file_name), version)
    })
}
