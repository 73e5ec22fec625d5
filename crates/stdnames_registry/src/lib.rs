//! Indexed registry of CSDMS standard names.
//!
//! This crate provides:
//! - [`NamesRegistry`] - The set of registered names with object, quantity,
//!   and operator indexes
//! - [`ErrorPolicy`] - What a bulk load does with invalid lines
//! - [`DiscoveryConfig`] / [`latest_names_file`] - Finding the newest bundled names file
//! - [`GlobPattern`] - fnmatch-style patterns used by [`NamesRegistry::match_pattern`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod discovery;
pub mod index;
pub mod load;
pub mod pattern;
pub mod registry;

pub use config::DiscoveryConfig;
pub use discovery::{Version, latest_names_file};
pub use index::NameIndex;
pub use load::{ErrorPolicy, LoadReport, ParsedNames, load_names_from_txt};
pub use pattern::GlobPattern;
pub use registry::{DEFAULT_CUTOFF, DEFAULT_MAX_MATCHES, DEFAULT_VERSION, NameSet, NamesRegistry};

pub use stdnames_grammar::{Error, ErrorKind, Result, StandardName};
