//! Standard Names - controlled vocabulary of CSDMS standard names
//!
//! This crate re-exports all layers of the standard names system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: stdnames_runtime   Formatters, dumps, SQL export, scraping, CLI
//! Layer 1: stdnames_registry  NamesRegistry, indexes, searches, data-file discovery
//! Layer 0: stdnames_grammar   StandardName, grammar, Error
//! ```

pub use stdnames_grammar as grammar;
pub use stdnames_registry as registry;
pub use stdnames_runtime as runtime;

pub use stdnames_grammar::{Error, ErrorKind, Result, StandardName};
pub use stdnames_registry::{ErrorPolicy, NamesRegistry};
