//! Formatters, SQL export, scraping, validation, and CLI support for
//! CSDMS standard names.
//!
//! # Modules
//!
//! - [`format`] - Render lists of strings as wiki, YAML, MyST, or plain text
//! - [`dump`] - Render the fields of a registry
//! - [`sql`] - Text SQL dump of a registry
//! - [`scrape`] - Find standard names in free text
//! - [`validate`] - Find invalid names in a list
//! - [`cli`] - The `stdnames` command line

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod dump;
pub mod format;
pub mod scrape;
pub mod sql;
pub mod validate;

pub use dump::{Field, dumps};
pub use format::{Format, RenderOptions, render};
pub use scrape::{find_all_names, scrape_paths};
pub use sql::as_sql_commands;
pub use validate::{validate_names, validate_paths};
