//! Grammar, validation, and decomposition of CSDMS standard names.
//!
//! This crate provides:
//! - [`is_valid`] - Checks a candidate string against the name grammar
//! - [`decompose`] / [`compose`] - Lossless conversion between a name and its parts
//! - [`StandardName`] - A validated name together with its parsed parts
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod grammar;
pub mod name;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use grammar::{
    OBJECT_SEPARATOR, OPERATOR_SEPARATOR, compose, decompose, decompose_quantity, is_valid,
};
pub use name::StandardName;
