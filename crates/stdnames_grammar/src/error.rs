//! Error types for the standard names system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for standard names operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for standard names operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a bad name error for a string that fails the grammar.
    #[must_use]
    pub fn bad_name(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadName(name.into()))
    }

    /// Creates a bad registry error.
    ///
    /// The offending names are sorted and deduplicated so the error is
    /// deterministic regardless of input order.
    #[must_use]
    pub fn bad_registry<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort();
        names.dedup();
        Self::new(ErrorKind::BadRegistry(names))
    }

    /// Creates an error for a data directory with no versioned names file.
    #[must_use]
    pub fn no_names_file(dir: impl Into<PathBuf>) -> Self {
        Self::new(ErrorKind::NoNamesFile { dir: dir.into() })
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            source,
        })
    }

    /// Creates an invalid glob pattern error.
    #[must_use]
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        })
    }

    /// Creates an unknown output format error.
    #[must_use]
    pub fn unknown_format(format: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownFormat(format.into()))
    }

    /// Creates an unknown registry field error.
    #[must_use]
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownField(field.into()))
    }

    /// Creates an unknown error policy error.
    #[must_use]
    pub fn unknown_policy(policy: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownPolicy(policy.into()))
    }

    /// Returns the offending names carried by this error.
    ///
    /// A bad name error yields its single name, a bad registry error
    /// yields all of its names, and every other kind yields nothing.
    #[must_use]
    pub fn bad_names(&self) -> &[String] {
        match &self.kind {
            ErrorKind::BadName(name) => std::slice::from_ref(name),
            ErrorKind::BadRegistry(names) => names,
            _ => &[],
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A string is not a well-formed standard name.
    #[error("{0}")]
    BadName(String),

    /// A bulk load encountered one or more invalid names.
    #[error("Registry contains invalid names")]
    BadRegistry(Vec<String>),

    /// No versioned names file was found in a data directory.
    #[error("unable to find a names file in {}", dir.display())]
    NoNamesFile {
        /// The directory that was searched.
        dir: PathBuf,
    },

    /// Reading a names file failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A glob pattern could not be compiled.
    #[error("invalid pattern {pattern:?}: {message}")]
    InvalidPattern {
        /// The pattern as given.
        pattern: String,
        /// Why the pattern was rejected.
        message: String,
    },

    /// An output format name was not recognized.
    #[error("unknown format: {0:?} is not one of 'wiki', 'yaml', 'text', 'myst'")]
    UnknownFormat(String),

    /// A registry field name was not recognized.
    #[error("unknown field: {0:?} is not one of 'names', 'objects', 'quantities', 'operators'")]
    UnknownField(String),

    /// An error policy name was not recognized.
    #[error("unknown error policy: {0:?} is not one of 'raise', 'warn', 'pass'")]
    UnknownPolicy(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file the offending input came from.
    pub source: Option<PathBuf>,
    /// Line number in source (1-indexed).
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source file.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {}", source.display())?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        } else if let Some(line) = self.line {
            write!(f, "at line {line}")?;
        }
        Ok(())
    }
}
