//! Bulk loading of names from line sources.
//!
//! Each line is trimmed, everything from a `#` onward is dropped, and blank
//! lines are skipped. What remains is validated; what happens to invalid
//! lines is decided by an [`ErrorPolicy`].

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use stdnames_grammar::{Error, ErrorContext, Result, StandardName};

/// What a bulk load does when it meets invalid names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ErrorPolicy {
    /// Fail the whole load, committing nothing.
    #[default]
    Raise,
    /// Commit the valid names and log a warning per invalid name.
    Warn,
    /// Commit the valid names and drop invalid ones silently.
    Pass,
}

impl FromStr for ErrorPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "raise" => Ok(Self::Raise),
            "warn" => Ok(Self::Warn),
            "pass" => Ok(Self::Pass),
            other => Err(Error::unknown_policy(other)),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Raise => "raise",
            Self::Warn => "warn",
            Self::Pass => "pass",
        })
    }
}

/// Outcome of a successful load into a registry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Names that were not already registered.
    pub added: usize,
    /// Invalid lines that were skipped, sorted.
    pub rejected: Vec<String>,
}

/// Names read from one or more line sources, split by validity.
#[derive(Clone, Debug, Default)]
pub struct ParsedNames {
    /// Lines that are valid standard names.
    pub valid: BTreeSet<StandardName>,
    /// Lines that failed the grammar, as written (after trimming).
    pub invalid: BTreeSet<String>,
    first_invalid: Option<ErrorContext>,
}

impl ParsedNames {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates every line of an anonymous source.
    #[must_use]
    pub fn parse<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Self::new();
        parsed.extend_lines(lines, &ErrorContext::new());
        parsed
    }

    /// Validates every line of a source, tagging failures with `context`.
    ///
    /// The line number of the first failure is added to the context.
    pub fn extend_lines<I, S>(&mut self, lines: I, context: &ErrorContext)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (index, line) in lines.into_iter().enumerate() {
            let Some(candidate) = strip_line(line.as_ref()) else {
                continue;
            };
            match StandardName::new(candidate) {
                Ok(name) => {
                    self.valid.insert(name);
                }
                Err(_) => {
                    if self.first_invalid.is_none() {
                        self.first_invalid = Some(context.clone().with_line(index + 1));
                    }
                    self.invalid.insert(candidate.to_string());
                }
            }
        }
    }

    /// Applies `policy` to the invalid names.
    ///
    /// Returns the sorted invalid names for `Warn` and `Pass`; under `Warn`
    /// each one is also logged.
    ///
    /// # Errors
    ///
    /// Under `Raise`, returns a bad registry error carrying every invalid
    /// name if there are any.
    pub fn check(&self, policy: ErrorPolicy) -> Result<Vec<String>> {
        if self.invalid.is_empty() {
            return Ok(Vec::new());
        }
        match policy {
            ErrorPolicy::Raise => {
                let error = Error::bad_registry(self.invalid.iter().cloned());
                Err(match &self.first_invalid {
                    Some(context) => error.with_context(context.clone()),
                    None => error,
                })
            }
            ErrorPolicy::Warn => {
                for name in &self.invalid {
                    tracing::warn!("{name}: not a valid name");
                }
                Ok(self.invalid.iter().cloned().collect())
            }
            ErrorPolicy::Pass => Ok(self.invalid.iter().cloned().collect()),
        }
    }
}

/// Reads standard names from lines of text.
///
/// # Errors
///
/// Under [`ErrorPolicy::Raise`], returns a bad registry error listing every
/// invalid line.
///
/// # Examples
///
/// ```
/// use stdnames_registry::{ErrorPolicy, load_names_from_txt};
///
/// let text = "air__temperature\nWater__Temperature\n";
/// let names = load_names_from_txt(text.lines(), ErrorPolicy::Pass).unwrap();
/// assert_eq!(names.len(), 1);
/// ```
pub fn load_names_from_txt<I, S>(lines: I, policy: ErrorPolicy) -> Result<BTreeSet<StandardName>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parsed = ParsedNames::parse(lines);
    parsed.check(policy)?;
    Ok(parsed.valid)
}

/// Trims a line and removes any `#` comment, returning `None` if nothing is left.
pub(crate) fn strip_line(line: &str) -> Option<&str> {
    let content = line.split_once('#').map_or(line, |(before, _)| before).trim();
    (!content.is_empty()).then_some(content)
}
