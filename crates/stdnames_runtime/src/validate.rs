//! Checking lists of names.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use stdnames_grammar::{Error, ErrorContext, Result};
use stdnames_registry::ParsedNames;

/// Returns the invalid entries of `lines`, sorted.
///
/// Lines are read the same way a registry reads them: trimmed, with `#`
/// comments and blank lines ignored.
///
/// # Examples
///
/// ```
/// use stdnames_runtime::validate_names;
///
/// let invalid = validate_names(["air__temperature", "Water__temperature", "water_temperature"]);
/// let invalid: Vec<String> = invalid.into_iter().collect();
/// assert_eq!(invalid, ["Water__temperature", "water_temperature"]);
/// ```
pub fn validate_names<I, S>(lines: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ParsedNames::parse(lines).invalid
}

/// Returns the invalid entries across every file in `paths`.
///
/// # Errors
///
/// Returns an I/O error naming the first file that cannot be read.
pub fn validate_paths<I, P>(paths: I) -> Result<BTreeSet<String>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut parsed = ParsedNames::new();
    for path in paths {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
        parsed.extend_lines(contents.lines(), &ErrorContext::new().with_source(path));
    }
    Ok(parsed.invalid)
}
