//! Finding standard names in free text.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use stdnames_grammar::{Error, Result, is_valid};

/// Loose shape of a name embedded in text. Matches are checked against the
/// full grammar before they are kept.
static CANDIDATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        \b
        [a-z]+ (?: [-~_]? [a-zA-Z0-9]+ )*
        __
        [a-z]+ (?: [-~_]? [a-zA-Z0-9]+ )*
        \b
        ",
    )
    .expect("candidate name regex is a valid regex")
});

/// Returns the valid standard names that appear anywhere in `lines`.
///
/// # Examples
///
/// ```
/// use stdnames_runtime::find_all_names;
///
/// let text = "\
/// A file with text and names (air__temperature) mixed in. Some names
/// have double underscores (like, Water__Temperature) by are not
/// valid names. Others, like water__temperature, or \"wind__speed\" are good.";
///
/// let names: Vec<String> = find_all_names(text.lines()).into_iter().collect();
/// assert_eq!(names, ["air__temperature", "water__temperature", "wind__speed"]);
/// ```
pub fn find_all_names<I, S>(lines: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names = BTreeSet::new();
    for line in lines {
        for candidate in CANDIDATE_REGEX.find_iter(line.as_ref().trim()) {
            let candidate = candidate.as_str();
            if is_valid(candidate) {
                names.insert(candidate.to_string());
            } else {
                tracing::trace!("{candidate}: skipping, not a valid name");
            }
        }
    }
    names
}

/// Scrapes every file in `paths` and returns the union of the names found.
///
/// # Errors
///
/// Returns an I/O error naming the first file that cannot be read.
pub fn scrape_paths<I, P>(paths: I) -> Result<BTreeSet<String>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut names = BTreeSet::new();
    for path in paths {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
        let found = find_all_names(contents.lines());
        tracing::debug!("{}: found {} names", path.display(), found.len());
        names.extend(found);
    }
    Ok(names)
}
