//! The names registry.
//!
//! A [`NamesRegistry`] owns a set of valid full names plus three derived
//! indexes keyed by object, quantity, and operator. Every registered name
//! sits in exactly one object bucket, one quantity bucket, and one operator
//! bucket per distinct operator it uses. Empty buckets are never kept.

use std::fs;
use std::path::Path;

use im::OrdSet;
use stdnames_grammar::{Error, ErrorContext, Result, StandardName, is_valid};

use crate::config::DiscoveryConfig;
use crate::discovery::latest_names_file;
use crate::index::NameIndex;
use crate::load::{ErrorPolicy, LoadReport, ParsedNames};
use crate::pattern::GlobPattern;

/// Version reported by registries that were not loaded from a versioned file.
pub const DEFAULT_VERSION: &str = "0.0.0";

/// Number of matches returned by [`NamesRegistry::search`].
pub const DEFAULT_MAX_MATCHES: usize = 3;

/// Minimum similarity ratio used by [`NamesRegistry::search`].
pub const DEFAULT_CUTOFF: f32 = 0.6;

/// An ordered, persistent set of strings.
///
/// Cloning is O(1), so snapshots handed out by the registry are cheap and
/// never alias its internal state.
pub type NameSet = OrdSet<String>;

/// A registry of standard names.
///
/// # Examples
///
/// ```
/// use stdnames_registry::NamesRegistry;
///
/// let mut registry = NamesRegistry::new();
/// registry.add("air__temperature").unwrap();
/// registry.add("water__temperature").unwrap();
///
/// assert_eq!(registry.len(), 2);
/// assert!(registry.contains("air__temperature"));
/// assert_eq!(registry.objects().len(), 2);
/// assert_eq!(registry.quantities().len(), 1);
/// assert!(registry.operators().is_empty());
///
/// assert_eq!(registry.names_with(["temperature", "air"]).len(), 1);
/// assert_eq!(registry.match_pattern("air*").len(), 1);
/// assert_eq!(registry.search("air__temp").len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamesRegistry {
    version: String,
    names: NameSet,
    objects: NameIndex,
    quantities: NameIndex,
    operators: NameIndex,
}

impl Default for NamesRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl NamesRegistry {
    /// Creates an empty registry with version `0.0.0`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_version(DEFAULT_VERSION)
    }

    /// Creates an empty registry tagged with `version`.
    #[must_use]
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            names: NameSet::new(),
            objects: NameIndex::new(),
            quantities: NameIndex::new(),
            operators: NameIndex::new(),
        }
    }

    /// Creates a registry from lines of text.
    ///
    /// # Errors
    ///
    /// Under [`ErrorPolicy::Raise`], returns a bad registry error if any
    /// line is not a valid name.
    pub fn from_lines<I, S>(lines: I, policy: ErrorPolicy) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::new();
        registry.load(lines, policy)?;
        Ok(registry)
    }

    /// Creates a registry from one or more names files.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a file cannot be read, or a bad registry
    /// error listing the invalid names of all files together.
    pub fn from_path<I, P>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self::from_path_with_version(paths, DEFAULT_VERSION)
    }

    /// Creates a registry from one or more names files, tagged with `version`.
    ///
    /// # Errors
    ///
    /// See [`from_path`](Self::from_path).
    pub fn from_path_with_version<I, P>(paths: I, version: impl Into<String>) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut parsed = ParsedNames::new();
        for path in paths {
            let path = path.as_ref();
            let text = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
            parsed.extend_lines(text.lines(), &ErrorContext::new().with_source(path));
        }

        let mut registry = Self::with_version(version);
        registry.commit(&parsed, ErrorPolicy::Raise)?;
        Ok(registry)
    }

    /// Creates a registry from the newest bundled names file.
    ///
    /// The registry's version is taken from the file name.
    ///
    /// # Errors
    ///
    /// Returns a no names file error if the data directory holds no
    /// versioned names file, or any error from [`from_path`](Self::from_path).
    pub fn from_latest() -> Result<Self> {
        Self::from_latest_in(&DiscoveryConfig::default())
    }

    /// Creates a registry from the newest names file described by `config`.
    ///
    /// # Errors
    ///
    /// See [`from_latest`](Self::from_latest).
    pub fn from_latest_in(config: &DiscoveryConfig) -> Result<Self> {
        let (path, version) =
            latest_names_file(config).ok_or_else(|| Error::no_names_file(config.data_dir()))?;
        Self::from_path_with_version([path], version.to_string())
    }

    /// Loads names from lines of text into this registry.
    ///
    /// Blank lines and `#` comments are ignored. Under
    /// [`ErrorPolicy::Raise`] nothing is committed if any line is invalid.
    ///
    /// # Errors
    ///
    /// Under [`ErrorPolicy::Raise`], returns a bad registry error listing
    /// every invalid line.
    pub fn load<I, S>(&mut self, lines: I, policy: ErrorPolicy) -> Result<LoadReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.commit(&ParsedNames::parse(lines), policy)
    }

    fn commit(&mut self, parsed: &ParsedNames, policy: ErrorPolicy) -> Result<LoadReport> {
        let rejected = parsed.check(policy)?;
        let mut added = 0;
        for name in &parsed.valid {
            if self.insert(name.clone()) {
                added += 1;
            }
        }

        tracing::debug!(
            added,
            rejected = rejected.len(),
            total = self.len(),
            "loaded names"
        );
        Ok(LoadReport { added, rejected })
    }

    /// The version of the loaded names list.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Validates and adds a name.
    ///
    /// Returns true if the name was not already registered.
    ///
    /// # Errors
    ///
    /// Returns a bad name error if `name` is not a valid standard name.
    pub fn add(&mut self, name: &str) -> Result<bool> {
        let name = StandardName::new(name)?;
        Ok(self.insert(name))
    }

    /// Adds an already validated name.
    ///
    /// Returns true if the name was not already registered.
    pub fn insert(&mut self, name: StandardName) -> bool {
        if self.names.contains(name.name()) {
            return false;
        }

        self.objects.insert(name.object(), name.name());
        self.quantities.insert(name.quantity(), name.name());
        for operator in name.operators() {
            self.operators.insert(operator, name.name());
        }
        self.names.insert(name.into_string());
        true
    }

    /// Removes a name if it is registered.
    ///
    /// Invalid or unknown names are ignored. Returns true if a name was
    /// removed.
    pub fn discard(&mut self, name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        if !self.names.contains(name) {
            return false;
        }
        let Ok(name) = StandardName::new(name) else {
            return false;
        };

        self.objects.remove(name.object(), name.name());
        self.quantities.remove(name.quantity(), name.name());
        for operator in name.operators() {
            self.operators.remove(operator, name.name());
        }
        self.names.remove(name.name());
        true
    }

    /// Returns true if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: impl AsRef<str>) -> bool {
        self.names.contains(name.as_ref())
    }

    /// Number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no names are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over the registered names in sorted order.
    pub fn iter(&self) -> im::ordset::Iter<'_, String> {
        self.names.iter()
    }

    /// Snapshot of all registered names.
    #[must_use]
    pub fn names(&self) -> NameSet {
        self.names.clone()
    }

    /// Snapshot of the distinct objects.
    #[must_use]
    pub fn objects(&self) -> NameSet {
        self.objects.keys()
    }

    /// Snapshot of the distinct base quantities.
    #[must_use]
    pub fn quantities(&self) -> NameSet {
        self.quantities.keys()
    }

    /// Snapshot of the distinct operators.
    #[must_use]
    pub fn operators(&self) -> NameSet {
        self.operators.keys()
    }

    /// Names whose object is `object`.
    #[must_use]
    pub fn names_with_object(&self, object: &str) -> NameSet {
        self.objects.get(object).cloned().unwrap_or_default()
    }

    /// Names whose base quantity is `quantity`.
    #[must_use]
    pub fn names_with_quantity(&self, quantity: &str) -> NameSet {
        self.quantities.get(quantity).cloned().unwrap_or_default()
    }

    /// Names that apply `operator` anywhere in their operator chain.
    #[must_use]
    pub fn names_with_operator(&self, operator: &str) -> NameSet {
        self.operators.get(operator).cloned().unwrap_or_default()
    }

    /// Fuzzy search: up to three names with a similarity ratio of at least 0.6.
    #[must_use]
    pub fn search(&self, query: &str) -> NameSet {
        self.search_with(query, DEFAULT_MAX_MATCHES, DEFAULT_CUTOFF)
            .into_iter()
            .collect()
    }

    /// Fuzzy search with an explicit result limit and cutoff.
    ///
    /// Scores are `similar`'s difflib-style ratios. Results are ordered best
    /// match first, with equal scores in lexicographic order.
    #[must_use]
    pub fn search_with(&self, query: &str, limit: usize, cutoff: f32) -> Vec<String> {
        let candidates: Vec<&str> = self.names.iter().map(String::as_str).collect();
        similar::get_close_matches(query, &candidates, limit, cutoff)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Names matching a glob-style pattern (`*`, `?`, `[seq]`).
    ///
    /// The pattern must match the whole name. A malformed pattern matches
    /// nothing.
    #[must_use]
    pub fn match_pattern(&self, pattern: &str) -> NameSet {
        match GlobPattern::new(pattern) {
            Ok(glob) => self.matching(&glob),
            Err(err) => {
                tracing::debug!("{err}");
                NameSet::new()
            }
        }
    }

    /// Names matching a compiled glob pattern.
    #[must_use]
    pub fn matching(&self, pattern: &GlobPattern) -> NameSet {
        self.names
            .iter()
            .filter(|name| pattern.is_match(name))
            .cloned()
            .collect()
    }

    /// Names containing `part` as a substring.
    #[must_use]
    pub fn names_with_part(&self, part: &str) -> NameSet {
        self.names_with([part])
    }

    /// Names containing every one of `parts` as a substring.
    ///
    /// With no parts, every name matches. For a single part see
    /// [`names_with_part`](Self::names_with_part).
    #[must_use]
    pub fn names_with<I, S>(&self, parts: I) -> NameSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parts: Vec<S> = parts.into_iter().collect();
        self.names
            .iter()
            .filter(|name| parts.iter().all(|part| name.contains(part.as_ref())))
            .cloned()
            .collect()
    }

    /// Adds every name of `other` to this registry.
    ///
    /// The version of this registry is kept.
    pub fn extend_from(&mut self, other: &NamesRegistry) {
        for name in other {
            // names in another registry already passed the grammar
            if let Ok(name) = StandardName::new(name) {
                self.insert(name);
            }
        }
    }

    /// Returns a registry holding the names of both registries.
    #[must_use]
    pub fn union(&self, other: &NamesRegistry) -> Self {
        let mut union = self.clone();
        union.extend_from(other);
        union
    }

    /// Returns true if every registry invariant holds.
    ///
    /// Used by tests; every name must be valid and the indexes must agree
    /// exactly with the set of names.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut rebuilt = Self::with_version(self.version.clone());
        for name in &self.names {
            if !is_valid(name) {
                return false;
            }
            if let Ok(name) = StandardName::new(name) {
                rebuilt.insert(name);
            }
        }
        rebuilt == *self
    }
}

impl<'a> IntoIterator for &'a NamesRegistry {
    type Item = &'a String;
    type IntoIter = im::ordset::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

impl Extend<StandardName> for NamesRegistry {
    fn extend<T: IntoIterator<Item = StandardName>>(&mut self, iter: T) {
        for name in iter {
            self.insert(name);
        }
    }
}

impl FromIterator<StandardName> for NamesRegistry {
    fn from_iter<T: IntoIterator<Item = StandardName>>(iter: T) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}
