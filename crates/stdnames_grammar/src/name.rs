//! Validated standard names.
//!
//! A [`StandardName`] holds the canonical full name along with its parsed
//! object, quantity, and operators. Equality, hashing, and ordering are
//! defined over the full name only.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::grammar::{compose, decompose};

/// A validated standard name and its parts.
///
/// Values are immutable; the `with_*` methods build a new name with one
/// part replaced.
#[derive(Clone)]
pub struct StandardName {
    name: String,
    object: String,
    quantity: String,
    operators: Vec<String>,
}

impl StandardName {
    /// Parses and validates a standard name.
    ///
    /// # Errors
    ///
    /// Returns a bad name error if `name` does not match the grammar.
    pub fn new(name: &str) -> Result<Self> {
        let (object, quantity, operators) = decompose(name)?;
        Ok(Self {
            name: name.to_string(),
            object,
            quantity,
            operators,
        })
    }

    /// Builds a standard name from its parts.
    ///
    /// # Errors
    ///
    /// Returns a bad name error if the composed name does not match the
    /// grammar, or if it would not decompose back into the same parts.
    pub fn from_parts<S: AsRef<str>>(object: &str, quantity: &str, operators: &[S]) -> Result<Self> {
        let composed = compose(object, quantity, operators);
        let name = Self::new(&composed)?;

        let same_operators = name.operators.len() == operators.len()
            && name
                .operators
                .iter()
                .zip(operators)
                .all(|(parsed, given)| parsed == given.as_ref());
        if name.object != object || name.quantity != quantity || !same_operators {
            return Err(Error::bad_name(composed));
        }
        Ok(name)
    }

    /// The full standard name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The object part of the name.
    #[must_use]
    pub fn object(&self) -> &str {
        &self.object
    }

    /// The base quantity, with all operators stripped.
    #[must_use]
    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    /// The operators applied to the quantity, outermost first.
    #[must_use]
    pub fn operators(&self) -> &[String] {
        &self.operators
    }

    /// Returns a copy of this name with a different object.
    ///
    /// # Errors
    ///
    /// Returns a bad name error if the new name is not valid.
    pub fn with_object(&self, object: &str) -> Result<Self> {
        Self::from_parts(object, &self.quantity, &self.operators)
    }

    /// Returns a copy of this name with a different quantity.
    ///
    /// # Errors
    ///
    /// Returns a bad name error if the new name is not valid.
    pub fn with_quantity(&self, quantity: &str) -> Result<Self> {
        Self::from_parts(&self.object, quantity, &self.operators)
    }

    /// Returns a copy of this name with different operators.
    ///
    /// # Errors
    ///
    /// Returns a bad name error if the new name is not valid.
    pub fn with_operators<S: AsRef<str>>(&self, operators: &[S]) -> Result<Self> {
        Self::from_parts(&self.object, &self.quantity, operators)
    }

    /// Consumes the name, returning the full name string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.name
    }
}

impl fmt::Debug for StandardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StandardName({:?})", self.name)
    }
}

impl fmt::Display for StandardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for StandardName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for StandardName {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for StandardName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<StandardName> for String {
    fn from(name: StandardName) -> Self {
        name.name
    }
}

impl AsRef<str> for StandardName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl Borrow<str> for StandardName {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl PartialEq for StandardName {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for StandardName {}

impl PartialEq<str> for StandardName {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}

impl PartialEq<&str> for StandardName {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

impl Hash for StandardName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for StandardName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StandardName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}
