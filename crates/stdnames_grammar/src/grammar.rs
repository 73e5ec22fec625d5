//! The standard name grammar.
//!
//! A standard name has the shape
//!
//! ```text
//! object__[operator_of_]*quantity
//! ```
//!
//! Both sides of the `__` separator start with a lowercase letter (the
//! quantity clause may also start with a digit), end with a lowercase letter
//! or digit, and may contain `-`, `~`, and single `_` characters in between.
//! A doubled underscore is only allowed as the one object separator.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

/// Separator between the object and the quantity clause.
pub const OBJECT_SEPARATOR: &str = "__";

/// Separator between operators and the quantity they apply to.
pub const OPERATOR_SEPARATOR: &str = "_of_";

// `_?[...]` pairs stand in for an underscore that is never followed by
// another underscore; the regex crate has no lookahead.
static STANDARD_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^
        [a-z] (?: _?[a-z0-9~-] )* _?[a-z0-9]     # object
        __
        [a-z0-9] (?: _?[a-z0-9~-] )* _?[a-z0-9]  # quantity clause
        $
        ",
    )
    .expect("standard name grammar is a valid regex")
});

/// Returns true if `candidate` is a well-formed standard name.
///
/// The candidate is not trimmed.
///
/// # Examples
///
/// ```
/// use stdnames_grammar::is_valid;
///
/// assert!(is_valid("air__temperature"));
/// assert!(!is_valid("air_temperature"));
/// assert!(!is_valid("Air__Temperature"));
/// ```
#[must_use]
pub fn is_valid(candidate: &str) -> bool {
    STANDARD_NAME_REGEX.is_match(candidate)
}

/// Splits a standard name into `(object, quantity, operators)`.
///
/// Operators are returned outermost first, in the order they are written.
///
/// # Errors
///
/// Returns a bad name error if `name` does not match the grammar.
///
/// # Examples
///
/// ```
/// use stdnames_grammar::decompose;
///
/// let (object, quantity, operators) =
///     decompose("atmosphere_air__elevation_angle_of_gradient_of_temperature").unwrap();
/// assert_eq!(object, "atmosphere_air");
/// assert_eq!(quantity, "temperature");
/// assert_eq!(operators, ["elevation_angle", "gradient"]);
/// ```
pub fn decompose(name: &str) -> Result<(String, String, Vec<String>)> {
    if !is_valid(name) {
        return Err(Error::bad_name(name));
    }

    let mut parts = name.split(OBJECT_SEPARATOR);
    let (Some(object), Some(clause), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(Error::bad_name(name));
    };

    let (operators, quantity) = decompose_quantity(clause);
    Ok((object.to_string(), quantity, operators))
}

/// Splits a quantity clause into `(operators, quantity)`.
///
/// The clause is split on every non-overlapping `_of_`, scanning left to
/// right. The last piece is the base quantity.
///
/// ```
/// use stdnames_grammar::decompose_quantity;
///
/// let (operators, quantity) = decompose_quantity("mean_of_log_of_temperature");
/// assert_eq!(operators, ["mean", "log"]);
/// assert_eq!(quantity, "temperature");
/// ```
#[must_use]
pub fn decompose_quantity(clause: &str) -> (Vec<String>, String) {
    let mut pieces: Vec<String> = clause.split(OPERATOR_SEPARATOR).map(str::to_string).collect();
    // split always yields at least one piece
    let quantity = pieces.pop().unwrap_or_default();
    (pieces, quantity)
}

/// Builds a standard name from its parts.
///
/// This is the inverse of [`decompose`]. No validation is performed.
///
/// ```
/// use stdnames_grammar::compose;
///
/// assert_eq!(compose("air", "temperature", &[] as &[&str]), "air__temperature");
/// assert_eq!(compose("air", "temperature", &["log"]), "air__log_of_temperature");
/// ```
#[must_use]
pub fn compose<S: AsRef<str>>(object: &str, quantity: &str, operators: &[S]) -> String {
    let mut name = String::with_capacity(object.len() + quantity.len() + 2);
    name.push_str(object);
    name.push_str(OBJECT_SEPARATOR);
    for operator in operators {
        name.push_str(operator.as_ref());
        name.push_str(OPERATOR_SEPARATOR);
    }
    name.push_str(quantity);
    name
}
