//! Rendering the fields of a registry.

use std::fmt;
use std::str::FromStr;

use stdnames_grammar::{Error, Result};
use stdnames_registry::{NameSet, NamesRegistry};

use crate::format::{Format, RenderOptions, render};

/// A set of strings held by a registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Full names.
    Names,
    /// Distinct objects.
    Objects,
    /// Distinct quantities.
    Quantities,
    /// Distinct operators.
    Operators,
}

impl Field {
    /// Every field, in dump order.
    pub const ALL: [Field; 4] = [Field::Names, Field::Objects, Field::Quantities, Field::Operators];

    /// The field name, used as the section heading.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Names => "names",
            Self::Objects => "objects",
            Self::Quantities => "quantities",
            Self::Operators => "operators",
        }
    }

    /// Snapshot of this field of `registry`.
    #[must_use]
    pub fn of(self, registry: &NamesRegistry) -> NameSet {
        match self {
            Self::Names => registry.names(),
            Self::Objects => registry.objects(),
            Self::Quantities => registry.quantities(),
            Self::Operators => registry.operators(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = Error;

    /// Accepts the full field name or its short alias (`n`, `o`, `q`, `op`).
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "n" | "names" => Ok(Self::Names),
            "o" | "objects" => Ok(Self::Objects),
            "q" | "quantities" => Ok(Self::Quantities),
            "op" | "operators" => Ok(Self::Operators),
            other => Err(Error::unknown_field(other)),
        }
    }
}

/// Renders the requested fields of `registry`, one section per field.
///
/// Each section is headed by the field name and sections are separated by
/// a blank line. An empty `fields` selects every field. With `sort`, each
/// section is written in lexicographic order.
///
/// # Examples
///
/// ```
/// use stdnames_registry::NamesRegistry;
/// use stdnames_runtime::{Field, Format, dumps};
///
/// let mut registry = NamesRegistry::new();
/// registry.add("air__temperature").unwrap();
/// assert_eq!(
///     dumps(&registry, Format::Text, &[Field::Names, Field::Objects], true, "\n"),
///     "names\nair__temperature\n\nobjects\nair"
/// );
/// ```
#[must_use]
pub fn dumps(
    registry: &NamesRegistry,
    format: Format,
    fields: &[Field],
    sort: bool,
    newline: &str,
) -> String {
    let fields: &[Field] = if fields.is_empty() { &Field::ALL } else { fields };

    let sections: Vec<String> = fields
        .iter()
        .map(|&field| {
            let mut items: Vec<String> = field.of(registry).into_iter().collect();
            if sort {
                items.sort();
            }
            let options = RenderOptions::new()
                .with_heading(field.as_str())
                .with_newline(newline);
            render(format, items, &options)
        })
        .collect();

    sections.join(&newline.repeat(2))
}
