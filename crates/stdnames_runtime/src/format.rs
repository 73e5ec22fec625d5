//! Rendering lists of strings in several text formats.
//!
//! Each [`Format`] is described by a small table of decorations (heading
//! style, item prefix/suffix, list open/close lines) and rendered by the
//! single [`render`] function.

use std::fmt;
use std::str::FromStr;

use stdnames_grammar::{Error, Result};

/// Output formats for lists of names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// MediaWiki markup.
    Wiki,
    /// A YAML sequence, optionally under a mapping key.
    Yaml,
    /// One item per line.
    #[default]
    Text,
    /// A MyST markdown bullet list.
    Myst,
}

impl Format {
    /// All formats, in the order they are listed in help text.
    pub const ALL: [Format; 4] = [Format::Wiki, Format::Yaml, Format::Text, Format::Myst];

    /// The name of the format as used on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wiki => "wiki",
            Self::Yaml => "yaml",
            Self::Text => "text",
            Self::Myst => "myst",
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Wiki => Style {
                heading: Heading::Wiki,
                open: Some("<tt>"),
                close: Some("</tt>"),
                prefix: "",
                suffix: "<br/>",
                keep_blank: true,
                indent: 0,
                empty: None,
            },
            Self::Yaml => Style {
                heading: Heading::Key,
                open: None,
                close: None,
                prefix: "- ",
                suffix: "",
                keep_blank: false,
                indent: 2,
                empty: Some("[]"),
            },
            Self::Text => Style {
                heading: Heading::Verbatim,
                open: None,
                close: None,
                prefix: "",
                suffix: "",
                keep_blank: false,
                indent: 0,
                empty: None,
            },
            Self::Myst => Style {
                heading: Heading::Markdown,
                open: None,
                close: None,
                prefix: "* ",
                suffix: "",
                keep_blank: false,
                indent: 0,
                empty: None,
            },
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| Error::unknown_format(s))
    }
}

/// How a heading line is written.
#[derive(Clone, Copy, Debug)]
enum Heading {
    /// `= Heading =`, with `level` equals signs on each side.
    Wiki,
    /// `Heading:`; items are indented beneath it.
    Key,
    /// `# Heading`
    Markdown,
    /// The heading as given.
    Verbatim,
}

#[derive(Clone, Copy, Debug)]
struct Style {
    heading: Heading,
    open: Option<&'static str>,
    close: Option<&'static str>,
    prefix: &'static str,
    suffix: &'static str,
    keep_blank: bool,
    /// Item indent used only when there is a heading.
    indent: usize,
    /// Placeholder line for an empty list.
    empty: Option<&'static str>,
}

/// Options shared by all formats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Optional heading written before the items.
    pub heading: Option<String>,
    /// Heading level (only used by the wiki format).
    pub level: usize,
    /// Line separator.
    pub newline: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            heading: None,
            level: 1,
            newline: "\n".to_string(),
        }
    }
}

impl RenderOptions {
    /// Creates options with no heading.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the heading.
    #[must_use]
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Builder method to set the heading level.
    #[must_use]
    pub fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    /// Builder method to set the line separator.
    #[must_use]
    pub fn with_newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = newline.into();
        self
    }
}

/// Renders `items` in the given format.
///
/// Items are trimmed; blank items are dropped except in the wiki format.
///
/// # Examples
///
/// ```
/// use stdnames_runtime::{Format, RenderOptions, render};
///
/// let options = RenderOptions::new().with_heading("Lines");
/// assert_eq!(
///     render(Format::Yaml, ["line 1", "line 2"], &options),
///     "Lines:\n  - line 1\n  - line 2"
/// );
/// ```
pub fn render<I, S>(format: Format, items: I, options: &RenderOptions) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let style = format.style();
    let mut lines: Vec<String> = Vec::new();

    let heading = options.heading.as_deref().filter(|heading| !heading.is_empty());
    if let Some(heading) = heading {
        lines.push(match style.heading {
            Heading::Wiki => {
                let marks = "=".repeat(options.level);
                format!("{marks} {heading} {marks}")
            }
            Heading::Key => format!("{heading}:"),
            Heading::Markdown => format!("# {heading}"),
            Heading::Verbatim => heading.to_string(),
        });
    }
    let indent = if heading.is_some() { " ".repeat(style.indent) } else { String::new() };

    if let Some(open) = style.open {
        lines.push(open.to_string());
    }

    let mut any = false;
    for item in items {
        let item = item.as_ref().trim();
        if item.is_empty() && !style.keep_blank {
            continue;
        }
        any = true;
        lines.push(format!("{indent}{}{item}{}", style.prefix, style.suffix));
    }

    if let (false, Some(empty)) = (any, style.empty) {
        lines.push(format!("{indent}{empty}"));
    }
    if let Some(close) = style.close {
        lines.push(close.to_string());
    }

    lines.join(&options.newline)
}
