//! Rendered markup and the helpers renderers share.

use serde::Serialize;
use std::fmt;

/// Separator for list-valued token fields (links, questions, names, ...).
pub const LIST_DELIMITER: char = ',';

/// Structural markup produced by a renderer. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Markup {
    fn from(markup: String) -> Self {
        Self(markup)
    }
}

/// Split a delimited list field into trimmed segments, in source order.
///
/// An empty field yields a single empty segment.
pub fn split_list(value: &str) -> Vec<&str> {
    value.split(LIST_DELIMITER).map(str::trim).collect()
}

/// Render one fragment per list segment and concatenate them.
pub fn map_list<F>(value: &str, mut fragment: F) -> String
where
    F: FnMut(usize, &str) -> String,
{
    split_list(value)
        .into_iter()
        .enumerate()
        .map(|(index, item)| fragment(index, item))
        .collect()
}

/// Three-color palette assigned to list items by `index mod 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette<'a> {
    colors: [&'a str; 3],
}

impl<'a> Palette<'a> {
    /// Build the palette `[primary, accent, secondary]`, with `secondary`
    /// falling back to `primary` when unset.
    pub fn new(primary: &'a str, accent: &'a str, secondary: Option<&'a str>) -> Self {
        Self {
            colors: [primary, accent, secondary.unwrap_or(primary)],
        }
    }

    /// Color for the item at `index`.
    pub fn cycle(&self, index: usize) -> &'a str {
        self.colors[index % self.colors.len()]
    }
}
