//! Editing metadata for token fields.
//!
//! Field descriptors never affect rendering. They describe how an external
//! editor should present each token: label, input control, select options,
//! and whether the control is currently visible.

use crate::tokens::TokenSet;
use serde::Serialize;

/// Input control used to edit a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Textarea,
    Color,
    Boolean,
    Select,
}

/// One choice of a select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Visibility predicate evaluated against the live token set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Always,
    /// Visible only while the named boolean token is `true`.
    WhenEnabled(String),
}

impl Visibility {
    pub fn evaluate(&self, tokens: &TokenSet) -> bool {
        match self {
            Visibility::Always => true,
            Visibility::WhenEnabled(key) => tokens.flag(key).unwrap_or(false),
        }
    }
}

/// Editor metadata for one token field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    pub visibility: Visibility,
}

impl FieldDescriptor {
    /// Create a descriptor with no options that is always visible.
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            options: Vec::new(),
            visibility: Visibility::Always,
        }
    }

    /// Create a select descriptor from `(label, value)` pairs.
    pub fn select(
        key: impl Into<String>,
        label: impl Into<String>,
        options: &[(&str, &str)],
    ) -> Self {
        let mut field = Self::new(key, label, FieldKind::Select);
        field.options = options
            .iter()
            .map(|(label, value)| SelectOption::new(*label, *value))
            .collect();
        field
    }

    /// Only show this field while `flag` is enabled.
    pub fn visible_when(mut self, flag: impl Into<String>) -> Self {
        self.visibility = Visibility::WhenEnabled(flag.into());
        self
    }

    /// Whether an editor should currently show this field.
    pub fn is_visible(&self, tokens: &TokenSet) -> bool {
        self.visibility.evaluate(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_follows_flag() {
        let field = FieldDescriptor::new("secondaryButtonLabel", "Secondary Button", FieldKind::Text)
            .visible_when("showSecondary");

        let on = TokenSet::new().with("showSecondary", true);
        let off = TokenSet::new().with("showSecondary", false);
        assert!(field.is_visible(&on));
        assert!(!field.is_visible(&off));
        assert!(!field.is_visible(&TokenSet::new()));
    }

    #[test]
    fn test_select_options_keep_order() {
        let field = FieldDescriptor::select("align", "Align", &[("Center", "center"), ("Left", "left")]);
        assert_eq!(field.kind, FieldKind::Select);
        let values: Vec<_> = field.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["center", "left"]);
    }

    #[test]
    fn test_plain_field_always_visible() {
        let field = FieldDescriptor::new("title", "Title", FieldKind::Text);
        assert!(field.is_visible(&TokenSet::new()));
    }
}
