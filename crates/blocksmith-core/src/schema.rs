//! Token schemas.
//!
//! A schema lists every field a component's renderer understands, the shape
//! of its value, and whether it must be present. Token sets crossing into a
//! renderer are checked against the schema first, so unknown keys, missing
//! fields, and wrongly-shaped values are reported by name.

use crate::errors::TokenError;
use crate::tokens::{TokenSet, TokenValue};
use serde::Serialize;

/// Shape of a token value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenShape {
    /// Free text (copy, colors, utility classes, comma lists).
    Text,
    /// Boolean toggle.
    Flag,
    /// Text restricted to a fixed set of literals.
    Choice(&'static [&'static str]),
}

impl TokenShape {
    fn describe(&self) -> String {
        match self {
            TokenShape::Text => "text".to_string(),
            TokenShape::Flag => "boolean".to_string(),
            TokenShape::Choice(options) => format!("one of [{}]", options.join(", ")),
        }
    }

    fn accepts(&self, value: &TokenValue) -> bool {
        match (self, value) {
            (TokenShape::Text, TokenValue::Text(_)) => true,
            (TokenShape::Flag, TokenValue::Flag(_)) => true,
            (TokenShape::Choice(options), TokenValue::Text(s)) => options.contains(&s.as_str()),
            _ => false,
        }
    }
}

/// Schema entry for one token field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub key: &'static str,
    pub shape: TokenShape,
    pub required: bool,
}

impl FieldSpec {
    pub const fn text(key: &'static str) -> Self {
        Self { key, shape: TokenShape::Text, required: true }
    }

    pub const fn optional_text(key: &'static str) -> Self {
        Self { key, shape: TokenShape::Text, required: false }
    }

    pub const fn flag(key: &'static str) -> Self {
        Self { key, shape: TokenShape::Flag, required: true }
    }

    pub const fn choice(key: &'static str, options: &'static [&'static str]) -> Self {
        Self { key, shape: TokenShape::Choice(options), required: true }
    }
}

/// The complete field contract of one component kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenSchema {
    /// Component identifier, used in error messages.
    pub component: &'static str,
    pub fields: &'static [FieldSpec],
}

impl TokenSchema {
    /// Look up a field by key.
    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Iterate over declared keys in schema order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.key)
    }

    /// Validate a complete token set.
    pub fn validate(&self, set: &TokenSet) -> Result<(), TokenError> {
        self.validate_patch(set)?;

        if let Some(missing) = self
            .fields
            .iter()
            .find(|f| f.required && !set.contains(f.key))
        {
            return Err(TokenError::MissingField {
                component: self.component.to_string(),
                field: missing.key.to_string(),
            });
        }

        Ok(())
    }

    /// Validate a partial token set: every key must be declared and every
    /// value must have the declared shape. Absent fields are not checked.
    pub fn validate_patch(&self, patch: &TokenSet) -> Result<(), TokenError> {
        for (key, value) in patch.iter() {
            let spec = self.field(key).ok_or_else(|| TokenError::UnknownField {
                component: self.component.to_string(),
                field: key.clone(),
            })?;

            if !spec.shape.accepts(value) {
                return Err(TokenError::InvalidValue {
                    component: self.component.to_string(),
                    field: key.clone(),
                    expected: spec.shape.describe(),
                    found: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: TokenSchema = TokenSchema {
        component: "demo",
        fields: &[
            FieldSpec::text("title"),
            FieldSpec::flag("showSecondary"),
            FieldSpec::choice("align", &["center", "left"]),
            FieldSpec::optional_text("accentColor"),
        ],
    };

    fn valid() -> TokenSet {
        TokenSet::new()
            .with("title", "Hello")
            .with("showSecondary", true)
            .with("align", "left")
    }

    #[test]
    fn test_validate_accepts_without_optional() {
        assert!(SCHEMA.validate(&valid()).is_ok());
    }

    #[test]
    fn test_validate_missing_field() {
        let set = TokenSet::new().with("title", "Hello").with("align", "center");
        let err = SCHEMA.validate(&set).unwrap_err();
        assert_eq!(
            err,
            TokenError::MissingField {
                component: "demo".to_string(),
                field: "showSecondary".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_unknown_field() {
        let set = valid().with("subtitle", "nope");
        let err = SCHEMA.validate(&set).unwrap_err();
        assert!(matches!(err, TokenError::UnknownField { ref field, .. } if field == "subtitle"));
    }

    #[test]
    fn test_validate_wrong_shape() {
        let set = valid().with("title", false);
        let err = SCHEMA.validate(&set).unwrap_err();
        assert!(matches!(err, TokenError::InvalidValue { ref field, .. } if field == "title"));
    }

    #[test]
    fn test_validate_choice_outside_options() {
        let set = valid().with("align", "right");
        let err = SCHEMA.validate(&set).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for token 'align' on component 'demo': expected one of [center, left], found \"right\""
        );
    }

    #[test]
    fn test_validate_patch_skips_required_check() {
        let patch = TokenSet::new().with("accentColor", "#f59e0b");
        assert!(SCHEMA.validate_patch(&patch).is_ok());
        assert!(SCHEMA.validate(&patch).is_err());
    }
}
