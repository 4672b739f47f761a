//! Token values and flat token sets.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single customizable value.
///
/// Enumerated fields (alignment, background style, ...) travel as `Text`
/// and are constrained by the component's schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Text(String),
    Flag(bool),
}

impl TokenValue {
    /// Try to get as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as a boolean flag.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            TokenValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// Short description of the value's shape, for error messages.
    pub fn shape_name(&self) -> &'static str {
        match self {
            TokenValue::Text(_) => "text",
            TokenValue::Flag(_) => "boolean",
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Text(s) => write!(f, "{:?}", s),
            TokenValue::Flag(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Text(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::Text(value)
    }
}

impl From<bool> for TokenValue {
    fn from(value: bool) -> Self {
        TokenValue::Flag(value)
    }
}

/// A flat, insertion-ordered mapping of field name to value.
///
/// Used both for complete token sets and for partial patches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSet {
    tokens: IndexMap<String, TokenValue>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<TokenValue>) {
        self.tokens.insert(key.into(), value.into());
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<TokenValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a value by field name.
    pub fn get(&self, key: &str) -> Option<&TokenValue> {
        self.tokens.get(key)
    }

    /// Get a text value by field name.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(TokenValue::as_text)
    }

    /// Get a flag value by field name.
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(TokenValue::as_flag)
    }

    /// Check if a field is present.
    pub fn contains(&self, key: &str) -> bool {
        self.tokens.contains_key(key)
    }

    /// Overlay every entry of `patch` on top of this set.
    ///
    /// Existing keys keep their position; new keys are appended.
    pub fn merge(&mut self, patch: &TokenSet) {
        for (key, value) in patch.iter() {
            self.tokens.insert(key.clone(), value.clone());
        }
    }

    /// Iterate over all tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &TokenValue)> {
        self.tokens.iter()
    }

    /// Iterate over field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<K: Into<String>, V: Into<TokenValue>> FromIterator<(K, V)> for TokenSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = TokenSet::new();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}
