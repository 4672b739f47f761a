//! Error types for the Blocksmith engine.

use thiserror::Error;

/// Errors raised when a token set does not satisfy a component's schema.
///
/// These are caller contract violations: they are surfaced immediately and
/// never papered over with a default value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Component '{component}' is missing required token '{field}'")]
    MissingField { component: String, field: String },

    #[error("Component '{component}' has no token named '{field}'")]
    UnknownField { component: String, field: String },

    #[error("Invalid value for token '{field}' on component '{component}': expected {expected}, found {found}")]
    InvalidValue {
        component: String,
        field: String,
        expected: String,
        found: String,
    },

    #[error("Tokens for component '{found}' cannot be used with component '{expected}'")]
    KindMismatch { expected: String, found: String },

    #[error("Malformed tokens for component '{component}': {reason}")]
    Malformed { component: String, reason: String },
}

/// Errors raised by the component registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Unknown component: {id}")]
    NotFound { id: String },

    #[error("Duplicate component identifier in registry: {id}")]
    DuplicateId { id: String },
}
