//! Conversion between typed token structs and flat token sets.

use crate::Block;
use blocksmith_core::{TokenError, TokenSet, TokenValue};
use serde_json::Value;

/// Flatten a typed token struct. `None` optionals are skipped.
pub(crate) fn encode<B: Block>(block: &B) -> Result<TokenSet, TokenError> {
    let component = B::KIND.as_str();
    let value = serde_json::to_value(block).map_err(|e| malformed(component, e))?;

    let Value::Object(fields) = value else {
        return Err(TokenError::Malformed {
            component: component.to_string(),
            reason: "token struct did not serialize to an object".to_string(),
        });
    };

    let mut set = TokenSet::new();
    for (key, value) in fields {
        match value {
            Value::String(s) => set.insert(key, TokenValue::Text(s)),
            Value::Bool(b) => set.insert(key, TokenValue::Flag(b)),
            Value::Null => {}
            other => {
                return Err(TokenError::Malformed {
                    component: component.to_string(),
                    reason: format!("token '{}' has unsupported value {}", key, other),
                })
            }
        }
    }
    Ok(set)
}

/// Validate a flat token set against `B`'s schema, then decode it.
pub(crate) fn decode<B: Block>(set: &TokenSet) -> Result<B, TokenError> {
    B::schema().validate(set)?;

    let component = B::KIND.as_str();
    let value = serde_json::to_value(set).map_err(|e| malformed(component, e))?;
    serde_json::from_value(value).map_err(|e| malformed(component, e))
}

fn malformed(component: &str, err: serde_json::Error) -> TokenError {
    TokenError::Malformed {
        component: component.to_string(),
        reason: err.to_string(),
    }
}
