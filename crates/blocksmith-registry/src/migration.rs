//! Versioned migration of saved token sets to current defaults.
//!
//! When a catalog default changes, token sets saved against the older
//! catalog still carry the superseded value. Each [`DefaultsMigration`]
//! replaces that value with the new default, but only while the field still
//! holds exactly the old default: customized values are left alone.

use blocksmith_blocks::Tokens;
use blocksmith_core::{ComponentKind, TokenError, TokenValue};

/// Catalog defaults version produced by this build.
pub const DEFAULTS_VERSION: u32 = 2;

/// One default value change, introduced in `version`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultsMigration {
    pub version: u32,
    pub kind: ComponentKind,
    pub field: &'static str,
    pub from: &'static str,
    pub to: &'static str,
}

impl DefaultsMigration {
    /// Apply to `tokens` if it targets their kind and the field still holds `from`.
    pub fn apply(&self, tokens: Tokens) -> Result<Tokens, TokenError> {
        if tokens.kind() != self.kind {
            return Ok(tokens);
        }
        match tokens.get(self.field) {
            Some(TokenValue::Text(ref value)) if value == self.from => {
                tracing::debug!(
                    component = %self.kind,
                    field = self.field,
                    version = self.version,
                    "migrating superseded default"
                );
                tokens.with_field(self.field, self.to)
            }
            _ => Ok(tokens),
        }
    }
}

/// Every default change, oldest first.
pub const MIGRATIONS: &[DefaultsMigration] = &[DefaultsMigration {
    version: 2,
    kind: ComponentKind::Hero,
    field: "backgroundStyle",
    from: "gradient",
    to: "theme",
}];

/// Bring tokens saved under `saved_version` up to [`DEFAULTS_VERSION`].
///
/// Each migration newer than `saved_version` runs once, in order.
pub fn migrate(tokens: Tokens, saved_version: u32) -> Result<Tokens, TokenError> {
    MIGRATIONS
        .iter()
        .filter(|m| m.version > saved_version)
        .try_fold(tokens, |tokens, m| m.apply(tokens))
}
