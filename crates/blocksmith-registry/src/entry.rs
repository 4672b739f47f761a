//! Registry entries and their builder.

use crate::error::Result;
use blocksmith_blocks::{renderer_for, Renderer, Tokens};
use blocksmith_codegen::{FrameworkBundle, WrapperEmitter};
use blocksmith_core::{ComponentKind, FieldDescriptor, Markup, TokenError, Visibility};
use serde::Serialize;

/// One catalog entry: identity, defaults, editor fields, and renderer.
#[derive(Debug, Clone, Serialize)]
pub struct RegistryEntry {
    pub id: String,
    pub label: String,
    pub category: String,
    pub description: String,
    pub defaults: Tokens,
    pub fields: Vec<FieldDescriptor>,
    #[serde(skip)]
    pub renderer: Renderer,
}

impl RegistryEntry {
    pub fn kind(&self) -> ComponentKind {
        self.defaults.kind()
    }

    /// Render `tokens` with this entry's renderer.
    ///
    /// Tokens of another kind are rejected with [`TokenError::KindMismatch`].
    pub fn render(&self, tokens: &Tokens) -> std::result::Result<Markup, TokenError> {
        (self.renderer)(tokens)
    }

    pub fn render_defaults(&self) -> Markup {
        self.defaults.render()
    }

    /// Render `tokens` and wrap the markup for every framework.
    ///
    /// Every kind, the hero included, gets the generic wrapper shape. The
    /// hero-specific shape belongs to [`blocksmith_codegen::wrap_hero`].
    pub fn export(&self, tokens: &Tokens) -> Result<FrameworkBundle> {
        let markup = self.render(tokens)?;
        Ok(WrapperEmitter::shared_generic()?.emit(&markup)?)
    }

    /// Fields an editor should show for the current tokens.
    pub fn visible_fields(
        &self,
        tokens: &Tokens,
    ) -> std::result::Result<Vec<&FieldDescriptor>, TokenError> {
        if tokens.kind() != self.kind() {
            return Err(TokenError::KindMismatch {
                expected: self.kind().to_string(),
                found: tokens.kind().to_string(),
            });
        }
        let set = tokens.to_token_set()?;
        Ok(self.fields.iter().filter(|f| f.is_visible(&set)).collect())
    }
}

/// Builder for creating registry entries.
pub struct EntryBuilder {
    id: String,
    label: String,
    category: String,
    description: String,
    defaults: Tokens,
    fields: Vec<FieldDescriptor>,
}

impl EntryBuilder {
    /// Start an entry whose renderer follows the kind of `defaults`.
    pub fn new(id: &str, defaults: Tokens) -> Self {
        Self {
            id: id.to_string(),
            label: id.to_string(),
            category: String::new(),
            description: String::new(),
            defaults,
            fields: Vec::new(),
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Add an editor field.
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Build the entry.
    ///
    /// Every field descriptor, and every flag a visibility predicate reads,
    /// must name a token declared by the kind's schema.
    pub fn build(self) -> std::result::Result<RegistryEntry, TokenError> {
        let schema = self.defaults.schema();
        let referenced = self.fields.iter().flat_map(|f| {
            let flag = match &f.visibility {
                Visibility::WhenEnabled(flag) => Some(flag.as_str()),
                Visibility::Always => None,
            };
            std::iter::once(f.key.as_str()).chain(flag)
        });
        for key in referenced {
            if schema.field(key).is_none() {
                return Err(TokenError::UnknownField {
                    component: schema.component.to_string(),
                    field: key.to_string(),
                });
            }
        }

        let renderer = renderer_for(self.defaults.kind());
        Ok(RegistryEntry {
            id: self.id,
            label: self.label,
            category: self.category,
            description: self.description,
            defaults: self.defaults,
            fields: self.fields,
            renderer,
        })
    }
}
