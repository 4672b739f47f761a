//! Typed token sets and renderers for every Blocksmith block.
//!
//! Each component kind lives in its own module with three pieces: a typed
//! token struct (whose `Default` is the catalog default), a [`TokenSchema`]
//! describing the same fields for boundary validation, and a pure renderer
//! mapping the tokens to [`Markup`].
//!
//! [`Tokens`] is the tagged union over all kinds and [`render`] is the single
//! dispatch entry point.
//!
//! # Example
//!
//! ```
//! use blocksmith_blocks::Tokens;
//! use blocksmith_core::{ComponentKind, TokenSet};
//!
//! let tokens = Tokens::defaults(ComponentKind::Cta)
//!     .merge(&TokenSet::new().with("title", "Ship it"))
//!     .unwrap();
//! assert!(tokens.render().as_str().contains("Ship it"));
//! ```

pub mod blog;
pub mod cta;
pub mod faq;
pub mod features;
pub mod footer;
pub mod hero;
pub mod media_text;
pub mod navbar;
pub mod pricing;
pub mod testimonials;

mod codec;

use blocksmith_core::{ComponentKind, Markup, TokenError, TokenSchema, TokenSet, TokenValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use blog::BlogTokens;
pub use cta::CtaTokens;
pub use faq::FaqTokens;
pub use features::FeaturesTokens;
pub use footer::FooterTokens;
pub use hero::{BackgroundStyle, HeroTokens};
pub use media_text::{MediaAlign, MediaTextTokens};
pub use navbar::NavbarTokens;
pub use pricing::PricingTokens;
pub use testimonials::TestimonialsTokens;

/// Renderer reference stored in registry entries.
pub type Renderer = fn(&Tokens) -> Result<Markup, TokenError>;

/// A typed token struct for one component kind.
pub trait Block: Serialize + DeserializeOwned + Default + Clone + Into<Tokens> {
    /// Kind this token struct belongs to.
    const KIND: ComponentKind;

    /// Field contract used to validate flat token sets.
    fn schema() -> &'static TokenSchema;

    /// Render the block. Pure and deterministic.
    fn render(&self) -> Markup;

    /// Borrow the matching variant out of a [`Tokens`] value.
    fn from_tokens(tokens: &Tokens) -> Option<&Self>;
}

/// Horizontal alignment shared by several blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Center,
    Left,
}

impl Align {
    pub const OPTIONS: &'static [&'static str] = &["center", "left"];

    /// Container classes for the alignment.
    pub fn container_class(&self) -> &'static str {
        match self {
            Align::Center => "text-center mx-auto",
            Align::Left => "text-left",
        }
    }
}

/// Complete token set for one component instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "tokens", rename_all = "kebab-case")]
pub enum Tokens {
    Hero(HeroTokens),
    Cta(CtaTokens),
    Pricing(PricingTokens),
    Features(FeaturesTokens),
    Faq(FaqTokens),
    Testimonials(TestimonialsTokens),
    Navbar(NavbarTokens),
    Footer(FooterTokens),
    Blog(BlogTokens),
    MediaText(MediaTextTokens),
}

impl Tokens {
    /// Fresh copy of the catalog defaults for `kind`.
    pub fn defaults(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Hero => HeroTokens::default().into(),
            ComponentKind::Cta => CtaTokens::default().into(),
            ComponentKind::Pricing => PricingTokens::default().into(),
            ComponentKind::Features => FeaturesTokens::default().into(),
            ComponentKind::Faq => FaqTokens::default().into(),
            ComponentKind::Testimonials => TestimonialsTokens::default().into(),
            ComponentKind::Navbar => NavbarTokens::default().into(),
            ComponentKind::Footer => FooterTokens::default().into(),
            ComponentKind::Blog => BlogTokens::default().into(),
            ComponentKind::MediaText => MediaTextTokens::default().into(),
        }
    }

    /// Decode a flat token set, validating it against the kind's schema.
    pub fn from_token_set(kind: ComponentKind, set: &TokenSet) -> Result<Self, TokenError> {
        Ok(match kind {
            ComponentKind::Hero => codec::decode::<HeroTokens>(set)?.into(),
            ComponentKind::Cta => codec::decode::<CtaTokens>(set)?.into(),
            ComponentKind::Pricing => codec::decode::<PricingTokens>(set)?.into(),
            ComponentKind::Features => codec::decode::<FeaturesTokens>(set)?.into(),
            ComponentKind::Faq => codec::decode::<FaqTokens>(set)?.into(),
            ComponentKind::Testimonials => codec::decode::<TestimonialsTokens>(set)?.into(),
            ComponentKind::Navbar => codec::decode::<NavbarTokens>(set)?.into(),
            ComponentKind::Footer => codec::decode::<FooterTokens>(set)?.into(),
            ComponentKind::Blog => codec::decode::<BlogTokens>(set)?.into(),
            ComponentKind::MediaText => codec::decode::<MediaTextTokens>(set)?.into(),
        })
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            Tokens::Hero(_) => ComponentKind::Hero,
            Tokens::Cta(_) => ComponentKind::Cta,
            Tokens::Pricing(_) => ComponentKind::Pricing,
            Tokens::Features(_) => ComponentKind::Features,
            Tokens::Faq(_) => ComponentKind::Faq,
            Tokens::Testimonials(_) => ComponentKind::Testimonials,
            Tokens::Navbar(_) => ComponentKind::Navbar,
            Tokens::Footer(_) => ComponentKind::Footer,
            Tokens::Blog(_) => ComponentKind::Blog,
            Tokens::MediaText(_) => ComponentKind::MediaText,
        }
    }

    pub fn schema(&self) -> &'static TokenSchema {
        schema_for(self.kind())
    }

    /// Render to markup.
    pub fn render(&self) -> Markup {
        match self {
            Tokens::Hero(t) => t.render(),
            Tokens::Cta(t) => t.render(),
            Tokens::Pricing(t) => t.render(),
            Tokens::Features(t) => t.render(),
            Tokens::Faq(t) => t.render(),
            Tokens::Testimonials(t) => t.render(),
            Tokens::Navbar(t) => t.render(),
            Tokens::Footer(t) => t.render(),
            Tokens::Blog(t) => t.render(),
            Tokens::MediaText(t) => t.render(),
        }
    }

    /// Flatten into a field name -> value mapping. Unset optional fields are omitted.
    pub fn to_token_set(&self) -> Result<TokenSet, TokenError> {
        match self {
            Tokens::Hero(t) => codec::encode(t),
            Tokens::Cta(t) => codec::encode(t),
            Tokens::Pricing(t) => codec::encode(t),
            Tokens::Features(t) => codec::encode(t),
            Tokens::Faq(t) => codec::encode(t),
            Tokens::Testimonials(t) => codec::encode(t),
            Tokens::Navbar(t) => codec::encode(t),
            Tokens::Footer(t) => codec::encode(t),
            Tokens::Blog(t) => codec::encode(t),
            Tokens::MediaText(t) => codec::encode(t),
        }
    }

    /// Return a new token set with `patch` laid over this one.
    ///
    /// Keys not declared by this kind's schema are rejected, as are values of
    /// the wrong shape. `self` is left untouched.
    pub fn merge(&self, patch: &TokenSet) -> Result<Self, TokenError> {
        let schema = self.schema();
        schema.validate_patch(patch)?;

        let mut merged = self.to_token_set()?;
        merged.merge(patch);
        Self::from_token_set(self.kind(), &merged)
    }

    /// Replace a single field.
    pub fn with_field(
        &self,
        key: impl Into<String>,
        value: impl Into<TokenValue>,
    ) -> Result<Self, TokenError> {
        self.merge(&TokenSet::new().with(key, value))
    }

    /// Current value of one field, if set.
    pub fn get(&self, key: &str) -> Option<TokenValue> {
        self.to_token_set().ok()?.get(key).cloned()
    }
}

/// Schema for `kind`.
pub fn schema_for(kind: ComponentKind) -> &'static TokenSchema {
    match kind {
        ComponentKind::Hero => HeroTokens::schema(),
        ComponentKind::Cta => CtaTokens::schema(),
        ComponentKind::Pricing => PricingTokens::schema(),
        ComponentKind::Features => FeaturesTokens::schema(),
        ComponentKind::Faq => FaqTokens::schema(),
        ComponentKind::Testimonials => TestimonialsTokens::schema(),
        ComponentKind::Navbar => NavbarTokens::schema(),
        ComponentKind::Footer => FooterTokens::schema(),
        ComponentKind::Blog => BlogTokens::schema(),
        ComponentKind::MediaText => MediaTextTokens::schema(),
    }
}

/// Render `tokens` as a block of kind `kind`.
///
/// Fails only when the tokens belong to a different kind.
pub fn render(kind: ComponentKind, tokens: &Tokens) -> Result<Markup, TokenError> {
    if tokens.kind() != kind {
        return Err(TokenError::KindMismatch {
            expected: kind.to_string(),
            found: tokens.kind().to_string(),
        });
    }
    tracing::trace!(component = %kind, "rendering block");
    Ok(tokens.render())
}

/// Validate a flat token set against `kind`'s schema and render it.
pub fn render_token_set(kind: ComponentKind, set: &TokenSet) -> Result<Markup, TokenError> {
    let tokens = Tokens::from_token_set(kind, set)?;
    render(kind, &tokens)
}

/// Renderer for one specific block type, usable as a [`Renderer`].
pub fn render_block<B: Block>(tokens: &Tokens) -> Result<Markup, TokenError> {
    B::from_tokens(tokens)
        .map(|block| block.render())
        .ok_or_else(|| TokenError::KindMismatch {
            expected: B::KIND.to_string(),
            found: tokens.kind().to_string(),
        })
}

/// Renderer reference for `kind`.
pub fn renderer_for(kind: ComponentKind) -> Renderer {
    match kind {
        ComponentKind::Hero => render_block::<HeroTokens>,
        ComponentKind::Cta => render_block::<CtaTokens>,
        ComponentKind::Pricing => render_block::<PricingTokens>,
        ComponentKind::Features => render_block::<FeaturesTokens>,
        ComponentKind::Faq => render_block::<FaqTokens>,
        ComponentKind::Testimonials => render_block::<TestimonialsTokens>,
        ComponentKind::Navbar => render_block::<NavbarTokens>,
        ComponentKind::Footer => render_block::<FooterTokens>,
        ComponentKind::Blog => render_block::<BlogTokens>,
        ComponentKind::MediaText => render_block::<MediaTextTokens>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults_satisfy_schema() {
        for kind in ComponentKind::ALL {
            let tokens = Tokens::defaults(kind);
            let set = tokens.to_token_set().unwrap();
            let schema = schema_for(kind);

            schema.validate(&set).unwrap();
            for field in schema.fields.iter().filter(|f| f.required) {
                assert!(set.contains(field.key), "{} default lacks {}", kind, field.key);
            }
            assert_eq!(schema.component, kind.as_str());
        }
    }

    #[test]
    fn test_token_set_round_trip() {
        for kind in ComponentKind::ALL {
            let tokens = Tokens::defaults(kind);
            let set = tokens.to_token_set().unwrap();
            assert_eq!(Tokens::from_token_set(kind, &set).unwrap(), tokens);
        }
    }

    #[test]
    fn test_render_kind_mismatch() {
        let tokens = Tokens::defaults(ComponentKind::Cta);
        let err = render(ComponentKind::Hero, &tokens).unwrap_err();
        assert_eq!(
            err,
            TokenError::KindMismatch {
                expected: "hero".to_string(),
                found: "cta".to_string(),
            }
        );
        assert!(render_block::<HeroTokens>(&tokens).is_err());
    }

    #[test]
    fn test_renderer_for_matches_render() {
        for kind in ComponentKind::ALL {
            let tokens = Tokens::defaults(kind);
            let via_pointer = renderer_for(kind)(&tokens).unwrap();
            assert_eq!(via_pointer, render(kind, &tokens).unwrap());
        }
    }

    #[test]
    fn test_merge_replaces_selected_fields() {
        let tokens = Tokens::defaults(ComponentKind::Hero);
        let patch = TokenSet::new()
            .with("title", "Custom Title")
            .with("showSecondary", false);
        let merged = tokens.merge(&patch).unwrap();

        assert_eq!(merged.get("title"), Some(TokenValue::from("Custom Title")));
        assert_eq!(merged.get("showSecondary"), Some(TokenValue::Flag(false)));
        assert_eq!(merged.get("subtitle"), tokens.get("subtitle"));
        // The source value is never mutated.
        assert_eq!(tokens, Tokens::defaults(ComponentKind::Hero));
    }

    #[test]
    fn test_merge_rejects_unknown_key() {
        let tokens = Tokens::defaults(ComponentKind::Footer);
        let err = tokens.with_field("title", "Nope").unwrap_err();
        assert_eq!(
            err,
            TokenError::UnknownField {
                component: "footer".to_string(),
                field: "title".to_string(),
            }
        );
    }

    #[test]
    fn test_merge_rejects_list_field_of_wrong_shape() {
        let tokens = Tokens::defaults(ComponentKind::Navbar);
        let err = tokens.with_field("links", true).unwrap_err();
        assert!(matches!(err, TokenError::InvalidValue { ref field, .. } if field == "links"));
    }

    #[test]
    fn test_from_token_set_missing_field() {
        let set = Tokens::defaults(ComponentKind::Faq).to_token_set().unwrap();
        let partial: TokenSet = set
            .iter()
            .filter(|(k, _)| k.as_str() != "questions")
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let err = render_token_set(ComponentKind::Faq, &partial).unwrap_err();
        assert_eq!(
            err,
            TokenError::MissingField {
                component: "faq".to_string(),
                field: "questions".to_string(),
            }
        );
    }

    #[test]
    fn test_optional_field_can_be_set() {
        let tokens = Tokens::defaults(ComponentKind::Testimonials);
        assert_eq!(tokens.get("secondaryColor"), None);

        let updated = tokens.with_field("secondaryColor", "#10b981").unwrap();
        assert!(updated.render().as_str().contains("background:#10b981"));
    }

    #[test]
    fn test_tokens_serialize_tagged() {
        let json = serde_json::to_value(Tokens::defaults(ComponentKind::Footer)).unwrap();
        assert_eq!(json["kind"], "footer");
        assert_eq!(json["tokens"]["fontFamily"], "Inter");
    }

    proptest! {
        #[test]
        fn prop_render_is_deterministic(
            kind_index in 0usize..ComponentKind::ALL.len(),
            title in "[A-Za-z0-9 !?]{0,40}",
            font in "[A-Za-z ]{1,16}",
        ) {
            let kind = ComponentKind::ALL[kind_index];
            let mut patch = TokenSet::new().with("fontFamily", font);
            if schema_for(kind).field("title").is_some() {
                patch.insert("title", title);
            }
            let tokens = Tokens::defaults(kind).merge(&patch).unwrap();

            let first = render(kind, &tokens).unwrap();
            let second = render(kind, &tokens.clone()).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
