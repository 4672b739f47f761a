//! Call-to-action block.

use crate::{Align, Block, Tokens};
use blocksmith_core::{ComponentKind, FieldSpec, Markup, TokenSchema};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CtaTokens {
    pub title: String,
    pub subtitle: String,
    pub button_label: String,
    pub align: Align,
    pub width: String,
    pub font_family: String,
    pub primary_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    pub rounded: String,
}

impl Default for CtaTokens {
    fn default() -> Self {
        Self {
            title: "Ready to get started?".to_string(),
            subtitle: "Join thousands of developers building better products".to_string(),
            button_label: "Start Building".to_string(),
            align: Align::Center,
            width: "max-w-2xl".to_string(),
            font_family: "Inter".to_string(),
            primary_color: "#3b82f6".to_string(),
            accent_color: Some("#f59e0b".to_string()),
            rounded: "rounded-lg".to_string(),
        }
    }
}

pub static SCHEMA: TokenSchema = TokenSchema {
    component: "cta",
    fields: &[
        FieldSpec::text("title"),
        FieldSpec::text("subtitle"),
        FieldSpec::text("buttonLabel"),
        FieldSpec::choice("align", Align::OPTIONS),
        FieldSpec::text("width"),
        FieldSpec::text("fontFamily"),
        FieldSpec::text("primaryColor"),
        FieldSpec::optional_text("accentColor"),
        FieldSpec::text("rounded"),
    ],
};

impl Block for CtaTokens {
    const KIND: ComponentKind = ComponentKind::Cta;

    fn schema() -> &'static TokenSchema {
        &SCHEMA
    }

    fn render(&self) -> Markup {
        render(self)
    }

    fn from_tokens(tokens: &Tokens) -> Option<&Self> {
        match tokens {
            Tokens::Cta(t) => Some(t),
            _ => None,
        }
    }
}

impl From<CtaTokens> for Tokens {
    fn from(tokens: CtaTokens) -> Self {
        Tokens::Cta(tokens)
    }
}

pub fn render(t: &CtaTokens) -> Markup {
    Markup::new(format!(
        r##"<section class="py-20"><div class="px-6 {width} {align}"><h2 class="text-4xl font-bold mb-6 text-gray-900 dark:text-white" style="font-family:{font}">{title}</h2><p class="text-lg text-gray-600 dark:text-gray-300 mb-8" style="font-family:{font}">{subtitle}</p><a href="#" class="inline-flex px-8 py-3 text-white font-medium {rounded}" style="background:{primary};font-family:{font}">{button}</a></div></section>"##,
        width = t.width,
        align = t.align.container_class(),
        font = t.font_family,
        title = t.title,
        subtitle = t.subtitle,
        rounded = t.rounded,
        primary = t.primary_color,
        button = t.button_label,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_render_custom_title() {
        let tokens = CtaTokens {
            title: "Custom CTA".to_string(),
            ..Default::default()
        };
        assert!(render(&tokens).as_str().contains("Custom CTA"));
    }

    #[test]
    fn test_render_left_aligned() {
        let tokens = CtaTokens {
            align: Align::Left,
            width: "max-w-3xl".to_string(),
            ..Default::default()
        };
        assert_snapshot!(
            render(&tokens).as_str(),
            @r##"<section class="py-20"><div class="px-6 max-w-3xl text-left"><h2 class="text-4xl font-bold mb-6 text-gray-900 dark:text-white" style="font-family:Inter">Ready to get started?</h2><p class="text-lg text-gray-600 dark:text-gray-300 mb-8" style="font-family:Inter">Join thousands of developers building better products</p><a href="#" class="inline-flex px-8 py-3 text-white font-medium rounded-lg" style="background:#3b82f6;font-family:Inter">Start Building</a></div></section>"##
        );
    }
}
