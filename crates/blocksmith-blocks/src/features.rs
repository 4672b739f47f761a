//! Feature grid built from a comma list of labels.

use crate::{Block, Tokens};
use blocksmith_core::{map_list, ComponentKind, FieldSpec, Markup, Palette, TokenSchema};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FeaturesTokens {
    pub title: String,
    pub subtitle: String,
    /// Comma-separated feature labels.
    pub items: String,
    pub font_family: String,
    pub primary_color: String,
    pub accent_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
}

impl Default for FeaturesTokens {
    fn default() -> Self {
        Self {
            title: "Powerful Features".to_string(),
            subtitle: "Everything you need to build amazing products".to_string(),
            items: "Fast,Secure,Scalable".to_string(),
            font_family: "Inter".to_string(),
            primary_color: "#3b82f6".to_string(),
            accent_color: "#f59e0b".to_string(),
            secondary_color: Some("#6366f1".to_string()),
        }
    }
}

pub static SCHEMA: TokenSchema = TokenSchema {
    component: "features",
    fields: &[
        FieldSpec::text("title"),
        FieldSpec::text("subtitle"),
        FieldSpec::text("items"),
        FieldSpec::text("fontFamily"),
        FieldSpec::text("primaryColor"),
        FieldSpec::text("accentColor"),
        FieldSpec::optional_text("secondaryColor"),
    ],
};

impl Block for FeaturesTokens {
    const KIND: ComponentKind = ComponentKind::Features;

    fn schema() -> &'static TokenSchema {
        &SCHEMA
    }

    fn render(&self) -> Markup {
        render(self)
    }

    fn from_tokens(tokens: &Tokens) -> Option<&Self> {
        match tokens {
            Tokens::Features(t) => Some(t),
            _ => None,
        }
    }
}

impl From<FeaturesTokens> for Tokens {
    fn from(tokens: FeaturesTokens) -> Self {
        Tokens::Features(tokens)
    }
}

pub fn render(t: &FeaturesTokens) -> Markup {
    let palette = Palette::new(&t.primary_color, &t.accent_color, t.secondary_color.as_deref());
    let font = &t.font_family;

    let items = map_list(&t.items, |i, label| {
        let color = palette.cycle(i);
        format!(
            r#"<div class="text-center"><div class="w-14 h-14 mx-auto mb-4 rounded-lg flex items-center justify-center" style="background:{color}20"><div class="w-7 h-7 rounded" style="background:{color}"></div></div><h3 class="text-xl font-semibold mb-2 text-gray-900 dark:text-white" style="font-family:{font}">{label}</h3><p class="text-gray-600 dark:text-gray-300 text-sm">Lorem ipsum dolor sit amet.</p></div>"#,
            color = color,
            font = font,
            label = label,
        )
    });

    Markup::new(format!(
        r#"<section class="py-24"><div class="px-6 max-w-4xl mx-auto text-center mb-16"><h2 class="text-4xl font-bold mb-4 text-gray-900 dark:text-white" style="font-family:{font}">{title}</h2><p class="text-lg text-gray-600 dark:text-gray-300" style="font-family:{font}">{subtitle}</p></div><div class="grid md:grid-cols-3 gap-10 max-w-5xl mx-auto">{items}</div></section>"#,
        font = font,
        title = t.title,
        subtitle = t.subtitle,
        items = items,
    ))
}
