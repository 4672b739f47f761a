//! Customer quote cards.

use crate::{Block, Tokens};
use blocksmith_core::{map_list, ComponentKind, FieldSpec, Markup, Palette, TokenSchema};
use serde::{Deserialize, Serialize};

const STARS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TestimonialsTokens {
    pub title: String,
    pub subtitle: String,
    /// Comma-separated customer names.
    pub names: String,
    pub font_family: String,
    pub primary_color: String,
    pub accent_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
}

impl Default for TestimonialsTokens {
    fn default() -> Self {
        Self {
            title: "What Our Customers Say".to_string(),
            subtitle: "Trusted by developers worldwide".to_string(),
            names: "John Doe,Jane Smith,Mike Johnson".to_string(),
            font_family: "Inter".to_string(),
            primary_color: "#3b82f6".to_string(),
            accent_color: "#f59e0b".to_string(),
            secondary_color: None,
        }
    }
}

pub static SCHEMA: TokenSchema = TokenSchema {
    component: "testimonials",
    fields: &[
        FieldSpec::text("title"),
        FieldSpec::text("subtitle"),
        FieldSpec::text("names"),
        FieldSpec::text("fontFamily"),
        FieldSpec::text("primaryColor"),
        FieldSpec::text("accentColor"),
        FieldSpec::optional_text("secondaryColor"),
    ],
};

impl Block for TestimonialsTokens {
    const KIND: ComponentKind = ComponentKind::Testimonials;

    fn schema() -> &'static TokenSchema {
        &SCHEMA
    }

    fn render(&self) -> Markup {
        render(self)
    }

    fn from_tokens(tokens: &Tokens) -> Option<&Self> {
        match tokens {
            Tokens::Testimonials(t) => Some(t),
            _ => None,
        }
    }
}

impl From<TestimonialsTokens> for Tokens {
    fn from(tokens: TestimonialsTokens) -> Self {
        Tokens::Testimonials(tokens)
    }
}

pub fn render(t: &TestimonialsTokens) -> Markup {
    let palette = Palette::new(&t.primary_color, &t.accent_color, t.secondary_color.as_deref());
    let font = &t.font_family;
    let star = format!(
        r#"<div class="w-4 h-4 mr-1 rounded" style="background:{}"></div>"#,
        t.accent_color
    );
    let stars = star.repeat(STARS);

    let cards = map_list(&t.names, |i, name| {
        format!(
            r#"<div class="bg-white dark:bg-gray-900 border border-gray-200 dark:border-gray-700 p-6 rounded-lg shadow-sm"><div class="flex mb-4">{stars}</div><p class="text-gray-600 dark:text-gray-300 mb-4 text-sm">"Amazing tool for rapid prototyping!"</p><div class="flex items-center"><div class="w-10 h-10 rounded-full mr-3" style="background:{color}"></div><div><div class="font-semibold text-gray-900 dark:text-white" style="font-family:{font}">{name}</div><div class="text-xs text-gray-500 dark:text-gray-400">Customer</div></div></div></div>"#,
            stars = stars,
            color = palette.cycle(i),
            font = font,
            name = name,
        )
    });

    Markup::new(format!(
        r#"<section class="py-24 bg-gray-50 dark:bg-gray-900"><div class="px-6 max-w-4xl mx-auto text-center mb-14"><h2 class="text-4xl font-bold mb-4 text-gray-900 dark:text-white" style="font-family:{font}">{title}</h2><p class="text-lg text-gray-600 dark:text-gray-300" style="font-family:{font}">{subtitle}</p></div><div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">{cards}</div></section>"#,
        font = font,
        title = t.title,
        subtitle = t.subtitle,
        cards = cards,
    ))
}
