//! Grid of blog teaser cards.

use crate::{Block, Tokens};
use blocksmith_core::{map_list, ComponentKind, FieldSpec, Markup, TokenSchema};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BlogTokens {
    pub title: String,
    pub subtitle: String,
    /// Comma-separated post titles.
    pub posts: String,
    pub font_family: String,
    pub primary_color: String,
}

impl Default for BlogTokens {
    fn default() -> Self {
        Self {
            title: "Latest Articles".to_string(),
            subtitle: "Insights and tutorials".to_string(),
            posts: "Design Systems,Build Faster,Ship Confidently".to_string(),
            font_family: "Inter".to_string(),
            primary_color: "#3b82f6".to_string(),
        }
    }
}

pub static SCHEMA: TokenSchema = TokenSchema {
    component: "blog",
    fields: &[
        FieldSpec::text("title"),
        FieldSpec::text("subtitle"),
        FieldSpec::text("posts"),
        FieldSpec::text("fontFamily"),
        FieldSpec::text("primaryColor"),
    ],
};

impl Block for BlogTokens {
    const KIND: ComponentKind = ComponentKind::Blog;

    fn schema() -> &'static TokenSchema {
        &SCHEMA
    }

    fn render(&self) -> Markup {
        render(self)
    }

    fn from_tokens(tokens: &Tokens) -> Option<&Self> {
        match tokens {
            Tokens::Blog(t) => Some(t),
            _ => None,
        }
    }
}

impl From<BlogTokens> for Tokens {
    fn from(tokens: BlogTokens) -> Self {
        Tokens::Blog(tokens)
    }
}

pub fn render(t: &BlogTokens) -> Markup {
    let font = &t.font_family;

    let cards = map_list(&t.posts, |_, post| {
        format!(
            r#"<article class="border border-gray-200 dark:border-gray-700 rounded-lg overflow-hidden bg-white dark:bg-gray-900"><div class="h-28 bg-gray-200 dark:bg-gray-800"></div><div class="p-4"><h3 class="font-semibold mb-1 text-gray-900 dark:text-white" style="font-family:{font}">{post}</h3><p class="text-xs text-gray-500 dark:text-gray-400">Lorem ipsum dolor sit amet.</p></div></article>"#,
            font = font,
            post = post,
        )
    });

    Markup::new(format!(
        r#"<section class="py-24"><div class="px-6 max-w-5xl mx-auto text-center mb-14"><h2 class="text-4xl font-bold mb-2 text-gray-900 dark:text-white" style="font-family:{font}">{title}</h2><p class="text-gray-600 dark:text-gray-300" style="font-family:{font}">{subtitle}</p></div><div class="grid sm:grid-cols-2 md:grid-cols-3 gap-6 max-w-5xl mx-auto">{cards}</div></section>"#,
        font = font,
        title = t.title,
        subtitle = t.subtitle,
        cards = cards,
    ))
}
