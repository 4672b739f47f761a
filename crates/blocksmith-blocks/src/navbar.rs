//! Top navigation bar.

use crate::{Block, Tokens};
use blocksmith_core::{map_list, ComponentKind, FieldSpec, Markup, TokenSchema};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NavbarTokens {
    pub brand: String,
    /// Comma-separated link labels.
    pub links: String,
    pub font_family: String,
    pub primary_color: String,
}

impl Default for NavbarTokens {
    fn default() -> Self {
        Self {
            brand: "BrandName".to_string(),
            links: "Features,Pricing,Docs,Contact".to_string(),
            font_family: "Inter".to_string(),
            primary_color: "#3b82f6".to_string(),
        }
    }
}

pub static SCHEMA: TokenSchema = TokenSchema {
    component: "navbar",
    fields: &[
        FieldSpec::text("brand"),
        FieldSpec::text("links"),
        FieldSpec::text("fontFamily"),
        FieldSpec::text("primaryColor"),
    ],
};

impl Block for NavbarTokens {
    const KIND: ComponentKind = ComponentKind::Navbar;

    fn schema() -> &'static TokenSchema {
        &SCHEMA
    }

    fn render(&self) -> Markup {
        render(self)
    }

    fn from_tokens(tokens: &Tokens) -> Option<&Self> {
        match tokens {
            Tokens::Navbar(t) => Some(t),
            _ => None,
        }
    }
}

impl From<NavbarTokens> for Tokens {
    fn from(tokens: NavbarTokens) -> Self {
        Tokens::Navbar(tokens)
    }
}

pub fn render(t: &NavbarTokens) -> Markup {
    let links = map_list(&t.links, |_, label| {
        format!(
            r##"<li><a href="#" class="text-gray-600 dark:text-gray-300 hover:text-gray-900 dark:hover:text-white">{}</a></li>"##,
            label
        )
    });

    Markup::new(format!(
        r##"<nav class="py-4"><div class="px-6 max-w-6xl mx-auto flex items-center justify-between"><div class="text-lg font-semibold text-gray-900 dark:text-white" style="font-family:{font}">{brand}</div><ul class="hidden md:flex items-center gap-6 text-sm" style="font-family:{font}">{links}</ul><a href="#" class="md:hidden inline-flex items-center justify-center w-9 h-9 rounded border border-gray-300 dark:border-gray-600" style="border-color:{primary}50">☰</a></div></nav>"##,
        font = t.font_family,
        brand = t.brand,
        links = links,
        primary = t.primary_color,
    ))
}
