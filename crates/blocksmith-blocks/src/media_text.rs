//! Paragraph beside an image.

use crate::{Block, Tokens};
use blocksmith_core::{ComponentKind, FieldSpec, Markup, TokenSchema};
use serde::{Deserialize, Serialize};

/// Which side the image sits on from the `md` breakpoint up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaAlign {
    Left,
    Right,
}

impl MediaAlign {
    pub const OPTIONS: &'static [&'static str] = &["left", "right"];

    /// Order classes for the image column and the text column.
    fn order_classes(&self) -> (&'static str, &'static str) {
        match self {
            MediaAlign::Left => ("md:order-1", "md:order-2"),
            MediaAlign::Right => ("md:order-2", "md:order-1"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MediaTextTokens {
    pub title: String,
    pub text: String,
    pub image_url: String,
    pub align: MediaAlign,
    pub font_family: String,
    pub primary_color: String,
    pub rounded: String,
}

impl Default for MediaTextTokens {
    fn default() -> Self {
        Self {
            title: "Beautifully simple".to_string(),
            text: "Craft clean, responsive sections with ease.".to_string(),
            image_url: "https://images.unsplash.com/photo-1529333166437-7750a6dd5a70?q=80&w=1200&auto=format&fit=crop".to_string(),
            align: MediaAlign::Right,
            font_family: "Inter".to_string(),
            primary_color: "#3b82f6".to_string(),
            rounded: "rounded-xl".to_string(),
        }
    }
}

pub static SCHEMA: TokenSchema = TokenSchema {
    component: "media-text",
    fields: &[
        FieldSpec::text("title"),
        FieldSpec::text("text"),
        FieldSpec::text("imageUrl"),
        FieldSpec::choice("align", MediaAlign::OPTIONS),
        FieldSpec::text("fontFamily"),
        FieldSpec::text("primaryColor"),
        FieldSpec::text("rounded"),
    ],
};

impl Block for MediaTextTokens {
    const KIND: ComponentKind = ComponentKind::MediaText;

    fn schema() -> &'static TokenSchema {
        &SCHEMA
    }

    fn render(&self) -> Markup {
        render(self)
    }

    fn from_tokens(tokens: &Tokens) -> Option<&Self> {
        match tokens {
            Tokens::MediaText(t) => Some(t),
            _ => None,
        }
    }
}

impl From<MediaTextTokens> for Tokens {
    fn from(tokens: MediaTextTokens) -> Self {
        Tokens::MediaText(tokens)
    }
}

pub fn render(t: &MediaTextTokens) -> Markup {
    let (image_order, text_order) = t.align.order_classes();

    Markup::new(format!(
        r##"<section class="py-24"><div class="px-6 max-w-6xl mx-auto grid md:grid-cols-2 gap-10 items-center"><div class="{image_order}"><img src="{image}" alt="" class="w-full h-64 object-cover {rounded}"></div><div class="{text_order}"><h2 class="text-3xl font-bold mb-3 text-gray-900 dark:text-white" style="font-family:{font}">{title}</h2><p class="text-gray-600 dark:text-gray-300 mb-6" style="font-family:{font}">{text}</p><a href="#" class="inline-flex px-5 py-2 text-white {rounded}" style="background:{primary};font-family:{font}">Learn more</a></div></div></section>"##,
        image_order = image_order,
        image = t.image_url,
        rounded = t.rounded,
        text_order = text_order,
        font = t.font_family,
        title = t.title,
        text = t.text,
        primary = t.primary_color,
    ))
}
