//! Footer with a copyright line.

use crate::{Block, Tokens};
use blocksmith_core::{ComponentKind, FieldSpec, Markup, TokenSchema};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FooterTokens {
    pub copyright: String,
    pub font_family: String,
    pub primary_color: String,
}

impl Default for FooterTokens {
    fn default() -> Self {
        Self {
            copyright: "© 2025 Your Company. All rights reserved.".to_string(),
            font_family: "Inter".to_string(),
            primary_color: "#3b82f6".to_string(),
        }
    }
}

pub static SCHEMA: TokenSchema = TokenSchema {
    component: "footer",
    fields: &[
        FieldSpec::text("copyright"),
        FieldSpec::text("fontFamily"),
        FieldSpec::text("primaryColor"),
    ],
};

impl Block for FooterTokens {
    const KIND: ComponentKind = ComponentKind::Footer;

    fn schema() -> &'static TokenSchema {
        &SCHEMA
    }

    fn render(&self) -> Markup {
        render(self)
    }

    fn from_tokens(tokens: &Tokens) -> Option<&Self> {
        match tokens {
            Tokens::Footer(t) => Some(t),
            _ => None,
        }
    }
}

impl From<FooterTokens> for Tokens {
    fn from(tokens: FooterTokens) -> Self {
        Tokens::Footer(tokens)
    }
}

pub fn render(t: &FooterTokens) -> Markup {
    Markup::new(format!(
        r#"<footer class="py-10 bg-gray-50 dark:bg-gray-900"><div class="px-6 max-w-6xl mx-auto text-center text-sm text-gray-600 dark:text-gray-400" style="font-family:{}">{}</div></footer>"#,
        t.font_family, t.copyright
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_render_default() {
        assert_snapshot!(
            render(&FooterTokens::default()).as_str(),
            @r#"<footer class="py-10 bg-gray-50 dark:bg-gray-900"><div class="px-6 max-w-6xl mx-auto text-center text-sm text-gray-600 dark:text-gray-400" style="font-family:Inter">© 2025 Your Company. All rights reserved.</div></footer>"#
        );
    }
}
