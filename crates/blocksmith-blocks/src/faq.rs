//! FAQ accordion rows.

use crate::{Block, Tokens};
use blocksmith_core::{map_list, ComponentKind, FieldSpec, Markup, TokenSchema};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FaqTokens {
    pub title: String,
    pub subtitle: String,
    /// Comma-separated questions.
    pub questions: String,
    pub font_family: String,
    pub primary_color: String,
}

impl Default for FaqTokens {
    fn default() -> Self {
        Self {
            title: "Frequently Asked Questions".to_string(),
            subtitle: "Get answers to common questions".to_string(),
            questions: "How does it work?,Is it customizable?,What frameworks are supported?"
                .to_string(),
            font_family: "Inter".to_string(),
            primary_color: "#3b82f6".to_string(),
        }
    }
}

pub static SCHEMA: TokenSchema = TokenSchema {
    component: "faq",
    fields: &[
        FieldSpec::text("title"),
        FieldSpec::text("subtitle"),
        FieldSpec::text("questions"),
        FieldSpec::text("fontFamily"),
        FieldSpec::text("primaryColor"),
    ],
};

impl Block for FaqTokens {
    const KIND: ComponentKind = ComponentKind::Faq;

    fn schema() -> &'static TokenSchema {
        &SCHEMA
    }

    fn render(&self) -> Markup {
        render(self)
    }

    fn from_tokens(tokens: &Tokens) -> Option<&Self> {
        match tokens {
            Tokens::Faq(t) => Some(t),
            _ => None,
        }
    }
}

impl From<FaqTokens> for Tokens {
    fn from(tokens: FaqTokens) -> Self {
        Tokens::Faq(tokens)
    }
}

pub fn render(t: &FaqTokens) -> Markup {
    let font = &t.font_family;
    let primary = &t.primary_color;

    let rows = map_list(&t.questions, |_, question| {
        format!(
            r#"<div class="border border-gray-200 dark:border-gray-700 p-4 rounded-lg flex justify-between items-center" style="border-color:{primary}30;font-family:{font}"><span class="text-gray-900 dark:text-white">{question}</span><span class="w-6 h-6 flex items-center justify-center rounded-full text-white text-sm" style="background:{primary}">+</span></div>"#,
            primary = primary,
            font = font,
            question = question,
        )
    });

    Markup::new(format!(
        r#"<section class="py-24"><div class="px-6 max-w-4xl mx-auto text-center mb-14"><h2 class="text-4xl font-bold mb-4 text-gray-900 dark:text-white" style="font-family:{font}">{title}</h2><p class="text-lg text-gray-600 dark:text-gray-300" style="font-family:{font}">{subtitle}</p></div><div class="max-w-3xl mx-auto space-y-4">{rows}</div></section>"#,
        font = font,
        title = t.title,
        subtitle = t.subtitle,
        rows = rows,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_row_per_question() {
        let html = render(&FaqTokens::default());
        assert_eq!(html.as_str().matches(">+</span>").count(), 3);
        assert!(html.as_str().contains(">What frameworks are supported?</span>"));
    }

    #[test]
    fn test_questions_trimmed() {
        let tokens = FaqTokens {
            questions: "  Why?  ,How?".to_string(),
            ..Default::default()
        };
        let html = render(&tokens);
        assert!(html.as_str().contains(">Why?</span>"));
        assert!(html.as_str().contains(">How?</span>"));
    }
}
