//! Three-tier pricing grid. The middle plan is highlighted.

use crate::{Block, Tokens};
use blocksmith_core::{ComponentKind, FieldSpec, Markup, TokenSchema};
use serde::{Deserialize, Serialize};

/// Plan names, in display order.
pub const PLANS: [&str; 3] = ["Starter", "Pro", "Enterprise"];

const HIGHLIGHTED_PLAN: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PricingTokens {
    pub title: String,
    pub subtitle: String,
    pub highlight_label: String,
    pub price_a: String,
    pub price_b: String,
    pub price_c: String,
    pub font_family: String,
    pub primary_color: String,
    pub secondary_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    pub rounded: String,
}

impl Default for PricingTokens {
    fn default() -> Self {
        Self {
            title: "Simple Pricing".to_string(),
            subtitle: "Choose the plan that's right for you".to_string(),
            highlight_label: "Popular".to_string(),
            price_a: "$39".to_string(),
            price_b: "$99".to_string(),
            price_c: "$199".to_string(),
            font_family: "Inter".to_string(),
            primary_color: "#3b82f6".to_string(),
            secondary_color: "#64748b".to_string(),
            accent_color: Some("#f59e0b".to_string()),
            rounded: "rounded-lg".to_string(),
        }
    }
}

pub static SCHEMA: TokenSchema = TokenSchema {
    component: "pricing",
    fields: &[
        FieldSpec::text("title"),
        FieldSpec::text("subtitle"),
        FieldSpec::text("highlightLabel"),
        FieldSpec::text("priceA"),
        FieldSpec::text("priceB"),
        FieldSpec::text("priceC"),
        FieldSpec::text("fontFamily"),
        FieldSpec::text("primaryColor"),
        FieldSpec::text("secondaryColor"),
        FieldSpec::optional_text("accentColor"),
        FieldSpec::text("rounded"),
    ],
};

impl Block for PricingTokens {
    const KIND: ComponentKind = ComponentKind::Pricing;

    fn schema() -> &'static TokenSchema {
        &SCHEMA
    }

    fn render(&self) -> Markup {
        render(self)
    }

    fn from_tokens(tokens: &Tokens) -> Option<&Self> {
        match tokens {
            Tokens::Pricing(t) => Some(t),
            _ => None,
        }
    }
}

impl From<PricingTokens> for Tokens {
    fn from(tokens: PricingTokens) -> Self {
        Tokens::Pricing(tokens)
    }
}

fn plan_card(t: &PricingTokens, plan: &str, price: &str, highlight: bool) -> String {
    let font = &t.font_family;
    let primary = &t.primary_color;

    let card_attrs = if highlight {
        format!(
            r#"class="border-2 p-6 {} text-center relative" style="border-color:{}""#,
            t.rounded, primary
        )
    } else {
        format!(
            r#"class="border border-gray-200 dark:border-gray-700 p-6 {} text-center relative""#,
            t.rounded
        )
    };
    let badge = if highlight {
        format!(
            r#"<div class="absolute -top-3 left-1/2 -translate-x-1/2 text-white text-xs px-3 py-1 rounded-full" style="background:{}">{}</div>"#,
            primary, t.highlight_label
        )
    } else {
        String::new()
    };
    let price_color = if highlight { primary } else { &t.secondary_color };
    let button_text = if highlight { "text-white" } else { "" };
    let button_bg = if highlight { primary.as_str() } else { "transparent" };
    let button_color = if highlight { "white" } else { primary.as_str() };

    format!(
        r##"<div {card_attrs}>{badge}<h3 class="text-xl font-semibold mb-4 text-gray-900 dark:text-white" style="font-family:{font}">{plan}</h3><div class="text-3xl font-bold mb-4" style="color:{price_color};font-family:{font}">{price}</div><a href="#" class="inline-flex w-full justify-center px-4 py-2 text-sm font-medium {button_text} {rounded} border transition" style="background:{button_bg};border-color:{primary};color:{button_color};font-family:{font}">Choose Plan</a></div>"##,
        card_attrs = card_attrs,
        badge = badge,
        font = font,
        plan = plan,
        price_color = price_color,
        price = price,
        button_text = button_text,
        rounded = t.rounded,
        button_bg = button_bg,
        primary = primary,
        button_color = button_color,
    )
}

pub fn render(t: &PricingTokens) -> Markup {
    let prices = [&t.price_a, &t.price_b, &t.price_c];
    let cards: String = PLANS
        .iter()
        .zip(prices)
        .enumerate()
        .map(|(i, (plan, price))| plan_card(t, plan, price, i == HIGHLIGHTED_PLAN))
        .collect();

    Markup::new(format!(
        r#"<section class="py-24"><div class="px-6 max-w-5xl mx-auto text-center mb-14"><h2 class="text-4xl font-bold mb-4 text-gray-900 dark:text-white" style="font-family:{font}">{title}</h2><p class="text-lg text-gray-600 dark:text-gray-300" style="font-family:{font}">{subtitle}</p></div><div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">{cards}</div></section>"#,
        font = t.font_family,
        title = t.title,
        subtitle = t.subtitle,
        cards = cards,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_plans_and_prices_in_order() {
        let html = render(&PricingTokens::default());
        let html = html.as_str();

        let positions: Vec<usize> = ["Starter", "$39", "Pro", "$99", "Enterprise", "$199"]
            .iter()
            .map(|needle| html.find(needle).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_only_middle_plan_highlighted() {
        let html = render(&PricingTokens::default());
        assert_eq!(html.as_str().matches("Popular").count(), 1);
        assert_eq!(html.as_str().matches("border-2").count(), 1);
        assert_eq!(html.as_str().matches("Choose Plan").count(), 3);
    }

    #[test]
    fn test_price_colors() {
        let html = render(&PricingTokens::default());
        assert!(html.as_str().contains("color:#64748b;font-family:Inter\">$39"));
        assert!(html.as_str().contains("color:#3b82f6;font-family:Inter\">$99"));
    }

    #[test]
    fn test_attributes_are_well_formed() {
        let html = render(&PricingTokens::default());
        assert!(!html.as_str().contains("class=\"style="));
        assert!(!html.as_str().contains('\\'));
    }
}
