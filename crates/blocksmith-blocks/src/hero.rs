//! Hero block: headline, subtitle, call-to-action buttons over a configurable background.

use crate::{Align, Block, Tokens};
use blocksmith_core::{ComponentKind, FieldSpec, Markup, TokenSchema};
use serde::{Deserialize, Serialize};

/// Background photo baked into the image strategy.
pub const HERO_IMAGE_URL: &str = "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&w=1400&q=80";

/// Background strategy for the hero section. Exactly one is active per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundStyle {
    /// Two-stop gradient between `gradientFrom` and `gradientTo`.
    Gradient,
    /// `primaryColor` fill.
    Solid,
    /// Fixed background photo with a dark overlay.
    Image,
    /// No inline background; follows the surrounding light/dark theme.
    Theme,
}

impl BackgroundStyle {
    pub const OPTIONS: &'static [&'static str] = &["gradient", "solid", "image", "theme"];

    /// Background classes and inline style attribute for this strategy.
    fn layer(&self, tokens: &HeroTokens) -> (&'static str, String) {
        match self {
            BackgroundStyle::Gradient => (
                "bg-gradient-to-r from-[var(--c1)] to-[var(--c2)]",
                format!(
                    r#"style="--c1:{};--c2:{};""#,
                    tokens.gradient_from, tokens.gradient_to
                ),
            ),
            BackgroundStyle::Solid => (
                "bg-[var(--solid-bg)]",
                format!(r#"style="--solid-bg:{};""#, tokens.primary_color),
            ),
            BackgroundStyle::Theme => ("bg-white dark:bg-gray-900", String::new()),
            BackgroundStyle::Image => (
                "bg-cover bg-center",
                format!(r#"style="background-image:url('{}');""#, HERO_IMAGE_URL),
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeroTokens {
    pub title: String,
    pub subtitle: String,
    pub primary_button_label: String,
    pub secondary_button_label: String,
    pub show_secondary: bool,
    pub primary_color: String,
    pub secondary_color: String,
    pub gradient_from: String,
    pub gradient_to: String,
    pub font_family: String,
    /// Border radius utility, e.g. `rounded-lg`.
    pub rounded: String,
    pub background_style: BackgroundStyle,
    /// Max width utility, e.g. `max-w-3xl`.
    pub max_width: String,
    pub align: Align,
}

impl Default for HeroTokens {
    fn default() -> Self {
        Self {
            title: "Build Amazing Products".to_string(),
            subtitle: "Create beautiful, responsive components with our visual editor".to_string(),
            primary_button_label: "Get Started".to_string(),
            secondary_button_label: "Learn More".to_string(),
            show_secondary: true,
            primary_color: "#3b82f6".to_string(),
            secondary_color: "#6366f1".to_string(),
            gradient_from: "#3b82f6".to_string(),
            gradient_to: "#6366f1".to_string(),
            font_family: "Inter".to_string(),
            rounded: "rounded-lg".to_string(),
            background_style: BackgroundStyle::Theme,
            max_width: "max-w-3xl".to_string(),
            align: Align::Center,
        }
    }
}

pub static SCHEMA: TokenSchema = TokenSchema {
    component: "hero",
    fields: &[
        FieldSpec::text("title"),
        FieldSpec::text("subtitle"),
        FieldSpec::text("primaryButtonLabel"),
        FieldSpec::text("secondaryButtonLabel"),
        FieldSpec::flag("showSecondary"),
        FieldSpec::text("primaryColor"),
        FieldSpec::text("secondaryColor"),
        FieldSpec::text("gradientFrom"),
        FieldSpec::text("gradientTo"),
        FieldSpec::text("fontFamily"),
        FieldSpec::text("rounded"),
        FieldSpec::choice("backgroundStyle", BackgroundStyle::OPTIONS),
        FieldSpec::text("maxWidth"),
        FieldSpec::choice("align", Align::OPTIONS),
    ],
};

impl Block for HeroTokens {
    const KIND: ComponentKind = ComponentKind::Hero;

    fn schema() -> &'static TokenSchema {
        &SCHEMA
    }

    fn render(&self) -> Markup {
        render(self)
    }

    fn from_tokens(tokens: &Tokens) -> Option<&Self> {
        match tokens {
            Tokens::Hero(t) => Some(t),
            _ => None,
        }
    }
}

impl From<HeroTokens> for Tokens {
    fn from(tokens: HeroTokens) -> Self {
        Tokens::Hero(tokens)
    }
}

pub fn render(t: &HeroTokens) -> Markup {
    let centered = t.align == Align::Center;
    let flex_align = if centered { "justify-center" } else { "justify-start" };
    let subtitle_margin = if centered { "mx-auto" } else { "" };
    let (bg_class, style_attr) = t.background_style.layer(t);
    let overlay = if t.background_style == BackgroundStyle::Image {
        "block"
    } else {
        "none"
    };
    let font = &t.font_family;

    let secondary = if t.show_secondary {
        format!(
            r##"<a href="#" class="inline-flex items-center px-8 py-3 font-medium ring-1 ring-inset transition {rounded} text-gray-700 dark:text-white/90 ring-gray-300 dark:ring-white/40 hover:bg-gray-100 dark:hover:bg-white/10" style="font-family:{font}">{label}</a>"##,
            rounded = t.rounded,
            font = font,
            label = t.secondary_button_label,
        )
    } else {
        String::new()
    };

    Markup::new(format!(
        r##"<section class="relative overflow-hidden {bg_class} py-24 full-bleed" {style_attr}>
  <div class="relative z-10 px-6 {max_width} {container_align}">
    <h1 class="text-4xl md:text-5xl font-bold tracking-tight mb-6 text-gray-900 dark:text-white" style="font-family:{font}">{title}</h1>
    <p class="text-lg md:text-xl mb-10 max-w-2xl {subtitle_margin} text-gray-600 dark:text-gray-300" style="font-family:{font}">{subtitle}</p>
    <div class="flex flex-wrap gap-4 {flex_align}">
      <a href="#" class="inline-flex items-center px-8 py-3 font-medium text-white shadow {rounded}" style="background:{primary};font-family:{font}">{primary_label}</a>
      {secondary}
    </div>
  </div>
  <div class="absolute inset-0 bg-black/30" aria-hidden="true" style="display:{overlay}"></div>
</section>"##,
        bg_class = bg_class,
        style_attr = style_attr,
        max_width = t.max_width,
        container_align = t.align.container_class(),
        font = font,
        title = t.title,
        subtitle_margin = subtitle_margin,
        subtitle = t.subtitle,
        flex_align = flex_align,
        rounded = t.rounded,
        primary = t.primary_color,
        primary_label = t.primary_button_label,
        secondary = secondary,
        overlay = overlay,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRADIENT_MARKER: &str = "--c1:";
    const SOLID_MARKER: &str = "--solid-bg:";
    const THEME_MARKER: &str = "bg-white dark:bg-gray-900";

    fn markers(html: &str) -> [bool; 4] {
        [
            html.contains(GRADIENT_MARKER),
            html.contains(SOLID_MARKER),
            html.contains(THEME_MARKER),
            html.contains(HERO_IMAGE_URL),
        ]
    }

    #[test]
    fn test_render_contains_title() {
        let tokens = HeroTokens {
            title: "Custom Title".to_string(),
            ..Default::default()
        };
        assert!(render(&tokens).as_str().contains("Custom Title"));
    }

    #[test]
    fn test_alignment_center_vs_left() {
        let center = render(&HeroTokens::default());
        let left = render(&HeroTokens {
            align: Align::Left,
            ..Default::default()
        });

        assert!(center.as_str().contains("text-center mx-auto"));
        assert!(center.as_str().contains("justify-center"));
        assert!(left.as_str().contains("text-left"));
        assert!(left.as_str().contains("justify-start"));
        assert!(!left.as_str().contains("text-center"));
    }

    #[test]
    fn test_secondary_button_gating() {
        let with = render(&HeroTokens::default());
        let without = render(&HeroTokens {
            show_secondary: false,
            ..Default::default()
        });

        assert!(with.as_str().contains("Learn More"));
        assert!(!without.as_str().contains("Learn More"));
        assert!(without.len() < with.len());
    }

    #[test]
    fn test_background_strategies_are_exclusive() {
        let cases = [
            (BackgroundStyle::Gradient, 0),
            (BackgroundStyle::Solid, 1),
            (BackgroundStyle::Theme, 2),
            (BackgroundStyle::Image, 3),
        ];

        for (style, active) in cases {
            let html = render(&HeroTokens {
                background_style: style,
                ..Default::default()
            });
            let found = markers(html.as_str());
            for (index, present) in found.iter().enumerate() {
                assert_eq!(*present, index == active, "{:?} marker {}", style, index);
            }
        }
    }

    #[test]
    fn test_gradient_uses_both_stops() {
        let html = render(&HeroTokens {
            background_style: BackgroundStyle::Gradient,
            gradient_from: "#ff0000".to_string(),
            gradient_to: "#00ff00".to_string(),
            ..Default::default()
        });
        assert!(html.as_str().contains(r#"style="--c1:#ff0000;--c2:#00ff00;""#));
    }

    #[test]
    fn test_overlay_only_for_image() {
        let image = render(&HeroTokens {
            background_style: BackgroundStyle::Image,
            ..Default::default()
        });
        let solid = render(&HeroTokens {
            background_style: BackgroundStyle::Solid,
            ..Default::default()
        });

        assert!(image.as_str().contains("display:block"));
        assert!(solid.as_str().contains("display:none"));
    }

    #[test]
    fn test_text_is_not_escaped() {
        let html = render(&HeroTokens {
            title: "Fast & <em>Free</em>".to_string(),
            ..Default::default()
        });
        assert!(html.as_str().contains(">Fast & <em>Free</em></h1>"));
    }
}
