//! The built-in component catalog.

use crate::entry::{EntryBuilder, RegistryEntry};
use crate::error::Result;
use crate::registry::ComponentRegistry;
use blocksmith_blocks::Tokens;
use blocksmith_core::{ComponentKind, FieldDescriptor, FieldKind, TokenError};

type EntryResult = std::result::Result<RegistryEntry, TokenError>;

const ALIGN: &[(&str, &str)] = &[("Center", "center"), ("Left", "left")];
const ROUNDED_SHORT: &[(&str, &str)] = &[
    ("None", "rounded-none"),
    ("Default", "rounded"),
    ("lg", "rounded-lg"),
];
const INTER_ROBOTO: &[(&str, &str)] = &[("Inter", "Inter"), ("Roboto", "Roboto")];
const INTER_POPPINS: &[(&str, &str)] = &[("Inter", "Inter"), ("Poppins", "Poppins")];

fn text(key: &str, label: &str) -> FieldDescriptor {
    FieldDescriptor::new(key, label, FieldKind::Text)
}

fn textarea(key: &str, label: &str) -> FieldDescriptor {
    FieldDescriptor::new(key, label, FieldKind::Textarea)
}

fn color(key: &str, label: &str) -> FieldDescriptor {
    FieldDescriptor::new(key, label, FieldKind::Color)
}

fn font(options: &[(&str, &str)]) -> FieldDescriptor {
    FieldDescriptor::select("fontFamily", "Font Family", options)
}

fn entry(kind: ComponentKind) -> EntryBuilder {
    EntryBuilder::new(kind.as_str(), Tokens::defaults(kind))
}

fn hero() -> EntryResult {
    entry(ComponentKind::Hero)
        .label("Hero")
        .category("Hero")
        .description("Prominent marketing section")
        .field(text("title", "Title"))
        .field(textarea("subtitle", "Subtitle"))
        .field(text("primaryButtonLabel", "Primary Button"))
        .field(text("secondaryButtonLabel", "Secondary Button").visible_when("showSecondary"))
        .field(FieldDescriptor::new("showSecondary", "Show Secondary", FieldKind::Boolean))
        .field(FieldDescriptor::select("align", "Align", ALIGN))
        .field(FieldDescriptor::select(
            "maxWidth",
            "Max Width",
            &[("2XL", "max-w-2xl"), ("3XL", "max-w-3xl"), ("4XL", "max-w-4xl")],
        ))
        .field(color("primaryColor", "Primary Color"))
        .field(color("secondaryColor", "Secondary Color"))
        .field(color("gradientFrom", "Gradient From"))
        .field(color("gradientTo", "Gradient To"))
        .field(font(&[
            ("Inter", "Inter"),
            ("Poppins", "Poppins"),
            ("Roboto", "Roboto"),
            ("Open Sans", "Open Sans"),
        ]))
        .field(FieldDescriptor::select(
            "rounded",
            "Rounded",
            &[
                ("None", "rounded-none"),
                ("Default", "rounded"),
                ("md", "rounded-md"),
                ("lg", "rounded-lg"),
                ("xl", "rounded-xl"),
                ("Full", "rounded-full"),
            ],
        ))
        .field(FieldDescriptor::select(
            "backgroundStyle",
            "Background Style",
            &[
                ("Theme (follows UI)", "theme"),
                ("Gradient", "gradient"),
                ("Solid", "solid"),
                ("Image", "image"),
            ],
        ))
        .build()
}

fn cta() -> EntryResult {
    entry(ComponentKind::Cta)
        .label("CTA")
        .category("Marketing")
        .description("Call to action block")
        .field(text("title", "Title"))
        .field(textarea("subtitle", "Subtitle"))
        .field(text("buttonLabel", "Button Label"))
        .field(FieldDescriptor::select("align", "Align", ALIGN))
        .field(FieldDescriptor::select(
            "width",
            "Width",
            &[("2XL", "max-w-2xl"), ("3XL", "max-w-3xl")],
        ))
        .field(color("primaryColor", "Primary Color"))
        .field(font(&[("Inter", "Inter"), ("Poppins", "Poppins"), ("Roboto", "Roboto")]))
        .field(FieldDescriptor::select("rounded", "Rounded", ROUNDED_SHORT))
        .build()
}

fn pricing() -> EntryResult {
    entry(ComponentKind::Pricing)
        .label("Pricing")
        .category("Marketing")
        .description("3-tier pricing grid")
        .field(text("title", "Title"))
        .field(textarea("subtitle", "Subtitle"))
        .field(text("highlightLabel", "Highlight Label"))
        .field(text("priceA", "Price A"))
        .field(text("priceB", "Price B"))
        .field(text("priceC", "Price C"))
        .field(color("primaryColor", "Primary Color"))
        .field(color("secondaryColor", "Secondary Color"))
        .field(font(INTER_POPPINS))
        .field(FieldDescriptor::select("rounded", "Rounded", ROUNDED_SHORT))
        .build()
}

fn features() -> EntryResult {
    entry(ComponentKind::Features)
        .label("Features")
        .category("Content")
        .description("Feature grid")
        .field(text("title", "Title"))
        .field(textarea("subtitle", "Subtitle"))
        .field(text("items", "Items (comma list)"))
        .field(color("primaryColor", "Primary Color"))
        .field(color("secondaryColor", "Secondary Color"))
        .field(color("accentColor", "Accent Color"))
        .field(font(INTER_ROBOTO))
        .build()
}

fn faq() -> EntryResult {
    entry(ComponentKind::Faq)
        .label("FAQ")
        .category("Content")
        .description("Accordion questions")
        .field(text("title", "Title"))
        .field(textarea("subtitle", "Subtitle"))
        .field(text("questions", "Questions (comma list)"))
        .field(color("primaryColor", "Primary Color"))
        .field(font(INTER_ROBOTO))
        .build()
}

fn testimonials() -> EntryResult {
    entry(ComponentKind::Testimonials)
        .label("Testimonials")
        .category("Content")
        .description("Customer quotes")
        .field(text("title", "Title"))
        .field(textarea("subtitle", "Subtitle"))
        .field(text("names", "Names (comma list)"))
        .field(color("primaryColor", "Primary Color"))
        .field(color("secondaryColor", "Secondary Color"))
        .field(color("accentColor", "Accent Color"))
        .field(font(INTER_POPPINS))
        .build()
}

fn navbar() -> EntryResult {
    entry(ComponentKind::Navbar)
        .label("Navbar")
        .category("Layout")
        .description("Top navigation bar")
        .field(text("brand", "Brand"))
        .field(text("links", "Links (comma list)"))
        .field(font(INTER_ROBOTO))
        .field(color("primaryColor", "Primary Color"))
        .build()
}

fn footer() -> EntryResult {
    entry(ComponentKind::Footer)
        .label("Footer")
        .category("Layout")
        .description("Simple footer")
        .field(text("copyright", "Copyright"))
        .field(font(INTER_ROBOTO))
        .build()
}

fn blog() -> EntryResult {
    entry(ComponentKind::Blog)
        .label("Blog Cards")
        .category("Content")
        .description("Grid of blog teasers")
        .field(text("title", "Title"))
        .field(text("subtitle", "Subtitle"))
        .field(text("posts", "Posts (comma list)"))
        .field(font(INTER_ROBOTO))
        .build()
}

fn media_text() -> EntryResult {
    entry(ComponentKind::MediaText)
        .label("Media + Text")
        .category("Content")
        .description("Paragraph with image")
        .field(text("title", "Title"))
        .field(textarea("text", "Text"))
        .field(text("imageUrl", "Image URL"))
        .field(FieldDescriptor::select(
            "align",
            "Image align",
            &[("Left", "left"), ("Right", "right")],
        ))
        .field(color("primaryColor", "Primary Color"))
        .field(FieldDescriptor::select(
            "rounded",
            "Rounded",
            &[("Default", "rounded"), ("lg", "rounded-lg"), ("xl", "rounded-xl")],
        ))
        .build()
}

/// Entry for one kind, as it appears in the built-in catalog.
pub fn builtin_entry(kind: ComponentKind) -> Result<RegistryEntry> {
    let entry = match kind {
        ComponentKind::Hero => hero(),
        ComponentKind::Cta => cta(),
        ComponentKind::Pricing => pricing(),
        ComponentKind::Features => features(),
        ComponentKind::Faq => faq(),
        ComponentKind::Testimonials => testimonials(),
        ComponentKind::Navbar => navbar(),
        ComponentKind::Footer => footer(),
        ComponentKind::Blog => blog(),
        ComponentKind::MediaText => media_text(),
    }?;
    Ok(entry)
}

/// The built-in catalog of all ten components, in catalog order.
pub fn builtin() -> Result<ComponentRegistry> {
    let entries = ComponentKind::ALL
        .into_iter()
        .map(builtin_entry)
        .collect::<Result<Vec<_>>>()?;
    Ok(ComponentRegistry::new(entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blocksmith_core::{FieldKind, TokenSet, TokenValue};
    use proptest::prelude::*;

    #[test]
    fn test_contains_hero_and_cta() {
        let registry = builtin().unwrap();
        assert!(registry.contains("hero"));
        assert!(registry.contains("cta"));
        assert_eq!(registry.len(), 10);
    }

    #[test]
    fn test_catalog_order() {
        let registry = builtin().unwrap();
        let ids: Vec<_> = registry.ids().collect();
        assert_eq!(
            ids,
            vec![
                "hero",
                "cta",
                "pricing",
                "features",
                "faq",
                "testimonials",
                "navbar",
                "footer",
                "blog",
                "media-text",
            ]
        );
    }

    #[test]
    fn test_every_entry_renders_its_defaults() {
        let registry = builtin().unwrap();
        for entry in registry.list_all() {
            let html = entry.render(&entry.defaults).unwrap();
            assert!(!html.is_empty(), "{} rendered nothing", entry.id);
            assert_eq!(entry.kind().as_str(), entry.id);

            let set = entry.defaults.to_token_set().unwrap();
            let copy_keys = set.keys().filter(|key| {
                key.ends_with("Label")
                    || matches!(*key, "title" | "subtitle" | "text" | "brand" | "copyright")
            });
            for key in copy_keys {
                let value = set.text(key).unwrap();
                assert!(html.as_str().contains(value), "{} lacks its {}", entry.id, key);
            }
        }
    }

    #[test]
    fn test_hero_defaults_render_title() {
        let registry = builtin().unwrap();
        let hero = registry.find("hero").unwrap();
        assert!(hero.render_defaults().as_str().contains("Build Amazing Products"));
    }

    #[test]
    fn test_cta_custom_title() {
        let registry = builtin().unwrap();
        let cta = registry.find("cta").unwrap();
        let tokens = cta.defaults.with_field("title", "Custom CTA").unwrap();
        assert!(cta.render(&tokens).unwrap().as_str().contains("Custom CTA"));
    }

    #[test]
    fn test_every_field_is_a_token() {
        let registry = builtin().unwrap();
        for entry in registry.list_all() {
            let schema = entry.defaults.schema();
            for field in &entry.fields {
                assert!(schema.field(&field.key).is_some(), "{}.{}", entry.id, field.key);
                if field.kind == FieldKind::Select {
                    assert!(!field.options.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_hero_secondary_label_visibility() {
        let registry = builtin().unwrap();
        let hero = registry.find("hero").unwrap();

        let shown = hero.visible_fields(&hero.defaults).unwrap();
        assert!(shown.iter().any(|f| f.key == "secondaryButtonLabel"));

        let hidden_tokens = hero.defaults.with_field("showSecondary", false).unwrap();
        let hidden = hero.visible_fields(&hidden_tokens).unwrap();
        assert!(!hidden.iter().any(|f| f.key == "secondaryButtonLabel"));
        assert_eq!(hidden.len(), hero.fields.len() - 1);
    }

    #[test]
    fn test_hero_export_uses_generic_profile() {
        let registry = builtin().unwrap();
        let hero = registry.find("hero").unwrap();
        let bundle = hero.export(&hero.defaults).unwrap();

        assert!(bundle.vue.contains("<template>"));
        assert!(!bundle.vue.contains("static hero"));
        assert!(bundle.react.starts_with("export function Component(){"));
        assert!(!bundle.react.contains("class=\""));
        assert!(bundle.angular.starts_with("<div class=\"wrapper\">"));
        assert!(!bundle.angular.contains("hero-wrapper"));
        assert_eq!(bundle.svelte, bundle.html);

        let dedicated = blocksmith_codegen::wrap_hero(&hero.render_defaults()).unwrap();
        assert!(dedicated.react.starts_with("export function Hero(){"));
        assert_eq!(dedicated.html, bundle.html);
    }

    #[test]
    fn test_generic_export() {
        let registry = builtin().unwrap();
        for entry in registry.list_all() {
            let bundle = entry.export(&entry.defaults).unwrap();
            assert!(bundle.vue.contains("<template>"));
            assert!(bundle.react.contains("export function Component"));
            assert!(bundle.angular.contains("class=\"wrapper\""));
            assert_eq!(bundle.html, entry.render_defaults().into_string());
        }
    }

    #[test]
    fn test_select_then_update() {
        let registry = builtin().unwrap();
        let navbar = registry.find("navbar").unwrap();
        let tokens = navbar
            .defaults
            .merge(&TokenSet::new().with("brand", "Acme").with("links", "Home, About"))
            .unwrap();

        assert_eq!(tokens.get("brand"), Some(TokenValue::from("Acme")));
        let html = navbar.render(&tokens).unwrap();
        assert!(html.as_str().contains(">Home</a>"));
        assert!(html.as_str().contains(">About</a>"));
        // Reset goes back to the catalog defaults.
        assert_eq!(Tokens::defaults(navbar.kind()), navbar.defaults);
    }

    proptest! {
        #[test]
        fn test_export_is_deterministic(title in "[A-Za-z0-9 ]{1,40}") {
            let registry = builtin().unwrap();
            let cta = registry.find("cta").unwrap();
            let tokens = cta.defaults.with_field("title", title.as_str()).unwrap();

            let first = cta.export(&tokens).unwrap();
            let second = cta.export(&tokens).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert!(first.html.contains(title.as_str()));
        }
    }
}
