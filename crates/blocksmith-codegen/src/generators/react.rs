//! React function component wrapper.

use super::templates::TemplateEngine;
use super::{Framework, WrapperData, WrapperGenerator};
use crate::error::Result;
use crate::profile::WrapperProfile;
use blocksmith_core::Markup;

const TEMPLATE: &str = "react";

const HTML_CLASS_ATTR: &str = "class=\"";
const JSX_CLASS_ATTR: &str = "className=\"";

/// Returns the markup from a named function as a single fragment.
pub struct ReactGenerator {
    engine: TemplateEngine<'static>,
    name: String,
}

impl ReactGenerator {
    pub fn new(profile: &WrapperProfile) -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template(TEMPLATE, &profile.react_template)?;
        Ok(Self {
            engine,
            name: profile.component_name.clone(),
        })
    }
}

/// Rewrite every `class="` attribute to JSX's `className="`.
pub fn to_jsx(markup: &str) -> String {
    markup.replace(HTML_CLASS_ATTR, JSX_CLASS_ATTR)
}

impl WrapperGenerator for ReactGenerator {
    fn framework(&self) -> Framework {
        Framework::React
    }

    fn wrap(&self, markup: &Markup) -> Result<String> {
        let jsx = to_jsx(markup.as_str());
        self.engine.render(
            TEMPLATE,
            &WrapperData {
                markup: &jsx,
                name: &self.name,
                wrapper_class: "",
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_attr_remapped() {
        let jsx = to_jsx(r#"<div class="x"><span class="y z">a</span></div>"#);
        assert_eq!(jsx, r#"<div className="x"><span className="y z">a</span></div>"#);
        assert!(!jsx.contains("class="));
    }

    #[test]
    fn test_generic_shape() {
        let gen = ReactGenerator::new(&WrapperProfile::generic()).unwrap();
        let code = gen.wrap(&Markup::new(r#"<p class="x">Hi</p>"#)).unwrap();
        assert_eq!(
            code,
            "export function Component(){\n  return (<>\n<p className=\"x\">Hi</p>\n  </>);\n}"
        );
    }

    #[test]
    fn test_hero_shape() {
        let gen = ReactGenerator::new(&WrapperProfile::hero()).unwrap();
        let code = gen.wrap(&Markup::new("<section></section>")).unwrap();
        assert_eq!(
            code,
            "export function Hero(){\n  return (\n    <>\n      <section></section>\n    </>\n  );\n}"
        );
    }
}
