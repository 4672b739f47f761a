//! Angular template wrapper.

use super::templates::TemplateEngine;
use super::{Framework, WrapperData, WrapperGenerator};
use crate::error::Result;
use crate::profile::WrapperProfile;
use blocksmith_core::Markup;

const TEMPLATE: &str = "angular";

/// Encloses markup in one container element carrying the profile's marker class.
pub struct AngularGenerator {
    engine: TemplateEngine<'static>,
    wrapper_class: String,
}

impl AngularGenerator {
    pub fn new(profile: &WrapperProfile) -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template(TEMPLATE, &profile.angular_template)?;
        Ok(Self {
            engine,
            wrapper_class: profile.wrapper_class.clone(),
        })
    }
}

impl WrapperGenerator for AngularGenerator {
    fn framework(&self) -> Framework {
        Framework::Angular
    }

    fn wrap(&self, markup: &Markup) -> Result<String> {
        self.engine.render(
            TEMPLATE,
            &WrapperData {
                markup: markup.as_str(),
                name: "",
                wrapper_class: &self.wrapper_class,
            },
        )
    }
}
