//! Vue single-file component wrapper.

use super::templates::TemplateEngine;
use super::{Framework, WrapperData, WrapperGenerator};
use crate::error::Result;
use crate::profile::WrapperProfile;
use blocksmith_core::Markup;

const TEMPLATE: &str = "vue";

/// Encloses markup in a `<template>` block with a typed `<script setup>`.
pub struct VueGenerator {
    engine: TemplateEngine<'static>,
    name: String,
}

impl VueGenerator {
    pub fn new(profile: &WrapperProfile) -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template(TEMPLATE, &profile.vue_template)?;
        Ok(Self {
            engine,
            name: profile.component_name.clone(),
        })
    }
}

impl WrapperGenerator for VueGenerator {
    fn framework(&self) -> Framework {
        Framework::Vue
    }

    fn wrap(&self, markup: &Markup) -> Result<String> {
        self.engine.render(
            TEMPLATE,
            &WrapperData {
                markup: markup.as_str(),
                name: &self.name,
                wrapper_class: "",
            },
        )
    }
}
