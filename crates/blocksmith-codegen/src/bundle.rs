//! Multi-framework export bundles.

use crate::error::Result;
use crate::generators::{
    AngularGenerator, Framework, ReactGenerator, SvelteGenerator, VueGenerator, WrapperGenerator,
};
use crate::profile::WrapperProfile;
use blocksmith_core::Markup;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

static GENERIC: OnceCell<WrapperEmitter> = OnceCell::new();
static HERO: OnceCell<WrapperEmitter> = OnceCell::new();

/// One piece of markup expressed in every supported framework's source shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkBundle {
    pub html: String,
    pub vue: String,
    pub react: String,
    pub svelte: String,
    pub angular: String,
}

impl FrameworkBundle {
    /// Source text for one framework.
    pub fn get(&self, framework: Framework) -> &str {
        match framework {
            Framework::Vue => &self.vue,
            Framework::React => &self.react,
            Framework::Svelte => &self.svelte,
            Framework::Angular => &self.angular,
        }
    }
}

/// Wraps markup for all frameworks using one [`WrapperProfile`].
pub struct WrapperEmitter {
    vue: VueGenerator,
    react: ReactGenerator,
    svelte: SvelteGenerator,
    angular: AngularGenerator,
}

impl WrapperEmitter {
    /// Build an emitter from a profile. The profile is validated first.
    pub fn new(profile: &WrapperProfile) -> Result<Self> {
        profile.validate()?;
        Ok(Self {
            vue: VueGenerator::new(profile)?,
            react: ReactGenerator::new(profile)?,
            svelte: SvelteGenerator::new(),
            angular: AngularGenerator::new(profile)?,
        })
    }

    pub fn generic() -> Result<Self> {
        Self::new(&WrapperProfile::generic())
    }

    pub fn hero() -> Result<Self> {
        Self::new(&WrapperProfile::hero())
    }

    /// Process-wide generic emitter, built on first use.
    pub fn shared_generic() -> Result<&'static Self> {
        GENERIC.get_or_try_init(Self::generic)
    }

    /// Process-wide hero emitter, built on first use.
    pub fn shared_hero() -> Result<&'static Self> {
        HERO.get_or_try_init(Self::hero)
    }

    fn generator(&self, framework: Framework) -> &dyn WrapperGenerator {
        match framework {
            Framework::Vue => &self.vue,
            Framework::React => &self.react,
            Framework::Svelte => &self.svelte,
            Framework::Angular => &self.angular,
        }
    }

    /// Wrap markup for a single framework.
    pub fn emit_one(&self, framework: Framework, markup: &Markup) -> Result<String> {
        self.generator(framework).wrap(markup)
    }

    /// Wrap markup for every framework.
    pub fn emit(&self, markup: &Markup) -> Result<FrameworkBundle> {
        tracing::debug!(bytes = markup.len(), "emitting framework bundle");
        Ok(FrameworkBundle {
            html: markup.as_str().to_string(),
            vue: self.emit_one(Framework::Vue, markup)?,
            react: self.emit_one(Framework::React, markup)?,
            svelte: self.emit_one(Framework::Svelte, markup)?,
            angular: self.emit_one(Framework::Angular, markup)?,
        })
    }
}

/// Wrap markup with the generic profile, as the registry export path does.
pub fn wrap(markup: &Markup) -> Result<FrameworkBundle> {
    WrapperEmitter::shared_generic()?.emit(markup)
}

/// Wrap markup with the hero profile of the dedicated hero export.
pub fn wrap_hero(markup: &Markup) -> Result<FrameworkBundle> {
    WrapperEmitter::shared_hero()?.emit(markup)
}
