//! Wrapper generators for each target UI framework.

mod angular;
mod react;
mod svelte;
mod templates;
mod vue;

pub use angular::AngularGenerator;
pub use react::ReactGenerator;
pub use svelte::SvelteGenerator;
pub use templates::TemplateEngine;
pub use vue::VueGenerator;

use crate::error::{CodegenError, Result};
use blocksmith_core::Markup;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target UI framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Vue,
    React,
    Svelte,
    Angular,
}

impl Framework {
    pub const ALL: [Framework; 4] = [
        Framework::Vue,
        Framework::React,
        Framework::Svelte,
        Framework::Angular,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vue => "vue",
            Self::React => "react",
            Self::Svelte => "svelte",
            Self::Angular => "angular",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|fw| fw.as_str() == s)
            .ok_or_else(|| CodegenError::UnknownFramework(s.to_string()))
    }
}

/// Common trait for wrapper generators.
pub trait WrapperGenerator {
    /// Target framework.
    fn framework(&self) -> Framework;

    /// Wrap already-rendered markup in the framework's source shape.
    fn wrap(&self, markup: &Markup) -> Result<String>;
}

/// Data handed to wrapper templates.
#[derive(Serialize)]
pub(crate) struct WrapperData<'a> {
    pub markup: &'a str,
    pub name: &'a str,
    pub wrapper_class: &'a str,
}
