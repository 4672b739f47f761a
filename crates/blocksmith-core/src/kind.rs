//! Component kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::RegistryError;

/// Every marketing block the engine knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Hero,
    Cta,
    Pricing,
    Features,
    Faq,
    Testimonials,
    Navbar,
    Footer,
    Blog,
    MediaText,
}

impl ComponentKind {
    /// All kinds in catalog order.
    pub const ALL: [ComponentKind; 10] = [
        ComponentKind::Hero,
        ComponentKind::Cta,
        ComponentKind::Pricing,
        ComponentKind::Features,
        ComponentKind::Faq,
        ComponentKind::Testimonials,
        ComponentKind::Navbar,
        ComponentKind::Footer,
        ComponentKind::Blog,
        ComponentKind::MediaText,
    ];

    /// Stable identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Cta => "cta",
            Self::Pricing => "pricing",
            Self::Features => "features",
            Self::Faq => "faq",
            Self::Testimonials => "testimonials",
            Self::Navbar => "navbar",
            Self::Footer => "footer",
            Self::Blog => "blog",
            Self::MediaText => "media-text",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| RegistryError::NotFound { id: s.to_string() })
    }
}
