//! Wrapper profiles.
//!
//! A profile fixes the textual shape each framework wrapper takes: the
//! exported component name, the marker class of the Angular container, and
//! the handlebars templates for the Vue, React, and Angular variants.
//! Templates see `markup` (use triple braces), `name`, and `wrapper_class`.

use crate::error::{CodegenError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

const GENERIC_VUE: &str = "<template>\n{{{markup}}}\n</template>\n<script setup lang=\"ts\"></script>";
const GENERIC_REACT: &str = "export function {{name}}(){\n  return (<>\n{{{markup}}}\n  </>);\n}";

const HERO_VUE: &str = "<template>\n{{{markup}}}\n</template>\n\n<script setup lang=\"ts\">\n// No logic required for static hero.\n</script>";
const HERO_REACT: &str = "export function {{name}}(){\n  return (\n    <>\n      {{{markup}}}\n    </>\n  );\n}";

const ANGULAR: &str = "<div class=\"{{wrapper_class}}\">\n{{{markup}}}\n</div>";

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("Invalid identifier regex pattern")
});

static CLASS_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?[A-Za-z_][A-Za-z0-9_-]*$").expect("Invalid class name regex pattern")
});

/// Textual shape of the framework wrappers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WrapperProfile {
    /// Exported React function name.
    pub component_name: String,
    /// Marker class on the Angular wrapping container.
    pub wrapper_class: String,
    pub vue_template: String,
    pub react_template: String,
    pub angular_template: String,
}

impl WrapperProfile {
    /// Shape used for every registry component.
    pub fn generic() -> Self {
        Self {
            component_name: "Component".to_string(),
            wrapper_class: "wrapper".to_string(),
            vue_template: GENERIC_VUE.to_string(),
            react_template: GENERIC_REACT.to_string(),
            angular_template: ANGULAR.to_string(),
        }
    }

    /// Shape used by the dedicated hero export.
    pub fn hero() -> Self {
        Self {
            component_name: "Hero".to_string(),
            wrapper_class: "hero-wrapper".to_string(),
            vue_template: HERO_VUE.to_string(),
            react_template: HERO_REACT.to_string(),
            angular_template: ANGULAR.to_string(),
        }
    }

    /// Load a profile from JSON. Missing keys fall back to [`WrapperProfile::generic`].
    pub fn from_json(json: &str) -> Result<Self> {
        let profile: Self = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Check that the component name is a valid identifier and the wrapper
    /// class a valid CSS class name.
    pub fn validate(&self) -> Result<()> {
        if !IDENTIFIER.is_match(&self.component_name) {
            return Err(CodegenError::InvalidProfile {
                field: "componentName".to_string(),
                value: self.component_name.clone(),
            });
        }

        if !CLASS_NAME.is_match(&self.wrapper_class) {
            return Err(CodegenError::InvalidProfile {
                field: "wrapperClass".to_string(),
                value: self.wrapper_class.clone(),
            });
        }

        Ok(())
    }
}

impl Default for WrapperProfile {
    fn default() -> Self {
        Self::generic()
    }
}
