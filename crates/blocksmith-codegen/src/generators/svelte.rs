//! Svelte accepts the source markup as-is.

use super::{Framework, WrapperGenerator};
use crate::error::Result;
use blocksmith_core::Markup;

#[derive(Debug, Clone, Copy, Default)]
pub struct SvelteGenerator;

impl SvelteGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl WrapperGenerator for SvelteGenerator {
    fn framework(&self) -> Framework {
        Framework::Svelte
    }

    fn wrap(&self, markup: &Markup) -> Result<String> {
        Ok(markup.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbatim() {
        let markup = Markup::new(r#"<nav class="py-4"></nav>"#);
        assert_eq!(SvelteGenerator::new().wrap(&markup).unwrap(), markup.as_str());
    }
}
