//! Component registry for storing and looking up catalog entries.

use crate::entry::RegistryEntry;
use blocksmith_core::RegistryError;
use indexmap::IndexMap;

/// Read-only catalog of component entries, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    entries: IndexMap<String, RegistryEntry>,
}

impl ComponentRegistry {
    /// Build a registry. Ids must be unique.
    pub fn new(entries: impl IntoIterator<Item = RegistryEntry>) -> Result<Self, RegistryError> {
        let mut map = IndexMap::new();
        for entry in entries {
            if map.contains_key(&entry.id) {
                return Err(RegistryError::DuplicateId { id: entry.id });
            }
            map.insert(entry.id.clone(), entry);
        }
        tracing::debug!(entries = map.len(), "component registry built");
        Ok(Self { entries: map })
    }

    /// All entries in catalog order.
    pub fn list_all(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.values()
    }

    /// Look up an entry, failing with [`RegistryError::NotFound`].
    pub fn find(&self, id: &str) -> Result<&RegistryEntry, RegistryError> {
        self.entries.get(id).ok_or_else(|| {
            tracing::debug!(id, "component lookup missed");
            RegistryError::NotFound { id: id.to_string() }
        })
    }

    pub fn get(&self, id: &str) -> Option<&RegistryEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryBuilder;
    use blocksmith_blocks::Tokens;
    use blocksmith_core::ComponentKind;

    fn entry(id: &str, kind: ComponentKind) -> RegistryEntry {
        EntryBuilder::new(id, Tokens::defaults(kind)).build().unwrap()
    }

    #[test]
    fn test_registry_empty() {
        let registry = ComponentRegistry::new(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.list_all().count(), 0);
    }

    #[test]
    fn test_registry_keeps_order() {
        let registry = ComponentRegistry::new([
            entry("navbar", ComponentKind::Navbar),
            entry("footer", ComponentKind::Footer),
            entry("blog", ComponentKind::Blog),
        ])
        .unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["navbar", "footer", "blog"]);
        assert!(registry.contains("footer"));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = ComponentRegistry::new([
            entry("cta", ComponentKind::Cta),
            entry("cta", ComponentKind::Cta),
        ])
        .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateId { id: "cta".to_string() });
    }

    #[test]
    fn test_find_unknown() {
        let registry = ComponentRegistry::new([entry("faq", ComponentKind::Faq)]).unwrap();
        assert_eq!(registry.find("faq").unwrap().kind(), ComponentKind::Faq);
        assert!(registry.get("gallery").is_none());

        let err = registry.find("gallery").unwrap_err();
        assert_eq!(err, RegistryError::NotFound { id: "gallery".to_string() });
        assert_eq!(err.to_string(), "Unknown component: gallery");
    }
}
