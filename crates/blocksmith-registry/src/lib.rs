//! Blocksmith Registry - the component catalog and export path.
//!
//! The registry maps stable component ids to their defaults, editor field
//! descriptors, and renderers. Entries render token sets to markup and export
//! that markup wrapped for Vue, React, Svelte, and Angular.
//!
//! # Example
//!
//! ```
//! use blocksmith_registry::catalog;
//!
//! let registry = catalog::builtin()?;
//! let cta = registry.find("cta")?;
//! let tokens = cta.defaults.with_field("title", "Ship faster")?;
//! let bundle = cta.export(&tokens)?;
//! assert!(bundle.react.contains("Ship faster"));
//! # Ok::<(), blocksmith_registry::Error>(())
//! ```

pub mod catalog;
pub mod entry;
pub mod error;
pub mod migration;
pub mod registry;

pub use entry::{EntryBuilder, RegistryEntry};
pub use error::{Error, Result};
pub use migration::{migrate, DefaultsMigration, DEFAULTS_VERSION};
pub use registry::ComponentRegistry;
