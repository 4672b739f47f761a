//! Blocksmith Codegen - framework wrappers for rendered blocks.
//!
//! This crate takes markup produced by a block renderer and wraps it in the
//! source shape of each supported UI framework: a Vue single-file component,
//! a React function component, a Svelte file, and an Angular template.
//!
//! Markup is never parsed. The only transformation is the React remap of
//! `class="` to `className="`; every other framework receives it byte for byte.
//!
//! # Example
//!
//! ```
//! use blocksmith_codegen::wrap;
//! use blocksmith_core::Markup;
//!
//! let bundle = wrap(&Markup::new(r#"<div class="x"></div>"#)).unwrap();
//! assert!(bundle.react.contains(r#"className="x""#));
//! assert_eq!(bundle.svelte, bundle.html);
//! ```

pub mod bundle;
pub mod error;
pub mod generators;
pub mod profile;

pub use bundle::{wrap, wrap_hero, FrameworkBundle, WrapperEmitter};
pub use error::{CodegenError, Result};
pub use generators::{Framework, WrapperGenerator};
pub use profile::WrapperProfile;
