//! Core types and utilities for the Blocksmith component engine.
//!
//! This crate provides the foundational types used across all other blocksmith crates:
//! - Token values and flat token sets
//! - Token schemas and their validation
//! - Field descriptors for external editors
//! - Markup strings and list/palette helpers used by renderers
//! - Error types

pub mod errors;
pub mod fields;
pub mod kind;
pub mod markup;
pub mod schema;
pub mod tokens;

pub use errors::*;
pub use fields::*;
pub use kind::*;
pub use markup::*;
pub use schema::*;
pub use tokens::*;
