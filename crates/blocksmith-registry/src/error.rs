//! Crate-level error type.

use blocksmith_codegen::CodegenError;
use blocksmith_core::{RegistryError, TokenError};
use thiserror::Error;

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Any failure surfaced by the registry layer.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),
}
