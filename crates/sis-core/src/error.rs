//! Core error type.
//!
//! Sub-crates define their own error enums and either convert `SisError`
//! into them via `From` impls or wrap it as one variant.  Configuration
//! defects are always fatal and surfaced before a run starts.

use thiserror::Error;

/// The top-level error type for `sis-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SisError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `sis-*` crates.
pub type SisResult<T> = Result<T, SisError>;
