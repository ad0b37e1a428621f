//! Core type definitions for storyshare.
//!
//! This crate defines the small, block-agnostic types shared by the model
//! and the i18n layer:
//! - Language codes, including the reserved `"default"` sentinel
//! - Block instance identifiers (UUID v7)
//!
//! Attribute schemas and overlay maps live in `storyshare-model`.

mod ids;
mod language;

pub use ids::BlockId;
pub use language::{DEFAULT_LANGUAGE, LanguageCode};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid language code: {0:?}")]
    InvalidLanguageCode(String),
}
