//! Error types for the i18n layer.

use thiserror::Error;

/// Errors raised while editing translated attributes or loading the catalog.
#[derive(Debug, Error)]
pub enum I18nError {
    /// Strict mode rejected an attribute the block schema does not declare.
    #[error("attribute {attribute:?} is not declared in the block schema")]
    SchemaViolation { attribute: String },

    /// The language catalog could not be fetched.
    #[error("language catalog unavailable: {0}")]
    LanguageFetch(String),

    /// Config file could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for i18n operations.
pub type I18nResult<T> = Result<T, I18nError>;
