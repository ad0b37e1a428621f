//! Language codes.
//!
//! A language code is an opaque string key into a block's overlay map
//! (`"fr"`, `"pt-BR"`, ...). The editor never validates codes against the
//! language catalog: an unknown code simply has no overlay yet.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// The reserved code that selects the canonical (untranslated) values.
pub const DEFAULT_LANGUAGE: &str = "default";

/// A language key as used by the selection state and the overlay map.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Wraps any string as a language code. No validation is performed.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the reserved `"default"` code.
    #[must_use]
    pub fn default_language() -> Self {
        Self(DEFAULT_LANGUAGE.to_string())
    }

    /// Whether this is the reserved `"default"` code.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_LANGUAGE
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses user input: surrounding whitespace is trimmed and empty input
    /// is rejected.
    pub fn parse(s: &str) -> crate::Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(crate::Error::InvalidLanguageCode(s.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::default_language()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageCode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for LanguageCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LanguageCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}
