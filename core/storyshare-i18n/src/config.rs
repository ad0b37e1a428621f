//! Editor-side translation settings, read from the `[i18n]` table of a TOML file.

use crate::{I18nResult, LanguageCatalog};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Default REST path the language catalog is fetched from.
pub const DEFAULT_LANGUAGES_PATH: &str = "/storyshare/v1/i18n/languages";

/// How edits treat attributes the block schema does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaMode {
    /// Undeclared attributes are written through as shared attributes.
    #[default]
    Permissive,
    /// Undeclared attributes are rejected with `SchemaViolation`.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct I18nConfig {
    #[serde(default)]
    pub schema_mode: SchemaMode,
    #[serde(default = "default_languages_path")]
    pub languages_path: String,
    /// Languages known without a fetch. Usually empty in the editor, where
    /// the catalog comes from `languages_path`.
    #[serde(default)]
    pub languages: LanguageCatalog,
}

fn default_languages_path() -> String {
    DEFAULT_LANGUAGES_PATH.to_string()
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            schema_mode: SchemaMode::default(),
            languages_path: default_languages_path(),
            languages: LanguageCatalog::new(),
        }
    }
}

/// Raw TOML structure: settings live under `[i18n]`.
#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    i18n: Option<I18nConfig>,
}

impl I18nConfig {
    /// Parses config from TOML text. A file without an `[i18n]` table yields
    /// the defaults.
    pub fn from_toml_str(contents: &str) -> I18nResult<Self> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(file.i18n.unwrap_or_default())
    }

    /// Loads config from `path`.
    /// Falls back to the defaults with a warning when the file is missing or
    /// cannot be parsed.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No i18n config found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded i18n config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!(
                        "Failed to parse i18n config {:?}: {}. Falling back to defaults.",
                        path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read i18n config {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}
