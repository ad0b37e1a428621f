use crate::{AttributeDefinition, AttributeSchema, ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The subset of a `block.json` document the translation layer reads.
///
/// Unknown top-level keys (`supports`, `editorScript`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockMetadata {
    /// Fully qualified block name, e.g. `core/file`.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeDefinition>,
}

impl BlockMetadata {
    /// Parses a `block.json` document.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        let metadata: Self = serde_json::from_str(json)?;
        if metadata.name.trim().is_empty() {
            return Err(ModelError::InvalidMetadata("block name is empty".into()));
        }
        Ok(metadata)
    }

    /// Builds the attribute schema for this block type.
    pub fn schema(&self) -> ModelResult<AttributeSchema> {
        AttributeSchema::from_metadata(self)
    }
}
