use crate::{Attributes, BlockMetadata, ModelError, ModelResult, OVERLAY_KEY, is_reserved_key};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One declared block attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    /// Declared value type (`"string"`, `"boolean"`, ...). Informational only.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Declared default. `None` when the block type declares no default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Whether the value may differ per language.
    #[serde(default, rename = "i18n", alias = "translatable")]
    pub translatable: bool,
}

impl AttributeDefinition {
    /// Shorthand for a translatable attribute with a default.
    pub fn translatable(default: impl Into<Value>) -> Self {
        Self {
            kind: None,
            default: Some(default.into()),
            translatable: true,
        }
    }

    /// Shorthand for a shared (non-translatable) attribute with a default.
    pub fn shared(default: impl Into<Value>) -> Self {
        Self {
            kind: None,
            default: Some(default.into()),
            translatable: false,
        }
    }
}

/// The attribute declarations of one block type.
///
/// Immutable once built. Attribute names are kept sorted so every derived
/// view (defaults, translatable names) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AttributeSchema {
    attributes: BTreeMap<String, AttributeDefinition>,
}

impl AttributeSchema {
    /// Starts an empty schema builder.
    pub fn builder() -> AttributeSchemaBuilder {
        AttributeSchemaBuilder::default()
    }

    /// Builds a schema from block metadata.
    ///
    /// The metadata attribute named `i18n` is the storage slot of the overlay
    /// map and is skipped; any other reserved name is rejected.
    pub fn from_metadata(metadata: &BlockMetadata) -> ModelResult<Self> {
        let mut builder = Self::builder();
        for (name, definition) in &metadata.attributes {
            if name == OVERLAY_KEY {
                continue;
            }
            builder = builder.definition(name, definition.clone());
        }
        builder.build()
    }

    /// Looks up an attribute definition.
    pub fn get(&self, name: &str) -> Option<&AttributeDefinition> {
        self.attributes.get(name)
    }

    /// Whether the schema declares `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Whether `name` is declared and translatable.
    pub fn is_translatable(&self, name: &str) -> bool {
        self.attributes.get(name).is_some_and(|d| d.translatable)
    }

    /// All declared attribute names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Names of the translatable attributes, sorted.
    pub fn translatable_names(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .iter()
            .filter(|(_, d)| d.translatable)
            .map(|(name, _)| name.as_str())
    }

    /// The declared default of `name`, if it has one.
    pub fn default_for(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name).and_then(|d| d.default.as_ref())
    }

    /// A value for every declared attribute: its default, or `null` when none
    /// is declared.
    pub fn defaults(&self) -> Attributes {
        self.attributes
            .iter()
            .map(|(name, d)| (name.clone(), d.default.clone().unwrap_or(Value::Null)))
            .collect()
    }

    /// Whether `value` equals the declared default of `name`.
    ///
    /// An attribute without a declared default never matches.
    pub fn is_default_value(&self, name: &str, value: &Value) -> bool {
        self.default_for(name).is_some_and(|d| d == value)
    }

    /// Whether every entry of `overlay` equals its declared default, so that
    /// storing it would change nothing. An empty overlay is redundant.
    pub fn is_redundant_overlay(&self, overlay: &Attributes) -> bool {
        overlay
            .iter()
            .all(|(name, value)| self.is_default_value(name, value))
    }

    /// Number of declared attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the schema declares no attributes.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// Builder for [`AttributeSchema`].
#[derive(Debug, Default)]
pub struct AttributeSchemaBuilder {
    attributes: BTreeMap<String, AttributeDefinition>,
}

impl AttributeSchemaBuilder {
    /// Declares a translatable attribute with a default.
    pub fn translatable(self, name: &str, default: impl Into<Value>) -> Self {
        self.definition(name, AttributeDefinition::translatable(default))
    }

    /// Declares a shared attribute with a default.
    pub fn attribute(self, name: &str, default: impl Into<Value>) -> Self {
        self.definition(name, AttributeDefinition::shared(default))
    }

    /// Declares an attribute that has no default.
    pub fn attribute_without_default(self, name: &str, translatable: bool) -> Self {
        self.definition(
            name,
            AttributeDefinition {
                kind: None,
                default: None,
                translatable,
            },
        )
    }

    /// Declares an attribute from a full definition. Later declarations replace
    /// earlier ones with the same name.
    pub fn definition(mut self, name: &str, definition: AttributeDefinition) -> Self {
        self.attributes.insert(name.to_string(), definition);
        self
    }

    /// Finishes the schema, rejecting reserved attribute names.
    pub fn build(self) -> ModelResult<AttributeSchema> {
        if let Some(name) = self.attributes.keys().find(|n| is_reserved_key(n)) {
            return Err(ModelError::ReservedAttribute(name.clone()));
        }
        Ok(AttributeSchema {
            attributes: self.attributes,
        })
    }
}
