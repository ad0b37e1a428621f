//! Block attribute model for storyshare.
//!
//! Defines the shapes every translation operation works on:
//! - [`AttributeSchema`]: which attributes a block type declares, with defaults
//!   and translatability
//! - [`BlockMetadata`]: the `block.json` document a schema is usually built from
//! - [`CanonicalAttributes`]: the persisted attribute set, holding default-language values
//!   plus the per-language [`OverlayMap`]
//!
//! The persisted overlay map lives under the attribute key [`OVERLAY_KEY`].

mod attributes;
mod error;
mod metadata;
mod schema;

pub use attributes::{CanonicalAttributes, OverlayMap, Violation};
pub use error::{ModelError, ModelResult};
pub use metadata::BlockMetadata;
pub use schema::{AttributeDefinition, AttributeSchema, AttributeSchemaBuilder};

/// A flat attribute set: attribute name to JSON value.
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// Attribute key under which the overlay map is persisted.
pub const OVERLAY_KEY: &str = "i18n";

/// Alternate spelling accepted when reading persisted attributes.
pub const OVERLAY_KEY_ALIAS: &str = "overlays";

/// Whether `name` is reserved for the overlay map and cannot be a regular attribute.
pub fn is_reserved_key(name: &str) -> bool {
    name == OVERLAY_KEY || name == OVERLAY_KEY_ALIAS
}
