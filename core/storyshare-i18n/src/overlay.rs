//! Resolution and editing of per-language attribute overlays.
//!
//! The canonical set holds shared attributes and the default-language values
//! of translatable attributes. For any other language the rendered view is
//! built in three layers, later layers winning key by key:
//!
//! 1. schema defaults for every declared attribute
//! 2. canonical top-level fields that are not translatable
//! 3. the overlay stored for that language, if any
//!
//! Edits made in a localized view write translatable values into that
//! language's overlay and everything else onto the canonical fields. An
//! overlay left holding only default values is removed.

use crate::{I18nError, I18nResult, SchemaMode};
use std::sync::Arc;
use storyshare_model::{AttributeSchema, Attributes, CanonicalAttributes, is_reserved_key};
use storyshare_types::LanguageCode;
use tracing::{debug, warn};

/// The attributes a block renders when `language` is selected.
///
/// For the `default` language this is the canonical fields as stored. For
/// any other language every declared attribute has a value, and an unknown
/// language resolves like one with an empty overlay.
pub fn resolve_effective_attributes(
    schema: &AttributeSchema,
    canonical: &CanonicalAttributes,
    language: &LanguageCode,
) -> Attributes {
    if language.is_default() {
        return canonical.fields().clone();
    }

    let mut effective = schema.defaults();
    for (name, value) in canonical.fields() {
        if !schema.is_translatable(name) {
            effective.insert(name.clone(), value.clone());
        }
    }
    if let Some(overlay) = canonical.overlay(language.as_str()) {
        for (name, value) in overlay {
            effective.insert(name.clone(), value.clone());
        }
    }
    effective
}

/// Folds `new_attributes`, edited while `language` was selected, into a new
/// canonical set. Undeclared attributes are written through as shared ones.
///
/// `canonical` is not modified.
pub fn apply_edit(
    schema: &AttributeSchema,
    canonical: &CanonicalAttributes,
    language: &LanguageCode,
    new_attributes: &Attributes,
) -> CanonicalAttributes {
    let (mut fields, mut overlays) = canonical.clone().into_parts();
    let mut translated = Attributes::new();

    for (name, value) in new_attributes {
        if is_reserved_key(name) {
            warn!(attribute = %name, "Ignoring edit to reserved overlay key");
            continue;
        }
        if !language.is_default() && schema.is_translatable(name) {
            translated.insert(name.clone(), value.clone());
            continue;
        }
        if !schema.contains(name) {
            warn!(attribute = %name, "Attribute not declared in schema, writing through");
        }
        fields.insert(name.clone(), value.clone());
    }

    if !translated.is_empty() {
        let mut overlay = overlays.remove(language.as_str()).unwrap_or_default();
        overlay.extend(translated);

        if schema.is_redundant_overlay(&overlay) {
            debug!(language = %language, "Overlay matches defaults, pruning");
        } else {
            debug!(language = %language, keys = overlay.len(), "Overlay updated");
            overlays.insert(language.clone(), overlay);
        }
    }

    CanonicalAttributes::with_overlays(fields, overlays)
}

/// A block type's schema paired with the [`SchemaMode`] its edits run under.
///
/// Cheap to clone; every instance of a block type shares one schema.
#[derive(Debug, Clone)]
pub struct OverlayManager {
    schema: Arc<AttributeSchema>,
    mode: SchemaMode,
}

impl OverlayManager {
    pub fn new(schema: impl Into<Arc<AttributeSchema>>, mode: SchemaMode) -> Self {
        Self {
            schema: schema.into(),
            mode,
        }
    }

    pub fn schema(&self) -> &AttributeSchema {
        &self.schema
    }

    pub fn mode(&self) -> SchemaMode {
        self.mode
    }

    /// See [`resolve_effective_attributes`].
    pub fn resolve(&self, canonical: &CanonicalAttributes, language: &LanguageCode) -> Attributes {
        resolve_effective_attributes(&self.schema, canonical, language)
    }

    /// See [`apply_edit`]. In strict mode an edit naming an undeclared or
    /// reserved attribute is rejected as a whole and nothing is applied.
    pub fn apply_edit(
        &self,
        canonical: &CanonicalAttributes,
        language: &LanguageCode,
        new_attributes: &Attributes,
    ) -> I18nResult<CanonicalAttributes> {
        if self.mode == SchemaMode::Strict
            && let Some(name) = new_attributes
                .keys()
                .find(|name| is_reserved_key(name) || !self.schema.contains(name))
        {
            return Err(I18nError::SchemaViolation {
                attribute: name.clone(),
            });
        }
        Ok(apply_edit(&self.schema, canonical, language, new_attributes))
    }
}
