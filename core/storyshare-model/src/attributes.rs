use crate::{AttributeSchema, Attributes, ModelError, ModelResult, is_reserved_key};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use storyshare_types::LanguageCode;

/// Per-language partial attribute sets, keyed by language code.
pub type OverlayMap = BTreeMap<LanguageCode, Attributes>;

/// A block instance's attributes as persisted.
///
/// Top-level fields hold the shared attributes and the default-language
/// values of translatable attributes. The overlay map holds, per language,
/// only the translatable values that differ from the schema defaults.
///
/// Serialized as one flat JSON object with the overlay map under `i18n`
/// (omitted when empty). `overlays` is accepted as an alias on input, and an
/// empty JSON array is read as an empty map, since PHP hosts encode empty
/// objects that way. Input carrying both `i18n` and `overlays` is rejected
/// as a duplicate field rather than merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalAttributes {
    #[serde(
        rename = "i18n",
        alias = "overlays",
        default,
        deserialize_with = "deserialize_overlays",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    overlays: OverlayMap,
    #[serde(flatten)]
    fields: Attributes,
}

impl CanonicalAttributes {
    /// Creates canonical attributes with no overlays. Reserved keys in
    /// `fields` are dropped.
    pub fn new(fields: Attributes) -> Self {
        Self::with_overlays(fields, OverlayMap::new())
    }

    /// Creates canonical attributes from fields and an overlay map.
    ///
    /// Reserved keys in `fields` and any overlay stored for the `default`
    /// language are dropped.
    pub fn with_overlays(mut fields: Attributes, mut overlays: OverlayMap) -> Self {
        fields.retain(|name, _| !is_reserved_key(name));
        overlays.retain(|lang, _| !lang.is_default());
        Self { overlays, fields }
    }

    /// Parses persisted attributes.
    pub fn from_value(value: Value) -> ModelResult<Self> {
        if !value.is_object() {
            return Err(ModelError::InvalidAttributes(format!(
                "expected a JSON object, found {value}"
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Serializes to the persisted JSON shape.
    pub fn to_value(&self) -> ModelResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// The top-level (shared and default-language) fields.
    pub fn fields(&self) -> &Attributes {
        &self.fields
    }

    /// A single top-level field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// The full overlay map.
    pub fn overlays(&self) -> &OverlayMap {
        &self.overlays
    }

    /// The overlay stored for `language`, if any.
    pub fn overlay(&self, language: &str) -> Option<&Attributes> {
        self.overlays.get(language)
    }

    /// Splits into top-level fields and overlay map.
    pub fn into_parts(self) -> (Attributes, OverlayMap) {
        (self.fields, self.overlays)
    }

    /// Reports every place these attributes break the overlay invariants
    /// of `schema`. Nothing is modified.
    pub fn violations(&self, schema: &AttributeSchema) -> Vec<Violation> {
        let mut found = Vec::new();
        for (language, overlay) in &self.overlays {
            if language.is_default() {
                found.push(Violation::DefaultLanguageOverlay);
                continue;
            }
            for name in overlay.keys() {
                if !schema.is_translatable(name) {
                    found.push(Violation::UntranslatableOverlayKey {
                        language: language.clone(),
                        attribute: name.clone(),
                    });
                }
            }
            if schema.is_redundant_overlay(overlay) {
                found.push(Violation::RedundantOverlay {
                    language: language.clone(),
                });
            }
        }
        found
    }

    /// Returns a copy that satisfies the overlay invariants of `schema`.
    ///
    /// Drops any `default` overlay, removes keys that are not translatable
    /// from every overlay, then prunes overlays left equal to the defaults.
    #[must_use]
    pub fn normalized(&self, schema: &AttributeSchema) -> Self {
        let overlays = self
            .overlays
            .iter()
            .filter(|(language, _)| !language.is_default())
            .filter_map(|(language, overlay)| {
                let kept: Attributes = overlay
                    .iter()
                    .filter(|(name, _)| schema.is_translatable(name))
                    .map(|(name, value)| (name.clone(), value.clone()))
                    .collect();
                (!schema.is_redundant_overlay(&kept)).then(|| (language.clone(), kept))
            })
            .collect();
        Self {
            overlays,
            fields: self.fields.clone(),
        }
    }
}

/// A breach of the overlay invariants found in persisted attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The overlay map stores values for the `default` pseudo-language.
    DefaultLanguageOverlay,
    /// An overlay stores an attribute that is not translatable.
    UntranslatableOverlayKey {
        language: LanguageCode,
        attribute: String,
    },
    /// An overlay only repeats schema defaults and should have been pruned.
    RedundantOverlay { language: LanguageCode },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DefaultLanguageOverlay => {
                f.write_str("overlay stored for the reserved default language")
            }
            Self::UntranslatableOverlayKey {
                language,
                attribute,
            } => write!(
                f,
                "overlay {language} stores non-translatable attribute {attribute:?}"
            ),
            Self::RedundantOverlay { language } => {
                write!(f, "overlay {language} only repeats default values")
            }
        }
    }
}

fn deserialize_overlays<'de, D>(deserializer: D) -> Result<OverlayMap, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Value::deserialize(deserializer)? {
        Value::Null => return Ok(OverlayMap::new()),
        Value::Array(items) if items.is_empty() => return Ok(OverlayMap::new()),
        Value::Object(map) => map,
        other => {
            return Err(D::Error::custom(format!(
                "expected an object of language overlays, found {other}"
            )));
        }
    };

    raw.into_iter()
        .map(|(language, overlay)| {
            let overlay = match overlay {
                Value::Object(map) => map,
                Value::Null => Attributes::new(),
                Value::Array(items) if items.is_empty() => Attributes::new(),
                other => {
                    return Err(D::Error::custom(format!(
                        "overlay {language:?} must be an object, found {other}"
                    )));
                }
            };
            Ok((LanguageCode::new(language), overlay))
        })
        .collect()
}
