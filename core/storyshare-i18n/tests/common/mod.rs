//! Shared fixtures for i18n tests.

#![allow(dead_code)]

use serde_json::Value;
use storyshare_model::{AttributeSchema, Attributes, CanonicalAttributes};

/// `title` and `caption` translatable, `align` and `width` shared.
pub fn story_schema() -> AttributeSchema {
    AttributeSchema::builder()
        .translatable("title", "Hello")
        .translatable("caption", "")
        .attribute("align", "left")
        .attribute("width", 100)
        .build()
        .unwrap()
}

/// Unwraps a `json!({...})` literal into an attribute map.
pub fn attrs(value: Value) -> Attributes {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

/// Parses persisted attributes from a `json!` literal.
pub fn canonical(value: Value) -> CanonicalAttributes {
    CanonicalAttributes::from_value(value).unwrap()
}
