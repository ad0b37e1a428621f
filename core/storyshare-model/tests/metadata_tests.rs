use serde_json::json;
use storyshare_model::{BlockMetadata, ModelError};

const VIDEO_BLOCK: &str = r#"{
    "name": "core/video",
    "category": "common",
    "attributes": {
        "autoplay": { "type": "boolean", "source": "attribute", "selector": "video" },
        "caption": { "type": "string", "default": "", "i18n": true },
        "src": { "type": "string", "default": "", "translatable": true },
        "muted": { "type": "boolean", "default": false },
        "i18n": { "type": "object", "default": {} }
    },
    "supports": { "anchor": true }
}"#;

#[test]
fn parses_block_json() {
    let m = BlockMetadata::from_json(VIDEO_BLOCK).unwrap();
    assert_eq!(m.name, "core/video");
    assert_eq!(m.category.as_deref(), Some("common"));
    assert_eq!(m.title, None);
    assert_eq!(m.attributes.len(), 5);
    assert_eq!(m.attributes["caption"].kind.as_deref(), Some("string"));
}

#[test]
fn schema_skips_overlay_storage_slot() {
    let schema = BlockMetadata::from_json(VIDEO_BLOCK).unwrap().schema().unwrap();
    assert!(!schema.contains("i18n"));
    assert!(!schema.defaults().contains_key("i18n"));
    assert_eq!(schema.len(), 4);
}

#[test]
fn translatable_flag_and_alias() {
    let schema = BlockMetadata::from_json(VIDEO_BLOCK).unwrap().schema().unwrap();
    assert!(schema.is_translatable("caption"));
    assert!(schema.is_translatable("src"));
    assert!(!schema.is_translatable("muted"));
    assert!(!schema.is_translatable("autoplay"));
}

#[test]
fn missing_default_is_none() {
    let schema = BlockMetadata::from_json(VIDEO_BLOCK).unwrap().schema().unwrap();
    assert_eq!(schema.default_for("autoplay"), None);
    assert_eq!(schema.default_for("muted"), Some(&json!(false)));
}

#[test]
fn empty_name_rejected() {
    let err = BlockMetadata::from_json(r#"{ "name": " ", "attributes": {} }"#).unwrap_err();
    assert!(matches!(err, ModelError::InvalidMetadata(_)));
}

#[test]
fn malformed_json_is_serialization_error() {
    let err = BlockMetadata::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ModelError::Serialization(_)));
}

#[test]
fn overlays_attribute_in_metadata_rejected() {
    let m = BlockMetadata::from_json(
        r#"{ "name": "core/file", "attributes": { "overlays": { "type": "object" } } }"#,
    )
    .unwrap();
    assert!(matches!(m.schema(), Err(ModelError::ReservedAttribute(_))));
}
