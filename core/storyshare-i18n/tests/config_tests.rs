use std::io::Write;
use storyshare_i18n::{DEFAULT_LANGUAGES_PATH, I18nConfig, I18nError, SchemaMode};

#[test]
fn defaults() {
    let c = I18nConfig::default();
    assert_eq!(c.schema_mode, SchemaMode::Permissive);
    assert_eq!(c.languages_path, DEFAULT_LANGUAGES_PATH);
    assert!(c.languages.is_empty());
}

#[test]
fn parses_i18n_table() {
    let c = I18nConfig::from_toml_str(
        r#"
        [i18n]
        schema-mode = "strict"
        languages-path = "/custom/languages"

        [i18n.languages]
        fr = "Français"
        de = "Deutsch"
        "#,
    )
    .unwrap();
    assert_eq!(c.schema_mode, SchemaMode::Strict);
    assert_eq!(c.languages_path, "/custom/languages");
    assert_eq!(c.languages.get("fr").map(String::as_str), Some("Français"));
}

#[test]
fn missing_table_yields_defaults() {
    let c = I18nConfig::from_toml_str("[other]\nkey = 1\n").unwrap();
    assert_eq!(c, I18nConfig::default());
}

#[test]
fn bad_mode_is_a_config_error() {
    let err = I18nConfig::from_toml_str("[i18n]\nschema-mode = \"lenient\"\n").unwrap_err();
    assert!(matches!(err, I18nError::Config(_)));
}

#[test]
fn load_from_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[i18n]\nschema-mode = \"strict\"").unwrap();
    let c = I18nConfig::load_from(file.path());
    assert_eq!(c.schema_mode, SchemaMode::Strict);
}

#[test]
fn load_from_missing_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let c = I18nConfig::load_from(&dir.path().join("storyshare.toml"));
    assert_eq!(c, I18nConfig::default());
}

#[test]
fn load_from_unparseable_file_falls_back() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[i18n\nschema-mode =").unwrap();
    let c = I18nConfig::load_from(file.path());
    assert_eq!(c, I18nConfig::default());
}
