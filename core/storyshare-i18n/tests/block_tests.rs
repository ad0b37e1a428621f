mod common;

use common::{attrs, canonical, story_schema};
use pretty_assertions::assert_eq;
use serde_json::json;
use storyshare_i18n::{
    LanguageMode, LocalizedBlock, OverlayManager, SchemaMode, SelectionState, switch_language,
};
use storyshare_types::{BlockId, LanguageCode};

fn block(mode: SchemaMode) -> LocalizedBlock {
    let manager = OverlayManager::new(story_schema(), mode);
    LocalizedBlock::new(manager, canonical(json!({ "title": "Hello", "align": "left" })))
}

// ── SelectionState ───────────────────────────────────────────────

#[test]
fn selection_starts_on_default() {
    let s = SelectionState::new();
    assert!(s.current_language().is_default());
    assert_eq!(s.mode(), LanguageMode::Default);
}

#[test]
fn switching_reports_changes() {
    let mut s = SelectionState::new();
    assert!(s.switch_language("fr"));
    assert!(!s.switch_language("fr"));
    assert_eq!(s.mode(), LanguageMode::Localized(LanguageCode::new("fr")));
    assert!(switch_language(&mut s, LanguageCode::default()));
    assert_eq!(s.mode(), LanguageMode::Default);
}

#[test]
fn switching_to_unknown_language_is_allowed() {
    let mut s = SelectionState::new();
    assert!(s.switch_language("tlh"));
    assert_eq!(s.current_language().as_str(), "tlh");
}

// ── LocalizedBlock ───────────────────────────────────────────────

#[test]
fn block_keeps_given_id() {
    let id = BlockId::new();
    let manager = OverlayManager::new(story_schema(), SchemaMode::Permissive);
    let b = LocalizedBlock::with_id(id, manager, canonical(json!({})));
    assert_eq!(b.id(), id);
}

#[test]
fn editing_session_across_languages() {
    let mut b = block(SchemaMode::Permissive);
    assert_eq!(b.attributes(), attrs(json!({ "title": "Hello", "align": "left" })));

    b.switch_language("fr");
    b.set_attributes(&attrs(json!({ "title": "Bonjour", "align": "center" })))
        .unwrap();
    assert_eq!(b.attributes()["title"], json!("Bonjour"));
    assert_eq!(b.attributes()["align"], json!("center"));

    b.switch_language(LanguageCode::default());
    assert_eq!(b.attributes(), attrs(json!({ "title": "Hello", "align": "center" })));

    b.switch_language("de");
    assert_eq!(b.attributes()["title"], json!("Hello"));

    assert_eq!(
        b.into_canonical().to_value().unwrap(),
        json!({
            "title": "Hello",
            "align": "center",
            "i18n": { "fr": { "title": "Bonjour" } }
        })
    );
}

#[test]
fn renderer_never_sees_overlay_map() {
    let mut b = block(SchemaMode::Permissive);
    b.switch_language("fr");
    b.set_attributes(&attrs(json!({ "title": "Bonjour" }))).unwrap();
    for language in ["default", "fr", "de"] {
        b.switch_language(language);
        assert!(!b.attributes().contains_key("i18n"));
    }
}

#[test]
fn rejected_edit_leaves_block_unchanged() {
    let mut b = block(SchemaMode::Strict);
    b.switch_language("fr");
    let before = b.canonical().clone();
    assert!(b.set_attributes(&attrs(json!({ "bogus": 1 }))).is_err());
    assert_eq!(b.canonical(), &before);
    assert_eq!(b.current_language().as_str(), "fr");
}
