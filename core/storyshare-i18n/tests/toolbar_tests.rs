use storyshare_i18n::{LanguageCatalog, SelectionState, TranslationToolbar};
use storyshare_types::LanguageCode;

fn catalog() -> LanguageCatalog {
    [("fr", "Français"), ("de", "Deutsch"), ("es", "Español")]
        .into_iter()
        .map(|(code, name)| (LanguageCode::new(code), name.to_string()))
        .collect()
}

#[test]
fn menu_lists_catalog_in_code_order() {
    let items = TranslationToolbar::menu_items(&catalog(), &SelectionState::new());
    let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Deutsch", "Español", "Français"]);
    assert!(items.iter().all(|i| !i.active && i.icon().is_none()));
}

#[test]
fn active_language_is_checked() {
    let mut selection = SelectionState::new();
    selection.switch_language("es");
    let items = TranslationToolbar::menu_items(&catalog(), &selection);
    let active: Vec<&str> = items
        .iter()
        .filter(|i| i.active)
        .map(|i| i.code.as_str())
        .collect();
    assert_eq!(active, vec!["es"]);
    assert_eq!(items[1].icon(), Some("yes"));
}

#[test]
fn empty_catalog_yields_empty_menu() {
    let items = TranslationToolbar::menu_items(&LanguageCatalog::new(), &SelectionState::new());
    assert!(items.is_empty());
}

#[test]
fn selecting_an_entry_switches_language() {
    let mut selection = SelectionState::new();
    let fr = LanguageCode::new("fr");
    assert!(TranslationToolbar::select(&mut selection, &fr));
    assert!(!TranslationToolbar::select(&mut selection, &fr));
    assert_eq!(selection.current_language(), &fr);
}

#[test]
fn toolbar_labels() {
    assert_eq!(TranslationToolbar::LABEL, "Translation");
    assert_eq!(TranslationToolbar::ICON, "translation");
}
