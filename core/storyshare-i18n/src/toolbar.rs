use crate::{LanguageCatalog, SelectionState};
use storyshare_types::LanguageCode;

/// One entry of the translation dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub code: LanguageCode,
    pub title: String,
    pub active: bool,
}

impl MenuItem {
    /// Icon shown next to the entry: a check mark on the active language.
    pub fn icon(&self) -> Option<&'static str> {
        self.active.then_some("yes")
    }
}

/// View model of the block toolbar's language dropdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct TranslationToolbar;

impl TranslationToolbar {
    pub const LABEL: &'static str = "Translation";
    pub const ICON: &'static str = "translation";

    /// One entry per catalog language, in catalog order.
    pub fn menu_items(catalog: &LanguageCatalog, selection: &SelectionState) -> Vec<MenuItem> {
        catalog
            .iter()
            .map(|(code, title)| MenuItem {
                code: code.clone(),
                title: title.clone(),
                active: code == selection.current_language(),
            })
            .collect()
    }

    /// Handles a click on the entry for `code`.
    pub fn select(selection: &mut SelectionState, code: &LanguageCode) -> bool {
        selection.switch_language(code.clone())
    }
}
