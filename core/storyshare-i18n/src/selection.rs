//! Current-language state of one block editor instance.
//!
//! Created on mount, discarded on unmount, never persisted. Codes are not
//! checked against the language catalog.

use storyshare_types::LanguageCode;

/// Which values an editor instance is currently editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageMode {
    /// Canonical (shared) values.
    Default,
    /// The overlay of one language.
    Localized(LanguageCode),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    current_language: LanguageCode,
}

impl SelectionState {
    /// Starts on the `default` language.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_language(&self) -> &LanguageCode {
        &self.current_language
    }

    pub fn mode(&self) -> LanguageMode {
        if self.current_language.is_default() {
            LanguageMode::Default
        } else {
            LanguageMode::Localized(self.current_language.clone())
        }
    }

    /// Selects `next`. Returns whether the selection changed.
    pub fn switch_language(&mut self, next: impl Into<LanguageCode>) -> bool {
        let next = next.into();
        if next == self.current_language {
            return false;
        }
        self.current_language = next;
        true
    }
}

/// Free-function form of [`SelectionState::switch_language`].
pub fn switch_language(state: &mut SelectionState, next: impl Into<LanguageCode>) -> bool {
    state.switch_language(next)
}
