use crate::{I18nResult, OverlayManager, SelectionState};
use storyshare_model::{Attributes, CanonicalAttributes};
use storyshare_types::{BlockId, LanguageCode};
use tracing::debug;

/// One translatable block instance in the editor.
///
/// Owns the canonical attributes and the current-language selection. The
/// renderer reads [`attributes`](Self::attributes) and reports edits through
/// [`set_attributes`](Self::set_attributes); it never sees the overlay map.
#[derive(Debug, Clone)]
pub struct LocalizedBlock {
    id: BlockId,
    manager: OverlayManager,
    canonical: CanonicalAttributes,
    selection: SelectionState,
}

impl LocalizedBlock {
    /// Mounts a block instance on the `default` language.
    pub fn new(manager: OverlayManager, canonical: CanonicalAttributes) -> Self {
        Self::with_id(BlockId::new(), manager, canonical)
    }

    pub fn with_id(id: BlockId, manager: OverlayManager, canonical: CanonicalAttributes) -> Self {
        Self {
            id,
            manager,
            canonical,
            selection: SelectionState::new(),
        }
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn canonical(&self) -> &CanonicalAttributes {
        &self.canonical
    }

    pub fn into_canonical(self) -> CanonicalAttributes {
        self.canonical
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn current_language(&self) -> &LanguageCode {
        self.selection.current_language()
    }

    /// Effective attributes for the current language.
    pub fn attributes(&self) -> Attributes {
        self.manager.resolve(&self.canonical, self.current_language())
    }

    /// Applies an edit made in the current-language view.
    ///
    /// On error the stored attributes are left as they were.
    pub fn set_attributes(&mut self, new_attributes: &Attributes) -> I18nResult<()> {
        let next = self
            .manager
            .apply_edit(&self.canonical, self.current_language(), new_attributes)?;
        debug!(
            block_id = %self.id,
            language = %self.current_language(),
            keys = new_attributes.len(),
            "Block attributes edited"
        );
        self.canonical = next;
        Ok(())
    }

    /// Switches the language this instance shows and edits.
    pub fn switch_language(&mut self, next: impl Into<LanguageCode>) -> bool {
        let changed = self.selection.switch_language(next);
        if changed {
            debug!(block_id = %self.id, language = %self.current_language(), "Language switched");
        }
        changed
    }
}
