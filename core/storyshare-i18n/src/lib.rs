//! Per-language attribute overlays for storyshare blocks.
//!
//! A translatable block keeps one canonical attribute set. Values for other
//! languages are stored as sparse overlays next to it, and the editor works
//! against a per-instance "current language" view:
//!
//! - [`resolve_effective_attributes`]: what the block renders for a language
//! - [`apply_edit`]: folds an edit made in that view back into the canonical set,
//!   pruning overlays that only repeat schema defaults
//! - [`SelectionState`]: the ephemeral current-language state of one editor instance
//! - [`LocalizedBlock`]: one block instance wired to all of the above
//! - [`LanguageStore`]: the language catalog, filled by an async [`LanguageSource`]
//! - [`TranslationToolbar`]: menu entries for switching language
//!
//! Everything here is synchronous except catalog resolution.

mod block;
mod config;
mod error;
mod overlay;
mod selection;
mod store;
mod toolbar;

pub use block::LocalizedBlock;
pub use config::{DEFAULT_LANGUAGES_PATH, I18nConfig, SchemaMode};
pub use error::{I18nError, I18nResult};
pub use overlay::{OverlayManager, apply_edit, resolve_effective_attributes};
pub use selection::{LanguageMode, SelectionState, switch_language};
pub use store::{
    LanguageAction, LanguageCatalog, LanguageSource, LanguageState, LanguageStore, Resolution,
    STORE_NAME, StaticLanguageSource, reduce,
};
pub use toolbar::{MenuItem, TranslationToolbar};
