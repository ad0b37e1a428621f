//! The language catalog store.
//!
//! A small reducer store: state changes only by dispatching a
//! [`LanguageAction`], subscribers are told after every change, and the
//! catalog is filled lazily by [`LanguageStore::resolve_languages`] from a
//! [`LanguageSource`]. Until that succeeds the catalog is simply empty;
//! nothing in the overlay layer waits on it.

use crate::{I18nError, I18nResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use storyshare_types::LanguageCode;
use tracing::{info, warn};

/// Name the store is registered under.
pub const STORE_NAME: &str = "i18n";

/// Language code to display name, in code order.
pub type LanguageCatalog = BTreeMap<LanguageCode, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageState {
    pub langs: LanguageCatalog,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageAction {
    /// A fetch was started. Does not change state.
    FetchLanguages,
    /// Replaces the catalog.
    SetLanguages(LanguageCatalog),
}

/// Returns the state after `action`. `state` is not modified.
pub fn reduce(state: &LanguageState, action: &LanguageAction) -> LanguageState {
    match action {
        LanguageAction::SetLanguages(langs) => LanguageState {
            langs: langs.clone(),
        },
        LanguageAction::FetchLanguages => state.clone(),
    }
}

/// Where the catalog comes from. Transport is up to the implementor.
#[async_trait]
pub trait LanguageSource: Send + Sync {
    async fn fetch_languages(&self) -> I18nResult<LanguageCatalog>;
}

/// A source that always returns the same catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticLanguageSource {
    catalog: LanguageCatalog,
}

impl StaticLanguageSource {
    pub fn new(catalog: LanguageCatalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl LanguageSource for StaticLanguageSource {
    async fn fetch_languages(&self) -> I18nResult<LanguageCatalog> {
        Ok(self.catalog.clone())
    }
}

/// Progress of catalog resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Resolution {
    #[default]
    Unresolved,
    Resolved,
    /// The last fetch failed; the next `resolve_languages` call retries.
    Failed,
}

type Listener = Box<dyn Fn(&LanguageState) + Send + Sync>;

#[derive(Default)]
pub struct LanguageStore {
    state: LanguageState,
    resolution: Resolution,
    listeners: Vec<Listener>,
}

impl LanguageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LanguageState {
        &self.state
    }

    /// The catalog as currently known. Empty before the first successful fetch.
    pub fn languages(&self) -> &LanguageCatalog {
        &self.state.langs
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Registers a listener called with the new state after every change.
    pub fn subscribe(&mut self, listener: impl Fn(&LanguageState) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn dispatch(&mut self, action: LanguageAction) {
        let next = reduce(&self.state, &action);
        if next == self.state {
            return;
        }
        self.state = next;
        for listener in &self.listeners {
            listener(&self.state);
        }
    }

    /// Fetches the catalog from `source` unless it was already fetched.
    ///
    /// A failed fetch is logged and leaves the catalog as it was; the error
    /// is returned so callers may retry later.
    pub async fn resolve_languages<S>(&mut self, source: &S) -> I18nResult<&LanguageCatalog>
    where
        S: LanguageSource + ?Sized,
    {
        if self.resolution == Resolution::Resolved {
            return Ok(&self.state.langs);
        }

        self.dispatch(LanguageAction::FetchLanguages);
        match source.fetch_languages().await {
            Ok(catalog) => {
                info!(store = STORE_NAME, languages = catalog.len(), "Language catalog resolved");
                self.dispatch(LanguageAction::SetLanguages(catalog));
                self.resolution = Resolution::Resolved;
                Ok(&self.state.langs)
            }
            Err(e) => {
                warn!(store = STORE_NAME, error = %e, "Language catalog fetch failed");
                self.resolution = Resolution::Failed;
                Err(match e {
                    I18nError::LanguageFetch(_) => e,
                    other => I18nError::LanguageFetch(other.to_string()),
                })
            }
        }
    }
}

impl fmt::Debug for LanguageStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageStore")
            .field("state", &self.state)
            .field("resolution", &self.resolution)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
