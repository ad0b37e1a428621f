//! Command implementations for the `storyshare` binary.
//!
//! Each command works on a block type's `block.json` and one block
//! instance's persisted attributes, both read from disk.

use anyhow::{Context, Result};
use std::path::Path;
use storyshare_i18n::{
    I18nConfig, LanguageStore, LocalizedBlock, MenuItem, OverlayManager, SelectionState,
    StaticLanguageSource, TranslationToolbar,
};
use storyshare_model::{
    AttributeSchema, Attributes, BlockMetadata, CanonicalAttributes, Violation,
};
use storyshare_types::{BlockId, LanguageCode};
use tracing::debug;

/// A block type schema and one instance's attributes.
#[derive(Debug, Clone)]
pub struct LoadedBlock {
    pub metadata: BlockMetadata,
    pub schema: AttributeSchema,
    pub canonical: CanonicalAttributes,
}

/// Reads `block.json` and the persisted attributes.
pub fn load_block(metadata_path: &Path, attributes_path: &Path) -> Result<LoadedBlock> {
    let raw = std::fs::read_to_string(metadata_path)
        .with_context(|| format!("reading block metadata {}", metadata_path.display()))?;
    let metadata = BlockMetadata::from_json(&raw)
        .with_context(|| format!("parsing block metadata {}", metadata_path.display()))?;
    let schema = metadata.schema()?;

    let raw = std::fs::read_to_string(attributes_path)
        .with_context(|| format!("reading attributes {}", attributes_path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("parsing attributes {}", attributes_path.display()))?;
    let canonical = CanonicalAttributes::from_value(value)?;

    debug!(block = %metadata.name, attributes = schema.len(), "Loaded block");
    Ok(LoadedBlock {
        metadata,
        schema,
        canonical,
    })
}

/// Effective attributes of `block` for `language`.
pub fn resolve(
    block: &LoadedBlock,
    config: &I18nConfig,
    block_id: Option<BlockId>,
    language: &LanguageCode,
) -> Attributes {
    mount(block, config, block_id, language).attributes()
}

/// Applies `edit_json` (a JSON object) as if edited while `language` was selected.
pub fn edit(
    block: &LoadedBlock,
    config: &I18nConfig,
    block_id: Option<BlockId>,
    language: &LanguageCode,
    edit_json: &str,
) -> Result<CanonicalAttributes> {
    let value: serde_json::Value =
        serde_json::from_str(edit_json).context("parsing --set as JSON")?;
    let new_attributes = match value {
        serde_json::Value::Object(map) => map,
        other => anyhow::bail!("--set must be a JSON object, got {other}"),
    };
    let mut instance = mount(block, config, block_id, language);
    instance.set_attributes(&new_attributes)?;
    Ok(instance.into_canonical())
}

/// Invariant violations in the stored attributes.
pub fn check(block: &LoadedBlock) -> Vec<Violation> {
    block.canonical.violations(&block.schema)
}

/// The translation menu for `language`, with the catalog taken from config.
pub async fn languages(config: &I18nConfig, language: &LanguageCode) -> Result<Vec<MenuItem>> {
    let source = StaticLanguageSource::new(config.languages.clone());
    let mut store = LanguageStore::new();
    let catalog = store.resolve_languages(&source).await?;

    let mut selection = SelectionState::new();
    selection.switch_language(language.clone());
    Ok(TranslationToolbar::menu_items(catalog, &selection))
}

/// Mounts the stored attributes as one editor instance showing `language`.
/// Log lines carry `block_id`, or a fresh id when none is given.
fn mount(
    block: &LoadedBlock,
    config: &I18nConfig,
    block_id: Option<BlockId>,
    language: &LanguageCode,
) -> LocalizedBlock {
    let manager = OverlayManager::new(block.schema.clone(), config.schema_mode);
    let mut instance = LocalizedBlock::with_id(
        block_id.unwrap_or_default(),
        manager,
        block.canonical.clone(),
    );
    instance.switch_language(language.clone());
    instance
}
