//! storyshare: inspect and edit translated block attributes.
//!
//! Usage:
//!   storyshare resolve --metadata block.json --attributes attrs.json --lang fr
//!   storyshare edit --metadata block.json --attributes attrs.json --lang fr --set '{"title":"Bonjour"}'
//!   storyshare check --metadata block.json --attributes attrs.json [--normalize]
//!   storyshare languages --config storyshare.toml

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use storyshare_cli::{check, edit, languages, load_block, resolve};
use storyshare_i18n::{I18nConfig, SchemaMode};
use storyshare_types::{BlockId, LanguageCode};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "storyshare")]
#[command(about = "Inspect and edit translated block attributes")]
struct Cli {
    /// Path to a TOML config file with an [i18n] table
    #[arg(short, long, default_value = "storyshare.toml", global = true)]
    config: PathBuf,

    /// Reject attributes the block schema does not declare
    #[arg(long, global = true)]
    strict: bool,

    /// Block instance id to tag log lines with (e.g. the host's client id)
    #[arg(long, global = true)]
    block_id: Option<BlockId>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct BlockArgs {
    /// Path to the block type's block.json
    #[arg(short, long)]
    metadata: PathBuf,

    /// Path to the block instance's persisted attributes (JSON)
    #[arg(short, long)]
    attributes: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the attributes a block renders for a language
    Resolve {
        #[command(flatten)]
        block: BlockArgs,
        #[arg(short, long, default_value = "default")]
        lang: LanguageCode,
    },
    /// Apply an edit and print the new persisted attributes
    Edit {
        #[command(flatten)]
        block: BlockArgs,
        #[arg(short, long, default_value = "default")]
        lang: LanguageCode,
        /// JSON object of attributes to set
        #[arg(short, long)]
        set: String,
    },
    /// Report overlay invariant violations
    Check {
        #[command(flatten)]
        block: BlockArgs,
        /// Print repaired attributes instead of failing
        #[arg(long)]
        normalize: bool,
    },
    /// List the configured languages as the translation menu shows them
    Languages {
        #[arg(short, long, default_value = "default")]
        lang: LanguageCode,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let mut config = I18nConfig::load_from(&cli.config);
    if cli.strict {
        config.schema_mode = SchemaMode::Strict;
    }

    match cli.command {
        Command::Resolve { block, lang } => {
            let loaded = load_block(&block.metadata, &block.attributes)?;
            let effective = resolve(&loaded, &config, cli.block_id, &lang);
            println!("{}", serde_json::to_string_pretty(&effective)?);
        }
        Command::Edit { block, lang, set } => {
            let loaded = load_block(&block.metadata, &block.attributes)?;
            let next = edit(&loaded, &config, cli.block_id, &lang, &set)?;
            println!("{}", serde_json::to_string_pretty(&next.to_value()?)?);
        }
        Command::Check { block, normalize } => {
            let loaded = load_block(&block.metadata, &block.attributes)?;
            if normalize {
                let repaired = loaded.canonical.normalized(&loaded.schema);
                println!("{}", serde_json::to_string_pretty(&repaired.to_value()?)?);
                return Ok(());
            }
            let violations = check(&loaded);
            if violations.is_empty() {
                info!(block = %loaded.metadata.name, "No violations");
                return Ok(());
            }
            for violation in &violations {
                println!("{violation}");
            }
            anyhow::bail!("{} violation(s) found", violations.len());
        }
        Command::Languages { lang } => {
            for item in languages(&config, &lang).await? {
                let marker = if item.active { "*" } else { " " };
                println!("{marker} {}\t{}", item.code, item.title);
            }
        }
    }

    Ok(())
}
