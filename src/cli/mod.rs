//! Command-line interface definitions.

pub mod output;

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tabled::{Table, Tabled};

use crate::alias::AliasStore;
use crate::config::Config;
use crate::domain::AliasValue;
use crate::paths;
use crate::store::FileDocumentStore;

/// Shorthand - named aliases for long identifiers.
#[derive(Parser, Debug)]
#[command(name = "shorthand")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Alias group to operate on
    #[arg(short, long, global = true)]
    pub group: Option<String>,

    /// Override the store directory
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set one or more aliases
    Set(SetArgs),

    /// Print the value of an alias
    Get(GetArgs),

    /// Delete one or more aliases
    Unset(UnsetArgs),

    /// List the aliases in a group
    List,

    /// Find the alias name for a value
    Resolve(ResolveArgs),
}

/// Arguments for the `set` subcommand.
#[derive(Parser, Debug)]
pub struct SetArgs {
    /// Aliases to set, applied in order
    #[arg(required = true, value_name = "NAME=VALUE")]
    pub pairs: Vec<String>,
}

/// Arguments for the `get` subcommand.
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Alias name to look up
    pub name: String,
}

/// Arguments for the `unset` subcommand.
#[derive(Parser, Debug)]
pub struct UnsetArgs {
    /// Alias names to delete
    #[arg(required = true, value_name = "NAME")]
    pub names: Vec<String>,
}

/// Arguments for the `resolve` subcommand.
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Value to look up
    pub value: String,
}

/// Load configuration, build the store and dispatch the command.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load_or_default(paths::default_config())?,
    };

    config.logging.init();

    let dir = cli.dir.clone().unwrap_or_else(|| config.store_dir());
    let store = AliasStore::new(FileDocumentStore::new(dir), config.store.file.clone())
        .with_default_group(config.store.group.clone());
    let group = cli.group.as_deref();

    match &cli.command {
        Commands::Set(args) => set(&store, &args.pairs, group).await,
        Commands::Get(args) => get(&store, &args.name, group).await,
        Commands::Unset(args) => unset(&store, &args.names, group).await,
        Commands::List => list(&store, group).await,
        Commands::Resolve(args) => resolve(&store, &args.value, group).await,
    }
}

async fn set(
    store: &AliasStore<FileDocumentStore>,
    pairs: &[String],
    group: Option<&str>,
) -> anyhow::Result<()> {
    let mut parsed = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let Some((name, value)) = pair.split_once('=') else {
            bail!("invalid pair '{pair}': expected NAME=VALUE");
        };
        if name.is_empty() {
            bail!("invalid pair '{pair}': alias name is empty");
        }
        parsed.push((name.to_string(), AliasValue::from(value)));
    }

    let applied = store.update_values(parsed, group).await?;
    for (name, value) in &applied {
        output::ok(&format!("{name} = {value}"));
    }
    Ok(())
}

async fn get(
    store: &AliasStore<FileDocumentStore>,
    name: &str,
    group: Option<&str>,
) -> anyhow::Result<()> {
    match store.fetch(name, group).await? {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => bail!("no alias named '{name}'"),
    }
}

async fn unset(
    store: &AliasStore<FileDocumentStore>,
    names: &[String],
    group: Option<&str>,
) -> anyhow::Result<()> {
    store.unset(names, group).await?;
    for name in names {
        output::ok(&format!("unset {name}"));
    }
    Ok(())
}

#[derive(Tabled)]
struct AliasRow {
    #[tabled(rename = "Alias")]
    name: String,
    #[tabled(rename = "Value")]
    value: String,
}

async fn list(store: &AliasStore<FileDocumentStore>, group: Option<&str>) -> anyhow::Result<()> {
    let aliases = store.list(group).await?;
    if aliases.is_empty() {
        output::note("no aliases defined");
        return Ok(());
    }

    let rows: Vec<AliasRow> = aliases
        .into_iter()
        .map(|(name, value)| AliasRow {
            name,
            value: value.to_string(),
        })
        .collect();

    let table = Table::new(rows).to_string();
    for line in table.lines() {
        println!("  {line}");
    }
    Ok(())
}

async fn resolve(
    store: &AliasStore<FileDocumentStore>,
    value: &str,
    group: Option<&str>,
) -> anyhow::Result<()> {
    match store.by_value(value, group).await? {
        Some(name) => {
            println!("{name}");
            Ok(())
        }
        None => bail!("no alias with value '{value}'"),
    }
}
