//! `stowage` — interactive loot shell over a hierarchical container
//! inventory loaded from tabular catalog files.

mod loader;
mod shell;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use stowage_inventory::{CatalogConfig, ContainerRegistry, ItemCatalog, RegistryConfig};

#[derive(Debug, Parser)]
#[command(name = "stowage", version, about = "Capacity-constrained container looting")]
struct Args {
    /// Item catalog file: name,weight (first row is a header).
    #[arg(long)]
    items: PathBuf,

    /// Container file: name,empty_weight,capacity.
    #[arg(long)]
    containers: PathBuf,

    /// Composite container file: mother,member,member,...
    #[arg(long)]
    composites: Option<PathBuf>,

    /// Magic conversion file: magic_name,source_name.
    #[arg(long)]
    magic: Option<PathBuf>,

    /// Magic conversions applied after composites exist.
    #[arg(long)]
    magic_composites: Option<PathBuf>,
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    stowage_observability::init();
    let args = Args::parse();

    let catalog = ItemCatalog::build(CatalogConfig {
        items: loader::items_from_table(&read(&args.items)?),
    });

    let mut config = RegistryConfig {
        containers: loader::containers_from_table(&read(&args.containers)?),
        ..RegistryConfig::default()
    };
    if let Some(path) = &args.composites {
        config.composites = loader::composites_from_table(&read(path)?);
    }
    if let Some(path) = &args.magic {
        config.magic = loader::magic_from_table(&read(path)?);
    }
    if let Some(path) = &args.magic_composites {
        config.magic_composites = loader::magic_from_table(&read(path)?);
    }
    let registry = ContainerRegistry::build(config);
    tracing::info!(items = catalog.len(), containers = registry.len(), "catalogs loaded");

    let stdin = io::stdin();
    shell::run(&catalog, &registry, &mut stdin.lock(), &mut io::stdout())
}
