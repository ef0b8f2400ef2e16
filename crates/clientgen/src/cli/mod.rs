mod generate;
mod inspect;

pub use generate::GenerateCommand;
pub use inspect::InspectCommand;

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clientgen_core::ClientgenConfig;

/// Default configuration file looked up in the working directory.
const CONFIG_FILE: &str = "clientgen.toml";

/// clientgen - TypeScript DTO and Edit views from type manifests
#[derive(Parser)]
#[command(name = "clientgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate TypeScript files from a type manifest.
    Generate(GenerateCommand),

    /// List the kept types and their resolved names.
    Inspect(InspectCommand),
}

impl Cli {
    /// Execute the CLI command.
    pub fn execute(self) -> Result<()> {
        let log_level = if self.verbose { "debug" } else { "warn" };
        tracing_subscriber::fmt()
            .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()))
            .with_writer(std::io::stderr)
            .init();

        match self.command {
            Commands::Generate(cmd) => cmd.execute(),
            Commands::Inspect(cmd) => cmd.execute(),
        }
    }
}

/// Load the explicit config file, else `clientgen.toml` if present, else defaults.
fn load_config(path: Option<&Path>) -> Result<ClientgenConfig> {
    match path {
        Some(path) => ClientgenConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display())),
        None if Path::new(CONFIG_FILE).exists() => {
            ClientgenConfig::from_file(CONFIG_FILE).context("Failed to load clientgen.toml")
        }
        None => Ok(ClientgenConfig::default()),
    }
}
