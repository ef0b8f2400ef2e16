use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use clientgen_codegen::{ClientGenerator, ManifestTypeSource, TypeSource};
use clientgen_core::graph::TypeNamePair;
use clientgen_core::SourceType;

/// List the kept types and their resolved names.
#[derive(Parser)]
pub struct InspectCommand {
    /// Manifest file, or a directory of `*.json` manifests.
    pub manifest: PathBuf,

    /// Configuration file (defaults to ./clientgen.toml when present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl InspectCommand {
    /// Execute the inspect command.
    pub fn execute(self) -> Result<()> {
        let config = super::load_config(self.config.as_deref())?;
        let source = ManifestTypeSource::from_path(&self.manifest)
            .with_context(|| format!("Failed to load manifest {}", self.manifest.display()))?;

        let generator = ClientGenerator::new(config.generator_options());
        let types = generator.load_types(&source)?;
        let pairs = generator.resolve_names(&types);

        println!();
        println!(
            "  {} {} ({} of {} types kept)",
            style("Module").bold(),
            style(source.module_name()).cyan(),
            types.len(),
            source.fetch_types()?.len()
        );
        println!();

        for line in rows(&types, &pairs) {
            println!("  {}", line);
        }
        println!();
        Ok(())
    }
}

/// One `kind  readonly -> edit` line per type, columns aligned.
fn rows(types: &[SourceType], pairs: &[TypeNamePair]) -> Vec<String> {
    let width = pairs
        .iter()
        .map(|pair| pair.readonly.to_string().len())
        .max()
        .unwrap_or(0);

    types
        .iter()
        .zip(pairs)
        .map(|(ty, pair)| {
            let edit = if pair.is_translated() {
                pair.edit.to_string()
            } else {
                "(untranslated)".to_string()
            };
            format!(
                "{:<9} {:<width$}  ->  {}",
                ty.kind().as_str(),
                pair.readonly.to_string(),
                edit,
                width = width
            )
        })
        .collect()
}
