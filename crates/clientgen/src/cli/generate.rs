use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use clientgen_codegen::{
    ClientGenerator, ManifestTypeSource, PrinterOptions, TypeScriptPrinter, TypeSource, View,
};
use clientgen_core::ClientgenConfig;

/// Sub-directory of the output directory receiving the generated files.
const TYPESCRIPT_DIR: &str = "TypeScript";

/// Views to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewSelection {
    Dto,
    Edit,
    Both,
}

impl ViewSelection {
    fn includes(self, view: View) -> bool {
        match self {
            ViewSelection::Both => true,
            ViewSelection::Dto => view == View::Dto,
            ViewSelection::Edit => view == View::Edit,
        }
    }
}

/// Generate TypeScript files from a type manifest.
#[derive(Parser)]
pub struct GenerateCommand {
    /// Manifest file, or a directory of `*.json` manifests.
    pub manifest: PathBuf,

    /// Output directory (defaults to `output.directory` from the config).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to ./clientgen.toml when present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Views to generate.
    #[arg(long, value_enum, default_value_t = ViewSelection::Both)]
    pub view: ViewSelection,
}

/// A printed file waiting to be written.
#[derive(Debug)]
struct GeneratedFile {
    path: PathBuf,
    contents: String,
}

impl GenerateCommand {
    /// Execute the generate command.
    pub fn execute(self) -> Result<()> {
        let config = super::load_config(self.config.as_deref())?;
        let source = ManifestTypeSource::from_path(&self.manifest)
            .with_context(|| format!("Failed to load manifest {}", self.manifest.display()))?;

        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.output.directory));

        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Generating {}...", source.module_name()));

        let files = match self.render(&config, &source, &output_dir) {
            Ok(files) => files,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };
        pb.finish_and_clear();

        let target = output_dir.join(TYPESCRIPT_DIR);
        fs::create_dir_all(&target)
            .with_context(|| format!("Failed to create {}", target.display()))?;

        for file in &files {
            fs::write(&file.path, &file.contents)
                .with_context(|| format!("Failed to write {}", file.path.display()))?;
            println!("{} Wrote {}", style("✓").green(), file.path.display());
        }

        println!(
            "{} Generated {} file(s) for {}",
            style("✓").green().bold(),
            files.len(),
            style(source.module_name()).cyan()
        );
        Ok(())
    }

    /// Generate and print every requested view. Nothing touches the disk here.
    fn render(
        &self,
        config: &ClientgenConfig,
        source: &dyn TypeSource,
        output_dir: &Path,
    ) -> Result<Vec<GeneratedFile>> {
        let generator = ClientGenerator::new(config.generator_options());
        let stem = config
            .output
            .file_stem
            .clone()
            .unwrap_or_else(|| source.module_name().to_string());
        let declaration_file = format!("{}.d.ts", stem);
        let target = output_dir.join(TYPESCRIPT_DIR);

        let views = generator.generate_views(source)?;
        let mut files = Vec::new();

        if self.view.includes(View::Dto) {
            let printer = TypeScriptPrinter::new(
                PrinterOptions::from_output(&config.output).with_ambient(true),
            );
            files.push(GeneratedFile {
                path: target.join(&declaration_file),
                contents: printer.print(&views.dto),
            });
        }

        if self.view.includes(View::Edit) {
            let printer = TypeScriptPrinter::new(
                PrinterOptions::from_output(&config.output)
                    .with_reference(&declaration_file)
                    .with_enums(false),
            );
            files.push(GeneratedFile {
                path: target.join(format!("{}.ts", stem)),
                contents: printer.print(&views.edit),
            });
        }

        tracing::info!(
            module = source.module_name(),
            files = files.len(),
            "Rendered TypeScript output"
        );
        Ok(files)
    }
}
