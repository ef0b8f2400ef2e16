//! JSON type manifests.
//!
//! A manifest is a serialized snapshot of one module:
//!
//! ```json
//! { "module": "Shop.Contracts", "types": [ { "kind": "class", "namespace": "Shop", "name": "Order" } ] }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use clientgen_core::schema::SourceType;
use clientgen_core::{ClientgenError, Result};

use crate::source::TypeSource;

/// Types of one module, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeManifest {
    pub module: String,
    #[serde(default)]
    pub types: Vec<SourceType>,
}

impl TypeManifest {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            types: Vec::new(),
        }
    }

    pub fn with_type(mut self, ty: SourceType) -> Self {
        self.types.push(ty);
        self
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

impl TypeSource for TypeManifest {
    fn module_name(&self) -> &str {
        &self.module
    }

    fn fetch_types(&self) -> Result<Vec<SourceType>> {
        Ok(self.types.clone())
    }
}

/// Type source backed by manifest files on disk.
#[derive(Debug, Clone)]
pub struct ManifestTypeSource {
    manifest: TypeManifest,
    files: Vec<PathBuf>,
}

impl ManifestTypeSource {
    /// Load a manifest file, or every `*.json` file below a directory.
    ///
    /// Directory entries are read in path order and merged into one module
    /// named after the first manifest.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let files = if path.is_dir() {
            manifest_files(path)
        } else {
            vec![path.to_path_buf()]
        };

        if files.is_empty() {
            return Err(ClientgenError::Manifest(format!(
                "No manifest files found in {}",
                path.display()
            )));
        }

        let mut merged: Option<TypeManifest> = None;
        for file in &files {
            let content = std::fs::read_to_string(file)?;
            let manifest: TypeManifest = serde_json::from_str(&content).map_err(|e| {
                ClientgenError::Manifest(format!("{}: {}", file.display(), e))
            })?;
            tracing::debug!(
                file = %file.display(),
                module = %manifest.module,
                types = manifest.types.len(),
                "Read type manifest"
            );

            merged = Some(match merged {
                Some(mut acc) => {
                    acc.types.extend(manifest.types);
                    acc
                }
                None => manifest,
            });
        }

        Ok(Self {
            manifest: merged.unwrap_or_default(),
            files,
        })
    }

    /// Files the manifest was read from.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

impl TypeSource for ManifestTypeSource {
    fn module_name(&self) -> &str {
        self.manifest.module_name()
    }

    fn fetch_types(&self) -> Result<Vec<SourceType>> {
        self.manifest.fetch_types()
    }
}

fn manifest_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().map(|ext| ext == "json").unwrap_or(false))
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}
