mod naming;
mod output;
mod selection;

pub use naming::NamingConfig;
pub use output::{OutputConfig, ReactiveConfig};
pub use selection::SelectionConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ClientgenError, Result};
use crate::options::ClientGeneratorOptions;

/// Root configuration, usually loaded from `clientgen.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientgenConfig {
    /// Naming rules.
    #[serde(default)]
    pub generator: NamingConfig,

    /// Type and property selection.
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Printer and file output.
    #[serde(default)]
    pub output: OutputConfig,
}

impl ClientgenConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ClientgenError::Config(format!("Failed to read config file: {}", e)))?;

        tracing::debug!(path = %path.as_ref().display(), "Loaded configuration file");
        Self::parse_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse_toml(content: &str) -> Result<Self> {
        // Substitute environment variables
        let content = substitute_env_vars(content);

        toml::from_str(&content)
            .map_err(|e| ClientgenError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Build generator options from the naming and selection sections.
    pub fn generator_options(&self) -> ClientGeneratorOptions {
        ClientGeneratorOptions {
            naming: self.generator.clone(),
            type_selectors: self.selection.type_selectors(),
            property_selectors: self.selection.property_selectors(),
        }
    }
}

/// Substitute environment variables in the format ${VAR_NAME}.
fn substitute_env_vars(content: &str) -> String {
    let mut result = content.to_string();
    let re = match regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") {
        Ok(re) => re,
        Err(_) => return result,
    };

    for cap in re.captures_iter(content) {
        let var_name = &cap[1];
        if let Ok(value) = std::env::var(var_name) {
            result = result.replace(&cap[0], &value);
        }
    }

    result
}
