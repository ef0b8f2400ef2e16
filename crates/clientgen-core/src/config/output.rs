use serde::{Deserialize, Serialize};

/// Output configuration used by the printer and the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the `TypeScript/` folder.
    #[serde(default = "default_directory")]
    pub directory: String,

    /// File name stem; defaults to the module name.
    pub file_stem: Option<String>,

    /// Indentation unit.
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Reactive container names.
    #[serde(default)]
    pub reactive: ReactiveConfig,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            file_stem: None,
            indent: default_indent(),
            reactive: ReactiveConfig::default(),
        }
    }
}

fn default_directory() -> String {
    "generated".to_string()
}

fn default_indent() -> String {
    "    ".to_string()
}

/// Names of the reactive containers in the target UI binding library.
///
/// Defaults to Knockout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactiveConfig {
    #[serde(default = "default_scalar_type")]
    pub scalar_type: String,

    #[serde(default = "default_collection_type")]
    pub collection_type: String,

    #[serde(default = "default_scalar_factory")]
    pub scalar_factory: String,

    #[serde(default = "default_collection_factory")]
    pub collection_factory: String,
}

impl Default for ReactiveConfig {
    fn default() -> Self {
        Self {
            scalar_type: default_scalar_type(),
            collection_type: default_collection_type(),
            scalar_factory: default_scalar_factory(),
            collection_factory: default_collection_factory(),
        }
    }
}

fn default_scalar_type() -> String {
    "KnockoutObservable".to_string()
}

fn default_collection_type() -> String {
    "KnockoutObservableArray".to_string()
}

fn default_scalar_factory() -> String {
    "ko.observable".to_string()
}

fn default_collection_factory() -> String {
    "ko.observableArray".to_string()
}
