use serde::{Deserialize, Serialize};

use crate::error::{ClientgenError, Result};

/// Naming rules for the two views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Namespaces whose types are emitted untranslated. Matched
    /// case-insensitively against the namespace and its children.
    #[serde(default = "default_framework_namespaces")]
    pub framework_namespaces: Vec<String>,

    /// Sub-namespace appended to the namespace of non-generic Edit types.
    #[serde(default = "default_edit_marker")]
    pub edit_namespace: String,

    /// Marker inserted before the parameter list of generic Edit types.
    #[serde(default = "default_edit_marker")]
    pub edit_type_suffix: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            framework_namespaces: default_framework_namespaces(),
            edit_namespace: default_edit_marker(),
            edit_type_suffix: default_edit_marker(),
        }
    }
}

fn default_framework_namespaces() -> Vec<String> {
    vec!["System".to_string()]
}

fn default_edit_marker() -> String {
    "Edit".to_string()
}

impl NamingConfig {
    /// Reject rules under which Edit names would collide with Readonly names.
    pub fn validate(&self) -> Result<()> {
        if self.edit_namespace.trim().is_empty() {
            return Err(ClientgenError::InvalidArgument(
                "edit_namespace must not be empty".to_string(),
            ));
        }
        if self.edit_type_suffix.trim().is_empty() {
            return Err(ClientgenError::InvalidArgument(
                "edit_type_suffix must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether a namespace belongs to one of the framework namespaces.
    pub fn is_framework_namespace(&self, namespace: Option<&str>) -> bool {
        let Some(namespace) = namespace else {
            return false;
        };
        let namespace = namespace.to_ascii_lowercase();

        self.framework_namespaces.iter().any(|framework| {
            let framework = framework.to_ascii_lowercase();
            namespace == framework
                || namespace
                    .strip_prefix(framework.as_str())
                    .is_some_and(|rest| rest.starts_with('.'))
        })
    }

    /// Namespace holding the Edit counterpart of a type living in `namespace`.
    pub fn edit_namespace_for(&self, namespace: Option<&str>) -> String {
        match namespace {
            Some(namespace) => format!("{}.{}", namespace, self.edit_namespace),
            None => self.edit_namespace.clone(),
        }
    }
}
