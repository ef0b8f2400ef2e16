use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::selector::{
    AllPropertySelector, ConversionDecision, NamedPropertySelector, NamespaceTypeSelector,
    PropertySelector, TypeSelector,
};

/// Selector configuration.
///
/// Votes combine strictest-wins, so with `default_property = "required"` the
/// `optional_properties` list has no effect. Lower the default to
/// `"optional"` or `"excluded"` to make the lists matter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Namespace prefixes to keep. Empty keeps every type.
    #[serde(default)]
    pub namespaces: Vec<String>,

    /// Vote cast for every property.
    #[serde(default = "default_property")]
    pub default_property: ConversionDecision,

    /// Properties (`name` or `Type.name`) voted required.
    #[serde(default)]
    pub required_properties: Vec<String>,

    /// Properties (`name` or `Type.name`) voted optional.
    #[serde(default)]
    pub optional_properties: Vec<String>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            namespaces: Vec::new(),
            default_property: default_property(),
            required_properties: Vec::new(),
            optional_properties: Vec::new(),
        }
    }
}

fn default_property() -> ConversionDecision {
    ConversionDecision::Required
}

impl SelectionConfig {
    pub fn type_selectors(&self) -> Vec<Arc<dyn TypeSelector>> {
        self.namespaces
            .iter()
            .map(|prefix| {
                Arc::new(NamespaceTypeSelector::new(prefix.clone())) as Arc<dyn TypeSelector>
            })
            .collect()
    }

    pub fn property_selectors(&self) -> Vec<Arc<dyn PropertySelector>> {
        let mut selectors: Vec<Arc<dyn PropertySelector>> =
            vec![Arc::new(AllPropertySelector(self.default_property))];

        if !self.required_properties.is_empty() {
            selectors.push(Arc::new(NamedPropertySelector::new(
                ConversionDecision::Required,
                self.required_properties.iter().cloned(),
            )));
        }
        if !self.optional_properties.is_empty() {
            selectors.push(Arc::new(NamedPropertySelector::new(
                ConversionDecision::Optional,
                self.optional_properties.iter().cloned(),
            )));
        }

        selectors
    }
}
