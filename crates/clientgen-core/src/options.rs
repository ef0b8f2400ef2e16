use std::sync::Arc;

use crate::config::NamingConfig;
use crate::error::Result;
use crate::selector::{PropertySelector, TypeSelector};

/// Everything a translation run needs besides the type source.
#[derive(Clone, Default)]
pub struct ClientGeneratorOptions {
    pub naming: NamingConfig,
    pub type_selectors: Vec<Arc<dyn TypeSelector>>,
    pub property_selectors: Vec<Arc<dyn PropertySelector>>,
}

impl ClientGeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_naming(mut self, naming: NamingConfig) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_type_selector(mut self, selector: impl TypeSelector + 'static) -> Self {
        self.type_selectors.push(Arc::new(selector));
        self
    }

    pub fn with_property_selector(mut self, selector: impl PropertySelector + 'static) -> Self {
        self.property_selectors.push(Arc::new(selector));
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.naming.validate()
    }
}

impl std::fmt::Debug for ClientGeneratorOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientGeneratorOptions")
            .field("naming", &self.naming)
            .field("type_selectors", &self.type_selectors.len())
            .field("property_selectors", &self.property_selectors.len())
            .finish()
    }
}
