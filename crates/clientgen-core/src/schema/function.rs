//! Method signatures of interface source types.
//!
//! Interfaces are translated as capability surfaces, so their methods are
//! copied signature for signature without any body.

use serde::{Deserialize, Serialize};

use super::types::TypeRef;

/// Method parameter definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDef {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    #[serde(rename = "type")]
    pub parameter_type: TypeRef,
}

impl ParameterDef {
    /// Create a new parameter.
    pub fn new(name: impl Into<String>, parameter_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            parameter_type,
        }
    }
}

/// Public instance method definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDef {
    /// Method name.
    pub name: String,
    /// Return type; `System.Void` for procedures.
    pub return_type: TypeRef,
    /// Parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<ParameterDef>,
}

impl MethodDef {
    /// Create a method with no parameters.
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            return_type,
            parameters: Vec::new(),
        }
    }

    /// Create a method returning `System.Void`.
    pub fn procedure(name: impl Into<String>) -> Self {
        Self::new(name, TypeRef::structure(super::types::SYSTEM_NAMESPACE, "Void"))
    }

    /// Add a parameter.
    pub fn with_parameter(mut self, name: impl Into<String>, parameter_type: TypeRef) -> Self {
        self.parameters.push(ParameterDef::new(name, parameter_type));
        self
    }
}
