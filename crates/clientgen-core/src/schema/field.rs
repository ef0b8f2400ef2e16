use serde::{Deserialize, Serialize};

use super::types::TypeRef;

/// Declared instance property of a source type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDef {
    /// Property name, emitted as-is.
    pub name: String,

    /// Property value type.
    #[serde(rename = "type")]
    pub value_type: TypeRef,
}

impl PropertyDef {
    /// Create a new property definition.
    pub fn new(name: impl Into<String>, value_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            value_type,
        }
    }
}

/// Declared public instance field of a source type.
///
/// Fields bypass the property selectors and only appear in the DTO view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,

    #[serde(rename = "type")]
    pub value_type: TypeRef,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, value_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            value_type,
        }
    }
}

/// What a property selector sees when voting on a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Property name.
    pub name: String,
    /// Type declaring the property.
    pub declaring_type: TypeRef,
    /// Property value type.
    pub value_type: TypeRef,
    /// Value is an array or a non-string enumerable.
    pub is_collection: bool,
    /// Value is a primitive, an enum, a generic parameter or a framework type.
    pub is_primitive_or_framework: bool,
}

impl PropertyDescriptor {
    /// `Type.property`, using the declaring type's simple name.
    pub fn member_path(&self) -> String {
        format!("{}.{}", self.declaring_type.base_name(), self.name)
    }
}
