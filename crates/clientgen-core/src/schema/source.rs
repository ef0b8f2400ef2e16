use serde::{Deserialize, Serialize};

use super::field::{FieldDef, PropertyDef};
use super::function::MethodDef;
use super::types::{TypeKind, TypeRef};

/// Snapshot of a reflectable type handed over by a type source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceType {
    /// Kind, namespace, name and generic parameters of the type.
    #[serde(flatten)]
    pub reference: TypeRef,

    /// Direct base type, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_type: Option<TypeRef>,

    /// Declared public instance properties.
    #[serde(default)]
    pub properties: Vec<PropertyDef>,

    /// Declared public instance fields.
    #[serde(default)]
    pub fields: Vec<FieldDef>,

    /// Declared public instance methods.
    #[serde(default)]
    pub methods: Vec<MethodDef>,

    /// Enum constants in declaration order.
    #[serde(default)]
    pub constants: Vec<EnumConstant>,
}

impl SourceType {
    /// Create an empty source type from its reference.
    pub fn new(reference: TypeRef) -> Self {
        Self {
            reference,
            base_type: None,
            properties: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            constants: Vec::new(),
        }
    }

    pub fn class(namespace: &str, name: impl Into<String>) -> Self {
        Self::new(TypeRef::class(namespace, name))
    }

    pub fn structure(namespace: &str, name: impl Into<String>) -> Self {
        Self::new(TypeRef::structure(namespace, name))
    }

    pub fn enumeration(namespace: &str, name: impl Into<String>) -> Self {
        Self::new(TypeRef::enumeration(namespace, name))
    }

    pub fn interface(namespace: &str, name: impl Into<String>) -> Self {
        Self::new(TypeRef::interface(namespace, name))
    }

    /// Declare generic parameters, e.g. `&["T"]` for `Box<T>`.
    pub fn with_generic_parameters(mut self, parameters: &[&str]) -> Self {
        self.reference.generic_arguments = parameters
            .iter()
            .map(|p| TypeRef::generic_parameter(*p))
            .collect();
        self
    }

    pub fn with_base(mut self, base: TypeRef) -> Self {
        self.base_type = Some(base);
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value_type: TypeRef) -> Self {
        self.properties.push(PropertyDef::new(name, value_type));
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value_type: TypeRef) -> Self {
        self.fields.push(FieldDef::new(name, value_type));
        self
    }

    pub fn with_method(mut self, method: MethodDef) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_constant(mut self, name: impl Into<String>, value: i64) -> Self {
        self.constants.push(EnumConstant::new(name, value));
        self
    }

    pub fn kind(&self) -> TypeKind {
        self.reference.kind
    }

    pub fn namespace(&self) -> Option<&str> {
        self.reference.namespace.as_deref()
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.reference
    }
}

/// Named enum constant and its underlying integer value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumConstant {
    pub name: String,
    pub value: i64,
}

impl EnumConstant {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_type_builder() {
        let order = SourceType::class("Shop", "Order")
            .with_base(TypeRef::class("Shop", "Entity"))
            .with_property("id", TypeRef::primitive("Int32"))
            .with_property("lines", TypeRef::array_of(TypeRef::class("Shop", "Line")));

        assert_eq!(order.kind(), TypeKind::Class);
        assert_eq!(order.namespace(), Some("Shop"));
        assert_eq!(order.properties.len(), 2);
        assert!(order.base_type.is_some());
    }

    #[test]
    fn test_generic_parameters() {
        let boxed = SourceType::class("Shop", "Box`1").with_generic_parameters(&["T"]);
        assert!(boxed.type_ref().is_generic());
        assert!(boxed.type_ref().generic_arguments[0].is_generic_parameter());
    }

    #[test]
    fn test_source_type_from_json() {
        let json = r#"{
            "kind": "enum",
            "namespace": "Shop",
            "name": "Status",
            "constants": [
                { "name": "Draft", "value": 0 },
                { "name": "Closed", "value": 5 }
            ]
        }"#;

        let status: SourceType = serde_json::from_str(json).unwrap();
        assert_eq!(status.kind(), TypeKind::Enum);
        assert_eq!(status.constants[1], EnumConstant::new("Closed", 5));
        assert!(status.properties.is_empty());
    }
}
