use serde::{Deserialize, Serialize};

/// Kind of a reflected source type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// Reference type with members and an optional base.
    Class,
    /// Value type with members.
    Struct,
    /// Named integer constants.
    Enum,
    /// Capability surface made of method signatures.
    Interface,
    /// Built-in scalar (Int32, Boolean, ...).
    Primitive,
    /// Unbound generic parameter such as `T`.
    GenericParameter,
    /// Array of an element type.
    Array,
    /// Function pointer type. Never translatable.
    Delegate,
}

impl TypeKind {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
            TypeKind::Enum => "enum",
            TypeKind::Interface => "interface",
            TypeKind::Primitive => "primitive",
            TypeKind::GenericParameter => "generic_parameter",
            TypeKind::Array => "array",
            TypeKind::Delegate => "delegate",
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identity of a type as seen from a reference site (property, base, parameter).
///
/// Unlike [`SourceType`](super::SourceType), a `TypeRef` carries no members, so it
/// can be hashed and used as a memoization key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    pub kind: TypeKind,

    /// Dotted namespace, `None` for the global namespace and generic parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Simple name, possibly carrying an arity suffix (`Box`1`).
    pub name: String,

    /// Generic arguments of a constructed type, or the parameters of a definition.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_arguments: Vec<TypeRef>,

    /// Element type of an array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<Box<TypeRef>>,

    /// The type can be enumerated (implements the framework's enumerable capability).
    #[serde(default, skip_serializing_if = "is_false")]
    pub enumerable: bool,

    /// The type is assignable to the framework's generic dictionary capability.
    #[serde(default, skip_serializing_if = "is_false")]
    pub dictionary: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Namespace holding the built-in types.
pub const SYSTEM_NAMESPACE: &str = "System";

/// Namespace holding the generic collection types.
pub const COLLECTIONS_NAMESPACE: &str = "System.Collections.Generic";

impl TypeRef {
    /// Create a type reference.
    pub fn new(kind: TypeKind, namespace: &str, name: impl Into<String>) -> Self {
        Self {
            kind,
            namespace: namespace_from(namespace),
            name: name.into(),
            generic_arguments: Vec::new(),
            element_type: None,
            enumerable: false,
            dictionary: false,
        }
    }

    pub fn class(namespace: &str, name: impl Into<String>) -> Self {
        Self::new(TypeKind::Class, namespace, name)
    }

    pub fn structure(namespace: &str, name: impl Into<String>) -> Self {
        Self::new(TypeKind::Struct, namespace, name)
    }

    pub fn enumeration(namespace: &str, name: impl Into<String>) -> Self {
        Self::new(TypeKind::Enum, namespace, name)
    }

    pub fn interface(namespace: &str, name: impl Into<String>) -> Self {
        Self::new(TypeKind::Interface, namespace, name)
    }

    /// A built-in scalar in the `System` namespace, e.g. `primitive("Int32")`.
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Primitive, SYSTEM_NAMESPACE, name)
    }

    /// `System.String`. A class, not a primitive, and never treated as a collection.
    pub fn string() -> Self {
        Self::class(SYSTEM_NAMESPACE, "String")
    }

    pub fn generic_parameter(name: impl Into<String>) -> Self {
        Self::new(TypeKind::GenericParameter, "", name)
    }

    /// `element[]`.
    pub fn array_of(element: TypeRef) -> Self {
        let mut array = Self::new(TypeKind::Array, "", format!("{}[]", element.name));
        array.element_type = Some(Box::new(element));
        array.enumerable = true;
        array
    }

    /// `System.Collections.Generic.List<element>`.
    pub fn list_of(element: TypeRef) -> Self {
        Self::class(COLLECTIONS_NAMESPACE, "List`1")
            .with_generic_arguments(vec![element])
            .enumerable()
    }

    /// `System.Collections.Generic.Dictionary<key, value>`.
    pub fn dictionary_of(key: TypeRef, value: TypeRef) -> Self {
        Self::class(COLLECTIONS_NAMESPACE, "Dictionary`2")
            .with_generic_arguments(vec![key, value])
            .enumerable()
            .dictionary()
    }

    pub fn with_generic_arguments(mut self, arguments: Vec<TypeRef>) -> Self {
        self.generic_arguments = arguments;
        self
    }

    pub fn enumerable(mut self) -> Self {
        self.enumerable = true;
        self
    }

    pub fn dictionary(mut self) -> Self {
        self.dictionary = true;
        self
    }

    /// Simple name with any arity suffix stripped.
    pub fn base_name(&self) -> &str {
        self.name.split('`').next().unwrap_or(&self.name)
    }

    pub fn is_generic(&self) -> bool {
        !self.generic_arguments.is_empty()
    }

    pub fn is_generic_parameter(&self) -> bool {
        self.kind == TypeKind::GenericParameter
    }

    pub fn is_string(&self) -> bool {
        self.namespace.as_deref() == Some(SYSTEM_NAMESPACE) && self.name == "String"
    }

    /// Arrays and enumerables, except strings.
    pub fn is_collection(&self) -> bool {
        self.kind == TypeKind::Array || (self.enumerable && !self.is_string())
    }

    /// Dictionary capability with exactly a key and a value argument.
    pub fn is_dictionary_shaped(&self) -> bool {
        self.dictionary && self.generic_arguments.len() == 2
    }

    /// Element type of an array, or the single generic argument of an enumerable.
    pub fn collection_element(&self) -> Option<&TypeRef> {
        if self.kind == TypeKind::Array {
            return self.element_type.as_deref();
        }
        match self.generic_arguments.as_slice() {
            [element] if self.enumerable => Some(element),
            _ => None,
        }
    }

    /// Key identifying the type definition, regardless of the generic arguments.
    pub fn definition_key(&self) -> TypeKey {
        TypeKey {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
        }
    }

    /// Dotted source name, e.g. `Contoso.Orders.Order`.
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}.{}", namespace, self.name),
            None => self.name.clone(),
        }
    }
}

/// Namespace and raw name of a type definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeKey {
    pub namespace: Option<String>,
    pub name: String,
}

/// Empty namespaces are the global namespace.
pub(crate) fn namespace_from(namespace: &str) -> Option<String> {
    if namespace.is_empty() {
        None
    } else {
        Some(namespace.to_string())
    }
}
