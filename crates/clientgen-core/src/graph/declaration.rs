use super::expression::{Expression, Statement};
use super::types::{TypeName, TypeReference};

/// Type declaration inside a namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Interface(InterfaceDecl),
    Class(ClassDecl),
    Enum(EnumDecl),
}

impl Declaration {
    pub fn name(&self) -> &TypeName {
        match self {
            Declaration::Interface(decl) => &decl.name,
            Declaration::Class(decl) => &decl.name,
            Declaration::Enum(decl) => &decl.name,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceDecl> {
        match self {
            Declaration::Interface(decl) => Some(decl),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassDecl> {
        match self {
            Declaration::Class(decl) => Some(decl),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumDecl> {
        match self {
            Declaration::Enum(decl) => Some(decl),
            _ => None,
        }
    }
}

/// Structural interface (DTO view of a class or struct).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDecl {
    pub name: TypeName,
    pub base: Option<TypeName>,
    pub fields: Vec<FieldDecl>,
}

/// Class declaration (Edit view of a class or struct, or an interface surface).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: TypeName,
    pub base: Option<TypeName>,
    pub fields: Vec<FieldDecl>,
    pub constructor: Option<Constructor>,
    pub methods: Vec<MethodDecl>,
}

impl ClassDecl {
    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn method(&self, name: &str) -> Option<&MethodDecl> {
        self.methods.iter().find(|m| m.name == name)
    }
}

impl InterfaceDecl {
    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Enum declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDecl {
    pub name: TypeName,
    pub members: Vec<EnumMember>,
}

/// Enum member. `initializer` is set only when the value differs from the
/// member's zero-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    pub name: String,
    pub initializer: Option<i64>,
}

/// Data member of an interface or class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: String,
    pub ty: TypeReference,
    /// Rendered as a `?` suffix on the name.
    pub optional: bool,
    pub is_public: bool,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, ty: TypeReference) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            is_public: false,
        }
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }
}

/// Method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeReference,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeReference) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Method signature, with a body only for synthesized methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: String,
    /// Method-level generic parameters, printed as `name<T>(...)`.
    pub type_parameters: Vec<String>,
    pub return_type: TypeReference,
    pub parameters: Vec<Parameter>,
    pub is_static: bool,
    pub body: Option<Vec<Statement>>,
}

/// Edit-class constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    pub parameters: Vec<Parameter>,
    /// Arguments forwarded to the base constructor; empty means no base call.
    pub base_arguments: Vec<Expression>,
    pub body: Vec<Statement>,
}
