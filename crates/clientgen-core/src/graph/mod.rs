//! Declaration graph handed to code printers.
//!
//! A graph is a list of namespaces, each holding type declarations in the
//! order they were produced. Nodes are built complete and only appended,
//! never patched afterwards.

mod declaration;
mod expression;
mod types;

pub use declaration::{
    ClassDecl, Constructor, Declaration, EnumDecl, EnumMember, FieldDecl, InterfaceDecl,
    MethodDecl, Parameter,
};
pub use expression::{Expression, Statement};
pub use types::{ReactiveWrapper, TypeName, TypeNamePair, TypeReference};

/// Namespace node. The empty name is the global namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub name: String,
    pub declarations: Vec<Declaration>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declarations: Vec::new(),
        }
    }

    pub fn is_global(&self) -> bool {
        self.name.is_empty()
    }
}

/// Namespaces in first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationGraph {
    pub namespaces: Vec<Namespace>,
}

impl DeclarationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration to its namespace, opening the namespace on first use.
    pub fn push(&mut self, namespace: Option<&str>, declaration: Declaration) {
        let name = namespace.unwrap_or_default();
        let index = match self.namespaces.iter().position(|ns| ns.name == name) {
            Some(index) => index,
            None => {
                self.namespaces.push(Namespace::new(name));
                self.namespaces.len() - 1
            }
        };
        self.namespaces[index].declarations.push(declaration);
    }

    /// Append every declaration of `other`, keeping both orderings.
    pub fn merge(mut self, other: DeclarationGraph) -> Self {
        for namespace in other.namespaces {
            let target = (!namespace.is_global()).then_some(namespace.name.as_str());
            for declaration in namespace.declarations {
                self.push(target, declaration);
            }
        }
        self
    }

    pub fn namespace(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.iter().find(|ns| ns.name == name)
    }

    /// Find a declaration by namespace and simple name (without arguments).
    pub fn find(&self, namespace: &str, name: &str) -> Option<&Declaration> {
        self.namespace(namespace)?
            .declarations
            .iter()
            .find(|d| d.name().name == name)
    }

    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.namespaces.iter().flat_map(|ns| ns.declarations.iter())
    }

    pub fn declaration_count(&self) -> usize {
        self.namespaces.iter().map(|ns| ns.declarations.len()).sum()
    }
}
