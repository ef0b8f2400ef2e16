use std::fmt;

use crate::schema::{COLLECTIONS_NAMESPACE, SYSTEM_NAMESPACE};

/// Resolved target-side name of a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName {
    /// Dotted namespace, `None` for the global namespace.
    pub namespace: Option<String>,
    /// Simple name without arity suffix, including any Edit marker.
    pub name: String,
    /// Generic arguments, rendered inside `<...>`.
    pub arguments: Vec<TypeReference>,
}

impl TypeName {
    pub fn new(namespace: Option<String>, name: impl Into<String>) -> Self {
        Self {
            namespace,
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_arguments(mut self, arguments: Vec<TypeReference>) -> Self {
        self.arguments = arguments;
        self
    }

    /// `System.Array<element>`, the printer's spelling of `element[]`.
    pub fn array_of(element: TypeReference) -> Self {
        Self::new(Some(SYSTEM_NAMESPACE.to_string()), "Array").with_arguments(vec![element])
    }

    /// `System.Collections.Generic.ICollection<element>`.
    pub fn collection_of(element: TypeReference) -> Self {
        Self::new(Some(COLLECTIONS_NAMESPACE.to_string()), "ICollection")
            .with_arguments(vec![element])
    }

    /// Name with arguments but without namespace, as written in a declaration header.
    pub fn declared_name(&self) -> String {
        let mut out = self.name.clone();
        write_arguments(&mut out, &self.arguments);
        out
    }

    /// Dotted name without arguments, as used for static member access.
    pub fn qualified_base(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}.{}", namespace, self.name),
            None => self.name.clone(),
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = self.qualified_base();
        write_arguments(&mut out, &self.arguments);
        f.write_str(&out)
    }
}

fn write_arguments(out: &mut String, arguments: &[TypeReference]) {
    if arguments.is_empty() {
        return;
    }
    let rendered: Vec<String> = arguments.iter().map(ToString::to_string).collect();
    out.push('<');
    out.push_str(&rendered.join(", "));
    out.push('>');
}

/// Kind of reactive container the Edit view wraps values in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactiveWrapper {
    /// Observable single value.
    Scalar,
    /// Observable array.
    Collection,
}

/// Type of a field, parameter or return value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeReference {
    Named(TypeName),
    Reactive {
        wrapper: ReactiveWrapper,
        /// Wrapped value type, or element type for collections.
        inner: Box<TypeReference>,
    },
}

impl TypeReference {
    pub fn reactive(wrapper: ReactiveWrapper, inner: TypeReference) -> Self {
        TypeReference::Reactive {
            wrapper,
            inner: Box::new(inner),
        }
    }
}

impl From<TypeName> for TypeReference {
    fn from(name: TypeName) -> Self {
        TypeReference::Named(name)
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeReference::Named(name) => write!(f, "{}", name),
            TypeReference::Reactive {
                wrapper: ReactiveWrapper::Scalar,
                inner,
            } => write!(f, "Observable<{}>", inner),
            TypeReference::Reactive {
                wrapper: ReactiveWrapper::Collection,
                inner,
            } => write!(f, "ObservableArray<{}>", inner),
        }
    }
}

/// Readonly and Edit spellings of one source type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNamePair {
    pub readonly: TypeName,
    pub edit: TypeName,
}

impl TypeNamePair {
    /// Pair for types the Edit view does not translate.
    pub fn untranslated(name: TypeName) -> Self {
        Self {
            readonly: name.clone(),
            edit: name,
        }
    }

    pub fn is_translated(&self) -> bool {
        self.readonly != self.edit
    }
}
