//! Framework type spellings in TypeScript.

use clientgen_core::config::ReactiveConfig;
use clientgen_core::graph::{ReactiveWrapper, TypeName, TypeReference};

const STRING_TYPES: &[&str] = &["String", "Guid", "Char"];

const NUMBER_TYPES: &[&str] = &[
    "Byte", "SByte", "Int16", "UInt16", "Int32", "UInt32", "Int64", "UInt64", "Single", "Double",
    "Decimal",
];

const LIST_TYPES: &[&str] = &[
    "List",
    "IList",
    "ICollection",
    "IEnumerable",
    "Collection",
    "IReadOnlyList",
    "IReadOnlyCollection",
    "HashSet",
    "ISet",
];

const DICTIONARY_TYPES: &[&str] = &[
    "Dictionary",
    "IDictionary",
    "IReadOnlyDictionary",
    "SortedDictionary",
];

/// Render a field, parameter or return type.
pub fn type_reference(ty: &TypeReference, reactive: &ReactiveConfig) -> String {
    match ty {
        TypeReference::Named(name) => type_name(name, reactive),
        TypeReference::Reactive { wrapper, inner } => {
            let container = match wrapper {
                ReactiveWrapper::Scalar => &reactive.scalar_type,
                ReactiveWrapper::Collection => &reactive.collection_type,
            };
            format!("{}<{}>", container, type_reference(inner, reactive))
        }
    }
}

/// Render a named type, mapping framework types to TypeScript built-ins.
pub fn type_name(name: &TypeName, reactive: &ReactiveConfig) -> String {
    if let Some(mapped) = framework_type(name, reactive) {
        return mapped;
    }

    let mut out = name.qualified_base();
    push_arguments(&mut out, &name.arguments, reactive);
    out
}

/// Simple name with arguments, as written after `interface` or `class`.
pub fn declared_name(name: &TypeName, reactive: &ReactiveConfig) -> String {
    let mut out = name.name.clone();
    push_arguments(&mut out, &name.arguments, reactive);
    out
}

fn push_arguments(out: &mut String, arguments: &[TypeReference], reactive: &ReactiveConfig) {
    if arguments.is_empty() {
        return;
    }
    let rendered: Vec<String> = arguments
        .iter()
        .map(|argument| type_reference(argument, reactive))
        .collect();
    out.push('<');
    out.push_str(&rendered.join(", "));
    out.push('>');
}

fn framework_type(name: &TypeName, reactive: &ReactiveConfig) -> Option<String> {
    let namespace = name.namespace.as_deref()?;
    if namespace != "System" && !namespace.starts_with("System.") {
        return None;
    }

    let simple = name.name.as_str();
    let argument = |index: usize| {
        name.arguments
            .get(index)
            .map(|argument| type_reference(argument, reactive))
            .unwrap_or_else(|| "any".to_string())
    };

    let mapped = match simple {
        _ if STRING_TYPES.contains(&simple) => "string".to_string(),
        _ if NUMBER_TYPES.contains(&simple) => "number".to_string(),
        "Boolean" => "boolean".to_string(),
        "DateTime" | "DateTimeOffset" => "Date".to_string(),
        "Object" => "any".to_string(),
        "Void" => "void".to_string(),
        "Nullable" => argument(0),
        "Array" => array_of(&argument(0)),
        _ if LIST_TYPES.contains(&simple) => array_of(&argument(0)),
        _ if DICTIONARY_TYPES.contains(&simple) => {
            format!("{{ [key: string]: {} }}", argument(1))
        }
        _ => return None,
    };
    Some(mapped)
}

fn array_of(element: &str) -> String {
    if element.contains(' ') && !element.ends_with('}') {
        format!("({})[]", element)
    } else {
        format!("{}[]", element)
    }
}
