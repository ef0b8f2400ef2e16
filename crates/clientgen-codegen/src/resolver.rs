//! Readonly and Edit name resolution.
//!
//! Rules, first match wins:
//!
//! 1. Primitives, enums, generic parameters, arrays and framework types keep
//!    their source name in both views.
//! 2. User generic types get the Edit marker between the base name and the
//!    parameter list (`Box<T>` / `BoxEdit<T>`), namespace untouched.
//! 3. Other user types keep their simple name and move to the Edit
//!    sub-namespace (`Shop.Order` / `Shop.Edit.Order`).
//!
//! Generic arguments are always spelled with their Readonly names.

use std::collections::HashMap;

use clientgen_core::config::NamingConfig;
use clientgen_core::graph::{TypeName, TypeNamePair, TypeReference};
use clientgen_core::schema::{TypeKind, TypeRef, SYSTEM_NAMESPACE};

/// Memoizing name resolver for one translation run.
pub struct TypeNameResolver<'a> {
    naming: &'a NamingConfig,
    cache: HashMap<TypeRef, TypeNamePair>,
}

impl<'a> TypeNameResolver<'a> {
    pub fn new(naming: &'a NamingConfig) -> Self {
        Self {
            naming,
            cache: HashMap::new(),
        }
    }

    /// Resolve both spellings of a type. Repeated calls return identical pairs.
    pub fn resolve(&mut self, ty: &TypeRef) -> TypeNamePair {
        if let Some(pair) = self.cache.get(ty) {
            return pair.clone();
        }

        let pair = self.compute(ty);
        self.cache.insert(ty.clone(), pair.clone());
        pair
    }

    /// Types that are never translated into an Edit counterpart.
    pub fn is_native(&self, ty: &TypeRef) -> bool {
        matches!(
            ty.kind,
            TypeKind::Primitive | TypeKind::Enum | TypeKind::GenericParameter | TypeKind::Array
        ) || self.naming.is_framework_namespace(ty.namespace.as_deref())
    }

    pub fn readonly_reference(&mut self, ty: &TypeRef) -> TypeReference {
        TypeReference::Named(self.resolve(ty).readonly)
    }

    pub fn edit_reference(&mut self, ty: &TypeRef) -> TypeReference {
        TypeReference::Named(self.resolve(ty).edit)
    }

    fn compute(&mut self, ty: &TypeRef) -> TypeNamePair {
        if ty.kind == TypeKind::Array {
            let arguments = ty
                .element_type
                .as_deref()
                .map(|element| vec![self.readonly_reference(element)])
                .unwrap_or_default();
            let array = TypeName::new(Some(SYSTEM_NAMESPACE.to_string()), "Array")
                .with_arguments(arguments);
            return TypeNamePair::untranslated(array);
        }

        let arguments: Vec<TypeReference> = ty
            .generic_arguments
            .iter()
            .map(|argument| self.readonly_reference(argument))
            .collect();
        let readonly =
            TypeName::new(ty.namespace.clone(), ty.base_name()).with_arguments(arguments);

        if self.is_native(ty) {
            return TypeNamePair::untranslated(readonly);
        }

        let edit = if ty.is_generic() {
            TypeName {
                name: format!("{}{}", readonly.name, self.naming.edit_type_suffix),
                ..readonly.clone()
            }
        } else {
            TypeName {
                namespace: Some(self.naming.edit_namespace_for(ty.namespace.as_deref())),
                ..readonly.clone()
            }
        };

        TypeNamePair { readonly, edit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(ty: &TypeRef) -> TypeNamePair {
        let naming = NamingConfig::default();
        TypeNameResolver::new(&naming).resolve(ty)
    }

    #[test]
    fn test_primitive_is_untranslated() {
        let pair = resolve(&TypeRef::primitive("Int32"));
        assert_eq!(pair.readonly.to_string(), "System.Int32");
        assert_eq!(pair.readonly, pair.edit);
    }

    #[test]
    fn test_enum_is_untranslated() {
        let pair = resolve(&TypeRef::enumeration("Shop", "Status"));
        assert_eq!(pair.edit.to_string(), "Shop.Status");
        assert!(!pair.is_translated());
    }

    #[test]
    fn test_generic_parameter_is_untranslated() {
        let pair = resolve(&TypeRef::generic_parameter("T"));
        assert_eq!(pair.readonly.to_string(), "T");
        assert_eq!(pair.edit.to_string(), "T");
    }

    #[test]
    fn test_framework_generic_keeps_source_name() {
        let list = TypeRef::list_of(TypeRef::class("Shop", "Line"));
        let pair = resolve(&list);
        assert_eq!(
            pair.readonly.to_string(),
            "System.Collections.Generic.List<Shop.Line>"
        );
        assert_eq!(pair.readonly, pair.edit);
    }

    #[test]
    fn test_generic_user_type_gets_suffix() {
        let boxed = TypeRef::class("", "Box`1")
            .with_generic_arguments(vec![TypeRef::generic_parameter("T")]);
        let pair = resolve(&boxed);
        assert_eq!(pair.readonly.to_string(), "Box<T>");
        assert_eq!(pair.edit.to_string(), "BoxEdit<T>");
    }

    #[test]
    fn test_generic_user_type_keeps_namespace() {
        let boxed = TypeRef::class("Shop", "Pair`2").with_generic_arguments(vec![
            TypeRef::generic_parameter("TKey"),
            TypeRef::generic_parameter("TValue"),
        ]);
        let pair = resolve(&boxed);
        assert_eq!(pair.readonly.to_string(), "Shop.Pair<TKey, TValue>");
        assert_eq!(pair.edit.to_string(), "Shop.PairEdit<TKey, TValue>");
    }

    #[test]
    fn test_constructed_generic_uses_readonly_arguments() {
        let boxed = TypeRef::class("Shop", "Box`1")
            .with_generic_arguments(vec![TypeRef::class("Shop", "Line")]);
        let pair = resolve(&boxed);
        assert_eq!(pair.edit.to_string(), "Shop.BoxEdit<Shop.Line>");
    }

    #[test]
    fn test_user_type_moves_to_edit_namespace() {
        let pair = resolve(&TypeRef::class("Shop.Orders", "Order"));
        assert_eq!(pair.readonly.to_string(), "Shop.Orders.Order");
        assert_eq!(pair.edit.to_string(), "Shop.Orders.Edit.Order");
        assert_eq!(pair.edit.name, "Order");
    }

    #[test]
    fn test_custom_naming() {
        let naming = NamingConfig {
            edit_namespace: "Editable".to_string(),
            edit_type_suffix: "Model".to_string(),
            ..Default::default()
        };
        let mut resolver = TypeNameResolver::new(&naming);

        let order = resolver.resolve(&TypeRef::class("Shop", "Order"));
        assert_eq!(order.edit.to_string(), "Shop.Editable.Order");

        let boxed = resolver.resolve(
            &TypeRef::class("Shop", "Box`1")
                .with_generic_arguments(vec![TypeRef::generic_parameter("T")]),
        );
        assert_eq!(boxed.edit.to_string(), "Shop.BoxModel<T>");
    }

    #[test]
    fn test_array_spelling() {
        let pair = resolve(&TypeRef::array_of(TypeRef::class("Shop", "Line")));
        assert_eq!(pair.readonly.to_string(), "System.Array<Shop.Line>");
        assert!(!pair.is_translated());
    }

    #[test]
    fn test_resolution_is_memoized() {
        let naming = NamingConfig::default();
        let mut resolver = TypeNameResolver::new(&naming);
        let order = TypeRef::class("Shop", "Order");

        let first = resolver.resolve(&order);
        let second = resolver.resolve(&order);
        assert_eq!(first, second);
        assert_eq!(resolver.cache.len(), 1);
    }
}
