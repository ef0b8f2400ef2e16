use std::collections::HashSet;

use clientgen_core::graph::{
    ClassDecl, Declaration, EnumDecl, EnumMember, FieldDecl, InterfaceDecl, MethodDecl,
    Parameter, TypeName,
};
use clientgen_core::schema::{
    PropertyDef, PropertyDescriptor, SourceType, TypeKey, TypeKind, TypeRef,
};
use clientgen_core::selector::{classify_property, ConversionDecision};
use clientgen_core::{ClientGeneratorOptions, ClientgenError, Result};

use super::edit::{self, PropertyShape};
use super::View;
use crate::resolver::TypeNameResolver;

/// Builds one declaration per source type for a single view.
pub(crate) struct DeclarationSynthesizer<'a> {
    view: View,
    options: &'a ClientGeneratorOptions,
    resolver: TypeNameResolver<'a>,
    /// Types declared in this run; base links only point at these.
    declared: HashSet<TypeKey>,
    /// Types used as the element of a kept collection property.
    collection_elements: HashSet<TypeKey>,
}

impl<'a> DeclarationSynthesizer<'a> {
    pub fn new(view: View, options: &'a ClientGeneratorOptions, types: &[SourceType]) -> Self {
        let mut synthesizer = Self {
            view,
            options,
            resolver: TypeNameResolver::new(&options.naming),
            declared: types
                .iter()
                .map(|ty| ty.type_ref().definition_key())
                .collect(),
            collection_elements: HashSet::new(),
        };

        if view == View::Edit {
            synthesizer.collection_elements = synthesizer.find_collection_elements(types);
        }

        synthesizer
    }

    pub fn synthesize(&mut self, ty: &SourceType) -> Result<Declaration> {
        match (ty.kind(), self.view) {
            (TypeKind::Class | TypeKind::Struct, View::Dto) => Ok(self.dto_interface(ty)),
            (TypeKind::Class | TypeKind::Struct, View::Edit) => Ok(self.edit_class(ty)),
            (TypeKind::Enum, _) => Ok(self.enumeration(ty)),
            (TypeKind::Interface, _) => Ok(self.capability_surface(ty)),
            (kind, _) => Err(ClientgenError::UnsupportedTypeKind {
                type_name: ty.type_ref().qualified_name(),
                kind,
            }),
        }
    }

    fn dto_interface(&mut self, ty: &SourceType) -> Declaration {
        let name = self.resolver.resolve(ty.type_ref()).readonly;
        let base = self.base_link(ty);

        let mut fields: Vec<FieldDecl> = ty
            .fields
            .iter()
            .map(|field| {
                FieldDecl::new(
                    field.name.clone(),
                    self.resolver.readonly_reference(&field.value_type),
                )
            })
            .collect();

        for (property, decision) in self.kept_properties(ty) {
            fields.push(
                FieldDecl::new(
                    property.name.clone(),
                    self.resolver.readonly_reference(&property.value_type),
                )
                .optional(decision == ConversionDecision::Optional),
            );
        }

        Declaration::Interface(InterfaceDecl { name, base, fields })
    }

    fn edit_class(&mut self, ty: &SourceType) -> Declaration {
        let names = self.resolver.resolve(ty.type_ref());
        let base = self.base_link(ty);

        let mut fields = Vec::new();
        let mut body = Vec::new();
        for (property, _) in self.kept_properties(ty) {
            let shape = edit::classify_shape(&self.resolver, &property.value_type);
            if shape == PropertyShape::UnboundCollection {
                tracing::debug!(
                    ty = %ty.type_ref().qualified_name(),
                    property = %property.name,
                    "Collection element is an unbound generic parameter; keeping source collection type"
                );
            }

            let field_type = edit::field_type(&mut self.resolver, &property.value_type, &shape);
            fields.push(FieldDecl::new(property.name.clone(), field_type).public());

            let value =
                edit::initializer(&mut self.resolver, &property.name, &property.value_type, &shape);
            body.push(edit::assignment(&property.name, value));
        }

        let constructor = edit::constructor(&names.readonly, base.is_some(), body);

        let mut methods = Vec::new();
        if self
            .collection_elements
            .contains(&ty.type_ref().definition_key())
        {
            methods.push(edit::create_collection(&names));
        }

        Declaration::Class(ClassDecl {
            name: names.edit,
            base,
            fields,
            constructor: Some(constructor),
            methods,
        })
    }

    fn enumeration(&mut self, ty: &SourceType) -> Declaration {
        let members = ty
            .constants
            .iter()
            .enumerate()
            .map(|(index, constant)| EnumMember {
                name: constant.name.clone(),
                initializer: (constant.value != index as i64).then_some(constant.value),
            })
            .collect();

        Declaration::Enum(EnumDecl {
            name: self.resolver.resolve(ty.type_ref()).readonly,
            members,
        })
    }

    fn capability_surface(&mut self, ty: &SourceType) -> Declaration {
        let name = self.view_name(ty.type_ref());
        let base = self.base_link(ty);

        let methods = ty
            .methods
            .iter()
            .map(|method| MethodDecl {
                name: method.name.clone(),
                type_parameters: Vec::new(),
                return_type: self.resolver.readonly_reference(&method.return_type),
                parameters: method
                    .parameters
                    .iter()
                    .map(|p| {
                        Parameter::new(
                            p.name.clone(),
                            self.resolver.readonly_reference(&p.parameter_type),
                        )
                    })
                    .collect(),
                is_static: false,
                body: None,
            })
            .collect();

        Declaration::Class(ClassDecl {
            name,
            base,
            fields: Vec::new(),
            constructor: None,
            methods,
        })
    }

    fn view_name(&mut self, ty: &TypeRef) -> TypeName {
        let names = self.resolver.resolve(ty);
        match self.view {
            View::Dto => names.readonly,
            View::Edit => names.edit,
        }
    }

    /// Base link, only when the base is declared in the same run.
    fn base_link(&mut self, ty: &SourceType) -> Option<TypeName> {
        let base = ty.base_type.as_ref()?;

        if !self.declared.contains(&base.definition_key()) {
            tracing::debug!(
                ty = %ty.type_ref().qualified_name(),
                base = %base.qualified_name(),
                "Base type is not part of this run; omitting base link"
            );
            return None;
        }

        Some(self.view_name(base))
    }

    /// Properties with a non-excluded decision, in declaration order.
    fn kept_properties<'t>(
        &self,
        ty: &'t SourceType,
    ) -> Vec<(&'t PropertyDef, ConversionDecision)> {
        ty.properties
            .iter()
            .filter_map(|property| {
                let descriptor = PropertyDescriptor {
                    name: property.name.clone(),
                    declaring_type: ty.type_ref().clone(),
                    value_type: property.value_type.clone(),
                    is_collection: property.value_type.is_collection(),
                    is_primitive_or_framework: self.resolver.is_native(&property.value_type),
                };
                let decision = classify_property(&self.options.property_selectors, &descriptor);
                decision.is_kept().then_some((property, decision))
            })
            .collect()
    }

    fn find_collection_elements(&self, types: &[SourceType]) -> HashSet<TypeKey> {
        types
            .iter()
            .filter(|ty| matches!(ty.kind(), TypeKind::Class | TypeKind::Struct))
            .flat_map(|ty| self.kept_properties(ty))
            .filter_map(
                |(property, _)| match edit::classify_shape(&self.resolver, &property.value_type) {
                    PropertyShape::AggregateCollection(element) => Some(element.definition_key()),
                    _ => None,
                },
            )
            .collect()
    }
}
