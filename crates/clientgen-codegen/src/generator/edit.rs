//! Edit-view member synthesis: reactive field types, the seeding
//! constructor and the `createCollection` factory.

use clientgen_core::graph::{
    Constructor, Expression, MethodDecl, Parameter, ReactiveWrapper, Statement, TypeName,
    TypeNamePair, TypeReference,
};
use clientgen_core::schema::{TypeKind, TypeRef};

use crate::resolver::TypeNameResolver;

/// Name of the single constructor parameter.
pub const INITIAL_VALUE: &str = "initialValue";

/// Name of the static factory mapping a Readonly collection to Edit instances.
pub const CREATE_COLLECTION: &str = "createCollection";

const FACTORY_PARAMETER: &str = "from";
const FACTORY_ELEMENT: &str = "element";

/// How a property value is carried into the Edit view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PropertyShape {
    /// Primitive, enum, framework, interface or opaque value.
    Scalar,
    /// Key/value map, kept whole.
    Dictionary,
    /// Collection of native or interface elements.
    ScalarCollection(TypeRef),
    /// Collection whose element is an unbound generic parameter.
    UnboundCollection,
    /// Collection of user aggregates.
    AggregateCollection(TypeRef),
    /// User aggregate, constructed as its Edit type.
    Aggregate,
}

pub(crate) fn classify_shape(resolver: &TypeNameResolver<'_>, ty: &TypeRef) -> PropertyShape {
    if ty.is_dictionary_shaped() {
        return PropertyShape::Dictionary;
    }

    if ty.is_collection() {
        return match ty.collection_element() {
            Some(element) if element.is_generic_parameter() => PropertyShape::UnboundCollection,
            Some(element) if has_edit_class(resolver, element) => {
                PropertyShape::AggregateCollection(element.clone())
            }
            Some(element) => PropertyShape::ScalarCollection(element.clone()),
            None => PropertyShape::Scalar,
        };
    }

    if has_edit_class(resolver, ty) {
        PropertyShape::Aggregate
    } else {
        PropertyShape::Scalar
    }
}

/// User classes and structs; interfaces only get a bodiless surface.
fn has_edit_class(resolver: &TypeNameResolver<'_>, ty: &TypeRef) -> bool {
    !resolver.is_native(ty) && ty.kind != TypeKind::Interface
}

/// Type of the public Edit field holding a property.
pub(crate) fn field_type(
    resolver: &mut TypeNameResolver<'_>,
    ty: &TypeRef,
    shape: &PropertyShape,
) -> TypeReference {
    match shape {
        PropertyShape::Scalar | PropertyShape::Dictionary | PropertyShape::UnboundCollection => {
            TypeReference::reactive(ReactiveWrapper::Scalar, resolver.readonly_reference(ty))
        }
        PropertyShape::ScalarCollection(element) => TypeReference::reactive(
            ReactiveWrapper::Collection,
            resolver.readonly_reference(element),
        ),
        PropertyShape::AggregateCollection(element) => TypeReference::reactive(
            ReactiveWrapper::Collection,
            resolver.edit_reference(element),
        ),
        PropertyShape::Aggregate => resolver.edit_reference(ty),
    }
}

/// `initialValue && initialValue.<property>`.
///
/// Falsy but present values (`0`, `""`, `false`) short-circuit exactly like
/// an absent `initialValue`.
pub fn guard(property: &str) -> Expression {
    let initial_value = Expression::argument(INITIAL_VALUE);
    initial_value.clone().and(initial_value.field(property))
}

/// Right-hand side of the constructor assignment for a property.
pub(crate) fn initializer(
    resolver: &mut TypeNameResolver<'_>,
    property: &str,
    ty: &TypeRef,
    shape: &PropertyShape,
) -> Expression {
    match shape {
        PropertyShape::Scalar | PropertyShape::Dictionary => {
            Expression::wrap(ReactiveWrapper::Scalar, guard(property))
        }
        PropertyShape::ScalarCollection(_) | PropertyShape::UnboundCollection => {
            Expression::wrap(ReactiveWrapper::Collection, guard(property))
        }
        PropertyShape::AggregateCollection(element) => {
            let factory = Expression::StaticCall {
                ty: resolver.resolve(element).edit,
                method: CREATE_COLLECTION.to_string(),
                arguments: vec![Expression::argument(INITIAL_VALUE).field(property)],
            };
            Expression::wrap(ReactiveWrapper::Collection, guard(property).and(factory))
        }
        PropertyShape::Aggregate => Expression::New {
            ty: resolver.resolve(ty).edit,
            arguments: vec![guard(property)],
        },
    }
}

/// `this.<property> = <initializer>`.
pub(crate) fn assignment(property: &str, value: Expression) -> Statement {
    Statement::Assign {
        target: Expression::this_field(property),
        value,
    }
}

/// Constructor taking the Readonly value, forwarding it to the base when linked.
pub(crate) fn constructor(
    readonly: &TypeName,
    has_base: bool,
    body: Vec<Statement>,
) -> Constructor {
    let base_arguments = if has_base {
        vec![Expression::argument(INITIAL_VALUE)]
    } else {
        Vec::new()
    };

    Constructor {
        parameters: vec![Parameter::new(
            INITIAL_VALUE,
            TypeReference::Named(readonly.clone()),
        )],
        base_arguments,
        body,
    }
}

/// `static createCollection(from: ICollection<Readonly>): Edit[]`, mapping
/// each element through the Edit constructor.
/// A generic Edit class redeclares its type parameters on the factory.
pub(crate) fn create_collection(names: &TypeNamePair) -> MethodDecl {
    let construct = Expression::New {
        ty: names.edit.clone(),
        arguments: vec![Expression::argument(FACTORY_ELEMENT)],
    };
    let mapped = Expression::Call {
        target: Box::new(Expression::argument(FACTORY_PARAMETER)),
        method: "map".to_string(),
        arguments: vec![Expression::Lambda {
            parameter: FACTORY_ELEMENT.to_string(),
            body: Box::new(construct),
        }],
    };

    MethodDecl {
        name: CREATE_COLLECTION.to_string(),
        type_parameters: names.edit.arguments.iter().map(ToString::to_string).collect(),
        return_type: TypeName::array_of(TypeReference::Named(names.edit.clone())).into(),
        parameters: vec![Parameter::new(
            FACTORY_PARAMETER,
            TypeName::collection_of(TypeReference::Named(names.readonly.clone())).into(),
        )],
        is_static: true,
        body: Some(vec![Statement::Return(mapped)]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clientgen_core::config::NamingConfig;

    #[test]
    fn test_guard_shape() {
        let expected = Expression::And(
            Box::new(Expression::Argument("initialValue".to_string())),
            Box::new(Expression::Field {
                target: Box::new(Expression::Argument("initialValue".to_string())),
                name: "total".to_string(),
            }),
        );
        assert_eq!(guard("total"), expected);
    }

    #[test]
    fn test_classify_shapes() {
        let naming = NamingConfig::default();
        let resolver = TypeNameResolver::new(&naming);
        let line = TypeRef::class("Shop", "Line");

        assert_eq!(
            classify_shape(&resolver, &TypeRef::primitive("Int32")),
            PropertyShape::Scalar
        );
        assert_eq!(classify_shape(&resolver, &TypeRef::string()), PropertyShape::Scalar);
        assert_eq!(classify_shape(&resolver, &line), PropertyShape::Aggregate);
        assert_eq!(
            classify_shape(&resolver, &TypeRef::array_of(line.clone())),
            PropertyShape::AggregateCollection(line.clone())
        );
        assert_eq!(
            classify_shape(&resolver, &TypeRef::list_of(TypeRef::string())),
            PropertyShape::ScalarCollection(TypeRef::string())
        );
        assert_eq!(
            classify_shape(&resolver, &TypeRef::list_of(TypeRef::generic_parameter("T"))),
            PropertyShape::UnboundCollection
        );
        assert_eq!(
            classify_shape(
                &resolver,
                &TypeRef::dictionary_of(TypeRef::string(), line)
            ),
            PropertyShape::Dictionary
        );
    }

    #[test]
    fn test_interfaces_are_carried_as_values() {
        let naming = NamingConfig::default();
        let resolver = TypeNameResolver::new(&naming);
        let pricing = TypeRef::interface("Shop", "IPricing");

        assert_eq!(classify_shape(&resolver, &pricing), PropertyShape::Scalar);
        assert_eq!(
            classify_shape(&resolver, &TypeRef::list_of(pricing.clone())),
            PropertyShape::ScalarCollection(pricing)
        );
    }

    #[test]
    fn test_aggregate_collection_initializer_is_guarded() {
        let naming = NamingConfig::default();
        let mut resolver = TypeNameResolver::new(&naming);
        let line = TypeRef::class("Shop", "Line");
        let lines = TypeRef::array_of(line.clone());
        let shape = PropertyShape::AggregateCollection(line);

        let value = initializer(&mut resolver, "lines", &lines, &shape);
        let Expression::Wrap {
            wrapper: ReactiveWrapper::Collection,
            value,
        } = value
        else {
            panic!("expected a reactive collection");
        };
        let Expression::And(lhs, rhs) = *value else {
            panic!("expected a guarded factory call");
        };
        assert_eq!(*lhs, guard("lines"));
        match *rhs {
            Expression::StaticCall { ty, method, .. } => {
                assert_eq!(ty.to_string(), "Shop.Edit.Line");
                assert_eq!(method, CREATE_COLLECTION);
            }
            other => panic!("expected createCollection call, got {:?}", other),
        }
    }

    #[test]
    fn test_constructor_base_call() {
        let readonly = TypeName::new(Some("Shop".to_string()), "Order");
        assert!(constructor(&readonly, false, Vec::new()).base_arguments.is_empty());
        assert_eq!(
            constructor(&readonly, true, Vec::new()).base_arguments,
            vec![Expression::argument(INITIAL_VALUE)]
        );
    }

    #[test]
    fn test_create_collection_signature() {
        let naming = NamingConfig::default();
        let mut resolver = TypeNameResolver::new(&naming);
        let names = resolver.resolve(&TypeRef::class("Shop", "Line"));

        let method = create_collection(&names);
        assert!(method.is_static);
        assert_eq!(method.return_type.to_string(), "System.Array<Shop.Edit.Line>");
        assert_eq!(
            method.parameters[0].ty.to_string(),
            "System.Collections.Generic.ICollection<Shop.Line>"
        );
        assert!(matches!(
            method.body.as_deref(),
            Some([Statement::Return(Expression::Call { .. })])
        ));
    }

    #[test]
    fn test_generic_create_collection_redeclares_parameters() {
        let naming = NamingConfig::default();
        let mut resolver = TypeNameResolver::new(&naming);
        let boxed = TypeRef::class("Shop", "Box`1")
            .with_generic_arguments(vec![TypeRef::generic_parameter("T")]);
        let names = resolver.resolve(&boxed);

        let method = create_collection(&names);
        assert_eq!(method.type_parameters, vec!["T".to_string()]);
        assert_eq!(method.return_type.to_string(), "System.Array<Shop.BoxEdit<T>>");

        let line = resolver.resolve(&TypeRef::class("Shop", "Line"));
        assert!(create_collection(&line).type_parameters.is_empty());
    }
}
