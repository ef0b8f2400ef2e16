//! Translation orchestrator.
//!
//! Loads types from a [`TypeSource`], filters them through the type
//! selectors and builds one [`DeclarationGraph`] per view. A run is all or
//! nothing: the first unsupported type aborts it and no graph is returned.

mod declaration;
pub mod edit;

use clientgen_core::graph::{DeclarationGraph, TypeNamePair};
use clientgen_core::schema::SourceType;
use clientgen_core::selector::keep_type;
use clientgen_core::{ClientGeneratorOptions, ClientgenError, Result};

use crate::resolver::TypeNameResolver;
use crate::source::TypeSource;
use declaration::DeclarationSynthesizer;

/// Which declaration set to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Read-only structural interfaces.
    Dto,
    /// Mutable classes with reactive fields.
    Edit,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Dto => "dto",
            View::Edit => "edit",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Both views generated from the same snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientViews {
    pub dto: DeclarationGraph,
    pub edit: DeclarationGraph,
}

/// Entry point of the translation engine.
#[derive(Debug, Clone)]
pub struct ClientGenerator {
    options: ClientGeneratorOptions,
}

impl ClientGenerator {
    pub fn new(options: ClientGeneratorOptions) -> Self {
        Self { options }
    }

    /// Generate the declaration graph of one view.
    pub fn generate_client(&self, source: &dyn TypeSource, view: View) -> Result<DeclarationGraph> {
        self.options.validate()?;
        let types = self.load_types(source)?;
        self.create_client(&types, view)
    }

    /// Generate one view and append it to an existing graph.
    pub fn generate_client_into(
        &self,
        source: &dyn TypeSource,
        view: View,
        initial: DeclarationGraph,
    ) -> Result<DeclarationGraph> {
        let graph = self.generate_client(source, view)?;
        Ok(initial.merge(graph))
    }

    /// Generate both views from a single fetch of the type source.
    pub fn generate_views(&self, source: &dyn TypeSource) -> Result<ClientViews> {
        self.options.validate()?;
        let types = self.load_types(source)?;

        Ok(ClientViews {
            dto: self.create_client(&types, View::Dto)?,
            edit: self.create_client(&types, View::Edit)?,
        })
    }

    /// Fetch types and keep those accepted by the type selectors.
    pub fn load_types(&self, source: &dyn TypeSource) -> Result<Vec<SourceType>> {
        let module = source.module_name();
        if module.trim().is_empty() {
            return Err(ClientgenError::InvalidArgument(
                "type source has no module name".to_string(),
            ));
        }

        let fetched = source.fetch_types()?;
        let fetched_count = fetched.len();
        let kept: Vec<SourceType> = fetched
            .into_iter()
            .filter(|ty| keep_type(&self.options.type_selectors, ty))
            .collect();

        tracing::debug!(
            module,
            fetched = fetched_count,
            kept = kept.len(),
            "Loaded types from type source"
        );
        Ok(kept)
    }

    /// Resolved name pairs of the given types, in order.
    pub fn resolve_names(&self, types: &[SourceType]) -> Vec<TypeNamePair> {
        let mut resolver = TypeNameResolver::new(&self.options.naming);
        types
            .iter()
            .map(|ty| resolver.resolve(ty.type_ref()))
            .collect()
    }

    fn create_client(&self, types: &[SourceType], view: View) -> Result<DeclarationGraph> {
        let mut synthesizer = DeclarationSynthesizer::new(view, &self.options, types);
        let mut graph = DeclarationGraph::new();

        for ty in types {
            let declaration = synthesizer.synthesize(ty)?;
            tracing::trace!(
                view = %view,
                source = %ty.type_ref().qualified_name(),
                declaration = %declaration.name(),
                "Synthesized declaration"
            );

            let namespace = declaration.name().namespace.clone();
            graph.push(namespace.as_deref(), declaration);
        }

        tracing::info!(
            view = %view,
            namespaces = graph.namespaces.len(),
            declarations = graph.declaration_count(),
            "Generated declaration graph"
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clientgen_core::graph::{
        Declaration, Expression, ReactiveWrapper, Statement, TypeReference,
    };
    use clientgen_core::schema::{MethodDef, PropertyDescriptor, TypeKind, TypeRef};
    use clientgen_core::selector::{ConversionDecision, NamespaceTypeSelector};
    use clientgen_core::config::NamingConfig;

    use crate::manifest::TypeManifest;

    fn shop() -> TypeManifest {
        TypeManifest::new("Shop.Contracts")
            .with_type(
                SourceType::enumeration("Shop", "Status")
                    .with_constant("Draft", 0)
                    .with_constant("Open", 1)
                    .with_constant("Closed", 5),
            )
            .with_type(
                SourceType::class("Shop", "Line")
                    .with_property("sku", TypeRef::string())
                    .with_property("quantity", TypeRef::primitive("Int32")),
            )
            .with_type(
                SourceType::class("Shop", "Entity").with_property("id", TypeRef::primitive("Guid")),
            )
            .with_type(
                SourceType::class("Shop", "Order")
                    .with_base(TypeRef::class("Shop", "Entity"))
                    .with_field("version", TypeRef::primitive("Int64"))
                    .with_property("total", TypeRef::primitive("Decimal"))
                    .with_property("note", TypeRef::string())
                    .with_property("status", TypeRef::enumeration("Shop", "Status"))
                    .with_property("lines", TypeRef::array_of(TypeRef::class("Shop", "Line")))
                    .with_property("tags", TypeRef::list_of(TypeRef::string()))
                    .with_property("customer", TypeRef::class("Shop", "Customer")),
            )
            .with_type(
                SourceType::class("Shop", "Customer").with_property("name", TypeRef::string()),
            )
    }

    fn generator() -> ClientGenerator {
        ClientGenerator::new(ClientGeneratorOptions::new())
    }

    fn assigned<'g>(class: &'g clientgen_core::graph::ClassDecl, property: &str) -> &'g Expression {
        let constructor = class.constructor.as_ref().unwrap();
        constructor
            .body
            .iter()
            .find_map(|statement| match statement {
                Statement::Assign {
                    target: Expression::Field { name, .. },
                    value,
                } if name == property => Some(value),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_dto_view() {
        let graph = generator().generate_client(&shop(), View::Dto).unwrap();
        assert_eq!(graph.namespaces.len(), 1);
        assert_eq!(graph.declaration_count(), 5);

        let order = graph.find("Shop", "Order").unwrap().as_interface().unwrap();
        assert_eq!(order.base.as_ref().unwrap().to_string(), "Shop.Entity");

        let names: Vec<&str> = order.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["version", "total", "note", "status", "lines", "tags", "customer"]
        );
        assert_eq!(
            order.field("lines").unwrap().ty.to_string(),
            "System.Array<Shop.Line>"
        );
        assert_eq!(order.field("customer").unwrap().ty.to_string(), "Shop.Customer");
        assert!(order.fields.iter().all(|f| !f.optional));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let generator = generator();
        let source = shop();
        assert_eq!(
            generator.generate_client(&source, View::Edit).unwrap(),
            generator.generate_client(&source, View::Edit).unwrap()
        );
        assert_eq!(
            generator.generate_views(&source).unwrap(),
            generator.generate_views(&source).unwrap()
        );
    }

    #[test]
    fn test_excluded_property_is_omitted_from_both_views() {
        let generator = ClientGenerator::new(
            ClientGeneratorOptions::new()
                .with_property_selector(|p: &PropertyDescriptor| {
                    if p.name == "note" {
                        ConversionDecision::Excluded
                    } else {
                        ConversionDecision::Required
                    }
                })
                .with_property_selector(|_: &PropertyDescriptor| ConversionDecision::Excluded),
        );
        let views = generator.generate_views(&shop()).unwrap();

        let dto = views.dto.find("Shop", "Order").unwrap().as_interface().unwrap();
        assert!(dto.field("note").is_none());
        assert!(dto.field("total").is_some());

        let edit = views.edit.find("Shop.Edit", "Order").unwrap().as_class().unwrap();
        assert!(edit.field("note").is_none());
        let assigns_note = |s: &Statement| {
            matches!(
                s,
                Statement::Assign {
                    target: Expression::Field { name, .. },
                    ..
                } if name == "note"
            )
        };
        assert!(!edit.constructor.as_ref().unwrap().body.iter().any(assigns_note));
    }

    #[test]
    fn test_optional_vote_wins_over_excluded() {
        let generator = ClientGenerator::new(
            ClientGeneratorOptions::new()
                .with_property_selector(|_: &PropertyDescriptor| ConversionDecision::Excluded)
                .with_property_selector(|p: &PropertyDescriptor| {
                    if p.member_path() == "Order.note" {
                        ConversionDecision::Optional
                    } else {
                        ConversionDecision::Excluded
                    }
                }),
        );
        let graph = generator.generate_client(&shop(), View::Dto).unwrap();

        let order = graph.find("Shop", "Order").unwrap().as_interface().unwrap();
        assert_eq!(order.fields.len(), 2);
        assert_eq!(order.fields[0].name, "version");
        assert_eq!(order.fields[1].name, "note");
        assert!(order.fields[1].optional);
    }

    #[test]
    fn test_enum_initializers_only_when_value_differs_from_position() {
        let graph = generator().generate_client(&shop(), View::Dto).unwrap();
        let status = graph.find("Shop", "Status").unwrap().as_enum().unwrap();
        let initializers: Vec<Option<i64>> = status.members.iter().map(|m| m.initializer).collect();
        assert_eq!(initializers, vec![None, None, Some(5)]);

        let sequential = TypeManifest::new("Shop").with_type(
            SourceType::enumeration("Shop", "Size")
                .with_constant("Small", 0)
                .with_constant("Medium", 1)
                .with_constant("Large", 2),
        );
        let graph = generator().generate_client(&sequential, View::Edit).unwrap();
        let size = graph.find("Shop", "Size").unwrap().as_enum().unwrap();
        assert!(size.members.iter().all(|m| m.initializer.is_none()));
    }

    #[test]
    fn test_generic_type_naming() {
        let source = TypeManifest::new("Shop").with_type(
            SourceType::class("Shop", "Box`1")
                .with_generic_parameters(&["T"])
                .with_property("value", TypeRef::generic_parameter("T"))
                .with_property("items", TypeRef::list_of(TypeRef::generic_parameter("T"))),
        );
        let views = generator().generate_views(&source).unwrap();

        let dto = views.dto.find("Shop", "Box").unwrap();
        assert_eq!(dto.name().to_string(), "Shop.Box<T>");

        let edit = views.edit.find("Shop", "BoxEdit").unwrap().as_class().unwrap();
        assert_eq!(edit.name.to_string(), "Shop.BoxEdit<T>");
        assert_eq!(
            edit.field("value").unwrap().ty.to_string(),
            "Observable<T>"
        );
        assert_eq!(
            edit.field("items").unwrap().ty.to_string(),
            "Observable<System.Collections.Generic.List<T>>"
        );
        assert!(matches!(
            assigned(edit, "items"),
            Expression::Wrap {
                wrapper: ReactiveWrapper::Collection,
                ..
            }
        ));
    }

    #[test]
    fn test_aggregate_collection_is_edit_wrapped() {
        let graph = generator().generate_client(&shop(), View::Edit).unwrap();
        let order = graph.find("Shop.Edit", "Order").unwrap().as_class().unwrap();

        assert_eq!(
            order.field("lines").unwrap().ty.to_string(),
            "ObservableArray<Shop.Edit.Line>"
        );
        assert_eq!(
            order.field("tags").unwrap().ty.to_string(),
            "ObservableArray<System.String>"
        );
        assert_eq!(
            order.field("customer").unwrap().ty,
            TypeReference::Named(clientgen_core::graph::TypeName::new(
                Some("Shop.Edit".to_string()),
                "Customer"
            ))
        );

        let Expression::Wrap { value, .. } = assigned(order, "lines") else {
            panic!("expected a reactive collection");
        };
        let Expression::And(_, factory) = value.as_ref() else {
            panic!("expected a guarded factory call");
        };
        assert!(matches!(
            factory.as_ref(),
            Expression::StaticCall { ty, method, .. }
                if ty.to_string() == "Shop.Edit.Line" && method == edit::CREATE_COLLECTION
        ));

        let line = graph.find("Shop.Edit", "Line").unwrap().as_class().unwrap();
        assert!(line.method(edit::CREATE_COLLECTION).is_some());
        assert!(order.method(edit::CREATE_COLLECTION).is_none());
    }

    #[test]
    fn test_generic_collection_element_gets_generic_factory() {
        let boxed = TypeRef::class("Shop", "Box`1")
            .with_generic_arguments(vec![TypeRef::primitive("Int32")]);
        let source = TypeManifest::new("Shop")
            .with_type(
                SourceType::class("Shop", "Box`1")
                    .with_generic_parameters(&["T"])
                    .with_property("value", TypeRef::generic_parameter("T")),
            )
            .with_type(
                SourceType::class("Shop", "Order").with_property("boxes", TypeRef::array_of(boxed)),
            );
        let graph = generator().generate_client(&source, View::Edit).unwrap();

        let edit = graph.find("Shop", "BoxEdit").unwrap().as_class().unwrap();
        let factory = edit.method(edit::CREATE_COLLECTION).unwrap();
        assert_eq!(factory.type_parameters, vec!["T".to_string()]);

        let order = graph.find("Shop.Edit", "Order").unwrap().as_class().unwrap();
        assert_eq!(
            order.field("boxes").unwrap().ty.to_string(),
            "ObservableArray<Shop.BoxEdit<System.Int32>>"
        );
    }

    #[test]
    fn test_interface_elements_have_no_factory() {
        let pricing = TypeRef::interface("Shop", "IPricing");
        let source = TypeManifest::new("Shop")
            .with_type(
                SourceType::interface("Shop", "IPricing")
                    .with_method(MethodDef::new("price", TypeRef::primitive("Decimal"))),
            )
            .with_type(
                SourceType::class("Shop", "Order")
                    .with_property("pricing", pricing.clone())
                    .with_property("rules", TypeRef::list_of(pricing)),
            );
        let graph = generator().generate_client(&source, View::Edit).unwrap();

        let surface = graph.find("Shop.Edit", "IPricing").unwrap().as_class().unwrap();
        assert!(surface.method(edit::CREATE_COLLECTION).is_none());

        let order = graph.find("Shop.Edit", "Order").unwrap().as_class().unwrap();
        assert_eq!(
            order.field("rules").unwrap().ty.to_string(),
            "ObservableArray<Shop.IPricing>"
        );
        assert_eq!(order.field("pricing").unwrap().ty.to_string(), "Observable<Shop.IPricing>");
        assert_eq!(
            assigned(order, "rules"),
            &Expression::wrap(ReactiveWrapper::Collection, edit::guard("rules"))
        );
    }

    #[test]
    fn test_every_assignment_is_guarded() {
        let graph = generator().generate_client(&shop(), View::Edit).unwrap();
        let order = graph.find("Shop.Edit", "Order").unwrap().as_class().unwrap();

        for field in &order.fields {
            let guard = edit::guard(&field.name);
            let guarded = match assigned(order, &field.name) {
                Expression::Wrap { value, .. } => match value.as_ref() {
                    Expression::And(lhs, _) if field.name == "lines" => **lhs == guard,
                    other => *other == guard,
                },
                Expression::New { arguments, .. } => arguments == &vec![guard],
                _ => false,
            };
            assert!(guarded, "{} is not guarded", field.name);
        }
    }

    #[test]
    fn test_base_link_and_super_call() {
        let graph = generator().generate_client(&shop(), View::Edit).unwrap();
        let order = graph.find("Shop.Edit", "Order").unwrap().as_class().unwrap();

        assert_eq!(order.base.as_ref().unwrap().to_string(), "Shop.Edit.Entity");
        let constructor = order.constructor.as_ref().unwrap();
        assert_eq!(
            constructor.base_arguments,
            vec![Expression::argument(edit::INITIAL_VALUE)]
        );
        assert_eq!(constructor.parameters[0].ty.to_string(), "Shop.Order");
        assert!(order.field("version").is_none());
    }

    #[test]
    fn test_dangling_base_is_omitted() {
        let generator = ClientGenerator::new(
            ClientGeneratorOptions::new()
                .with_type_selector(|ty: &SourceType| ty.type_ref().name != "Entity"),
        );
        let views = generator.generate_views(&shop()).unwrap();

        let dto = views.dto.find("Shop", "Order").unwrap().as_interface().unwrap();
        assert!(dto.base.is_none());

        let edit = views.edit.find("Shop.Edit", "Order").unwrap().as_class().unwrap();
        assert!(edit.base.is_none());
        assert!(edit.constructor.as_ref().unwrap().base_arguments.is_empty());
    }

    #[test]
    fn test_interface_surface() {
        let source = TypeManifest::new("Shop").with_type(
            SourceType::interface("Shop", "IPricing").with_method(
                MethodDef::new("price", TypeRef::primitive("Decimal"))
                    .with_parameter("line", TypeRef::class("Shop", "Line")),
            ),
        );
        let views = generator().generate_views(&source).unwrap();

        let dto = views.dto.find("Shop", "IPricing").unwrap().as_class().unwrap();
        assert!(dto.constructor.is_none());
        let price = dto.method("price").unwrap();
        assert!(price.body.is_none());
        assert_eq!(price.parameters[0].ty.to_string(), "Shop.Line");

        assert!(views.edit.find("Shop.Edit", "IPricing").is_some());
    }

    #[test]
    fn test_delegate_fails_the_run() {
        let source = shop().with_type(SourceType::new(TypeRef::new(
            TypeKind::Delegate,
            "Shop",
            "Callback",
        )));
        let result = generator().generate_views(&source);
        assert!(matches!(
            result,
            Err(ClientgenError::UnsupportedTypeKind {
                kind: TypeKind::Delegate,
                ..
            })
        ));
    }

    #[test]
    fn test_type_selectors_filter_types() {
        let source = shop().with_type(SourceType::class("Billing", "Invoice"));
        let generator = ClientGenerator::new(
            ClientGeneratorOptions::new().with_type_selector(NamespaceTypeSelector::new("Shop")),
        );

        let types = generator.load_types(&source).unwrap();
        assert_eq!(types.len(), 5);
        assert!(types.iter().all(|ty| ty.namespace() == Some("Shop")));
    }

    #[test]
    fn test_empty_module_name_is_rejected() {
        let source = TypeManifest::new("  ").with_type(SourceType::class("Shop", "Order"));
        let result = generator().generate_client(&source, View::Dto);
        assert!(matches!(result, Err(ClientgenError::InvalidArgument(_))));
    }

    #[test]
    fn test_invalid_naming_is_rejected() {
        let generator = ClientGenerator::new(ClientGeneratorOptions::new().with_naming(
            NamingConfig {
                edit_namespace: String::new(),
                ..Default::default()
            },
        ));
        let result = generator.generate_views(&shop());
        assert!(matches!(result, Err(ClientgenError::InvalidArgument(_))));
    }

    #[test]
    fn test_generate_into_appends() {
        let generator = generator();
        let source = shop();
        let dto = generator.generate_client(&source, View::Dto).unwrap();
        let both = generator
            .generate_client_into(&source, View::Edit, dto)
            .unwrap();

        let names: Vec<&str> = both.namespaces.iter().map(|ns| ns.name.as_str()).collect();
        assert_eq!(names, vec!["Shop", "Shop.Edit"]);
        assert_eq!(both.declaration_count(), 10);
    }

    #[test]
    fn test_resolve_names() {
        let generator = generator();
        let types = generator.load_types(&shop()).unwrap();
        let pairs = generator.resolve_names(&types);

        assert_eq!(pairs[0].edit.to_string(), "Shop.Status");
        assert_eq!(pairs[3].edit.to_string(), "Shop.Edit.Order");
    }

    #[test]
    fn test_generator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClientGenerator>();
    }

    #[test]
    fn test_declarations_keep_source_order() {
        let graph = generator().generate_client(&shop(), View::Edit).unwrap();
        let names: Vec<String> = graph
            .declarations()
            .map(|d: &Declaration| d.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "Shop.Status",
                "Shop.Edit.Line",
                "Shop.Edit.Entity",
                "Shop.Edit.Order",
                "Shop.Edit.Customer"
            ]
        );
    }
}
