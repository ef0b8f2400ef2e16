//! TypeScript printer for declaration graphs.
//!
//! The DTO graph is printed in ambient mode (`declare namespace`, for a
//! `.d.ts` file). The Edit graph is printed as regular TypeScript and
//! references the DTO declarations with a triple-slash directive.

mod mapping;

pub use mapping::{type_name, type_reference};

use clientgen_core::config::{OutputConfig, ReactiveConfig};
use clientgen_core::graph::{
    ClassDecl, Constructor, Declaration, DeclarationGraph, EnumDecl, Expression, InterfaceDecl,
    MethodDecl, Namespace, Parameter, ReactiveWrapper, Statement, TypeName, TypeReference,
};

/// First line of every generated file.
pub const HEADER: &str = "// Auto-generated by clientgen - DO NOT EDIT";

/// Printer settings.
#[derive(Debug, Clone)]
pub struct PrinterOptions {
    /// Indentation unit.
    pub indent: String,
    /// Print `declare namespace` and bodiless members.
    pub ambient: bool,
    /// Reactive container names.
    pub reactive: ReactiveConfig,
    /// Paths emitted as `/// <reference path="..." />` directives.
    pub references: Vec<String>,
    /// Print enum declarations. Off when a referenced file already declares them.
    pub enums: bool,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            ambient: false,
            reactive: ReactiveConfig::default(),
            references: Vec::new(),
            enums: true,
        }
    }
}

impl PrinterOptions {
    pub fn from_output(output: &OutputConfig) -> Self {
        Self {
            indent: output.indent.clone(),
            reactive: output.reactive.clone(),
            ..Default::default()
        }
    }

    pub fn with_ambient(mut self, ambient: bool) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_reference(mut self, path: impl Into<String>) -> Self {
        self.references.push(path.into());
        self
    }

    pub fn with_enums(mut self, enums: bool) -> Self {
        self.enums = enums;
        self
    }
}

/// Renders a [`DeclarationGraph`] as TypeScript source.
#[derive(Debug, Clone, Default)]
pub struct TypeScriptPrinter {
    options: PrinterOptions,
}

impl TypeScriptPrinter {
    pub fn new(options: PrinterOptions) -> Self {
        Self { options }
    }

    pub fn print(&self, graph: &DeclarationGraph) -> String {
        let mut writer = CodeWriter::new(&self.options.indent);
        writer.line(HEADER);
        for reference in &self.options.references {
            writer.line(&format!("/// <reference path=\"{}\" />", reference));
        }

        for namespace in &graph.namespaces {
            let declarations: Vec<&Declaration> = namespace
                .declarations
                .iter()
                .filter(|d| self.options.enums || !matches!(d, Declaration::Enum(_)))
                .collect();
            if declarations.is_empty() {
                continue;
            }

            writer.blank();
            self.print_namespace(&mut writer, namespace, &declarations);
        }

        writer.finish()
    }

    fn print_namespace(
        &self,
        w: &mut CodeWriter,
        namespace: &Namespace,
        declarations: &[&Declaration],
    ) {
        if namespace.is_global() {
            self.print_declarations(w, declarations);
            return;
        }

        let keyword = if self.options.ambient {
            "declare namespace"
        } else {
            "namespace"
        };
        w.open(&format!("{} {}", keyword, namespace.name));
        self.print_declarations(w, declarations);
        w.close();
    }

    fn print_declarations(&self, w: &mut CodeWriter, declarations: &[&Declaration]) {
        for (index, declaration) in declarations.iter().enumerate() {
            if index > 0 {
                w.blank();
            }
            match declaration {
                Declaration::Interface(decl) => self.print_interface(w, decl),
                Declaration::Class(decl) => self.print_class(w, decl),
                Declaration::Enum(decl) => self.print_enum(w, decl),
            }
        }
    }

    fn print_interface(&self, w: &mut CodeWriter, decl: &InterfaceDecl) {
        let mut header = format!(
            "export interface {}",
            mapping::declared_name(&decl.name, &self.options.reactive)
        );
        if let Some(base) = &decl.base {
            header.push_str(&format!(" extends {}", self.type_name(base)));
        }

        w.open(&header);
        for field in &decl.fields {
            let marker = if field.optional { "?" } else { "" };
            w.line(&format!(
                "{}{}: {};",
                field.name,
                marker,
                self.type_reference(&field.ty)
            ));
        }
        w.close();
    }

    fn print_class(&self, w: &mut CodeWriter, decl: &ClassDecl) {
        let is_surface =
            decl.constructor.is_none() && decl.methods.iter().all(|m| m.body.is_none());
        let keyword = if is_surface && !self.options.ambient {
            "export declare class"
        } else {
            "export class"
        };

        let mut header = format!(
            "{} {}",
            keyword,
            mapping::declared_name(&decl.name, &self.options.reactive)
        );
        if let Some(base) = &decl.base {
            header.push_str(&format!(" extends {}", self.type_name(base)));
        }

        w.open(&header);
        for field in &decl.fields {
            let visibility = if field.is_public { "public " } else { "" };
            let marker = if field.optional { "?" } else { "" };
            w.line(&format!(
                "{}{}{}: {};",
                visibility,
                field.name,
                marker,
                self.type_reference(&field.ty)
            ));
        }

        if let Some(constructor) = &decl.constructor {
            if !decl.fields.is_empty() {
                w.blank();
            }
            self.print_constructor(w, constructor);
        }

        for method in &decl.methods {
            if !decl.fields.is_empty() || decl.constructor.is_some() {
                w.blank();
            }
            self.print_method(w, method);
        }
        w.close();
    }

    fn print_constructor(&self, w: &mut CodeWriter, constructor: &Constructor) {
        // Seeding value is optional; the body guards every access.
        let parameters: Vec<String> = constructor
            .parameters
            .iter()
            .map(|p| format!("{}?: {}", p.name, self.type_reference(&p.ty)))
            .collect();
        let signature = format!("constructor({})", parameters.join(", "));

        if self.options.ambient {
            w.line(&format!("{};", signature));
            return;
        }

        w.open(&signature);
        if !constructor.base_arguments.is_empty() {
            w.line(&format!(
                "super({});",
                self.arguments(&constructor.base_arguments)
            ));
        }
        for statement in &constructor.body {
            w.line(&self.statement(statement));
        }
        w.close();
    }

    fn print_method(&self, w: &mut CodeWriter, method: &MethodDecl) {
        let modifier = if method.is_static { "static " } else { "" };
        let type_parameters = if method.type_parameters.is_empty() {
            String::new()
        } else {
            format!("<{}>", method.type_parameters.join(", "))
        };
        let signature = format!(
            "{}{}{}({}): {}",
            modifier,
            method.name,
            type_parameters,
            self.parameters(&method.parameters),
            self.type_reference(&method.return_type)
        );

        match &method.body {
            Some(body) if !self.options.ambient => {
                w.open(&signature);
                for statement in body {
                    w.line(&self.statement(statement));
                }
                w.close();
            }
            _ => w.line(&format!("{};", signature)),
        }
    }

    fn print_enum(&self, w: &mut CodeWriter, decl: &EnumDecl) {
        w.open(&format!("export enum {}", decl.name.name));
        let count = decl.members.len();
        for (index, member) in decl.members.iter().enumerate() {
            let separator = if index + 1 < count { "," } else { "" };
            match member.initializer {
                Some(value) => w.line(&format!("{} = {}{}", member.name, value, separator)),
                None => w.line(&format!("{}{}", member.name, separator)),
            }
        }
        w.close();
    }

    fn parameters(&self, parameters: &[Parameter]) -> String {
        parameters
            .iter()
            .map(|p| format!("{}: {}", p.name, self.type_reference(&p.ty)))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn statement(&self, statement: &Statement) -> String {
        match statement {
            Statement::Assign { target, value } => {
                format!("{} = {};", self.expression(target), self.expression(value))
            }
            Statement::Return(value) => format!("return {};", self.expression(value)),
        }
    }

    fn expression(&self, expression: &Expression) -> String {
        match expression {
            Expression::This => "this".to_string(),
            Expression::Argument(name) => name.clone(),
            Expression::Field { target, name } => format!("{}.{}", self.expression(target), name),
            Expression::And(lhs, rhs) => {
                format!("{} && {}", self.expression(lhs), self.expression(rhs))
            }
            Expression::New { ty, arguments } => {
                format!("new {}({})", self.type_name(ty), self.arguments(arguments))
            }
            Expression::Wrap { wrapper, value } => {
                let factory = match wrapper {
                    ReactiveWrapper::Scalar => &self.options.reactive.scalar_factory,
                    ReactiveWrapper::Collection => &self.options.reactive.collection_factory,
                };
                format!("{}({})", factory, self.expression(value))
            }
            Expression::StaticCall {
                ty,
                method,
                arguments,
            } => format!(
                "{}.{}({})",
                ty.qualified_base(),
                method,
                self.arguments(arguments)
            ),
            Expression::Call {
                target,
                method,
                arguments,
            } => format!(
                "{}.{}({})",
                self.expression(target),
                method,
                self.arguments(arguments)
            ),
            Expression::Lambda { parameter, body } => {
                format!("{} => {}", parameter, self.expression(body))
            }
        }
    }

    fn arguments(&self, arguments: &[Expression]) -> String {
        arguments
            .iter()
            .map(|argument| self.expression(argument))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn type_name(&self, name: &TypeName) -> String {
        mapping::type_name(name, &self.options.reactive)
    }

    fn type_reference(&self, ty: &TypeReference) -> String {
        mapping::type_reference(ty, &self.options.reactive)
    }
}

/// Line buffer with block indentation.
struct CodeWriter<'a> {
    unit: &'a str,
    level: usize,
    out: String,
}

impl<'a> CodeWriter<'a> {
    fn new(unit: &'a str) -> Self {
        Self {
            unit,
            level: 0,
            out: String::new(),
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.level {
            self.out.push_str(self.unit);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn open(&mut self, header: &str) {
        self.line(&format!("{} {{", header));
        self.level += 1;
    }

    fn close(&mut self) {
        self.level = self.level.saturating_sub(1);
        self.line("}");
    }

    fn finish(self) -> String {
        self.out
    }
}
