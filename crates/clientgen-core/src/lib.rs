//! Source type model, selectors and declaration graph for clientgen.
//!
//! This crate holds the data shared by the translation engine and its
//! collaborators. It performs no translation itself.

pub mod config;
pub mod error;
pub mod graph;
pub mod options;
pub mod schema;
pub mod selector;

pub use config::ClientgenConfig;
pub use error::{ClientgenError, Result};
pub use graph::DeclarationGraph;
pub use options::ClientGeneratorOptions;
pub use schema::{SourceType, TypeKind, TypeRef};
pub use selector::{ConversionDecision, PropertySelector, TypeSelector};
