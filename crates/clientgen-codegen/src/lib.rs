//! Translation engine turning source type snapshots into DTO and Edit
//! declaration graphs, plus the TypeScript printer for those graphs.

pub mod generator;
pub mod manifest;
pub mod resolver;
pub mod source;
pub mod typescript;

pub use generator::{ClientGenerator, ClientViews, View};
pub use manifest::{ManifestTypeSource, TypeManifest};
pub use resolver::TypeNameResolver;
pub use source::TypeSource;
pub use typescript::{PrinterOptions, TypeScriptPrinter};
