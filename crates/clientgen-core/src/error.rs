use thiserror::Error;

use crate::schema::TypeKind;

/// Core error type for client generation.
///
/// Only invalid input and unsupported type kinds abort a translation run.
/// Unresolvable generic elements and dangling base types are absorbed where
/// they occur and never surface here.
#[derive(Error, Debug)]
pub enum ClientgenError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unable to create type declaration for {type_name}: {kind} types are not supported")]
    UnsupportedTypeKind { type_name: String, kind: TypeKind },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ClientgenError {
    fn from(e: serde_json::Error) -> Self {
        ClientgenError::Manifest(e.to_string())
    }
}

/// Result type alias using ClientgenError.
pub type Result<T> = std::result::Result<T, ClientgenError>;
