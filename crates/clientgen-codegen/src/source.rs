use clientgen_core::schema::SourceType;
use clientgen_core::Result;

/// Read-only provider of the types to translate.
///
/// Implementations must be deterministic: two calls return the same types
/// in the same order. Type selectors are applied by the caller.
pub trait TypeSource {
    /// Name of the module the types were read from.
    fn module_name(&self) -> &str;

    /// All candidate types of the module.
    fn fetch_types(&self) -> Result<Vec<SourceType>>;
}
