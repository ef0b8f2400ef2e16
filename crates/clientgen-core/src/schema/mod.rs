mod field;
mod function;
mod source;
mod types;

pub use field::{FieldDef, PropertyDef, PropertyDescriptor};
pub use function::{MethodDef, ParameterDef};
pub use source::{EnumConstant, SourceType};
pub use types::{TypeKey, TypeKind, TypeRef, COLLECTIONS_NAMESPACE, SYSTEM_NAMESPACE};
