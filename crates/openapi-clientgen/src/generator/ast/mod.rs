mod literals;
mod operations;
mod types;

pub use literals::{DefaultLiteral, EnumLiteral, LiteralKind};
pub use operations::{Container, OperationDescriptor, ParameterDescriptor};
pub use types::{
  AliasType, ClassType, Constraints, EnumMember, EnumType, NamespaceNode, PrimitiveCode, PropertyNode, QualifiedName,
  TypeNode, TypeRef,
};
