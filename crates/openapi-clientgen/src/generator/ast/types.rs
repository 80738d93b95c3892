use std::fmt;

use serde::Serialize;
use strum::Display;

use super::literals::{DefaultLiteral, EnumLiteral};

/// Language-neutral primitive codes an emitter maps to its own built-in types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum PrimitiveCode {
  String,
  Int32,
  Int64,
  Float32,
  Float64,
  Bool,
  DateTime,
  Date,
  Binary,
  Uuid,
  Object,
}

impl PrimitiveCode {
  /// Codes that emitters represent with a non-nullable value type.
  pub const fn is_value_type(self) -> bool {
    matches!(
      self,
      Self::Int32 | Self::Int64 | Self::Float32 | Self::Float64 | Self::Bool | Self::DateTime | Self::Date | Self::Uuid
    )
  }
}

/// Identity of a declared type. Unique across the whole graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct QualifiedName {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub namespace: Option<String>,
  pub name: String,
}

impl QualifiedName {
  pub fn new(namespace: Option<String>, name: impl Into<String>) -> Self {
    Self {
      namespace,
      name: name.into(),
    }
  }

  pub fn root(name: impl Into<String>) -> Self {
    Self::new(None, name)
  }
}

impl fmt::Display for QualifiedName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.namespace {
      Some(namespace) => write!(f, "{namespace}.{}", self.name),
      None => f.write_str(&self.name),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "camelCase")]
pub enum TypeRef {
  NamedType(QualifiedName),
  Primitive(PrimitiveCode),
  ArrayOf(Box<TypeRef>, u8),
  MapOf(Box<TypeRef>),
  Unresolved,
}

impl TypeRef {
  pub fn named(name: QualifiedName) -> Self {
    Self::NamedType(name)
  }

  /// Wraps `item` in one more array dimension, flattening nested arrays into a rank.
  pub fn array_of(item: TypeRef) -> Self {
    match item {
      Self::ArrayOf(inner, rank) => Self::ArrayOf(inner, rank.saturating_add(1)),
      other => Self::ArrayOf(Box::new(other), 1),
    }
  }

  pub fn map_of(value: TypeRef) -> Self {
    Self::MapOf(Box::new(value))
  }

  pub fn as_named(&self) -> Option<&QualifiedName> {
    match self {
      Self::NamedType(name) => Some(name),
      _ => None,
    }
  }

  /// Rewrites every named reference for which `replace` yields a substitute.
  /// Substitutes are inserted as-is and not visited again.
  pub fn substitute<F>(&self, replace: &F) -> TypeRef
  where
    F: Fn(&QualifiedName) -> Option<TypeRef>,
  {
    match self {
      Self::NamedType(name) => replace(name).unwrap_or_else(|| self.clone()),
      Self::ArrayOf(item, rank) => {
        let mut result = item.substitute(replace);
        for _ in 0..*rank {
          result = Self::array_of(result);
        }
        result
      }
      Self::MapOf(value) => Self::map_of(value.substitute(replace)),
      Self::Primitive(_) | Self::Unresolved => self.clone(),
    }
  }
}

impl From<PrimitiveCode> for TypeRef {
  fn from(code: PrimitiveCode) -> Self {
    Self::Primitive(code)
  }
}

/// Renders the alias expression form, e.g. `SomeObject[]` or `int64`.
impl fmt::Display for TypeRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::NamedType(name) => write!(f, "{name}"),
      Self::Primitive(code) => write!(f, "{code}"),
      Self::ArrayOf(item, rank) => {
        write!(f, "{item}")?;
        for _ in 0..*rank {
          f.write_str("[]")?;
        }
        Ok(())
      }
      Self::MapOf(value) => write!(f, "map<string, {value}>"),
      Self::Unresolved => f.write_str("any"),
    }
  }
}

/// Validation constraints carried to the emitter when decorations are enabled.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub min_length: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub max_length: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub minimum: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub maximum: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub min_items: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub max_items: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pattern: Option<String>,
}

impl Constraints {
  pub fn is_empty(&self) -> bool {
    *self == Self::default()
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyNode {
  pub name: String,
  pub original_name: String,
  pub type_ref: TypeRef,
  pub is_required: bool,
  pub is_nullable_value: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub default_literal: Option<DefaultLiteral>,
  #[serde(skip_serializing_if = "Constraints::is_empty")]
  pub constraints: Constraints,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub doc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassType {
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub namespace: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub base_type_name: Option<QualifiedName>,
  pub properties: Vec<PropertyNode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub doc: Option<String>,
  pub is_casual: bool,
}

impl ClassType {
  pub fn property(&self, original_name: &str) -> Option<&PropertyNode> {
    self.properties.iter().find(|p| p.original_name == original_name)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumMember {
  pub name: String,
  pub ordinal: usize,
  pub literal: EnumLiteral,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub doc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumType {
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub namespace: Option<String>,
  pub members: Vec<EnumMember>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub doc: Option<String>,
  pub is_casual: bool,
}

impl EnumType {
  pub fn member_for(&self, literal: &serde_json::Value) -> Option<&EnumMember> {
    self.members.iter().find(|member| member.literal.matches(literal))
  }
}

/// A declaration in the resolved graph. Aliases are kept in the alias table instead,
/// since they are substituted wherever referenced and never declared.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeNode {
  Class(ClassType),
  Enum(EnumType),
}

impl TypeNode {
  pub fn name(&self) -> &str {
    match self {
      Self::Class(class) => &class.name,
      Self::Enum(enum_type) => &enum_type.name,
    }
  }

  pub fn namespace(&self) -> Option<&str> {
    match self {
      Self::Class(class) => class.namespace.as_deref(),
      Self::Enum(enum_type) => enum_type.namespace.as_deref(),
    }
  }

  pub fn qualified_name(&self) -> QualifiedName {
    QualifiedName::new(self.namespace().map(ToString::to_string), self.name())
  }

  pub fn as_class(&self) -> Option<&ClassType> {
    match self {
      Self::Class(class) => Some(class),
      Self::Enum(_) => None,
    }
  }

  pub fn as_enum(&self) -> Option<&EnumType> {
    match self {
      Self::Enum(enum_type) => Some(enum_type),
      Self::Class(_) => None,
    }
  }
}

/// A schema key that materializes no declaration of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasType {
  pub name: String,
  pub target: TypeRef,
  pub target_expression: String,
}

impl AliasType {
  pub fn new(name: impl Into<String>, target: TypeRef) -> Self {
    let target_expression = target.to_string();
    Self {
      name: name.into(),
      target,
      target_expression,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamespaceNode {
  pub name: String,
  pub types: Vec<TypeNode>,
}

impl NamespaceNode {
  pub fn find(&self, name: &str) -> Option<&TypeNode> {
    self.types.iter().find(|node| node.name() == name)
  }
}
