use serde::Serialize;
use serde_json::Value;
use strum::Display;

/// The JSON kind of a raw literal, used to report literals that have no representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum LiteralKind {
  Null,
  Boolean,
  Integer,
  #[strum(to_string = "unsigned 64-bit integer")]
  LargeInteger,
  Float,
  String,
  Array,
  Object,
}

impl LiteralKind {
  pub fn of(value: &Value) -> Self {
    match value {
      Value::Null => Self::Null,
      Value::Bool(_) => Self::Boolean,
      Value::Number(number) if number.is_f64() => Self::Float,
      Value::Number(number) if number.is_i64() => Self::Integer,
      Value::Number(_) => Self::LargeInteger,
      Value::String(_) => Self::String,
      Value::Array(_) => Self::Array,
      Value::Object(_) => Self::Object,
    }
  }
}

/// Source value of an enum member. The set of supported kinds is closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum EnumLiteral {
  String(String),
  Integer(i32),
  Long(i64),
  Password(String),
}

impl EnumLiteral {
  /// Classifies a raw `enum` entry. String entries of a `password`-formatted schema are
  /// kept apart so emitters can mask them; integers are `Long` under `int64` or when they
  /// do not fit 32 bits.
  pub fn from_value(value: &Value, format: Option<&str>) -> Result<Self, LiteralKind> {
    match value {
      Value::String(text) if format == Some("password") => Ok(Self::Password(text.clone())),
      Value::String(text) => Ok(Self::String(text.clone())),
      Value::Number(number) => match number.as_i64() {
        Some(long) if format == Some("int64") => Ok(Self::Long(long)),
        Some(long) => Ok(i32::try_from(long).map_or(Self::Long(long), Self::Integer)),
        None => Err(LiteralKind::of(value)),
      },
      other => Err(LiteralKind::of(other)),
    }
  }

  /// Raw text a member name is derived from. Numeric members are prefixed with `_`.
  pub fn member_source(&self) -> String {
    match self {
      Self::String(text) | Self::Password(text) => text.clone(),
      Self::Integer(int) => format!("_{int}"),
      Self::Long(long) => format!("_{long}"),
    }
  }

  pub fn matches(&self, value: &Value) -> bool {
    match (self, value) {
      (Self::String(text) | Self::Password(text), Value::String(other)) => text == other,
      (Self::Integer(int), Value::Number(number)) => number.as_i64() == Some(i64::from(*int)),
      (Self::Long(long), Value::Number(number)) => number.as_i64() == Some(*long),
      _ => false,
    }
  }
}

/// A language-neutral default value descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum DefaultLiteral {
  String(String),
  Int(i32),
  Long(i64),
  Bool(bool),
  Float(f32),
  Double(f64),
  EnumMember(String),
}
