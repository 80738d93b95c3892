use serde_json::Value;

use crate::{
  document::Schema,
  generator::{
    ast::{Constraints, DefaultLiteral, EnumType, LiteralKind, PrimitiveCode, TypeRef},
    naming::{NameContext, sanitize},
  },
};

/// Converts a `default` keyword into a literal matching the resolved property type.
///
/// A default on an enum-typed property names a member: the member whose literal matches,
/// or the sanitized string itself. `null` means "no default". `Err` carries the reason a
/// default was dropped.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn default_literal(
  value: &Value,
  type_ref: &TypeRef,
  enum_type: Option<&EnumType>,
) -> Result<Option<DefaultLiteral>, String> {
  if value.is_null() {
    return Ok(None);
  }

  if let Some(enum_type) = enum_type {
    if let Some(member) = enum_type.member_for(value) {
      return Ok(Some(DefaultLiteral::EnumMember(member.name.clone())));
    }
    return match value {
      Value::String(text) => Ok(Some(DefaultLiteral::EnumMember(sanitize(text, NameContext::EnumMember)))),
      other => Err(format!("'{other}' is not a member of enum '{}'", enum_type.name)),
    };
  }

  let literal = match (value, type_ref) {
    (Value::String(text), _) => DefaultLiteral::String(text.clone()),
    (Value::Bool(flag), _) => DefaultLiteral::Bool(*flag),
    (Value::Number(number), TypeRef::Primitive(PrimitiveCode::Float32)) => match number.as_f64() {
      Some(float) => DefaultLiteral::Float(float as f32),
      None => return Err(unsupported(value)),
    },
    (Value::Number(number), TypeRef::Primitive(PrimitiveCode::Float64)) => match number.as_f64() {
      Some(double) => DefaultLiteral::Double(double),
      None => return Err(unsupported(value)),
    },
    (Value::Number(number), TypeRef::Primitive(PrimitiveCode::Int64)) => match number.as_i64() {
      Some(long) => DefaultLiteral::Long(long),
      None => return Err(unsupported(value)),
    },
    (Value::Number(number), _) => {
      if let Some(long) = number.as_i64() {
        i32::try_from(long).map_or(DefaultLiteral::Long(long), DefaultLiteral::Int)
      } else if number.is_f64() {
        DefaultLiteral::Double(number.as_f64().unwrap_or_default())
      } else {
        return Err(unsupported(value));
      }
    }
    (other, _) => return Err(unsupported(other)),
  };

  Ok(Some(literal))
}

fn unsupported(value: &Value) -> String {
  format!("{} defaults are not supported", LiteralKind::of(value))
}

pub(crate) fn constraints(schema: &Schema) -> Constraints {
  Constraints {
    min_length: schema.min_length,
    max_length: schema.max_length,
    minimum: schema.minimum,
    maximum: schema.maximum,
    min_items: schema.min_items,
    max_items: schema.max_items,
    pattern: schema.pattern.clone(),
  }
}
