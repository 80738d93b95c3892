use crate::{document::SchemaType, generator::ast::PrimitiveCode};

/// String formats that carry no type information beyond "string".
const PLAIN_STRING_FORMATS: &[&str] = &[
  "password",
  "email",
  "idn-email",
  "uri",
  "uri-reference",
  "iri",
  "url",
  "hostname",
  "idn-hostname",
  "ipv4",
  "ipv6",
  "time",
  "duration",
  "regex",
  "json-pointer",
];

/// Maps a `(type, format)` pair to a primitive code.
///
/// Returns `None` when the pair has no mapping; the caller falls back to
/// [`PrimitiveCode::Object`] and records a diagnostic.
pub(crate) fn map_primitive(schema_type: &SchemaType, format: Option<&str>) -> Option<PrimitiveCode> {
  let code = match (schema_type, format) {
    (SchemaType::String, None) => PrimitiveCode::String,
    (SchemaType::String, Some("date-time")) => PrimitiveCode::DateTime,
    (SchemaType::String, Some("date")) => PrimitiveCode::Date,
    (SchemaType::String, Some("byte" | "binary")) => PrimitiveCode::Binary,
    (SchemaType::String, Some("uuid")) => PrimitiveCode::Uuid,
    (SchemaType::String, Some(format)) if PLAIN_STRING_FORMATS.contains(&format) => PrimitiveCode::String,
    (SchemaType::Integer, None | Some("int32" | "int16" | "int8")) => PrimitiveCode::Int32,
    (SchemaType::Integer, Some("int64")) => PrimitiveCode::Int64,
    (SchemaType::Number, None | Some("double")) => PrimitiveCode::Float64,
    (SchemaType::Number, Some("float")) => PrimitiveCode::Float32,
    (SchemaType::Boolean, None) => PrimitiveCode::Bool,
    (SchemaType::Object, _) => PrimitiveCode::Object,
    _ => return None,
  };
  Some(code)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mapping_table() {
    let cases = [
      (SchemaType::String, None, PrimitiveCode::String),
      (SchemaType::String, Some("date-time"), PrimitiveCode::DateTime),
      (SchemaType::String, Some("date"), PrimitiveCode::Date),
      (SchemaType::String, Some("byte"), PrimitiveCode::Binary),
      (SchemaType::String, Some("binary"), PrimitiveCode::Binary),
      (SchemaType::String, Some("uuid"), PrimitiveCode::Uuid),
      (SchemaType::String, Some("password"), PrimitiveCode::String),
      (SchemaType::String, Some("email"), PrimitiveCode::String),
      (SchemaType::Integer, None, PrimitiveCode::Int32),
      (SchemaType::Integer, Some("int32"), PrimitiveCode::Int32),
      (SchemaType::Integer, Some("int64"), PrimitiveCode::Int64),
      (SchemaType::Number, None, PrimitiveCode::Float64),
      (SchemaType::Number, Some("float"), PrimitiveCode::Float32),
      (SchemaType::Number, Some("double"), PrimitiveCode::Float64),
      (SchemaType::Boolean, None, PrimitiveCode::Bool),
      (SchemaType::Object, None, PrimitiveCode::Object),
    ];
    for (schema_type, format, expected) in cases {
      assert_eq!(
        map_primitive(&schema_type, format),
        Some(expected),
        "failed for {schema_type:?}/{format:?}"
      );
    }
  }

  #[test]
  fn test_unmapped_combinations() {
    assert_eq!(map_primitive(&SchemaType::String, Some("markdown-ish")), None);
    assert_eq!(map_primitive(&SchemaType::Integer, Some("uint128")), None);
    assert_eq!(map_primitive(&SchemaType::Boolean, Some("flag")), None);
    assert_eq!(map_primitive(&SchemaType::Null, None), None);
    assert_eq!(map_primitive(&SchemaType::Other("file".to_string()), None), None);
  }

  #[test]
  fn test_value_types() {
    assert!(PrimitiveCode::Int32.is_value_type());
    assert!(PrimitiveCode::DateTime.is_value_type());
    assert!(PrimitiveCode::Bool.is_value_type());
    assert!(!PrimitiveCode::String.is_value_type());
    assert!(!PrimitiveCode::Binary.is_value_type());
    assert!(!PrimitiveCode::Object.is_value_type());
  }
}
