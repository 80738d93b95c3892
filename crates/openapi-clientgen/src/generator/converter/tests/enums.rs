use serde_json::json;

use super::support::{class, enum_type, find_type, has_warning, resolve_schemas};
use crate::generator::{
  ast::{EnumLiteral, LiteralKind, TypeRef},
  converter::ResolvedTypes,
  metrics::GenerationWarning,
};

fn members(resolved: &ResolvedTypes, name: &str) -> Vec<(String, usize)> {
  enum_type(resolved, name)
    .members
    .iter()
    .map(|member| (member.name.clone(), member.ordinal))
    .collect()
}

#[test]
fn test_phone_type_members_in_source_order() {
  let resolved = resolve_schemas(json!({
    "PhoneType": { "type": "string", "enum": ["Tel", "Mobile", "Skype", "Fax"] }
  }));

  assert_eq!(
    members(&resolved, "PhoneType"),
    vec![
      ("Tel".to_string(), 0),
      ("Mobile".to_string(), 1),
      ("Skype".to_string(), 2),
      ("Fax".to_string(), 3),
    ]
  );
  assert!(!enum_type(&resolved, "PhoneType").is_casual);
}

#[test]
fn test_integer_members_are_prefixed() {
  let resolved = resolve_schemas(json!({
    "IntType": { "type": "integer", "enum": [1, 2, 3] },
    "Big": { "type": "integer", "format": "int64", "enum": [1, 5000000000_i64] }
  }));

  assert_eq!(
    members(&resolved, "IntType"),
    vec![("_1".to_string(), 0), ("_2".to_string(), 1), ("_3".to_string(), 2)]
  );
  assert_eq!(enum_type(&resolved, "IntType").members[0].literal, EnumLiteral::Integer(1));

  let big = enum_type(&resolved, "Big");
  assert_eq!(big.members[0].literal, EnumLiteral::Long(1));
  assert_eq!(big.members[1].literal, EnumLiteral::Long(5_000_000_000));
  assert_eq!(big.members[1].name, "_5000000000");
}

#[test]
fn test_password_format_members() {
  let resolved = resolve_schemas(json!({
    "Secret": { "type": "string", "format": "password", "enum": ["hunter2"] }
  }));
  assert_eq!(
    enum_type(&resolved, "Secret").members[0].literal,
    EnumLiteral::Password("hunter2".to_string())
  );
}

#[test]
fn test_null_entries_produce_no_member() {
  let resolved = resolve_schemas(json!({
    "Status": { "type": "string", "nullable": true, "enum": ["on", null, "off"] }
  }));
  assert_eq!(
    members(&resolved, "Status"),
    vec![("on".to_string(), 0), ("off".to_string(), 1)]
  );
}

#[test]
fn test_member_names_are_sanitized_and_unique() {
  let resolved = resolve_schemas(json!({
    "Sort": {
      "type": "string",
      "enum": ["created-at", "created_at", "class", "9lives"],
      "x-enum-descriptions": ["Creation time", "Creation time again", "Class", "Cats"]
    }
  }));

  let sort = enum_type(&resolved, "Sort");
  let names = sort.members.iter().map(|m| m.name.as_str()).collect::<Vec<_>>();
  assert_eq!(names, vec!["created_at", "created_at2", "_class", "_9lives"]);
  assert_eq!(sort.members[1].doc.as_deref(), Some("Creation time again"));
}

#[test]
fn test_unsupported_literal_skips_enum() {
  let resolved = resolve_schemas(json!({
    "Ratio": { "type": "number", "enum": [0.5, 1.5] },
    "Flag": { "type": "boolean", "enum": [true] }
  }));

  assert!(find_type(&resolved, "Ratio").is_none());
  assert!(find_type(&resolved, "Flag").is_none());
  assert!(has_warning(&resolved, |w| matches!(
    w,
    GenerationWarning::UnsupportedEnumMemberLiteral { type_name, literal_kind: LiteralKind::Float } if type_name == "Ratio"
  )));
  assert!(has_warning(&resolved, |w| matches!(
    w,
    GenerationWarning::UnsupportedEnumMemberLiteral { literal_kind: LiteralKind::Boolean, .. }
  )));
  assert_eq!(resolved.stats.skipped_count(), 2);
}

#[test]
fn test_property_referencing_skipped_enum_falls_back_to_any() {
  let resolved = resolve_schemas(json!({
    "Holder": { "properties": { "ratio": { "$ref": "#/components/schemas/Ratio" } } },
    "Ratio": { "type": "number", "enum": [0.5] }
  }));

  let holder = class(&resolved, "Holder");
  assert_eq!(holder.properties[0].type_ref, TypeRef::Unresolved);
}
