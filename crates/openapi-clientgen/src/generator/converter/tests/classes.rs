use serde_json::json;

use super::support::{class, has_warning, resolve_schemas, type_count};
use crate::generator::{
  ast::{PrimitiveCode, QualifiedName, TypeRef},
  metrics::GenerationWarning,
};

#[test]
fn test_pet_class_with_optional_properties() {
  let resolved = resolve_schemas(json!({
    "Pet": {
      "properties": {
        "name": { "type": "string" },
        "petType": { "type": "string" },
        "BirthDateTime": { "type": "string", "format": "date-time" }
      }
    }
  }));

  let pet = class(&resolved, "Pet");
  let properties = pet
    .properties
    .iter()
    .map(|p| (p.name.as_str(), p.type_ref.clone(), p.is_required))
    .collect::<Vec<_>>();
  assert_eq!(
    properties,
    vec![
      ("name", TypeRef::Primitive(PrimitiveCode::String), false),
      ("petType", TypeRef::Primitive(PrimitiveCode::String), false),
      ("BirthDateTime", TypeRef::Primitive(PrimitiveCode::DateTime), false),
    ]
  );
  assert_eq!(pet.base_type_name, None);
  assert!(!pet.is_casual);
}

#[test]
fn test_all_of_reference_becomes_base_type() {
  let resolved = resolve_schemas(json!({
    "Cat": {
      "allOf": [
        { "$ref": "#/components/schemas/Pet" },
        { "properties": { "huntingSkill": { "type": "string" } } }
      ]
    },
    "Pet": {
      "properties": {
        "name": { "type": "string" },
        "petType": { "type": "string" }
      }
    }
  }));

  let cat = class(&resolved, "Cat");
  assert_eq!(cat.base_type_name, Some(QualifiedName::root("Pet")));
  let names = cat.properties.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
  assert_eq!(names, vec!["huntingSkill"]);
  assert_eq!(type_count(&resolved, "Pet"), 1);
}

#[test]
fn test_single_all_of_reference_with_own_properties_keeps_base() {
  let resolved = resolve_schemas(json!({
    "Cat": {
      "allOf": [{ "$ref": "#/components/schemas/Pet" }],
      "properties": { "huntingSkill": { "type": "string" } }
    },
    "Pet": { "properties": { "name": { "type": "string" } } }
  }));

  let cat = class(&resolved, "Cat");
  assert_eq!(cat.base_type_name, Some(QualifiedName::root("Pet")));
  let names = cat.properties.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
  assert_eq!(names, vec!["huntingSkill"]);
  assert!(resolved.stats.warnings.is_empty());
}

#[test]
fn test_reference_only_components_become_empty_derived_classes() {
  let resolved = resolve_schemas(json!({
    "Pet": { "properties": { "name": { "type": "string" } } },
    "Animal": { "$ref": "#/components/schemas/Pet" },
    "Creature": { "allOf": [{ "$ref": "#/components/schemas/Pet" }] }
  }));

  for name in ["Animal", "Creature"] {
    let derived = class(&resolved, name);
    assert_eq!(derived.base_type_name, Some(QualifiedName::root("Pet")), "{name}");
    assert!(derived.properties.is_empty(), "{name}");
  }
  assert!(resolved.aliases.is_empty());
  assert_eq!(resolved.stats.classes_generated, 3);
}

#[test]
fn test_reference_only_component_to_non_class_has_no_base() {
  let resolved = resolve_schemas(json!({
    "Id": { "type": "string" },
    "Handle": { "$ref": "#/components/schemas/Id" },
    "Remote": { "$ref": "other.yaml#/Pet" }
  }));

  assert_eq!(class(&resolved, "Handle").base_type_name, None);
  assert!(has_warning(&resolved, |w| matches!(
    w,
    GenerationWarning::UnsupportedSchemaShape { schema_name, .. } if schema_name == "Handle"
  )));
  assert_eq!(class(&resolved, "Remote").base_type_name, None);
  assert!(has_warning(&resolved, |w| matches!(
    w,
    GenerationWarning::UnresolvedReference { context, .. } if context == "Remote.$ref"
  )));
}

#[test]
fn test_all_of_second_entry_reference_is_inlined() {
  let resolved = resolve_schemas(json!({
    "Audit": { "properties": { "createdAt": { "type": "string", "format": "date-time" } }, "required": ["createdAt"] },
    "Base": { "properties": { "id": { "type": "integer", "format": "int64" } } },
    "Order": {
      "allOf": [{ "$ref": "#/components/schemas/Base" }, { "$ref": "#/components/schemas/Audit" }],
      "properties": { "total": { "type": "number" } }
    }
  }));

  let order = class(&resolved, "Order");
  assert_eq!(order.base_type_name, Some(QualifiedName::root("Base")));
  let names = order.properties.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
  assert_eq!(names, vec!["createdAt", "total"]);
  assert!(order.properties[0].is_required);
}

#[test]
fn test_all_of_beyond_two_entries_is_truncated() {
  let resolved = resolve_schemas(json!({
    "Base": { "properties": { "id": { "type": "string" } } },
    "Wide": {
      "allOf": [
        { "$ref": "#/components/schemas/Base" },
        { "properties": { "first": { "type": "string" } } },
        { "properties": { "ignored": { "type": "string" } } }
      ]
    }
  }));

  let wide = class(&resolved, "Wide");
  assert!(wide.property("first").is_some());
  assert!(wide.property("ignored").is_none());
  assert!(has_warning(&resolved, |w| matches!(
    w,
    GenerationWarning::TruncatedAllOf { count: 3, .. }
  )));
}

#[test]
fn test_all_of_with_inline_first_entry_has_no_base() {
  let resolved = resolve_schemas(json!({
    "Mixed": {
      "allOf": [
        { "properties": { "a": { "type": "string" } } },
        { "properties": { "b": { "type": "boolean" } } }
      ]
    }
  }));

  let mixed = class(&resolved, "Mixed");
  assert_eq!(mixed.base_type_name, None);
  let names = mixed.properties.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
  assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn test_base_that_is_not_a_class_is_dropped() {
  let resolved = resolve_schemas(json!({
    "Color": { "type": "string", "enum": ["red", "green"] },
    "Paint": {
      "allOf": [
        { "$ref": "#/components/schemas/Color" },
        { "properties": { "gloss": { "type": "boolean" } } }
      ]
    }
  }));

  assert_eq!(class(&resolved, "Paint").base_type_name, None);
  assert!(has_warning(&resolved, |w| matches!(
    w,
    GenerationWarning::UnsupportedSchemaShape { schema_name, .. } if schema_name == "Paint"
  )));
}

#[test]
fn test_empty_object_becomes_empty_class() {
  let resolved = resolve_schemas(json!({
    "Anything": { "type": "object", "description": "  Free-form payload  " },
    "Untyped": {}
  }));

  let anything = class(&resolved, "Anything");
  assert!(anything.properties.is_empty());
  assert_eq!(anything.doc.as_deref(), Some("Free-form payload"));
  assert!(class(&resolved, "Untyped").properties.is_empty());
}

#[test]
fn test_property_named_like_owner_is_suffixed() {
  let resolved = resolve_schemas(json!({
    "Item": {
      "properties": {
        "Item": { "type": "string" },
        "item_id": { "type": "string" },
        "item-id": { "type": "string" }
      }
    }
  }));

  let item = class(&resolved, "Item");
  let names = item.properties.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
  assert_eq!(names, vec!["Item1", "itemId", "itemId2"]);
  assert_eq!(item.properties[2].original_name, "item-id");
  assert!(has_warning(&resolved, |w| matches!(
    w,
    GenerationWarning::RenamedIdentifier { renamed, .. } if renamed == "Item1"
  )));
}

#[test]
fn test_component_keys_sanitizing_alike_get_suffixes() {
  let resolved = resolve_schemas(json!({
    "pet-owner": { "properties": { "a": { "type": "string" } } },
    "pet.owner": { "type": "object" },
    "Pet_owner": { "properties": { "b": { "type": "string" } } }
  }));

  assert!(class(&resolved, "Pet_owner").property("a").is_some());
  assert!(class(&resolved, "Pet_owner2").property("b").is_some());
  let pet = resolved.namespaces.iter().find(|ns| ns.name == "Pet");
  assert!(pet.and_then(|ns| ns.find("Owner")).is_some());
}
