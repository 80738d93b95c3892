use serde_json::json;

use super::support::{class, resolve_document, resolve_schemas, type_count};
use crate::generator::{
  ast::{QualifiedName, TypeRef},
  config::CodegenConfig,
  converter::TypeResolver,
  tests::common::{create_test_document, generate},
};

fn named(name: &str) -> TypeRef {
  TypeRef::named(QualifiedName::root(name))
}

#[test]
fn test_mutual_recursion_declares_each_type_once() {
  let resolved = resolve_schemas(json!({
    "A": { "properties": { "b": { "$ref": "#/components/schemas/B" } } },
    "B": { "properties": { "a": { "type": "array", "items": { "$ref": "#/components/schemas/A" } } } }
  }));

  let names = resolved.namespaces[0].types.iter().map(|node| node.name()).collect::<Vec<_>>();
  assert_eq!(names, vec!["B", "A"]);
  assert_eq!(class(&resolved, "A").properties[0].type_ref, named("B"));
  assert_eq!(class(&resolved, "B").properties[0].type_ref, TypeRef::array_of(named("A")));
  assert!(resolved.stats.warnings.is_empty());
}

#[test]
fn test_self_reference_uses_reserved_name() {
  let resolved = resolve_schemas(json!({
    "Node": {
      "properties": {
        "next": { "$ref": "#/components/schemas/Node" },
        "children": { "type": "array", "items": { "$ref": "#/components/schemas/Node" } }
      }
    }
  }));

  let node = class(&resolved, "Node");
  assert_eq!(node.properties[0].type_ref, named("Node"));
  assert_eq!(node.properties[1].type_ref, TypeRef::array_of(named("Node")));
  assert_eq!(type_count(&resolved, "Node"), 1);
}

#[test]
fn test_resolving_a_component_twice_is_a_no_op() -> anyhow::Result<()> {
  let document = create_test_document(json!({
    "Pet": { "properties": { "name": { "type": "string" } } }
  }));
  let config = CodegenConfig::default();
  let mut resolver = TypeResolver::new(&document, &config);
  resolver.resolve_component("Pet")?;
  resolver.resolve_component("Pet")?;
  resolver.resolve_all()?;
  resolver.resolve_component("Missing")?;

  let resolved = resolver.finish();
  assert_eq!(type_count(&resolved, "Pet"), 1);
  assert_eq!(resolved.stats.types_generated, 1);
  Ok(())
}

#[test]
fn test_alias_cycle_through_array_component() {
  let resolved = resolve_schemas(json!({
    "Folder": {
      "properties": {
        "children": { "$ref": "#/components/schemas/Folders" }
      }
    },
    "Folders": { "type": "array", "items": { "$ref": "#/components/schemas/Folder" } }
  }));

  assert_eq!(class(&resolved, "Folder").properties[0].type_ref, TypeRef::array_of(named("Folder")));
  assert_eq!(resolved.aliases.len(), 1);
  assert_eq!(resolved.aliases[0].target_expression, "Folder[]");
}

#[test]
fn test_alias_still_in_flight_is_substituted_at_finish() {
  let resolved = resolve_schemas(json!({
    "Entries": { "type": "array", "items": { "$ref": "#/components/schemas/Record" } },
    "Record": {
      "properties": {
        "children": { "$ref": "#/components/schemas/Entries" }
      }
    }
  }));

  assert_eq!(
    class(&resolved, "Record").properties[0].type_ref,
    TypeRef::array_of(named("Record"))
  );
  assert_eq!(type_count(&resolved, "Entries"), 0);
  assert_eq!(resolved.aliases[0].name, "Entries");
  assert_eq!(resolved.aliases[0].target_expression, "Record[]");
}

#[test]
fn test_reference_only_component_in_cycle_keeps_its_name() {
  let resolved = resolve_schemas(json!({
    "Entry": { "$ref": "#/components/schemas/Record" },
    "Record": {
      "properties": {
        "parent": { "$ref": "#/components/schemas/Entry" }
      }
    }
  }));

  assert_eq!(class(&resolved, "Record").properties[0].type_ref, named("Entry"));
  let entry = class(&resolved, "Entry");
  assert_eq!(entry.base_type_name, Some(QualifiedName::root("Record")));
  assert!(entry.properties.is_empty());
  assert!(resolved.aliases.is_empty());
}

#[test]
fn test_cycles_are_reported_in_stats() {
  let document = create_test_document(json!({
    "A": { "properties": { "b": { "$ref": "#/components/schemas/B" } } },
    "B": { "properties": { "a": { "$ref": "#/components/schemas/A" } } },
    "Node": { "properties": { "next": { "$ref": "#/components/schemas/Node" } } },
    "Leaf": { "properties": { "node": { "$ref": "#/components/schemas/Node" } } }
  }));
  let output = generate(&document, CodegenConfig::default());

  assert_eq!(output.stats.cycles_detected, 2);
  assert_eq!(
    output.stats.cycle_details,
    vec![vec!["A".to_string(), "B".to_string()], vec!["Node".to_string()]]
  );
  assert_eq!(output.stats.types_generated, 4);

  let resolved = resolve_document(&document, &CodegenConfig::default());
  assert_eq!(resolved.stats.cycles_detected, 0, "cycles are recorded by the orchestrator");
}
