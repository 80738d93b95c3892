use serde_json::Value;

use crate::{
  document::Document,
  generator::{
    ast::{ClassType, EnumType, TypeNode},
    config::CodegenConfig,
    converter::{ResolvedTypes, TypeResolver},
    metrics::GenerationWarning,
    tests::common::create_test_document,
  },
};

pub(super) fn resolve_document(document: &Document, config: &CodegenConfig) -> ResolvedTypes {
  let mut resolver = TypeResolver::new(document, config);
  resolver.resolve_all().expect("resolution should succeed");
  resolver.finish()
}

pub(super) fn resolve_schemas(schemas: Value) -> ResolvedTypes {
  resolve_document(&create_test_document(schemas), &CodegenConfig::default())
}

pub(super) fn find_type<'r>(resolved: &'r ResolvedTypes, name: &str) -> Option<&'r TypeNode> {
  resolved.namespaces.iter().find_map(|namespace| namespace.find(name))
}

pub(super) fn class<'r>(resolved: &'r ResolvedTypes, name: &str) -> &'r ClassType {
  find_type(resolved, name)
    .and_then(TypeNode::as_class)
    .unwrap_or_else(|| panic!("expected class {name}"))
}

pub(super) fn enum_type<'r>(resolved: &'r ResolvedTypes, name: &str) -> &'r EnumType {
  find_type(resolved, name)
    .and_then(TypeNode::as_enum)
    .unwrap_or_else(|| panic!("expected enum {name}"))
}

pub(super) fn type_count(resolved: &ResolvedTypes, name: &str) -> usize {
  resolved
    .namespaces
    .iter()
    .flat_map(|namespace| &namespace.types)
    .filter(|node| node.name() == name)
    .count()
}

pub(super) fn has_warning(resolved: &ResolvedTypes, predicate: impl Fn(&GenerationWarning) -> bool) -> bool {
  resolved.stats.warnings.iter().any(predicate)
}
