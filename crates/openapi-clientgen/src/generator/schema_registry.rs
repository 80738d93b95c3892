use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;
use itertools::Itertools;
use petgraph::{algo::kosaraju_scc, graphmap::DiGraphMap};

use crate::{
  document::{AdditionalProperties, Document, Schema},
  generator::{
    ast::QualifiedName,
    metrics::{GenerationStats, GenerationWarning},
    naming::{NameContext, ensure_unique, identifiers::split_namespace, sanitize},
  },
};

/// Read-only view over `components.schemas` with the identity reserved for every key.
pub(crate) struct SchemaRegistry<'a> {
  schemas: Option<&'a IndexMap<String, Schema>>,
  names: IndexMap<&'a str, QualifiedName>,
}

impl<'a> SchemaRegistry<'a> {
  /// Reserves a `(namespace, name)` identity for every component key up front, so inline
  /// types synthesized later can never take a component's name.
  pub(crate) fn new(document: &'a Document, root_namespace: &str, stats: &mut GenerationStats) -> Self {
    let schemas = document.schemas();
    let mut names = IndexMap::new();
    let mut used: BTreeMap<Option<String>, BTreeSet<String>> = BTreeMap::new();

    for key in schemas.into_iter().flat_map(IndexMap::keys) {
      let (namespace, local) = split_namespace(key);
      let namespace = namespace.filter(|ns| ns != root_namespace);
      let base = sanitize(local, NameContext::TypeName);
      let taken = used.entry(namespace.clone()).or_default();
      let name = ensure_unique(&base, taken);
      if name != base {
        stats.record_warning(GenerationWarning::RenamedIdentifier {
          context: format!("components.schemas.{key}"),
          original: base,
          renamed: name.clone(),
        });
      }
      taken.insert(name.clone());
      names.insert(key.as_str(), QualifiedName::new(namespace, name));
    }

    Self { schemas, names }
  }

  pub(crate) fn schema(&self, key: &str) -> Option<&'a Schema> {
    self.schemas.and_then(|schemas| schemas.get(key))
  }

  pub(crate) fn contains(&self, key: &str) -> bool {
    self.names.contains_key(key)
  }

  pub(crate) fn reserved_name(&self, key: &str) -> Option<&QualifiedName> {
    self.names.get(key)
  }

  pub(crate) fn reserved_names(&self) -> impl Iterator<Item = &QualifiedName> {
    self.names.values()
  }

  /// Component keys grouped by namespace: the root namespace first, then the others in
  /// lexicographic order. Document order is kept inside each group.
  pub(crate) fn keys_in_processing_order(&self) -> Vec<&'a str> {
    self
      .names
      .iter()
      .enumerate()
      .sorted_by(|(a_pos, (_, a)), (b_pos, (_, b))| a.namespace.cmp(&b.namespace).then(a_pos.cmp(b_pos)))
      .map(|(_, (key, _))| *key)
      .collect()
  }

  /// Strongly connected groups of components that reference each other, including
  /// self-referencing components. Members are sorted for stable reporting.
  pub(crate) fn detect_cycles(&self) -> Vec<Vec<String>> {
    let mut graph = DiGraphMap::<&str, ()>::new();
    for key in self.names.keys() {
      graph.add_node(*key);
    }

    let dependencies = self
      .names
      .keys()
      .map(|key| {
        let mut refs = BTreeSet::new();
        if let Some(schema) = self.schema(key) {
          collect_refs(schema, &mut refs);
        }
        (*key, refs)
      })
      .collect::<Vec<_>>();

    for (key, refs) in &dependencies {
      for target in refs {
        if let Some((target, _)) = self.names.get_key_value(target.as_str()) {
          graph.add_edge(*key, *target, ());
        }
      }
    }

    kosaraju_scc(&graph)
      .into_iter()
      .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
      .map(|scc| scc.into_iter().map(String::from).sorted().collect::<Vec<_>>())
      .sorted()
      .collect()
  }
}

fn collect_refs(schema: &Schema, refs: &mut BTreeSet<String>) {
  if let Some(key) = schema.ref_key() {
    refs.insert(key);
  }
  for property in schema.properties.values() {
    collect_refs(property, refs);
  }
  if let Some(items) = &schema.items {
    collect_refs(items, refs);
  }
  if let Some(AdditionalProperties::Schema(value)) = &schema.additional_properties {
    collect_refs(value, refs);
  }
  for member in schema.all_of.iter().chain(&schema.one_of).chain(&schema.any_of) {
    collect_refs(member, refs);
  }
}
