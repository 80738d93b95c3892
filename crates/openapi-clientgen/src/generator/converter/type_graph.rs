use indexmap::IndexMap;
use itertools::Itertools;

use crate::generator::ast::{NamespaceNode, QualifiedName, TypeNode, TypeRef};

/// Declared types in finalization order, keyed by identity.
#[derive(Debug, Default)]
pub(crate) struct TypeGraph {
  nodes: IndexMap<QualifiedName, TypeNode>,
}

impl TypeGraph {
  /// Inserts a finished declaration. Returns `false` if the identity was already taken.
  pub(crate) fn insert(&mut self, node: TypeNode) -> bool {
    let name = node.qualified_name();
    if self.nodes.contains_key(&name) {
      return false;
    }
    self.nodes.insert(name, node);
    true
  }

  pub(crate) fn get(&self, name: &QualifiedName) -> Option<&TypeNode> {
    self.nodes.get(name)
  }

  pub(crate) fn is_enum(&self, type_ref: &TypeRef) -> bool {
    type_ref
      .as_named()
      .and_then(|name| self.get(name))
      .is_some_and(|node| node.as_enum().is_some())
  }

  pub(crate) fn nodes_mut(&mut self) -> impl Iterator<Item = &mut TypeNode> {
    self.nodes.values_mut()
  }

  /// Groups declarations by namespace. The root namespace comes first under `root_name`,
  /// prefixed namespaces follow in lexicographic order. Finalization order is kept inside each group.
  pub(crate) fn into_namespaces(self, root_name: &str) -> Vec<NamespaceNode> {
    let grouped = self
      .nodes
      .into_values()
      .map(|node| (node.namespace().map(ToString::to_string), node))
      .into_group_map();

    grouped
      .into_iter()
      .sorted_by(|(a, _), (b, _)| a.cmp(b))
      .map(|(namespace, types)| NamespaceNode {
        name: namespace.unwrap_or_else(|| root_name.to_string()),
        types,
      })
      .collect()
  }
}
