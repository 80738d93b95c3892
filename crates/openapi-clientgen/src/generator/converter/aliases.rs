use indexmap::IndexMap;

use crate::generator::ast::{AliasType, TypeRef};

/// Schema keys that resolve to another type expression instead of a declaration.
#[derive(Debug, Clone, Default)]
pub(crate) struct AliasRegistry {
  entries: IndexMap<String, AliasType>,
}

impl AliasRegistry {
  /// Registers `key` as an alias of `target`. The first registration of a key wins.
  pub(crate) fn add(&mut self, key: &str, target: TypeRef) -> bool {
    if self.entries.contains_key(key) {
      return false;
    }
    self.entries.insert(key.to_string(), AliasType::new(key, target));
    true
  }

  pub(crate) fn try_get(&self, key: &str) -> Option<&TypeRef> {
    self.entries.get(key).map(|alias| &alias.target)
  }

  pub(crate) fn into_entries(self) -> Vec<AliasType> {
    self.entries.into_values().collect()
  }
}
