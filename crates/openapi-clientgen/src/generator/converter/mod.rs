pub(crate) mod aliases;
mod classes;
mod enums;
pub(crate) mod ledger;
mod metadata;
pub(crate) mod operations;
pub(crate) mod primitives;
mod type_graph;
mod type_resolver;

use std::{
  cell::Cell,
  collections::{BTreeMap, BTreeSet, HashMap},
};

use self::{
  aliases::AliasRegistry,
  ledger::{Ledger, Outcome, VisitState},
  type_graph::TypeGraph,
};
use crate::{
  document::{AdditionalProperties, Document, Schema, SchemaType},
  generator::{
    ast::{AliasType, NamespaceNode, PrimitiveCode, QualifiedName, TypeNode, TypeRef},
    config::CodegenConfig,
    errors::ConversionResult,
    metrics::{GenerationStats, GenerationWarning},
    naming::ensure_unique,
    schema_registry::SchemaRegistry,
  },
};

/// The resolved type side of a generation pass.
#[derive(Debug)]
pub(crate) struct ResolvedTypes {
  pub namespaces: Vec<NamespaceNode>,
  pub aliases: Vec<AliasType>,
  pub stats: GenerationStats,
}

/// Result of claiming a name for an inline type.
enum CasualName {
  /// An inline type with an identical shape already owns the name.
  Existing(QualifiedName),
  Fresh(QualifiedName),
}

/// Resolution context for one pass: owns the ledger, the alias table, and the type graph.
/// Created by the orchestrator and consumed by [`TypeResolver::finish`].
pub(crate) struct TypeResolver<'a> {
  config: &'a CodegenConfig,
  registry: SchemaRegistry<'a>,
  ledger: Ledger,
  aliases: AliasRegistry,
  graph: TypeGraph,
  used_names: BTreeMap<Option<String>, BTreeSet<String>>,
  casual_shapes: HashMap<QualifiedName, &'a Schema>,
  stats: GenerationStats,
}

impl<'a> TypeResolver<'a> {
  pub(crate) fn new(document: &'a Document, config: &'a CodegenConfig) -> Self {
    let mut stats = GenerationStats::default();
    let registry = SchemaRegistry::new(document, &config.namespace, &mut stats);

    let mut used_names: BTreeMap<Option<String>, BTreeSet<String>> = BTreeMap::new();
    for name in registry.reserved_names() {
      used_names
        .entry(name.namespace.clone())
        .or_default()
        .insert(name.name.clone());
    }

    Self {
      config,
      registry,
      ledger: Ledger::default(),
      aliases: AliasRegistry::default(),
      graph: TypeGraph::default(),
      used_names,
      casual_shapes: HashMap::new(),
      stats,
    }
  }

  /// Resolves every component, grouped by namespace in a stable order.
  pub(crate) fn resolve_all(&mut self) -> ConversionResult<()> {
    for key in self.registry.keys_in_processing_order() {
      self.resolve_component(key)?;
    }
    Ok(())
  }

  /// Resolves one component key. A no-op for keys that are in flight or already done,
  /// and for keys that are not declared under `components.schemas`.
  pub(crate) fn resolve_component(&mut self, key: &str) -> ConversionResult<()> {
    if !matches!(self.ledger.state(key), VisitState::Unvisited) {
      return Ok(());
    }
    let (Some(schema), Some(name)) = (self.registry.schema(key), self.registry.reserved_name(key).cloned()) else {
      return Ok(());
    };

    self.ledger.begin(key, name.clone());
    let outcome = self.classify(key, schema, name)?;
    self.ledger.finish(key, outcome);
    Ok(())
  }

  pub(crate) fn detect_cycles(&self) -> Vec<Vec<String>> {
    self.registry.detect_cycles()
  }

  pub(crate) fn stats_mut(&mut self) -> &mut GenerationStats {
    &mut self.stats
  }

  fn classify(&mut self, key: &str, schema: &'a Schema, name: QualifiedName) -> ConversionResult<Outcome> {
    if schema.has_enum() {
      let declared = self.declare_enum(name, schema, false)?;
      return Ok(declared.map_or(Outcome::Skipped, Outcome::Declared));
    }

    if schema.has_properties() || !schema.all_of.is_empty() {
      return self.declare_class(key, schema, name);
    }

    if let Some(reference) = &schema.reference {
      return self.declare_reference_class(key, schema, reference, name);
    }

    if schema.is_array() {
      return self.register_array_alias(key, schema);
    }

    if let Some(schema_type) = schema.single_type()
      && schema_type.is_scalar()
    {
      let code = self.map_primitive(schema_type, schema.format.as_deref(), key);
      return Ok(self.register_alias(key, code.into()));
    }

    if schema.is_object_or_untyped() && schema.one_of.is_empty() && schema.any_of.is_empty() {
      if let Some(AdditionalProperties::Schema(value)) = &schema.additional_properties {
        let value_type = self.resolve_property_type(&name, "value", value)?;
        return Ok(self.register_alias(key, TypeRef::map_of(value_type)));
      }
      return Ok(self.declare_empty_class(schema, name));
    }

    Ok(self.skip(key, "not an enum, class, alias, or empty object"))
  }

  /// `type: array` components become `<Item>[]` aliases. Only `$ref` items are supported;
  /// the item component is resolved first.
  fn register_array_alias(&mut self, key: &str, schema: &'a Schema) -> ConversionResult<Outcome> {
    let Some(reference) = schema.items.as_deref().and_then(|items| items.reference.as_ref()) else {
      return Ok(self.skip(key, "array items must be a $ref"));
    };
    let item = self.resolve_reference(reference, key)?;
    Ok(self.register_alias(key, TypeRef::array_of(item)))
  }

  fn register_alias(&mut self, key: &str, target: TypeRef) -> Outcome {
    if self.aliases.add(key, target) {
      self.stats.record_alias();
    }
    Outcome::Aliased
  }

  fn skip(&mut self, key: &str, reason: impl Into<String>) -> Outcome {
    self.stats.record_warning(GenerationWarning::UnsupportedSchemaShape {
      schema_name: key.to_string(),
      reason: reason.into(),
    });
    Outcome::Skipped
  }

  fn insert_node(&mut self, node: TypeNode) {
    self.stats.record_type(&node);
    let inserted = self.graph.insert(node);
    debug_assert!(inserted, "type identity declared twice");
  }

  /// Claims `<base>` in `namespace` for an inline type, reusing an earlier inline type
  /// with an equal shape and otherwise appending a numeric suffix on collision.
  fn claim_casual_name(&mut self, namespace: Option<String>, base: &str, schema: &'a Schema) -> CasualName {
    let candidate = QualifiedName::new(namespace.clone(), base);
    if self
      .casual_shapes
      .get(&candidate)
      .is_some_and(|existing| **existing == *schema)
    {
      return CasualName::Existing(candidate);
    }

    let used = self.used_names.entry(namespace.clone()).or_default();
    let name = ensure_unique(base, used);
    used.insert(name.clone());
    if name != base {
      self.stats.record_warning(GenerationWarning::RenamedIdentifier {
        context: "inline type".to_string(),
        original: base.to_string(),
        renamed: name.clone(),
      });
    }

    let qualified = QualifiedName::new(namespace, name);
    self.casual_shapes.insert(qualified.clone(), schema);
    CasualName::Fresh(qualified)
  }

  fn is_value_type(&self, type_ref: &TypeRef) -> bool {
    match type_ref {
      TypeRef::Primitive(code) => code.is_value_type(),
      TypeRef::NamedType(_) => self.graph.is_enum(type_ref),
      TypeRef::ArrayOf(..) | TypeRef::MapOf(_) | TypeRef::Unresolved => false,
    }
  }

  /// Ends the pass: substitutes references to keys that turned out to be aliases or were
  /// skipped while still in flight, then groups the graph into namespaces.
  pub(crate) fn finish(mut self) -> ResolvedTypes {
    let mut replacements = HashMap::new();
    for (key, outcome) in self.ledger.outcomes() {
      let Some(name) = self.registry.reserved_name(key) else {
        continue;
      };
      match outcome {
        Outcome::Aliased => {
          if let Some(target) = self.aliases.try_get(key) {
            replacements.insert(name.clone(), target.clone());
          }
        }
        Outcome::Skipped => {
          replacements.insert(name.clone(), TypeRef::Unresolved);
        }
        Outcome::Declared(_) => {}
      }
    }

    if !replacements.is_empty() {
      self.apply_replacements(&replacements);
    }

    ResolvedTypes {
      namespaces: self.graph.into_namespaces(&self.config.namespace),
      aliases: self.aliases.into_entries(),
      stats: self.stats,
    }
  }

  fn apply_replacements(&mut self, replacements: &HashMap<QualifiedName, TypeRef>) {
    let mut warnings = vec![];
    for node in self.graph.nodes_mut() {
      let TypeNode::Class(class) = node else {
        continue;
      };
      let owner = QualifiedName::new(class.namespace.clone(), class.name.clone());

      if let Some(base) = &class.base_type_name
        && replacements.contains_key(base)
      {
        warnings.push(GenerationWarning::UnresolvedReference {
          context: owner.to_string(),
          reference: base.to_string(),
        });
        class.base_type_name = None;
      }

      for property in &mut class.properties {
        let dropped = Cell::new(false);
        let substituted = property.type_ref.substitute(&|name| {
          let replacement = replacements.get(name).cloned();
          if replacement == Some(TypeRef::Unresolved) {
            dropped.set(true);
          }
          replacement
        });
        if dropped.get() {
          warnings.push(GenerationWarning::UnresolvedReference {
            context: format!("{owner}.{}", property.original_name),
            reference: property.type_ref.to_string(),
          });
        }
        property.type_ref = substituted;
      }
    }

    for warning in warnings {
      self.stats.record_warning(warning);
    }
  }

  fn map_primitive(&mut self, schema_type: &SchemaType, format: Option<&str>, context: &str) -> PrimitiveCode {
    primitives::map_primitive(schema_type, format).unwrap_or_else(|| {
      self.stats.record_warning(GenerationWarning::UnmappedPrimitive {
        context: context.to_string(),
        schema_type: schema_type.as_str().to_string(),
        format: format.unwrap_or_default().to_string(),
      });
      PrimitiveCode::Object
    })
  }
}

#[cfg(test)]
mod tests;
