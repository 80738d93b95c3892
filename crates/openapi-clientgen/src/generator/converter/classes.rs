use std::collections::BTreeSet;

use indexmap::IndexMap;

use super::{
  CasualName, TypeResolver,
  ledger::{Outcome, VisitState},
  metadata,
};
use crate::{
  document::Schema,
  generator::{
    ast::{ClassType, Constraints, DefaultLiteral, PropertyNode, QualifiedName, TypeNode, TypeRef},
    errors::ConversionResult,
    metrics::GenerationWarning,
    naming::{NameContext, ensure_unique, sanitize, upper_first},
  },
};

/// Properties of a class in declaration order, with the union of their `required` lists.
#[derive(Default)]
struct PropertySource<'a> {
  properties: IndexMap<&'a str, &'a Schema>,
  required: BTreeSet<&'a str>,
}

impl<'a> PropertySource<'a> {
  /// Adds the properties of `schema`. A name seen earlier keeps its position and takes the newer schema.
  fn extend(&mut self, schema: &'a Schema) {
    for (name, property) in &schema.properties {
      self.properties.insert(name.as_str(), property);
    }
    self.required.extend(schema.required.iter().map(String::as_str));
  }
}

impl<'a> TypeResolver<'a> {
  /// Declares a component class. With `allOf`, the first entry is the base type when it
  /// references a class (its properties are merged otherwise), and the second entry
  /// contributes properties ahead of the schema's own.
  pub(super) fn declare_class(&mut self, key: &str, schema: &'a Schema, name: QualifiedName) -> ConversionResult<Outcome> {
    let mut source = PropertySource::default();
    let mut base_type_name = None;

    if schema.all_of.len() > 2 {
      self.stats.record_warning(GenerationWarning::TruncatedAllOf {
        schema_name: key.to_string(),
        count: schema.all_of.len(),
      });
    }

    if let Some(first) = schema.all_of.first() {
      match first.ref_key() {
        Some(base_key) => base_type_name = self.resolve_base(&base_key, key, "allOf[0]")?,
        None => source.extend(first),
      }
    }
    if let Some(second) = schema.all_of.get(1) {
      match &second.reference {
        Some(reference) => match second.ref_key().and_then(|target| self.registry.schema(&target)) {
          Some(target) => source.extend(target),
          None => self.stats.record_warning(GenerationWarning::UnresolvedReference {
            context: format!("{key}.allOf[1]"),
            reference: reference.clone(),
          }),
        },
        None => source.extend(second),
      }
    }
    source.extend(schema);

    let properties = self.build_properties(&name, &source.properties, &source.required)?;
    self.insert_node(TypeNode::Class(ClassType {
      name: name.name.clone(),
      namespace: name.namespace.clone(),
      base_type_name,
      properties,
      doc: schema.doc(),
      is_casual: false,
    }));
    Ok(Outcome::Declared(name))
  }

  /// An object schema with no statically known properties.
  pub(super) fn declare_empty_class(&mut self, schema: &Schema, name: QualifiedName) -> Outcome {
    self.insert_empty_class(schema, name, None)
  }

  /// A component that is nothing but a `$ref`: an empty class deriving from the target
  /// when the target is a class.
  pub(super) fn declare_reference_class(
    &mut self,
    key: &str,
    schema: &'a Schema,
    reference: &str,
    name: QualifiedName,
  ) -> ConversionResult<Outcome> {
    let base_type_name = match schema.ref_key() {
      Some(base_key) => self.resolve_base(&base_key, key, "$ref")?,
      None => {
        self.stats.record_warning(GenerationWarning::UnresolvedReference {
          context: format!("{key}.$ref"),
          reference: reference.to_string(),
        });
        None
      }
    };
    Ok(self.insert_empty_class(schema, name, base_type_name))
  }

  fn insert_empty_class(
    &mut self,
    schema: &Schema,
    name: QualifiedName,
    base_type_name: Option<QualifiedName>,
  ) -> Outcome {
    self.insert_node(TypeNode::Class(ClassType {
      name: name.name.clone(),
      namespace: name.namespace.clone(),
      base_type_name,
      properties: vec![],
      doc: schema.doc(),
      is_casual: false,
    }));
    Outcome::Declared(name)
  }

  /// Inline `properties` on a property: declared at the top level as `<Owner><Property>`.
  pub(super) fn casual_class(
    &mut self,
    owner: &QualifiedName,
    property: &str,
    schema: &'a Schema,
  ) -> ConversionResult<TypeRef> {
    let base = format!("{}{}", owner.name, upper_first(&sanitize(property, NameContext::PropertyName)));
    let name = match self.claim_casual_name(owner.namespace.clone(), &base, schema) {
      CasualName::Existing(name) => return Ok(TypeRef::named(name)),
      CasualName::Fresh(name) => name,
    };

    let mut source = PropertySource::default();
    source.extend(schema);
    let properties = self.build_properties(&name, &source.properties, &source.required)?;
    self.insert_node(TypeNode::Class(ClassType {
      name: name.name.clone(),
      namespace: name.namespace.clone(),
      base_type_name: None,
      properties,
      doc: schema.doc(),
      is_casual: true,
    }));
    Ok(TypeRef::named(name))
  }

  /// Resolves the base class of `key`. A base still in flight is accepted by name; anything
  /// that did not end up as a class declaration leaves the derived class without a base.
  fn resolve_base(&mut self, base_key: &str, key: &str, slot: &str) -> ConversionResult<Option<QualifiedName>> {
    if !self.registry.contains(base_key) {
      self.stats.record_warning(GenerationWarning::UnresolvedReference {
        context: format!("{key}.{slot}"),
        reference: base_key.to_string(),
      });
      return Ok(None);
    }

    self.resolve_component(base_key)?;
    let base = match self.ledger.state(base_key) {
      VisitState::InProgress(name) | VisitState::Done(Outcome::Declared(name)) => Some(name.clone()),
      VisitState::Done(_) | VisitState::Unvisited => None,
    };

    match base {
      Some(name) if !self.graph.get(&name).is_some_and(|node| node.as_enum().is_some()) => Ok(Some(name)),
      _ => {
        self.stats.record_warning(GenerationWarning::UnsupportedSchemaShape {
          schema_name: key.to_string(),
          reason: format!("base '{base_key}' is not a class, inheritance dropped"),
        });
        Ok(None)
      }
    }
  }

  fn build_properties(
    &mut self,
    owner: &QualifiedName,
    properties: &IndexMap<&'a str, &'a Schema>,
    required: &BTreeSet<&str>,
  ) -> ConversionResult<Vec<PropertyNode>> {
    let mut used = BTreeSet::new();
    let mut nodes = Vec::with_capacity(properties.len());

    for (&original_name, &schema) in properties {
      let mut base = sanitize(original_name, NameContext::PropertyName);
      if base == owner.name {
        let renamed = format!("{base}1");
        self.stats.record_warning(GenerationWarning::RenamedIdentifier {
          context: owner.to_string(),
          original: base,
          renamed: renamed.clone(),
        });
        base = renamed;
      }
      let name = ensure_unique(&base, &used);
      used.insert(name.clone());

      let type_ref = self.resolve_property_type(owner, original_name, schema)?;
      let is_required = required.contains(original_name);
      let is_nullable_value = !is_required && self.is_value_type(&type_ref);
      let default_literal = self.property_default(owner, original_name, schema, &type_ref);
      let constraints = if self.config.decorations {
        metadata::constraints(schema)
      } else {
        Constraints::default()
      };

      nodes.push(PropertyNode {
        name,
        original_name: original_name.to_string(),
        type_ref,
        is_required,
        is_nullable_value,
        default_literal,
        constraints,
        doc: schema.doc(),
      });
    }

    Ok(nodes)
  }

  fn property_default(
    &mut self,
    owner: &QualifiedName,
    property: &str,
    schema: &Schema,
    type_ref: &TypeRef,
  ) -> Option<DefaultLiteral> {
    let value = schema.default.as_ref()?;
    let enum_type = type_ref
      .as_named()
      .and_then(|name| self.graph.get(name))
      .and_then(TypeNode::as_enum);

    match metadata::default_literal(value, type_ref, enum_type) {
      Ok(literal) => literal,
      Err(reason) => {
        self.stats.record_warning(GenerationWarning::UnsupportedDefault {
          context: format!("{owner}.{property}"),
          reason,
        });
        None
      }
    }
  }
}
