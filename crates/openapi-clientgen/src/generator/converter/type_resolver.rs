use super::{
  TypeResolver,
  ledger::{Outcome, VisitState},
};
use crate::{
  document::{AdditionalProperties, Schema, SchemaType},
  generator::{
    ast::{PrimitiveCode, QualifiedName, TypeRef},
    errors::ConversionResult,
    metrics::GenerationWarning,
  },
  utils::refs::parse_schema_ref,
};

impl<'a> TypeResolver<'a> {
  /// Resolves the type of a property, array item, map value, parameter, or body schema.
  /// Inline enums and objects are synthesized as casual types named after `owner` and `property`.
  pub(crate) fn resolve_property_type(
    &mut self,
    owner: &QualifiedName,
    property: &str,
    schema: &'a Schema,
  ) -> ConversionResult<TypeRef> {
    let context = format!("{owner}.{property}");

    if let Some(reference) = &schema.reference {
      return self.resolve_reference(reference, &context);
    }

    if schema.has_enum() {
      return self.casual_enum(owner, property, schema);
    }

    if schema.has_properties() {
      return self.casual_class(owner, property, schema);
    }

    if schema.is_array() {
      let item = match schema.items.as_deref() {
        Some(items) => self.resolve_property_type(owner, property, items)?,
        None => {
          self.stats.record_warning(GenerationWarning::UndeterminedType {
            context: format!("{context}[]"),
          });
          TypeRef::Unresolved
        }
      };
      return Ok(TypeRef::array_of(item));
    }

    if schema.is_object_or_untyped() {
      match &schema.additional_properties {
        Some(AdditionalProperties::Schema(value)) => {
          let value_type = self.resolve_property_type(owner, property, value)?;
          return Ok(TypeRef::map_of(value_type));
        }
        Some(AdditionalProperties::Allowed(true)) => return Ok(TypeRef::map_of(PrimitiveCode::Object.into())),
        Some(AdditionalProperties::Allowed(false)) | None => {}
      }
    }

    if let Some(schema_type) = schema.single_type()
      && *schema_type != SchemaType::Object
    {
      return Ok(self.map_primitive(schema_type, schema.format.as_deref(), &context).into());
    }

    if let Some(first) = schema.first_composed() {
      if let Some(reference) = &first.reference {
        return self.resolve_reference(reference, &context);
      }
      if let Some(schema_type) = first.single_type() {
        return Ok(self.map_primitive(schema_type, first.format.as_deref(), &context).into());
      }
    }

    if schema.single_type() == Some(&SchemaType::Object) {
      return Ok(PrimitiveCode::Object.into());
    }

    self.stats.record_warning(GenerationWarning::UndeterminedType { context });
    Ok(TypeRef::Unresolved)
  }

  /// Resolves a `$ref` string. Anything other than a local component schema pointer falls back to any.
  pub(crate) fn resolve_reference(&mut self, reference: &str, context: &str) -> ConversionResult<TypeRef> {
    match parse_schema_ref(reference) {
      Some(key) => self.resolve_schema_key(&key, context),
      None => Ok(self.unresolved(context, reference)),
    }
  }

  /// Resolves a component key on demand: aliases are substituted, unvisited keys are resolved
  /// first, and keys still in flight yield their reserved name.
  fn resolve_schema_key(&mut self, key: &str, context: &str) -> ConversionResult<TypeRef> {
    if let Some(target) = self.aliases.try_get(key) {
      return Ok(target.clone());
    }
    if !self.registry.contains(key) {
      return Ok(self.unresolved(context, key));
    }

    self.resolve_component(key)?;
    match self.ledger.state(key).clone() {
      VisitState::InProgress(name) | VisitState::Done(Outcome::Declared(name)) => Ok(TypeRef::named(name)),
      VisitState::Done(Outcome::Aliased) => Ok(self.aliases.try_get(key).cloned().unwrap_or(TypeRef::Unresolved)),
      VisitState::Done(Outcome::Skipped) | VisitState::Unvisited => Ok(self.unresolved(context, key)),
    }
  }

  fn unresolved(&mut self, context: &str, reference: &str) -> TypeRef {
    self.stats.record_warning(GenerationWarning::UnresolvedReference {
      context: context.to_string(),
      reference: reference.to_string(),
    });
    TypeRef::Unresolved
  }
}
