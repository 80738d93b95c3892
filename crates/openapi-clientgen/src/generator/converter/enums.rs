use std::collections::BTreeSet;

use super::{CasualName, TypeResolver};
use crate::{
  document::Schema,
  generator::{
    ast::{EnumLiteral, EnumMember, EnumType, LiteralKind, QualifiedName, TypeNode, TypeRef},
    errors::{ConversionResult, GenerationError},
    metrics::GenerationWarning,
    naming::{NameContext, ensure_unique, sanitize, upper_first},
  },
};

/// Builds enum members in source order. `null` entries mark nullability and produce no member;
/// ordinals count the remaining entries from zero.
pub(crate) fn build_members(schema: &Schema) -> Result<Vec<EnumMember>, LiteralKind> {
  let format = schema.format.as_deref();
  let mut used = BTreeSet::new();
  let mut members = vec![];

  for (index, value) in schema.enum_values.iter().enumerate() {
    if value.is_null() {
      continue;
    }
    let literal = EnumLiteral::from_value(value, format)?;
    let name = ensure_unique(&sanitize(&literal.member_source(), NameContext::EnumMember), &used);
    used.insert(name.clone());
    members.push(EnumMember {
      name,
      ordinal: members.len(),
      literal,
      doc: schema.enum_descriptions.get(index).cloned(),
    });
  }

  Ok(members)
}

impl<'a> TypeResolver<'a> {
  /// Declares an enum under `name`. Returns `None` when a member literal is unsupported and
  /// the type was skipped; strict mode turns that into a pass-aborting error instead.
  pub(super) fn declare_enum(
    &mut self,
    name: QualifiedName,
    schema: &'a Schema,
    is_casual: bool,
  ) -> ConversionResult<Option<QualifiedName>> {
    let members = match build_members(schema) {
      Ok(members) => members,
      Err(literal_kind) if self.config.strict_enum_literals => {
        return Err(GenerationError::UnsupportedEnumMemberLiteral {
          type_name: name.to_string(),
          literal_kind,
        });
      }
      Err(literal_kind) => {
        self.stats.record_warning(GenerationWarning::UnsupportedEnumMemberLiteral {
          type_name: name.to_string(),
          literal_kind,
        });
        return Ok(None);
      }
    };

    self.insert_node(TypeNode::Enum(EnumType {
      name: name.name.clone(),
      namespace: name.namespace.clone(),
      members,
      doc: schema.doc(),
      is_casual,
    }));
    Ok(Some(name))
  }

  /// Inline `enum` on a property: declared at the top level as `<Owner><Property>`.
  pub(super) fn casual_enum(
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

    match self.declare_enum(name.clone(), schema, true)? {
      Some(declared) => Ok(TypeRef::named(declared)),
      None => {
        self.casual_shapes.remove(&name);
        Ok(TypeRef::Unresolved)
      }
    }
  }
}
