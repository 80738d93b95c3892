use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::utils::refs::parse_schema_ref;

/// A JSON Schema `type` keyword value.
///
/// Unknown type names are kept verbatim so that a malformed document still loads
/// and the offending schema is reported during resolution instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum SchemaType {
  String,
  Integer,
  Number,
  Boolean,
  Array,
  Object,
  Null,
  Other(String),
}

impl From<String> for SchemaType {
  fn from(value: String) -> Self {
    match value.as_str() {
      "string" => Self::String,
      "integer" => Self::Integer,
      "number" => Self::Number,
      "boolean" => Self::Boolean,
      "array" => Self::Array,
      "object" => Self::Object,
      "null" => Self::Null,
      _ => Self::Other(value),
    }
  }
}

impl SchemaType {
  pub fn as_str(&self) -> &str {
    match self {
      Self::String => "string",
      Self::Integer => "integer",
      Self::Number => "number",
      Self::Boolean => "boolean",
      Self::Array => "array",
      Self::Object => "object",
      Self::Null => "null",
      Self::Other(name) => name,
    }
  }

  pub const fn is_scalar(&self) -> bool {
    matches!(self, Self::String | Self::Integer | Self::Number | Self::Boolean)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SchemaTypeSet {
  Single(SchemaType),
  Multiple(Vec<SchemaType>),
}

impl SchemaTypeSet {
  /// The effective single type. A 3.1 list such as `["string", "null"]` collapses to
  /// its only non-null member; lists with several non-null members have no single type.
  pub fn single(&self) -> Option<&SchemaType> {
    match self {
      Self::Single(schema_type) => Some(schema_type),
      Self::Multiple(types) => {
        let mut non_null = types.iter().filter(|t| **t != SchemaType::Null);
        match (non_null.next(), non_null.next()) {
          (Some(only), None) => Some(only),
          (None, None) => types.first(),
          _ => None,
        }
      }
    }
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
  Allowed(bool),
  Schema(Box<Schema>),
}

/// A single schema node as it appears in the source document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
  #[serde(rename = "$ref")]
  pub reference: Option<String>,
  #[serde(rename = "type")]
  pub schema_type: Option<SchemaTypeSet>,
  pub format: Option<String>,
  pub title: Option<String>,
  pub description: Option<String>,
  #[serde(default)]
  pub properties: IndexMap<String, Schema>,
  pub items: Option<Box<Schema>>,
  #[serde(rename = "enum", default)]
  pub enum_values: Vec<Value>,
  #[serde(rename = "x-enum-descriptions", default)]
  pub enum_descriptions: Vec<String>,
  #[serde(default)]
  pub all_of: Vec<Schema>,
  #[serde(default)]
  pub one_of: Vec<Schema>,
  #[serde(default)]
  pub any_of: Vec<Schema>,
  #[serde(default)]
  pub required: Vec<String>,
  pub default: Option<Value>,
  pub nullable: Option<bool>,
  pub additional_properties: Option<AdditionalProperties>,
  pub minimum: Option<f64>,
  pub maximum: Option<f64>,
  pub min_length: Option<u64>,
  pub max_length: Option<u64>,
  pub min_items: Option<u64>,
  pub max_items: Option<u64>,
  pub pattern: Option<String>,
}

impl Schema {
  pub fn single_type(&self) -> Option<&SchemaType> {
    self.schema_type.as_ref().and_then(SchemaTypeSet::single)
  }

  /// The component key this schema points at, if it is a local `#/components/schemas/` reference.
  pub fn ref_key(&self) -> Option<String> {
    self.reference.as_deref().and_then(parse_schema_ref)
  }

  pub fn is_array(&self) -> bool {
    self.single_type() == Some(&SchemaType::Array)
  }

  pub fn is_object_or_untyped(&self) -> bool {
    matches!(self.single_type(), None | Some(SchemaType::Object)) && !self.has_multiple_types()
  }

  pub fn has_enum(&self) -> bool {
    !self.enum_values.is_empty()
  }

  pub fn has_properties(&self) -> bool {
    !self.properties.is_empty()
  }

  /// The first entry of whichever composition keyword is present, checked in
  /// `allOf`, `oneOf`, `anyOf` order.
  pub fn first_composed(&self) -> Option<&Schema> {
    self
      .all_of
      .first()
      .or_else(|| self.one_of.first())
      .or_else(|| self.any_of.first())
  }

  pub fn doc(&self) -> Option<String> {
    self
      .description
      .as_deref()
      .or(self.title.as_deref())
      .map(str::trim)
      .filter(|text| !text.is_empty())
      .map(ToString::to_string)
  }

  fn has_multiple_types(&self) -> bool {
    self.schema_type.is_some() && self.single_type().is_none()
  }
}
