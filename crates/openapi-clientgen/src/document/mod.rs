//! In-memory model of an OpenAPI v3 document.
//!
//! Only the parts consumed by type resolution and operation mapping are modelled. Every
//! keyed collection is an [`IndexMap`] so that declaration order survives parsing.

mod paths;
mod schema;

use indexmap::IndexMap;
use serde::Deserialize;

pub use self::{
  paths::{HttpMethod, MediaTypeObject, Operation, Parameter, ParameterLocation, PathItem, RequestBody, Response},
  schema::{AdditionalProperties, Schema, SchemaType, SchemaTypeSet},
};
use crate::utils::refs::{PARAMETER_REF_PREFIX, REQUEST_BODY_REF_PREFIX, RESPONSE_REF_PREFIX, parse_ref};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Info {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub version: String,
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
  #[serde(default)]
  pub schemas: IndexMap<String, Schema>,
  #[serde(default)]
  pub parameters: IndexMap<String, Parameter>,
  #[serde(default)]
  pub request_bodies: IndexMap<String, RequestBody>,
  #[serde(default)]
  pub responses: IndexMap<String, Response>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Document {
  #[serde(default)]
  pub openapi: String,
  #[serde(default)]
  pub info: Info,
  #[serde(default)]
  pub paths: IndexMap<String, PathItem>,
  pub components: Option<Components>,
}

/// Either an inline object or a `$ref` to one declared under `components`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RefOr<T> {
  Ref {
    #[serde(rename = "$ref")]
    reference: String,
  },
  Item(T),
}

/// Component sections that `RefOr` values can point into.
pub trait ComponentLookup: Sized {
  const REF_PREFIX: &'static str;

  fn section(components: &Components) -> &IndexMap<String, Self>;
}

impl ComponentLookup for Parameter {
  const REF_PREFIX: &'static str = PARAMETER_REF_PREFIX;

  fn section(components: &Components) -> &IndexMap<String, Self> {
    &components.parameters
  }
}

impl ComponentLookup for RequestBody {
  const REF_PREFIX: &'static str = REQUEST_BODY_REF_PREFIX;

  fn section(components: &Components) -> &IndexMap<String, Self> {
    &components.request_bodies
  }
}

impl ComponentLookup for Response {
  const REF_PREFIX: &'static str = RESPONSE_REF_PREFIX;

  fn section(components: &Components) -> &IndexMap<String, Self> {
    &components.responses
  }
}

impl Document {
  pub fn schemas(&self) -> Option<&IndexMap<String, Schema>> {
    self.components.as_ref().map(|components| &components.schemas)
  }

  pub fn schema(&self, key: &str) -> Option<&Schema> {
    self.schemas().and_then(|schemas| schemas.get(key))
  }

  /// Follows a `RefOr` into its component section. Returns `Err` with the dangling
  /// reference when the target does not exist.
  pub fn resolve<'a, T: ComponentLookup>(&'a self, value: &'a RefOr<T>) -> Result<&'a T, &'a str> {
    match value {
      RefOr::Item(item) => Ok(item),
      RefOr::Ref { reference } => parse_ref(reference, T::REF_PREFIX)
        .and_then(|key| self.components.as_ref().and_then(|c| T::section(c).get(&key)))
        .ok_or(reference.as_str()),
    }
  }
}
