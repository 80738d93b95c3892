use std::collections::BTreeSet;

use serde::Serialize;

use super::types::TypeRef;
use crate::document::{HttpMethod, ParameterLocation};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescriptor {
  pub name: String,
  pub original_name: String,
  pub location: ParameterLocation,
  pub type_ref: TypeRef,
  pub required: bool,
  pub is_nullable_value: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub doc: Option<String>,
}

/// A typed call signature for one `(path, method)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDescriptor {
  pub http_method: HttpMethod,
  pub path_template: String,
  pub container_name: String,
  pub method_name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub operation_id: Option<String>,
  pub parameters: Vec<ParameterDescriptor>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub request_body_type_ref: Option<TypeRef>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub response_type_ref: Option<TypeRef>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub doc: Option<String>,
  pub is_async_variant: bool,
}

/// A named group of client methods, e.g. one client class per tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Container {
  pub name: String,
  pub methods: Vec<OperationDescriptor>,
  #[serde(skip)]
  method_names: BTreeSet<String>,
}

impl Container {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      methods: vec![],
      method_names: BTreeSet::new(),
    }
  }

  pub(crate) fn method_names(&self) -> &BTreeSet<String> {
    &self.method_names
  }

  pub(crate) fn push(&mut self, descriptor: OperationDescriptor) {
    self.method_names.insert(descriptor.method_name.clone());
    self.methods.push(descriptor);
  }
}
