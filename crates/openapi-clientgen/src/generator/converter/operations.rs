use std::collections::BTreeSet;

use indexmap::IndexMap;
use itertools::Itertools;
use mediatype::MediaType;

use super::TypeResolver;
use crate::{
  document::{Document, HttpMethod, MediaTypeObject, Operation, Parameter, ParameterLocation, RefOr, Schema},
  generator::{
    ast::{Container, OperationDescriptor, ParameterDescriptor, QualifiedName, TypeRef},
    config::{CodegenConfig, ContainerStrategy, MethodNaming},
    errors::ConversionResult,
    metrics::GenerationWarning,
    naming::{
      NameContext, ensure_unique,
      operations::{container_name_with_suffix, first_static_segment, method_name_from_operation_id, method_name_from_path},
      sanitize,
    },
  },
};

const REQUEST_BODY_PROPERTY: &str = "requestBody";
const RESPONSE_PROPERTY: &str = "response";

/// Decides which container an operation belongs to.
pub trait ContainerNaming {
  fn container_name(&self, operation: &Operation, path: &str) -> String;
}

impl<F> ContainerNaming for F
where
  F: Fn(&Operation, &str) -> String,
{
  fn container_name(&self, operation: &Operation, path: &str) -> String {
    self(operation, path)
  }
}

/// The container naming strategy selected by [`CodegenConfig`].
#[derive(Debug, Clone)]
pub struct ContainerNamer {
  strategy: ContainerStrategy,
  fallback: String,
  suffix: String,
}

impl ContainerNamer {
  pub fn from_config(config: &CodegenConfig) -> Self {
    Self {
      strategy: config.container_strategy,
      fallback: config.container_name.clone(),
      suffix: config.container_suffix.clone(),
    }
  }
}

impl ContainerNaming for ContainerNamer {
  fn container_name(&self, operation: &Operation, path: &str) -> String {
    let base = match self.strategy {
      ContainerStrategy::Single => None,
      ContainerStrategy::Tags => operation.tags.iter().map(|tag| tag.trim()).find(|tag| !tag.is_empty()),
      ContainerStrategy::Path => first_static_segment(path),
    };
    base.map_or_else(
      || self.fallback.clone(),
      |base| container_name_with_suffix(base, &self.suffix),
    )
  }
}

/// Body or response content reduced to the one schema the method signature uses.
enum ContentSelection<'a> {
  Empty,
  Schema(&'a Schema),
  Conflict(String),
}

impl<'a> ContentSelection<'a> {
  /// Picks the first JSON media type, else the only media type, else a schema shared by all of them.
  fn select(content: &'a IndexMap<String, MediaTypeObject>) -> Self {
    let chosen = content
      .iter()
      .find(|(content_type, _)| is_json(content_type))
      .map(|(_, media)| media.schema.as_ref());

    let schema = match chosen {
      Some(schema) => schema,
      None if content.len() <= 1 => content.values().next().and_then(|media| media.schema.as_ref()),
      None if content.values().map(|media| media.schema.as_ref()).all_equal() => {
        content.values().next().and_then(|media| media.schema.as_ref())
      }
      None => {
        return Self::Conflict(format!(
          "content types {} carry different schemas",
          content.keys().map(|ct| format!("'{ct}'")).join(", ")
        ));
      }
    };

    schema.map_or(Self::Empty, Self::Schema)
  }
}

fn is_json(content_type: &str) -> bool {
  let Ok(media) = MediaType::parse(content_type) else {
    return false;
  };
  let suffix = media.suffix.as_ref().map(mediatype::Name::as_str);
  matches!(
    (media.ty.as_str(), media.subty.as_str(), suffix),
    ("application", "json", _) | (_, _, Some("json"))
  )
}

/// Request side and response side of an operation, classified before any type is resolved.
struct Shapes<'a> {
  parameters: Vec<&'a Parameter>,
  request_body: Option<&'a Schema>,
  response: Option<&'a Schema>,
}

/// Maps `paths` into containers of operation descriptors, resolving every referenced
/// schema through the shared [`TypeResolver`].
pub(crate) struct OperationMapper<'a, N> {
  document: &'a Document,
  config: &'a CodegenConfig,
  naming: N,
  containers: IndexMap<String, Container>,
}

impl<'a, N: ContainerNaming> OperationMapper<'a, N> {
  pub(crate) fn new(document: &'a Document, config: &'a CodegenConfig, naming: N) -> Self {
    Self {
      document,
      config,
      naming,
      containers: IndexMap::new(),
    }
  }

  /// Maps every `(path, method)` pair in document order. Containers appear in the order
  /// they are first used.
  pub(crate) fn map_operations(mut self, resolver: &mut TypeResolver<'a>) -> ConversionResult<Vec<Container>> {
    let document = self.document;
    for (path, item) in &document.paths {
      for (method, operation) in &item.operations {
        self.map_operation(resolver, path, *method, operation, &item.parameters)?;
      }
    }
    Ok(self.containers.into_values().collect())
  }

  fn map_operation(
    &mut self,
    resolver: &mut TypeResolver<'a>,
    path: &str,
    method: HttpMethod,
    operation: &'a Operation,
    path_parameters: &'a [RefOr<Parameter>],
  ) -> ConversionResult<()> {
    let shapes = match self.classify(resolver, path, method, operation, path_parameters) {
      Ok(shapes) => shapes,
      Err(reason) => {
        resolver
          .stats_mut()
          .record_warning(GenerationWarning::UnclassifiableOperation {
            method: method.to_string().to_uppercase(),
            path: path.to_string(),
            reason,
          });
        return Ok(());
      }
    };

    let container_name = self.naming.container_name(operation, path);
    let method_name = self.method_name(&container_name, method, path, operation);
    let owner = QualifiedName::root(method_name.clone());

    let parameters = Self::parameters(resolver, &owner, &shapes.parameters)?;
    let request_body_type_ref = shapes
      .request_body
      .map(|schema| resolver.resolve_property_type(&owner, REQUEST_BODY_PROPERTY, schema))
      .transpose()?;
    let response_type_ref = shapes
      .response
      .map(|schema| resolver.resolve_property_type(&owner, RESPONSE_PROPERTY, schema))
      .transpose()?;

    let descriptor = OperationDescriptor {
      http_method: method,
      path_template: path.to_string(),
      container_name: container_name.clone(),
      method_name,
      operation_id: operation.operation_id.clone(),
      parameters,
      request_body_type_ref,
      response_type_ref,
      doc: operation.doc(),
      is_async_variant: false,
    };

    let container = self.containers.entry(container_name).or_insert_with_key(|name| {
      resolver.stats_mut().record_container();
      Container::new(name.clone())
    });
    let async_variant = self.config.sync_and_async.then(|| OperationDescriptor {
      is_async_variant: true,
      ..descriptor.clone()
    });
    container.push(descriptor);
    if let Some(async_variant) = async_variant {
      container.push(async_variant);
    }
    resolver.stats_mut().record_operation();
    Ok(())
  }

  /// Merges parameters and selects body and response content. `Err` carries the reason the
  /// operation cannot be mapped.
  fn classify(
    &self,
    resolver: &mut TypeResolver<'a>,
    path: &str,
    method: HttpMethod,
    operation: &'a Operation,
    path_parameters: &'a [RefOr<Parameter>],
  ) -> Result<Shapes<'a>, String> {
    let document = self.document;

    let mut merged: IndexMap<(&str, ParameterLocation), &'a Parameter> = IndexMap::new();
    for parameter in path_parameters.iter().chain(&operation.parameters) {
      match document.resolve(parameter) {
        Ok(parameter) => {
          merged.insert((parameter.name.as_str(), parameter.location), parameter);
        }
        Err(reference) => resolver
          .stats_mut()
          .record_warning(GenerationWarning::UnresolvedReference {
            context: format!("{} {path}", method.to_string().to_uppercase()),
            reference: reference.to_string(),
          }),
      }
    }

    let request_body = match &operation.request_body {
      Some(body) => {
        let body = document
          .resolve(body)
          .map_err(|reference| format!("request body reference '{reference}' does not resolve"))?;
        match ContentSelection::select(&body.content) {
          ContentSelection::Empty => None,
          ContentSelection::Schema(schema) => Some(schema),
          ContentSelection::Conflict(reason) => return Err(format!("request body {reason}")),
        }
      }
      None => None,
    };

    let response = match operation.responses.iter().find(|(status, _)| status.starts_with('2')) {
      Some((status, response)) => {
        let response = document
          .resolve(response)
          .map_err(|reference| format!("response {status} reference '{reference}' does not resolve"))?;
        match ContentSelection::select(&response.content) {
          ContentSelection::Empty => None,
          ContentSelection::Schema(schema) => Some(schema),
          ContentSelection::Conflict(reason) => return Err(format!("response {status} {reason}")),
        }
      }
      None => None,
    };

    Ok(Shapes {
      parameters: merged.into_values().collect(),
      request_body,
      response,
    })
  }

  fn method_name(&self, container_name: &str, method: HttpMethod, path: &str, operation: &Operation) -> String {
    let base = match (self.config.method_naming, operation.operation_id.as_deref().map(str::trim)) {
      (MethodNaming::OperationId, Some(operation_id)) if !operation_id.is_empty() => {
        method_name_from_operation_id(operation_id)
      }
      _ => method_name_from_path(method, path),
    };

    let empty = BTreeSet::new();
    let used = self
      .containers
      .get(container_name)
      .map_or(&empty, Container::method_names);
    ensure_unique(&base, used)
  }

  fn parameters(
    resolver: &mut TypeResolver<'a>,
    owner: &QualifiedName,
    parameters: &[&'a Parameter],
  ) -> ConversionResult<Vec<ParameterDescriptor>> {
    let mut used = BTreeSet::new();
    let mut descriptors = Vec::with_capacity(parameters.len());

    for &parameter in parameters {
      let name = ensure_unique(&sanitize(&parameter.name, NameContext::Parameter), &used);
      used.insert(name.clone());

      let type_ref = match &parameter.schema {
        Some(schema) => resolver.resolve_property_type(owner, &parameter.name, schema)?,
        None => {
          resolver.stats_mut().record_warning(GenerationWarning::UndeterminedType {
            context: format!("{owner}.{}", parameter.name),
          });
          TypeRef::Unresolved
        }
      };
      let required = parameter.required || parameter.location == ParameterLocation::Path;
      let is_nullable_value = !required && resolver.is_value_type(&type_ref);

      descriptors.push(ParameterDescriptor {
        name,
        original_name: parameter.name.clone(),
        location: parameter.location,
        type_ref,
        required,
        is_nullable_value,
        doc: parameter
          .description
          .as_deref()
          .map(str::trim)
          .filter(|text| !text.is_empty())
          .map(ToString::to_string),
      });
    }

    Ok(descriptors)
  }
}
