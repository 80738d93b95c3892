use serde_json::{Value, json};

use crate::{
  document::Document,
  generator::{
    config::CodegenConfig,
    orchestrator::{GenerationOutput, Orchestrator},
  },
  utils::{SpecFormat, spec::parse_document},
};

/// A document with the given `components.schemas` and no paths.
pub(crate) fn create_test_document(schemas: Value) -> Document {
  create_test_document_with_paths(schemas, json!({}))
}

pub(crate) fn create_test_document_with_paths(schemas: Value, paths: Value) -> Document {
  let document = json!({
    "openapi": "3.0.0",
    "info": { "title": "Test API", "version": "1.0.0" },
    "paths": paths,
    "components": { "schemas": schemas }
  });
  serde_json::from_value(document).expect("test document should deserialize")
}

pub(crate) fn petstore() -> Document {
  parse_document(include_bytes!("../../../fixtures/petstore.yaml"), SpecFormat::Yaml)
    .expect("petstore fixture should parse")
}

pub(crate) fn generate(document: &Document, config: CodegenConfig) -> GenerationOutput {
  Orchestrator::new(document, config)
    .and_then(|orchestrator| orchestrator.generate())
    .expect("generation should succeed")
}
