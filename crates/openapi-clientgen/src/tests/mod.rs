use serde_json::json;

use crate::{
  generator::{
    config::{CodegenConfig, ContainerStrategy},
    orchestrator::Orchestrator,
  },
  utils::{SpecFormat, spec::parse_document},
};

const PETSTORE: &[u8] = include_bytes!("../../fixtures/petstore.yaml");

#[test]
fn test_petstore_model_serializes_for_emitters() -> anyhow::Result<()> {
  let document = parse_document(PETSTORE, SpecFormat::Yaml)?;
  let config = CodegenConfig::builder().container_strategy(ContainerStrategy::Tags).build();
  let output = Orchestrator::new(&document, config)?.generate()?;
  let model = serde_json::to_value(&output.model)?;

  let pet = &model["namespaces"][0]["types"][1];
  assert_eq!(pet["kind"], "class");
  assert_eq!(pet["name"], "Pet");
  assert_eq!(
    pet["properties"][3]["typeRef"],
    json!({ "kind": "namedType", "target": { "name": "PetStatus" } })
  );

  let cat = &model["namespaces"][0]["types"][2];
  assert_eq!(cat["baseTypeName"], json!({ "name": "Pet" }));

  assert_eq!(
    model["aliases"][0],
    json!({
      "name": "Tag",
      "target": { "kind": "arrayOf", "target": [{ "kind": "namedType", "target": { "name": "SomeObject" } }, 1] },
      "targetExpression": "SomeObject[]"
    })
  );

  let list_pets = &model["containers"][0]["methods"][0];
  assert_eq!(list_pets["httpMethod"], "get");
  assert_eq!(list_pets["methodName"], "ListPets");
  assert_eq!(list_pets["containerName"], "PetsClient");
  assert_eq!(list_pets["parameters"][0]["location"], "query");
  Ok(())
}

#[test]
fn test_json_and_yaml_documents_resolve_alike() -> anyhow::Result<()> {
  let yaml = parse_document(PETSTORE, SpecFormat::Yaml)?;
  let as_json: serde_json::Value = serde_yaml::from_slice(PETSTORE)?;
  let json = parse_document(&serde_json::to_vec(&as_json)?, SpecFormat::Json)?;
  assert_eq!(yaml, json);

  let first = Orchestrator::new(&yaml, CodegenConfig::default())?.generate()?;
  let second = Orchestrator::new(&json, CodegenConfig::default())?.generate()?;
  assert_eq!(first.model, second.model);
  Ok(())
}
