pub(crate) const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";
pub(crate) const PARAMETER_REF_PREFIX: &str = "#/components/parameters/";
pub(crate) const REQUEST_BODY_REF_PREFIX: &str = "#/components/requestBodies/";
pub(crate) const RESPONSE_REF_PREFIX: &str = "#/components/responses/";

/// Parses a local `$ref` and extracts the component key under `prefix`.
///
/// The remainder is a JSON Pointer segment, so `~1` and `~0` are decoded back to `/` and `~`.
/// Returns `None` for external references, references into another component section,
/// and references that name a nested pointer rather than a component.
pub(crate) fn parse_ref(reference: &str, prefix: &str) -> Option<String> {
  let segment = reference.strip_prefix(prefix)?;
  if segment.is_empty() || segment.contains('/') {
    return None;
  }
  Some(segment.replace("~1", "/").replace("~0", "~"))
}

pub(crate) fn parse_schema_ref(reference: &str) -> Option<String> {
  parse_ref(reference, SCHEMA_REF_PREFIX)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_schema_ref() {
    assert_eq!(parse_schema_ref("#/components/schemas/Pet"), Some("Pet".to_string()));
    assert_eq!(
      parse_schema_ref("#/components/schemas/My.Demo.Pet"),
      Some("My.Demo.Pet".to_string())
    );
    assert_eq!(parse_schema_ref("#/components/schemas/a~1b~0c"), Some("a/b~c".to_string()));
  }

  #[test]
  fn test_parse_ref_rejects_foreign_targets() {
    assert_eq!(parse_schema_ref("#/components/parameters/limit"), None);
    assert_eq!(parse_schema_ref("other.yaml#/components/schemas/Pet"), None);
    assert_eq!(parse_schema_ref("#/components/schemas/"), None);
    assert_eq!(parse_schema_ref("#/components/schemas/Pet/properties/name"), None);
    assert_eq!(
      parse_ref("#/components/parameters/limit", PARAMETER_REF_PREFIX),
      Some("limit".to_string())
    );
  }
}
