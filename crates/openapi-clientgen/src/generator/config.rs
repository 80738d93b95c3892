use clap::ValueEnum;
use serde::Deserialize;

use crate::generator::errors::GenerationError;

pub const DEFAULT_NAMESPACE: &str = "MyNS";
pub const DEFAULT_CONTAINER_NAME: &str = "Misc";
pub const DEFAULT_CONTAINER_SUFFIX: &str = "Client";

/// How operations are grouped into client containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum ContainerStrategy {
  /// Every operation goes into one container
  #[default]
  Single,
  /// One container per first tag
  Tags,
  /// One container per first static path segment
  Path,
}

/// Where method names come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum MethodNaming {
  /// `operationId`, falling back to method and path when absent
  #[default]
  OperationId,
  /// HTTP method followed by the path segments
  PathMethod,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, bon::Builder)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
#[allow(clippy::struct_excessive_bools)]
pub struct CodegenConfig {
  #[builder(default = DEFAULT_NAMESPACE.to_string(), into)]
  pub namespace: String,
  #[builder(default)]
  pub container_strategy: ContainerStrategy,
  #[builder(default = DEFAULT_CONTAINER_NAME.to_string(), into)]
  pub container_name: String,
  #[builder(default = DEFAULT_CONTAINER_SUFFIX.to_string(), into)]
  pub container_suffix: String,
  #[builder(default)]
  pub method_naming: MethodNaming,
  #[builder(default)]
  pub sync_and_async: bool,
  #[builder(default)]
  pub decorations: bool,
  #[builder(default)]
  pub strict_enum_literals: bool,
}

impl Default for CodegenConfig {
  fn default() -> Self {
    Self::builder().build()
  }
}

impl CodegenConfig {
  pub fn validate(&self) -> Result<(), GenerationError> {
    let valid_segment = |segment: &str| {
      segment.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
        && segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    };

    if self.namespace.is_empty() || !self.namespace.split('.').all(valid_segment) {
      return Err(GenerationError::InvalidConfig {
        reason: format!("namespace '{}' is not a dotted identifier", self.namespace),
      });
    }

    if self.container_name.is_empty() || !valid_segment(&self.container_name) {
      return Err(GenerationError::InvalidConfig {
        reason: format!("container name '{}' is not an identifier", self.container_name),
      });
    }

    if !self.container_suffix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
      return Err(GenerationError::InvalidConfig {
        reason: format!("container suffix '{}' is not an identifier fragment", self.container_suffix),
      });
    }

    Ok(())
  }
}
