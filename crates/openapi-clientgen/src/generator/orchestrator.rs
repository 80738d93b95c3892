//! Entry point of a generation pass.
//!
//! The [`Orchestrator`] owns nothing but the document and the configuration. Every call to
//! [`Orchestrator::generate`] creates a fresh resolution context, so one orchestrator can be
//! run repeatedly and several can run side by side in one process.
//!
//! ```no_run
//! use openapi_clientgen::{generator::{config::CodegenConfig, orchestrator::Orchestrator}, utils::SpecLoader};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let document = SpecLoader::open("petstore.yaml".as_ref()).await?.parse()?;
//! let orchestrator = Orchestrator::new(&document, CodegenConfig::default())?;
//! let output = orchestrator.generate()?;
//!
//! println!("{} types, {} warnings", output.stats.types_generated, output.stats.warnings.len());
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use crate::{
  document::{Document, Info},
  generator::{
    ast::{AliasType, Container, NamespaceNode},
    config::CodegenConfig,
    converter::{
      TypeResolver,
      operations::{ContainerNamer, ContainerNaming, OperationMapper},
    },
    errors::GenerationError,
    metrics::GenerationStats,
  },
};

/// The fully resolved hand-off model for an emitter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedModel {
  pub namespaces: Vec<NamespaceNode>,
  pub aliases: Vec<AliasType>,
  pub containers: Vec<Container>,
}

impl GeneratedModel {
  pub fn namespace(&self, name: &str) -> Option<&NamespaceNode> {
    self.namespaces.iter().find(|namespace| namespace.name == name)
  }

  pub fn container(&self, name: &str) -> Option<&Container> {
    self.containers.iter().find(|container| container.name == name)
  }
}

#[derive(Debug)]
pub struct GenerationOutput {
  pub model: GeneratedModel,
  pub stats: GenerationStats,
}

pub struct Orchestrator<'a> {
  document: &'a Document,
  config: CodegenConfig,
}

impl<'a> Orchestrator<'a> {
  /// Validates `config` and binds it to `document`.
  pub fn new(document: &'a Document, config: CodegenConfig) -> Result<Self, GenerationError> {
    config.validate()?;
    Ok(Self { document, config })
  }

  pub fn config(&self) -> &CodegenConfig {
    &self.config
  }

  pub fn info(&self) -> &Info {
    &self.document.info
  }

  /// Runs one pass with the container naming strategy selected by the configuration.
  pub fn generate(&self) -> Result<GenerationOutput, GenerationError> {
    self.generate_with(ContainerNamer::from_config(&self.config))
  }

  /// Runs one pass: resolves every component schema, reports reference cycles, maps the
  /// operations, then substitutes late aliases and groups the types into namespaces.
  ///
  /// Only an unsupported enum member literal under `strict_enum_literals` aborts the pass.
  pub fn generate_with<N: ContainerNaming>(&self, naming: N) -> Result<GenerationOutput, GenerationError> {
    let mut resolver = TypeResolver::new(self.document, &self.config);
    resolver.resolve_all()?;

    let cycles = resolver.detect_cycles();
    resolver.stats_mut().record_cycles(cycles);

    let containers = OperationMapper::new(self.document, &self.config, naming).map_operations(&mut resolver)?;

    let resolved = resolver.finish();
    Ok(GenerationOutput {
      model: GeneratedModel {
        namespaces: resolved.namespaces,
        aliases: resolved.aliases,
        containers,
      },
      stats: resolved.stats,
    })
  }
}
