use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  document::Document,
  generator::{
    config::CodegenConfig,
    metrics::GenerationStats,
    orchestrator::{GeneratedModel, Orchestrator},
  },
  ui::{Colors, GenerateCommand},
  utils::SpecLoader,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub codegen: CodegenConfig,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  /// Builds the run configuration: defaults, then the settings file, then command line flags.
  pub async fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let settings = match &command.settings {
      Some(path) => load_settings(path).await?,
      None => CodegenConfig::default(),
    };
    Ok(Self::merge(command, settings))
  }

  fn merge(command: GenerateCommand, settings: CodegenConfig) -> Self {
    let GenerateCommand {
      input,
      output,
      settings: _,
      namespace,
      container_strategy,
      container_name,
      container_suffix,
      method_naming,
      sync_and_async,
      decorations,
      strict_enum_literals,
      verbose,
      quiet,
    } = command;

    let codegen = CodegenConfig {
      namespace: namespace.unwrap_or(settings.namespace),
      container_strategy: container_strategy.unwrap_or(settings.container_strategy),
      container_name: container_name.unwrap_or(settings.container_name),
      container_suffix: container_suffix.unwrap_or(settings.container_suffix),
      method_naming: method_naming.unwrap_or(settings.method_naming),
      sync_and_async: sync_and_async || settings.sync_and_async,
      decorations: decorations || settings.decorations,
      strict_enum_literals: strict_enum_literals || settings.strict_enum_literals,
    };

    Self {
      input,
      output,
      codegen,
      verbose,
      quiet,
    }
  }

  async fn load_document(&self) -> anyhow::Result<Document> {
    SpecLoader::open(&self.input).await?.parse()
  }

  async fn write_output(&self, model: &GeneratedModel) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(model)?;
    if let Some(parent) = self.output.parent()
      && !parent.as_os_str().is_empty()
    {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&self.output, json)
      .await
      .with_context(|| format!("failed to write {}", self.output.display()))?;
    Ok(())
  }
}

pub(crate) async fn load_settings(path: &Path) -> anyhow::Result<CodegenConfig> {
  let text = tokio::fs::read_to_string(path)
    .await
    .with_context(|| format!("failed to read settings {}", path.display()))?;
  serde_json::from_str(&text).with_context(|| format!("invalid settings file {}", path.display()))
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading OpenAPI document from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_resolving(&self, title: &str) {
    let message = if title.is_empty() {
      "Resolving types and operations...".to_string()
    } else {
      format!("Resolving types and operations for '{title}'...")
    };
    self.info(&message.with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Types generated:", stats.types_generated.to_string());
    self.stat("", format!("{} classes", stats.classes_generated));
    self.stat("", format!("{} enums", stats.enums_generated));
    if stats.casual_types_generated > 0 {
      self.stat("", format!("{} inline types", stats.casual_types_generated));
    }
    self.stat("Aliases registered:", stats.aliases_registered.to_string());
    self.stat("Operations mapped:", stats.operations_mapped.to_string());
    self.stat("Containers created:", stats.containers_created.to_string());
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }
    let skipped = stats.skipped_count();
    if skipped > 0 {
      self.stat("Skipped:", skipped.to_string());
    }

    self.print_cycles(stats);
    self.print_warnings(stats);
  }

  fn print_cycles(&self, stats: &GenerationStats) {
    if stats.cycles_detected == 0 {
      return;
    }

    self.stat("Cycles:", stats.cycles_detected.to_string());

    if self.config.verbose {
      for (i, cycle) in stats.cycle_details.iter().enumerate() {
        println!(
          "              {}: {}",
          format!("Cycle {}", i + 1).with(self.colors.accent()),
          cycle.join(" -> ").with(self.colors.info())
        );
      }
    }
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    let mut printed_header = false;
    for warning in &stats.warnings {
      if !warning.is_skipped_item() && !self.config.verbose {
        continue;
      }

      if !printed_header {
        println!();
        printed_header = true;
      }

      let label = if warning.is_skipped_item() { "Skipped:" } else { "Warning:" };
      eprintln!(
        "{} {}",
        label.with(self.colors.accent()),
        warning.to_string().with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing model to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully resolved client model".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_model(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let document = config.load_document().await?;

  logger.log_resolving(&document.info.title);
  let orchestrator = Orchestrator::new(&document, config.codegen.clone())?;
  let output = orchestrator.generate()?;
  logger.print_statistics(&output.stats);

  logger.log_writing();
  config.write_output(&output.model).await?;

  logger.log_success();
  Ok(())
}
