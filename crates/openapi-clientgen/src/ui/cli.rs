use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};
use crate::generator::config::{ContainerStrategy, MethodNaming};

#[derive(Parser, Debug)]
#[command(name = "openapi-clientgen")]
#[command(author, version, about = "OpenAPI client model generator", styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from an OpenAPI document
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Resolve an OpenAPI document into a client model
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerateCommand {
  /// Path to the OpenAPI document (JSON, or YAML by extension)
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Path where the resolved model is written as JSON
  #[arg(short, long, value_name = "FILE")]
  pub output: PathBuf,

  /// JSON settings file; command line flags take precedence over it
  #[arg(long, value_name = "FILE")]
  pub settings: Option<PathBuf>,

  /// Root namespace of the generated types
  #[arg(long, value_name = "NAME")]
  pub namespace: Option<String>,

  /// How operations are grouped into containers
  #[arg(long, value_enum)]
  pub container_strategy: Option<ContainerStrategy>,

  /// Container used by the single strategy and for operations without a tag or path segment
  #[arg(long, value_name = "NAME")]
  pub container_name: Option<String>,

  /// Suffix appended to tag and path container names
  #[arg(long, value_name = "SUFFIX")]
  pub container_suffix: Option<String>,

  /// Where method names come from
  #[arg(long, value_enum)]
  pub method_naming: Option<MethodNaming>,

  /// Emit an async variant next to every sync method
  #[arg(long, default_value_t = false)]
  pub sync_and_async: bool,

  /// Carry validation constraints onto properties
  #[arg(long, default_value_t = false)]
  pub decorations: bool,

  /// Fail the whole run on an enum member literal that cannot be represented
  #[arg(long, default_value_t = false)]
  pub strict_enum_literals: bool,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all operations with the method and container they map to
  Operations(ListOperationsCommand),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListOperationsCommand {
  /// Path to the OpenAPI document
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// JSON settings file; command line flags take precedence over it
  #[arg(long, value_name = "FILE")]
  pub settings: Option<PathBuf>,

  /// How operations are grouped into containers
  #[arg(long, value_enum)]
  pub container_strategy: Option<ContainerStrategy>,

  /// Where method names come from
  #[arg(long, value_enum)]
  pub method_naming: Option<MethodNaming>,
}
