#![allow(clippy::missing_errors_doc)]
use clap::Parser;
use openapi_clientgen::ui::{self, Cli, Colors, Commands, ListCommands, colors};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = Colors::new(colors::colors_enabled(cli.color), colors::detect_theme(cli.theme));

  match cli.command {
    Commands::List { list_command } => match list_command {
      ListCommands::Operations(command) => ui::commands::list_operations(command, &colors).await?,
    },
    Commands::Generate(command) => {
      let config = ui::commands::GenerateConfig::from_command(command).await?;
      ui::commands::generate_model(config, &colors).await?;
    }
  }

  Ok(())
}
