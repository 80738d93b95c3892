use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use super::generate::load_settings;
use crate::{
  generator::{ast::Container, config::CodegenConfig, orchestrator::Orchestrator},
  ui::{
    Colors, ListOperationsCommand,
    colors::comfy,
    term_width,
  },
  utils::SpecLoader,
};

/// Prints every mapped operation with the method name and container it resolves to.
pub async fn list_operations(command: ListOperationsCommand, colors: &Colors) -> anyhow::Result<()> {
  let config = listing_config(&command).await?;
  let document = SpecLoader::open(&command.input).await?.parse()?;
  let output = Orchestrator::new(&document, config)?.generate()?;

  println!("{}", operations_table(&output.model.containers, colors));
  Ok(())
}

/// Defaults, then the settings file, then the naming and grouping flags.
async fn listing_config(command: &ListOperationsCommand) -> anyhow::Result<CodegenConfig> {
  let mut config = match &command.settings {
    Some(path) => load_settings(path).await?,
    None => CodegenConfig::default(),
  };
  if let Some(strategy) = command.container_strategy {
    config.container_strategy = strategy;
  }
  if let Some(naming) = command.method_naming {
    config.method_naming = naming;
  }
  Ok(config)
}

fn operations_table(containers: &[Container], colors: &Colors) -> Table {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  for title in ["METHOD NAME", "METHOD", "PATH", "CONTAINER"] {
    header.add_cell(Cell::new(title).fg(comfy(colors.label())));
  }
  table.set_header(header);

  for container in containers {
    for descriptor in container.methods.iter().filter(|descriptor| !descriptor.is_async_variant) {
      let mut row = Row::new();
      row.add_cell(
        Cell::new(&descriptor.method_name)
          .fg(comfy(colors.value()))
          .add_attribute(Attribute::Bold),
      );
      row.add_cell(
        Cell::new(descriptor.http_method.to_string().to_uppercase())
          .fg(comfy(colors.accent()))
          .set_alignment(CellAlignment::Right),
      );
      row.add_cell(Cell::new(&descriptor.path_template).fg(comfy(colors.primary())));
      row.add_cell(Cell::new(&container.name).fg(comfy(colors.info())));
      table.add_row(row);
    }
  }

  table
}
