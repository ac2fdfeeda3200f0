use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};
use crossterm::style::Stylize;
use factory_gen::generator::{
  codegen::FactoryDef,
  orchestrator::{GeneratorSettings, Orchestrator},
};

use super::{load_descriptors, load_project_config};
use crate::ui::{Colors, ListCommand, colors::to_comfy, term_width};

fn build_table(defs: &[FactoryDef], colors: &Colors) -> Table {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  for title in ["MODEL", "FIELD", "TYPE", "DEFAULT", "SOURCE"] {
    header.add_cell(Cell::new(title).fg(to_comfy(colors.label())));
  }
  table.set_header(header);

  for def in defs {
    for param in &def.params {
      let mut row = Row::new();
      row.add_cell(
        Cell::new(&def.model)
          .fg(to_comfy(colors.value()))
          .add_attribute(Attribute::Bold),
      );
      row.add_cell(Cell::new(&param.name).fg(to_comfy(colors.primary())));
      row.add_cell(Cell::new(&param.dart_type).fg(to_comfy(colors.accent())));
      row.add_cell(Cell::new(&param.fallback).fg(to_comfy(colors.value())));
      row.add_cell(
        Cell::new(param.source)
          .fg(to_comfy(colors.timestamp()))
          .set_alignment(CellAlignment::Right),
      );
      table.add_row(row);
    }
  }

  table
}

pub async fn list_defaults(command: ListCommand, colors: &Colors) -> anyhow::Result<()> {
  let document = load_descriptors(&command.input).await?;
  let config = load_project_config(&command.defaults).await?;
  let settings: GeneratorSettings = config.into_settings(false);
  let orchestrator = Orchestrator::new(document, settings);

  let mut defs = vec![];
  for class in &orchestrator.document().classes {
    match orchestrator.resolve_class(class) {
      Ok(def) => defs.push(def),
      Err(err) => eprintln!(
        "{} {}",
        "Skipped:".with(colors.accent()),
        err.to_string().with(colors.primary())
      ),
    }
  }

  println!("{}", build_table(&defs, colors));

  Ok(())
}
