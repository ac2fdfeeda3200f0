pub mod generate;
pub mod list;

use std::path::Path;

use anyhow::Context;
use factory_gen::{
  generator::ast::{DescriptorDocument, OverrideMap},
  utils::{DescriptorLoader, ProjectConfig},
};

pub use generate::{GenerateConfig, generate_code};
pub use list::list_defaults;

use crate::ui::DefaultsArgs;

/// Parses repeated `TYPE=EXPR` flags. Only the first `=` separates the type.
pub(crate) fn parse_type_defaults(entries: &[String]) -> anyhow::Result<OverrideMap> {
  let mut map = OverrideMap::new();
  for entry in entries {
    let (type_name, expression) = entry.split_once('=').ok_or_else(|| {
      anyhow::anyhow!("Invalid type default '{entry}': expected TYPE=EXPR (e.g., String='lorem')")
    })?;
    let type_name = type_name.trim();
    if type_name.is_empty() {
      anyhow::bail!("Invalid type default '{entry}': type name is empty");
    }
    map.insert(type_name.to_string(), expression.to_string());
  }
  Ok(map)
}

pub(crate) async fn load_project_config(args: &DefaultsArgs) -> anyhow::Result<ProjectConfig> {
  let cli_defaults = parse_type_defaults(&args.type_defaults)?;
  let search_dir = std::env::current_dir().context("failed to read the working directory")?;
  let config = ProjectConfig::load(args.config.as_deref(), &search_dir).await?;
  Ok(config.with_type_defaults(cli_defaults))
}

pub(crate) async fn load_descriptors(input: &Path) -> anyhow::Result<DescriptorDocument> {
  DescriptorLoader::open(input).await?.parse()
}
