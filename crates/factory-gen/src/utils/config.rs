//! Project configuration via `factory_gen.toml`.
//!
//! ```toml
//! [factory_gen]
//! sentinel_date = "2000-01-01"
//! file_suffix = ".factory.dart"
//! header = true
//!
//! [factory_gen.type_defaults]
//! String = "'lorem'"
//! "List<String>" = "['a', 'b']"
//! ```

use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::generator::{
  ast::OverrideMap,
  orchestrator::{DEFAULT_FILE_SUFFIX, GeneratorSettings},
  resolver::DEFAULT_SENTINEL_DATE,
};

/// Name of the project config file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "factory_gen.toml";

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
  #[serde(default)]
  factory_gen: FactoryGenSection,
}

#[derive(Debug, Deserialize)]
struct FactoryGenSection {
  #[serde(default = "default_sentinel_date")]
  sentinel_date: NaiveDate,
  #[serde(default = "default_file_suffix")]
  file_suffix: String,
  #[serde(default = "default_header")]
  header: bool,
  #[serde(default, alias = "defaults")]
  type_defaults: toml::Table,
}

impl Default for FactoryGenSection {
  fn default() -> Self {
    Self {
      sentinel_date: default_sentinel_date(),
      file_suffix: default_file_suffix(),
      header: default_header(),
      type_defaults: toml::Table::new(),
    }
  }
}

fn default_sentinel_date() -> NaiveDate {
  DEFAULT_SENTINEL_DATE
}

fn default_file_suffix() -> String {
  DEFAULT_FILE_SUFFIX.to_string()
}

fn default_header() -> bool {
  true
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
  pub sentinel_date: NaiveDate,
  pub file_suffix: String,
  pub header: bool,
  pub type_defaults: OverrideMap,
}

impl Default for ProjectConfig {
  fn default() -> Self {
    FactoryGenSection::default().into()
  }
}

impl From<FactoryGenSection> for ProjectConfig {
  fn from(section: FactoryGenSection) -> Self {
    // Non-string values are dropped so the type falls back to its built-in default.
    let type_defaults = section
      .type_defaults
      .into_iter()
      .filter_map(|(key, value)| match value {
        toml::Value::String(expression) => Some((key, expression)),
        _ => None,
      })
      .collect();

    Self {
      sentinel_date: section.sentinel_date,
      file_suffix: section.file_suffix,
      header: section.header,
      type_defaults,
    }
  }
}

impl ProjectConfig {
  pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
    let file: ConfigFile = toml::from_str(content).context("invalid factory_gen configuration")?;
    Ok(file.factory_gen.into())
  }

  /// Loads `explicit` when given, otherwise `factory_gen.toml` in `search_dir` if present.
  pub async fn load(explicit: Option<&Path>, search_dir: &Path) -> anyhow::Result<Self> {
    let path = match explicit {
      Some(path) => path.to_path_buf(),
      None => {
        let candidate = search_dir.join(CONFIG_FILENAME);
        let exists = tokio::fs::try_exists(&candidate)
          .await
          .with_context(|| format!("failed to check for config at {}", candidate.display()))?;
        if !exists {
          return Ok(Self::default());
        }
        candidate
      }
    };

    let content = tokio::fs::read_to_string(&path)
      .await
      .with_context(|| format!("failed to read config at {}", path.display()))?;
    Self::from_toml_str(&content).with_context(|| format!("in {}", path.display()))
  }

  /// Layers command-line type defaults over the file's table.
  #[must_use]
  pub fn with_type_defaults(mut self, overrides: OverrideMap) -> Self {
    self.type_defaults.extend(overrides);
    self
  }

  pub fn into_settings(self, header: bool) -> GeneratorSettings {
    GeneratorSettings {
      type_defaults: self.type_defaults,
      sentinel_date: self.sentinel_date,
      header: self.header && header,
      file_suffix: self.file_suffix,
    }
  }
}
