//! Drives one generation pass per annotated element.
//!
//! Passes share nothing but the immutable type-level defaults, so a failing
//! element is reported without touching the factories of its neighbours.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use inflections::Inflect;
use itertools::Itertools;

use crate::generator::{
  ast::{ClassDescriptor, DescriptorDocument, OverrideMap},
  codegen::{FactoryDef, render_header},
  errors::GenerationError,
  resolver::{DEFAULT_SENTINEL_DATE, DefaultResolver, DefaultSource},
};

pub const DEFAULT_FILE_SUFFIX: &str = ".factory.dart";

/// Run-wide settings shared by every pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
  pub type_defaults: OverrideMap,
  pub sentinel_date: NaiveDate,
  pub header: bool,
  pub file_suffix: String,
}

impl Default for GeneratorSettings {
  fn default() -> Self {
    Self {
      type_defaults: OverrideMap::new(),
      sentinel_date: DEFAULT_SENTINEL_DATE,
      header: true,
      file_suffix: DEFAULT_FILE_SUFFIX.to_string(),
    }
  }
}

/// Output of a successful pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFactory {
  pub def: FactoryDef,
  pub code: String,
  /// Name of the file this fragment is written to in per-class mode.
  pub file_name: String,
}

impl GeneratedFactory {
  pub fn model(&self) -> &str {
    &self.def.model
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStats {
  pub elements_seen: usize,
  pub factories_generated: usize,
  pub fields_resolved: usize,
  pub defaults_by_source: BTreeMap<DefaultSource, usize>,
  pub failures: usize,
  /// Non-fatal problems, such as per-class file names that had to be renamed.
  pub warnings: Vec<String>,
}

impl GenerationStats {
  fn record(&mut self, def: &FactoryDef) {
    self.factories_generated += 1;
    self.fields_resolved += def.params.len();
    for param in &def.params {
      *self.defaults_by_source.entry(param.source).or_default() += 1;
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutput {
  pub header: Option<String>,
  pub factories: Vec<GeneratedFactory>,
  pub failures: Vec<GenerationError>,
  pub stats: GenerationStats,
}

impl GeneratedOutput {
  /// All fragments in one file, sharing a single header.
  pub fn combined(&self) -> String {
    let body = self.factories.iter().map(|factory| factory.code.as_str()).join("\n");
    match &self.header {
      Some(header) => format!("{header}\n{body}"),
      None => body,
    }
  }

  /// One `(file name, contents)` pair per factory.
  pub fn per_class(&self) -> Vec<(String, String)> {
    self
      .factories
      .iter()
      .map(|factory| {
        let contents = match &self.header {
          Some(header) => format!("{header}\n{}", factory.code),
          None => factory.code.clone(),
        };
        (factory.file_name.clone(), contents)
      })
      .collect()
  }

  pub fn has_failures(&self) -> bool {
    !self.failures.is_empty()
  }
}

/// Hands out per-class file names, keeping them unique across one run.
///
/// Distinct models can snake-case to the same stem (`UserDTO`, `UserDto`);
/// later ones get a numeric suffix (`user_dto_2.factory.dart`).
struct FileNames<'a> {
  suffix: &'a str,
  taken: HashMap<String, String>,
}

impl<'a> FileNames<'a> {
  fn new(suffix: &'a str) -> Self {
    Self {
      suffix,
      taken: HashMap::new(),
    }
  }

  /// Returns the file name and, when the natural name was already taken, a warning.
  fn allocate(&mut self, model: &str) -> (String, Option<String>) {
    let stem = model.to_snake_case();
    let natural = format!("{stem}{}", self.suffix);

    let mut file_name = natural.clone();
    let mut counter = 1;
    while self.taken.contains_key(&file_name) {
      counter += 1;
      file_name = format!("{stem}_{counter}{}", self.suffix);
    }

    let warning = self.taken.get(&natural).map(|owner| {
      format!("`{model}` and `{owner}` both map to `{natural}`; writing `{file_name}` instead")
    });
    self.taken.insert(file_name.clone(), model.to_string());
    (file_name, warning)
  }
}

pub struct Orchestrator {
  document: DescriptorDocument,
  settings: GeneratorSettings,
}

impl Orchestrator {
  pub fn new(document: DescriptorDocument, settings: GeneratorSettings) -> Self {
    Self { document, settings }
  }

  pub fn document(&self) -> &DescriptorDocument {
    &self.document
  }

  /// Resolves a single element without rendering it.
  pub fn resolve_class(&self, class: &ClassDescriptor) -> Result<FactoryDef, GenerationError> {
    let resolver =
      DefaultResolver::new(class.overrides(&self.settings.type_defaults)).with_sentinel_date(self.settings.sentinel_date);
    FactoryDef::from_class(class, &resolver)
  }

  /// Runs every pass in document order.
  ///
  /// `source_path` only feeds the file header.
  pub fn generate(&self, source_path: &str) -> GeneratedOutput {
    let mut stats = GenerationStats::default();
    let mut factories = vec![];
    let mut failures = vec![];
    let mut file_names = FileNames::new(&self.settings.file_suffix);

    for class in &self.document.classes {
      stats.elements_seen += 1;
      match self.resolve_class(class) {
        Ok(def) => {
          stats.record(&def);
          let code = def.render();
          let (file_name, warning) = file_names.allocate(&def.model);
          stats.warnings.extend(warning);
          factories.push(GeneratedFactory { def, code, file_name });
        }
        Err(err) => {
          stats.failures += 1;
          failures.push(err);
        }
      }
    }

    let header = self
      .settings
      .header
      .then(|| render_header(source_path, self.document.library.as_deref()));

    GeneratedOutput {
      header,
      factories,
      failures,
      stats,
    }
  }
}
