//! Loading of the descriptor documents produced by the discovery front-end.

use std::{ffi::OsStr, path::Path};

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::generator::ast::{ClassDescriptor, DescriptorDocument, ElementKind, FieldDescriptor, OverrideMap, TypeRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescriptorFormat {
  #[default]
  Json,
  Toml,
}

impl DescriptorFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "toml" => Self::Toml,
      _ => Self::Json,
    }
  }

  #[must_use]
  pub fn from_path(path: &Path) -> Self {
    path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(Self::default(), Self::from_extension)
  }
}

#[derive(Debug, Deserialize)]
struct RawDocument {
  #[serde(default)]
  library: Option<String>,
  #[serde(default)]
  classes: Vec<RawClass>,
}

#[derive(Debug, Deserialize)]
struct RawClass {
  name: String,
  #[serde(default)]
  kind: ElementKind,
  #[serde(default)]
  defaults: Map<String, Value>,
  #[serde(default)]
  fields: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
struct RawField {
  name: String,
  #[serde(rename = "type")]
  declared_type: TypeRef,
  #[serde(default)]
  nullable: bool,
  #[serde(default)]
  default: Option<Value>,
  #[serde(default, rename = "static")]
  is_static: bool,
  #[serde(default)]
  synthetic: bool,
  #[serde(default = "default_public")]
  public: bool,
}

fn default_public() -> bool {
  true
}

impl RawField {
  /// Static, compiler-generated and private members never reach a factory.
  fn is_instance_field(&self) -> bool {
    !self.is_static && !self.synthetic && self.public
  }
}

/// Keeps string entries only; anything else falls through to the next tier.
fn string_entries<'a>(entries: impl IntoIterator<Item = (&'a String, &'a Value)>) -> OverrideMap {
  entries
    .into_iter()
    .filter_map(|(key, value)| value.as_str().map(|text| (key.clone(), text.to_string())))
    .collect()
}

impl From<RawClass> for ClassDescriptor {
  fn from(raw: RawClass) -> Self {
    let fields: Vec<RawField> = raw.fields.into_iter().filter(RawField::is_instance_field).collect();

    let field_defaults = string_entries(
      fields
        .iter()
        .filter_map(|field| field.default.as_ref().map(|value| (&field.name, value))),
    );
    let class_defaults = string_entries(&raw.defaults);

    let fields = fields
      .into_iter()
      .map(|field| {
        FieldDescriptor::builder()
          .name(field.name)
          .declared_type(field.declared_type)
          .is_nullable(field.nullable)
          .build()
      })
      .collect();

    ClassDescriptor::builder()
      .name(raw.name)
      .kind(raw.kind)
      .fields(fields)
      .field_defaults(field_defaults)
      .class_defaults(class_defaults)
      .build()
  }
}

impl From<RawDocument> for DescriptorDocument {
  fn from(raw: RawDocument) -> Self {
    Self {
      library: raw.library,
      classes: raw.classes.into_iter().map(ClassDescriptor::from).collect(),
    }
  }
}

pub fn parse_descriptors(content: &str, format: DescriptorFormat) -> anyhow::Result<DescriptorDocument> {
  let raw: RawDocument = match format {
    DescriptorFormat::Json => serde_json::from_str(content).context("invalid JSON descriptor document")?,
    DescriptorFormat::Toml => toml::from_str(content).context("invalid TOML descriptor document")?,
  };
  Ok(raw.into())
}

pub struct DescriptorLoader {
  file: AsyncMmapFile,
  format: DescriptorFormat,
}

impl DescriptorLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let format = DescriptorFormat::from_path(path);
    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("failed to open descriptors at {}", path.display()))?;

    Ok(Self { file, format })
  }

  pub fn parse(&self) -> anyhow::Result<DescriptorDocument> {
    let content = std::str::from_utf8(self.file.as_slice()).context("descriptor document is not valid UTF-8")?;
    parse_descriptors(content, self.format)
  }
}
