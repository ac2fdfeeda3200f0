mod overrides;
mod types;


use serde::Deserialize;

pub use overrides::{DefaultOverrides, OverrideMap};
pub use types::{PrimitiveKind, TypeRef};

/// Kind of declaration the factory annotation was attached to.
///
/// Kinds the front-end reports that are not listed here are kept verbatim in
/// [`ElementKind::Other`] so only that element fails its pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
  #[default]
  Class,
  Mixin,
  Enum,
  Extension,
  Function,
  TopLevelVariable,
  #[serde(untagged)]
  Other(String),
}

impl ElementKind {
  /// Only concrete classes have a constructor a factory can call.
  pub fn is_class_like(&self) -> bool {
    matches!(self, ElementKind::Class)
  }

  pub fn as_str(&self) -> &str {
    match self {
      ElementKind::Class => "class",
      ElementKind::Mixin => "mixin",
      ElementKind::Enum => "enum",
      ElementKind::Extension => "extension",
      ElementKind::Function => "function",
      ElementKind::TopLevelVariable => "top-level variable",
      ElementKind::Other(raw) => raw,
    }
  }
}

impl std::fmt::Display for ElementKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One public instance field of an annotated model.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct FieldDescriptor {
  #[builder(into)]
  pub name: String,
  pub declared_type: TypeRef,
  #[builder(default)]
  pub is_nullable: bool,
}

impl FieldDescriptor {
  /// Non-nullable descriptor of the same name carrying the list's element type.
  pub(crate) fn with_element_type(&self, element: &TypeRef) -> Self {
    Self {
      name: self.name.clone(),
      declared_type: element.clone(),
      is_nullable: false,
    }
  }
}

/// An annotated declaration together with the override tables sourced from its
/// annotations.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct ClassDescriptor {
  #[builder(into)]
  pub name: String,
  #[builder(default)]
  pub kind: ElementKind,
  #[builder(default)]
  pub fields: Vec<FieldDescriptor>,
  /// Values of per-field `default` annotations.
  #[builder(default)]
  pub field_defaults: OverrideMap,
  /// Inline `defaults` table of the class annotation.
  #[builder(default)]
  pub class_defaults: OverrideMap,
}

impl ClassDescriptor {
  pub fn overrides<'a>(&'a self, type_defaults: &'a OverrideMap) -> DefaultOverrides<'a> {
    DefaultOverrides::new()
      .with_field_level(&self.field_defaults)
      .with_class_level(&self.class_defaults)
      .with_global_level(type_defaults)
  }
}

/// Everything the discovery front-end reported for one source library.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptorDocument {
  /// Library the generated fragments belong to, emitted as a `part of` directive.
  pub library: Option<String>,
  pub classes: Vec<ClassDescriptor>,
}
