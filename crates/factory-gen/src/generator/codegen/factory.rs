use itertools::Itertools;

use crate::generator::{
  ast::{ClassDescriptor, FieldDescriptor},
  errors::GenerationError,
  resolver::{DefaultResolver, DefaultSource, factory_name},
};

const INDENT: &str = "  ";

/// One optional named argument of the generated `build` method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderParam {
  pub name: String,
  /// Parameter type, always rendered optional.
  pub dart_type: String,
  pub fallback: String,
  pub source: DefaultSource,
}

impl BuilderParam {
  fn from_field(field: &FieldDescriptor, resolver: &DefaultResolver<'_>) -> Self {
    let resolved = resolver.resolve_with_source(field);
    Self {
      name: field.name.clone(),
      dart_type: field.declared_type.to_optional_dart_type(),
      fallback: resolved.expression,
      source: resolved.source,
    }
  }
}

/// Resolved shape of a companion factory, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryDef {
  pub name: String,
  pub model: String,
  pub params: Vec<BuilderParam>,
}

impl FactoryDef {
  /// Resolves every field once, in declaration order.
  pub fn from_fields(model: &str, fields: &[FieldDescriptor], resolver: &DefaultResolver<'_>) -> Self {
    Self {
      name: factory_name(model),
      model: model.to_string(),
      params: fields
        .iter()
        .map(|field| BuilderParam::from_field(field, resolver))
        .collect(),
    }
  }

  /// Like [`FactoryDef::from_fields`], but rejects declarations without a constructor.
  pub fn from_class(class: &ClassDescriptor, resolver: &DefaultResolver<'_>) -> Result<Self, GenerationError> {
    if !class.kind.is_class_like() {
      return Err(GenerationError::InvalidTarget {
        name: class.name.clone(),
        kind: class.kind.clone(),
      });
    }
    Ok(Self::from_fields(&class.name, &class.fields, resolver))
  }

  pub fn render(&self) -> String {
    let signature = self.render_signature();
    let construction = self.render_construction();

    format!(
      "class {name} {{\n{INDENT}{signature} {{\n{INDENT}{INDENT}return {construction};\n{INDENT}}}\n}}\n",
      name = self.name,
    )
  }

  fn render_signature(&self) -> String {
    if self.params.is_empty() {
      return format!("static {} build()", self.model);
    }

    let params = self
      .params
      .iter()
      .map(|param| format!("{INDENT}{INDENT}{} {},", param.dart_type, param.name))
      .join("\n");

    format!("static {} build({{\n{params}\n{INDENT}}})", self.model)
  }

  fn render_construction(&self) -> String {
    if self.params.is_empty() {
      return format!("{}()", self.model);
    }

    let args = self
      .params
      .iter()
      .map(|param| format!("{INDENT}{INDENT}{INDENT}{name}: {name} ?? {},", param.fallback, name = param.name))
      .join("\n");

    format!("{}(\n{args}\n{INDENT}{INDENT})", self.model)
  }
}
