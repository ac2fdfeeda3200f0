mod factory;

#[cfg(test)]
mod tests;

pub use factory::{BuilderParam, FactoryDef};

use crate::generator::{
  ast::{DefaultOverrides, FieldDescriptor},
  resolver::DefaultResolver,
};

pub const GENERATOR_NAME: &str = "factory-gen";

/// Renders the companion factory for `class_name`.
pub fn emit(class_name: &str, fields: &[FieldDescriptor], overrides: DefaultOverrides<'_>) -> String {
  let resolver = DefaultResolver::new(overrides);
  FactoryDef::from_fields(class_name, fields, &resolver).render()
}

/// File banner placed above generated fragments.
pub fn render_header(source_path: &str, library: Option<&str>) -> String {
  let mut header = format!(
    "// GENERATED CODE - DO NOT MODIFY BY HAND\n// Source: {source_path}\n// Generated by `{GENERATOR_NAME}`\n"
  );

  if let Some(library) = library {
    header.push_str(&format!("\npart of '{library}';\n"));
  }

  header
}
