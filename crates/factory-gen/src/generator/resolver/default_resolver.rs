use chrono::{Datelike, NaiveDate};
use strum::Display;

use crate::generator::ast::{DefaultOverrides, FieldDescriptor, PrimitiveKind, TypeRef};

pub(crate) const NULL_LITERAL: &str = "null";

const FACTORY_SUFFIX: &str = "Factory";
const BUILD_METHOD: &str = "build";

pub const DEFAULT_SENTINEL_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2000, 1, 1) {
  Some(date) => date,
  None => panic!("invalid sentinel date"),
};

/// Name of the generated factory type for a model.
pub fn factory_name(model_name: &str) -> String {
  format!("{model_name}{FACTORY_SUFFIX}")
}

/// Call into another model's generated factory, e.g. `AddressFactory.build()`.
pub fn nested_factory_call(model_name: &str) -> String {
  format!("{}.{BUILD_METHOD}()", factory_name(model_name))
}

/// Which tier of the resolution order produced a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum DefaultSource {
  #[strum(to_string = "field override")]
  FieldOverride,
  #[strum(to_string = "class override")]
  ClassOverride,
  #[strum(to_string = "nullable")]
  Nullable,
  #[strum(to_string = "type override")]
  TypeOverride,
  #[strum(to_string = "built-in")]
  BuiltIn,
  #[strum(to_string = "nested factory")]
  NestedFactory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDefault {
  pub expression: String,
  pub source: DefaultSource,
}

impl ResolvedDefault {
  fn new(expression: impl Into<String>, source: DefaultSource) -> Self {
    Self {
      expression: expression.into(),
      source,
    }
  }
}

/// Computes the fallback expression of a field.
///
/// Tiers are tried strictly in order and the first hit wins:
/// 1. field-level override
/// 2. class-level override
/// 3. `null` for nullable fields
/// 4. type-level override keyed by the rendered type string
/// 5. built-in literal for enums, primitives and lists
/// 6. the nested model's own factory
#[derive(Debug, Clone, Copy)]
pub struct DefaultResolver<'a> {
  overrides: DefaultOverrides<'a>,
  sentinel_date: NaiveDate,
}

impl<'a> DefaultResolver<'a> {
  pub fn new(overrides: DefaultOverrides<'a>) -> Self {
    Self {
      overrides,
      sentinel_date: DEFAULT_SENTINEL_DATE,
    }
  }

  #[must_use]
  pub fn with_sentinel_date(mut self, sentinel_date: NaiveDate) -> Self {
    self.sentinel_date = sentinel_date;
    self
  }

  pub fn resolve(&self, field: &FieldDescriptor) -> String {
    self.resolve_with_source(field).expression
  }

  pub fn resolve_with_source(&self, field: &FieldDescriptor) -> ResolvedDefault {
    if let Some(expression) = self.overrides.field_override(&field.name) {
      return ResolvedDefault::new(expression, DefaultSource::FieldOverride);
    }

    if let Some(expression) = self.overrides.class_override(&field.name) {
      return ResolvedDefault::new(expression, DefaultSource::ClassOverride);
    }

    if field.is_nullable {
      return ResolvedDefault::new(NULL_LITERAL, DefaultSource::Nullable);
    }

    // `List<T>` is matched as the composed string only, never by its element type.
    if let Some(expression) = self.overrides.type_override(&field.declared_type.to_dart_type()) {
      return ResolvedDefault::new(expression, DefaultSource::TypeOverride);
    }

    if let Some(expression) = self.builtin_default(field) {
      return ResolvedDefault::new(expression, DefaultSource::BuiltIn);
    }

    ResolvedDefault::new(
      nested_factory_call(&field.declared_type.type_name()),
      DefaultSource::NestedFactory,
    )
  }

  fn builtin_default(&self, field: &FieldDescriptor) -> Option<String> {
    match &field.declared_type {
      TypeRef::Enum { name, constants } => constants.first().map(|first| format!("{name}.{first}")),
      TypeRef::Primitive(kind) => Some(self.primitive_literal(*kind)),
      TypeRef::List(element) => {
        let inner = self.resolve(&field.with_element_type(element));
        Some(format!("[{inner}]"))
      }
      TypeRef::Named(_) => None,
    }
  }

  fn primitive_literal(&self, kind: PrimitiveKind) -> String {
    match kind {
      PrimitiveKind::String => "''".to_string(),
      PrimitiveKind::Integer | PrimitiveKind::Number => "0".to_string(),
      PrimitiveKind::Float => "0.0".to_string(),
      PrimitiveKind::Boolean => "false".to_string(),
      PrimitiveKind::DateTime => format!(
        "DateTime({}, {}, {})",
        self.sentinel_date.year(),
        self.sentinel_date.month(),
        self.sentinel_date.day()
      ),
    }
  }
}
