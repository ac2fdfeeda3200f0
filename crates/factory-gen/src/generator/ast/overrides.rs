use std::collections::BTreeMap;

/// String keyed table of Dart expressions used as field fallbacks.
pub type OverrideMap = BTreeMap<String, String>;

static EMPTY: OverrideMap = BTreeMap::new();

/// The three override layers consulted while resolving a field default.
///
/// Every layer is borrowed: the field and class tables come from the class being
/// generated, the type table is shared by every pass of a run.
#[derive(Debug, Clone, Copy)]
pub struct DefaultOverrides<'a> {
  field_level: &'a OverrideMap,
  class_level: &'a OverrideMap,
  global_level: &'a OverrideMap,
}

impl Default for DefaultOverrides<'_> {
  fn default() -> Self {
    Self::new()
  }
}

impl<'a> DefaultOverrides<'a> {
  pub fn new() -> Self {
    Self {
      field_level: &EMPTY,
      class_level: &EMPTY,
      global_level: &EMPTY,
    }
  }

  /// Per-field annotation values, keyed by field name.
  #[must_use]
  pub fn with_field_level(mut self, overrides: &'a OverrideMap) -> Self {
    self.field_level = overrides;
    self
  }

  /// Class annotation table, keyed by field name.
  #[must_use]
  pub fn with_class_level(mut self, overrides: &'a OverrideMap) -> Self {
    self.class_level = overrides;
    self
  }

  /// Project-wide table, keyed by rendered type string.
  #[must_use]
  pub fn with_global_level(mut self, overrides: &'a OverrideMap) -> Self {
    self.global_level = overrides;
    self
  }

  pub fn field_override(&self, field_name: &str) -> Option<&'a str> {
    self.field_level.get(field_name).map(String::as_str)
  }

  pub fn class_override(&self, field_name: &str) -> Option<&'a str> {
    self.class_level.get(field_name).map(String::as_str)
  }

  pub fn type_override(&self, rendered_type: &str) -> Option<&'a str> {
    self.global_level.get(rendered_type).map(String::as_str)
  }
}
