mod default_resolver;

#[cfg(test)]
mod tests;

pub use default_resolver::{
  DEFAULT_SENTINEL_DATE, DefaultResolver, DefaultSource, ResolvedDefault, factory_name, nested_factory_call,
};

use crate::generator::ast::{DefaultOverrides, FieldDescriptor};

/// Resolves a field's fallback expression with the default sentinel date.
pub fn resolve(field: &FieldDescriptor, overrides: DefaultOverrides<'_>) -> String {
  DefaultResolver::new(overrides).resolve(field)
}
