//! Companion factory generation for Dart data models.
//!
//! Each annotated model gets a `<Model>Factory` with a single `build` method whose
//! optional named arguments fall back to layered defaults: per-field annotation,
//! class annotation table, `null` for nullable fields, project-wide type defaults,
//! and finally built-in literals or a nested factory call.
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]

pub mod generator;
pub mod utils;

#[cfg(test)]
mod fixtures {
  pub const USER_MODELS_JSON: &str = include_str!("../fixtures/user_models.json");
  pub const USER_MODELS_TOML: &str = include_str!("../fixtures/user_models.toml");
  pub const FACTORY_GEN_TOML: &str = include_str!("../fixtures/factory_gen.toml");
}
