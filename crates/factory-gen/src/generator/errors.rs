use thiserror::Error;

use crate::generator::ast::ElementKind;

/// Fatal failure of a single generation pass.
///
/// A failed pass never affects the passes of other annotated elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
  #[error("`{name}` is a {kind}; factories can only be generated for classes")]
  InvalidTarget { name: String, kind: ElementKind },
}

impl GenerationError {
  pub fn element_name(&self) -> &str {
    match self {
      Self::InvalidTarget { name, .. } => name,
    }
  }
}
