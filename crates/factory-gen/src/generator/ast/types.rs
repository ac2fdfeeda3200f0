use serde::Deserialize;
use strum::Display;

const LIST_TYPE_NAME: &str = "List";

/// Built-in scalar kinds a model field can declare.
///
/// Deserializes from both the rendered Dart name (`int`) and the kind name (`integer`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Display)]
pub enum PrimitiveKind {
  #[serde(rename = "String", alias = "string")]
  #[strum(to_string = "String")]
  String,
  #[serde(rename = "int", alias = "integer")]
  #[strum(to_string = "int")]
  Integer,
  #[serde(rename = "double", alias = "float")]
  #[strum(to_string = "double")]
  Float,
  #[serde(rename = "num", alias = "number")]
  #[strum(to_string = "num")]
  Number,
  #[serde(rename = "bool", alias = "boolean")]
  #[strum(to_string = "bool")]
  Boolean,
  #[serde(rename = "DateTime", alias = "datetime")]
  #[strum(to_string = "DateTime")]
  DateTime,
}

/// Declared type of a model field, without nullability.
///
/// Nullability is carried by [`super::FieldDescriptor`] so that a `TypeRef` always
/// renders the same string the global `type_defaults` table is keyed by.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
  Primitive(PrimitiveKind),
  Enum {
    name: String,
    /// Declared members in source order; the first one is the default.
    #[serde(default)]
    constants: Vec<String>,
  },
  List(Box<TypeRef>),
  /// Another model, expected to have a generated factory of its own.
  Named(String),
}

impl TypeRef {
  pub fn primitive(kind: PrimitiveKind) -> Self {
    Self::Primitive(kind)
  }

  pub fn enumeration<I, S>(name: impl Into<String>, constants: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self::Enum {
      name: name.into(),
      constants: constants.into_iter().map(Into::into).collect(),
    }
  }

  pub fn list(element: TypeRef) -> Self {
    Self::List(Box::new(element))
  }

  pub fn named(name: impl Into<String>) -> Self {
    Self::Named(name.into())
  }

  /// Bare type name, without generic arguments.
  pub fn type_name(&self) -> String {
    match self {
      Self::Primitive(kind) => kind.to_string(),
      Self::Enum { name, .. } | Self::Named(name) => name.clone(),
      Self::List(_) => LIST_TYPE_NAME.to_string(),
    }
  }

  /// Full Dart type string as it appears in source, e.g. `List<UserRole>`.
  pub fn to_dart_type(&self) -> String {
    match self {
      Self::List(element) => format!("{LIST_TYPE_NAME}<{}>", element.to_dart_type()),
      _ => self.type_name(),
    }
  }

  /// Dart type string with a trailing `?`.
  pub fn to_optional_dart_type(&self) -> String {
    format!("{}?", self.to_dart_type())
  }
}

impl From<PrimitiveKind> for TypeRef {
  fn from(kind: PrimitiveKind) -> Self {
    TypeRef::Primitive(kind)
  }
}

impl std::fmt::Display for TypeRef {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.to_dart_type())
  }
}
