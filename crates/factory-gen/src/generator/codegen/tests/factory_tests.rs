use std::collections::BTreeMap;

use crate::generator::{
  ast::{ClassDescriptor, DefaultOverrides, ElementKind, FieldDescriptor, OverrideMap, PrimitiveKind, TypeRef},
  codegen::{FactoryDef, emit},
  errors::GenerationError,
  resolver::{DefaultResolver, DefaultSource},
};

fn user_fields() -> Vec<FieldDescriptor> {
  vec![
    FieldDescriptor::builder()
      .name("id")
      .declared_type(PrimitiveKind::Integer.into())
      .build(),
    FieldDescriptor::builder()
      .name("name")
      .declared_type(PrimitiveKind::String.into())
      .build(),
    FieldDescriptor::builder()
      .name("email")
      .declared_type(PrimitiveKind::String.into())
      .is_nullable(true)
      .build(),
  ]
}

#[test]
fn test_emit_user_factory() {
  let code = emit("User", &user_fields(), DefaultOverrides::default());

  let expected = "\
class UserFactory {
  static User build({
    int? id,
    String? name,
    String? email,
  }) {
    return User(
      id: id ?? 0,
      name: name ?? '',
      email: email ?? null,
    );
  }
}
";
  assert_eq!(code, expected);
}

#[test]
fn test_emit_renders_nullable_parameter_once_optional() {
  let fields = vec![
    FieldDescriptor::builder()
      .name("tags")
      .declared_type(TypeRef::list(PrimitiveKind::String.into()))
      .is_nullable(true)
      .build(),
  ];

  let code = emit("Post", &fields, DefaultOverrides::default());
  assert!(code.contains("    List<String>? tags,\n"));
  assert!(!code.contains("??,"));
  assert!(code.contains("      tags: tags ?? null,\n"));
}

#[test]
fn test_emit_class_without_fields() {
  let code = emit("Marker", &[], DefaultOverrides::default());

  let expected = "\
class MarkerFactory {
  static Marker build() {
    return Marker();
  }
}
";
  assert_eq!(code, expected);
}

#[test]
fn test_emit_preserves_declaration_order() {
  let fields = vec![
    FieldDescriptor::builder()
      .name("zeta")
      .declared_type(PrimitiveKind::Boolean.into())
      .build(),
    FieldDescriptor::builder()
      .name("alpha")
      .declared_type(PrimitiveKind::Float.into())
      .build(),
    FieldDescriptor::builder()
      .name("mid")
      .declared_type(TypeRef::named("Address"))
      .build(),
  ];

  let code = emit("Ordered", &fields, DefaultOverrides::default());
  let zeta = code.find("zeta: zeta ?? false").unwrap();
  let alpha = code.find("alpha: alpha ?? 0.0").unwrap();
  let mid = code.find("mid: mid ?? AddressFactory.build()").unwrap();
  assert!(zeta < alpha && alpha < mid);
}

#[test]
fn test_emit_uses_override_text_verbatim() {
  let field_level: OverrideMap = BTreeMap::from([("email".to_string(), "'ada@example.com'".to_string())]);
  let class_level: OverrideMap = BTreeMap::from([("id".to_string(), "1001".to_string())]);
  let overrides = DefaultOverrides::new()
    .with_field_level(&field_level)
    .with_class_level(&class_level);

  let code = emit("User", &user_fields(), overrides);
  assert!(code.contains("id: id ?? 1001,"));
  assert!(code.contains("email: email ?? 'ada@example.com',"));
  assert!(code.contains("name: name ?? '',"));
}

#[test]
fn test_factory_def_records_sources() {
  let resolver = DefaultResolver::new(DefaultOverrides::default());
  let def = FactoryDef::from_fields("User", &user_fields(), &resolver);

  assert_eq!(def.name, "UserFactory");
  assert_eq!(def.model, "User");
  let summary: Vec<(&str, &str, &str, DefaultSource)> = def
    .params
    .iter()
    .map(|param| {
      (
        param.name.as_str(),
        param.dart_type.as_str(),
        param.fallback.as_str(),
        param.source,
      )
    })
    .collect();
  assert_eq!(
    summary,
    vec![
      ("id", "int?", "0", DefaultSource::BuiltIn),
      ("name", "String?", "''", DefaultSource::BuiltIn),
      ("email", "String?", "null", DefaultSource::Nullable),
    ]
  );
}

#[test]
fn test_from_class_rejects_non_class_targets() {
  let resolver = DefaultResolver::new(DefaultOverrides::default());
  let cases = [
    ElementKind::Function,
    ElementKind::TopLevelVariable,
    ElementKind::Mixin,
    ElementKind::Enum,
    ElementKind::Extension,
    ElementKind::Other("typedef".to_string()),
  ];

  for kind in cases {
    let class = ClassDescriptor::builder().name("helper").kind(kind.clone()).build();
    let err = FactoryDef::from_class(&class, &resolver).unwrap_err();
    assert_eq!(
      err,
      GenerationError::InvalidTarget {
        name: "helper".to_string(),
        kind,
      }
    );
    assert!(err.to_string().contains("factories can only be generated for classes"));
  }
}

#[test]
fn test_from_class_accepts_classes() {
  let resolver = DefaultResolver::new(DefaultOverrides::default());
  let class = ClassDescriptor::builder().name("User").fields(user_fields()).build();

  let def = FactoryDef::from_class(&class, &resolver).unwrap();
  assert_eq!(def.params.len(), 3);
}
