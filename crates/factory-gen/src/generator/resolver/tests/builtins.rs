use chrono::NaiveDate;

use super::{field, map, nullable_field, primitive};
use crate::generator::{
  ast::{DefaultOverrides, PrimitiveKind, TypeRef},
  resolver::{DefaultResolver, DefaultSource, factory_name, nested_factory_call, resolve},
};

#[test]
fn test_primitive_builtins() {
  let cases = [
    (PrimitiveKind::String, "''"),
    (PrimitiveKind::Integer, "0"),
    (PrimitiveKind::Float, "0.0"),
    (PrimitiveKind::Number, "0"),
    (PrimitiveKind::Boolean, "false"),
    (PrimitiveKind::DateTime, "DateTime(2000, 1, 1)"),
  ];

  for (kind, expected) in cases {
    let resolved = resolve(&field("value", primitive(kind)), DefaultOverrides::default());
    assert_eq!(resolved, expected, "built-in for {kind}");
  }
}

#[test]
fn test_sentinel_date_is_configurable() {
  let sentinel = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
  let resolver = DefaultResolver::new(DefaultOverrides::default()).with_sentinel_date(sentinel);

  assert_eq!(
    resolver.resolve(&field("createdAt", primitive(PrimitiveKind::DateTime))),
    "DateTime(1999, 12, 31)"
  );
}

#[test]
fn test_enum_uses_first_declared_constant() {
  let role = field("role", TypeRef::enumeration("UserRole", ["admin", "member", "guest"]));
  assert_eq!(resolve(&role, DefaultOverrides::default()), "UserRole.admin");

  let reordered = field("role", TypeRef::enumeration("UserRole", ["guest", "admin", "member"]));
  assert_eq!(resolve(&reordered, DefaultOverrides::default()), "UserRole.guest");
}

#[test]
fn test_empty_enum_falls_back_to_nested_factory() {
  let resolver = DefaultResolver::new(DefaultOverrides::default());
  let resolved = resolver.resolve_with_source(&field("status", TypeRef::enumeration("Status", Vec::<String>::new())));

  assert_eq!(resolved.expression, "StatusFactory.build()");
  assert_eq!(resolved.source, DefaultSource::NestedFactory);
}

#[test]
fn test_named_type_calls_nested_factory() {
  let resolver = DefaultResolver::new(DefaultOverrides::default());
  let resolved = resolver.resolve_with_source(&field("address", TypeRef::named("Address")));

  assert_eq!(resolved.expression, "AddressFactory.build()");
  assert_eq!(resolved.source, DefaultSource::NestedFactory);
}

#[test]
fn test_lists_wrap_a_single_resolved_element() {
  let cases = [
    (TypeRef::list(primitive(PrimitiveKind::Integer)), "[0]"),
    (TypeRef::list(primitive(PrimitiveKind::String)), "['']"),
    (TypeRef::list(TypeRef::named("Tag")), "[TagFactory.build()]"),
    (TypeRef::list(TypeRef::enumeration("Color", ["red", "blue"])), "[Color.red]"),
    (TypeRef::list(TypeRef::list(primitive(PrimitiveKind::Boolean))), "[[false]]"),
  ];

  for (declared_type, expected) in cases {
    let rendered = declared_type.to_dart_type();
    let resolved = resolve(&field("items", declared_type), DefaultOverrides::default());
    assert_eq!(resolved, expected, "list default for {rendered}");
  }
}

#[test]
fn test_list_element_consults_type_overrides() {
  let global = map(&[("String", "'tag'")]);
  let overrides = DefaultOverrides::new().with_global_level(&global);

  let tags = field("tags", TypeRef::list(primitive(PrimitiveKind::String)));
  assert_eq!(resolve(&tags, overrides), "['tag']");
}

#[test]
fn test_composed_list_key_wins_over_element_key() {
  let global = map(&[("List<String>", "const []"), ("String", "'tag'")]);
  let overrides = DefaultOverrides::new().with_global_level(&global);
  let resolver = DefaultResolver::new(overrides);

  let resolved = resolver.resolve_with_source(&field("tags", TypeRef::list(primitive(PrimitiveKind::String))));
  assert_eq!(resolved.expression, "const []");
  assert_eq!(resolved.source, DefaultSource::TypeOverride);
}

#[test]
fn test_nullable_list_resolves_to_null() {
  let tags = nullable_field("tags", TypeRef::list(primitive(PrimitiveKind::String)));
  assert_eq!(resolve(&tags, DefaultOverrides::default()), "null");
}

#[test]
fn test_factory_naming_helpers() {
  assert_eq!(factory_name("User"), "UserFactory");
  assert_eq!(nested_factory_call("Address"), "AddressFactory.build()");
}
