mod builtins;

use crate::generator::ast::{FieldDescriptor, OverrideMap, PrimitiveKind, TypeRef};

pub(super) fn field(name: &str, declared_type: TypeRef) -> FieldDescriptor {
  FieldDescriptor::builder().name(name).declared_type(declared_type).build()
}

pub(super) fn nullable_field(name: &str, declared_type: TypeRef) -> FieldDescriptor {
  FieldDescriptor::builder()
    .name(name)
    .declared_type(declared_type)
    .is_nullable(true)
    .build()
}

pub(super) fn primitive(kind: PrimitiveKind) -> TypeRef {
  TypeRef::primitive(kind)
}

pub(super) fn map(entries: &[(&str, &str)]) -> OverrideMap {
  entries
    .iter()
    .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
    .collect()
}
