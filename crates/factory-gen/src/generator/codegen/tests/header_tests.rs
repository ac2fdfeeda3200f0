use crate::generator::codegen::render_header;

#[test]
fn test_header_without_library() {
  let header = render_header("models.json", None);
  assert_eq!(
    header,
    "// GENERATED CODE - DO NOT MODIFY BY HAND\n// Source: models.json\n// Generated by `factory-gen`\n"
  );
}

#[test]
fn test_header_with_part_of_directive() {
  let header = render_header("lib/models.json", Some("user.dart"));
  assert!(header.starts_with("// GENERATED CODE - DO NOT MODIFY BY HAND\n"));
  assert!(header.contains("// Source: lib/models.json\n"));
  assert!(header.ends_with("\npart of 'user.dart';\n"));
}
