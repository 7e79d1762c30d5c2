//! Incomplete constructs are dropped; optional attributes are absent, never empty.

use crate::helpers::marker_helpers::*;
use rstest::rstest;
use sdl_extract::*;

#[rstest]
#[case("type Foo %0\n", "object without a body")]
#[case("type Foo {}", "object with an empty body")]
#[case("input Foo {\n   \n}", "input with a blank body")]
#[case("type Foo {\n  a: Int\n", "unclosed body")]
#[case("enum Empty {\n  \"only a description\"\n}", "enum without values")]
#[case("union Nothing =", "union without members")]
#[case("scalar", "scalar without a name")]
#[case("directive %d9 on FIELD", "directive definition with an unknown marker")]
#[case("directive @raw on FIELD", "directive definition that was never encoded")]
fn test_incomplete_constructs_are_dropped(#[case] input: &str, #[case] desc: &str) {
    let model = extract_schema(input, &library_table()).unwrap();
    assert!(model.is_empty(), "{desc} produced {model:?}");
}

#[rstest]
#[case("scalar Date %99")]
#[case("scalar Date")]
#[case("\"   \"\nscalar Date")]
#[case("\"\"\"\n\n\"\"\"\nscalar Date")]
fn test_scalar_attributes_absent(#[case] input: &str) {
    let scalars = extract_scalars(input, &library_table());
    assert_eq!(scalars["Date"], ScalarDefinition::new("Date", false));
}

#[test]
fn test_object_attributes_absent() {
    let types = extract_fielded_types("type Pet {\n  name: String\n}", &library_table());
    let pet = &types.objects["Pet"];
    assert_eq!(pet.description, None);
    assert_eq!(pet.directives, None);
    assert_eq!(pet.implements, None);

    let name = &pet.fields.as_ref().unwrap()["name"];
    assert_eq!(name, &ParameterFieldDefinition::new("name", "String"));
}

#[test]
fn test_unparseable_body_keeps_object_without_fields() {
    let types = extract_fielded_types("type Odd {\n  not a field\n}", &MarkerTable::new());
    assert_eq!(types.objects["Odd"].fields, None);
}

#[test]
fn test_broken_field_line_is_skipped() {
    let text = "type Pet {\n  name String\n  age: Int\n  : Float\n  weight: Float\n}";
    let types = extract_fielded_types(text, &MarkerTable::new());
    let fields = types.objects["Pet"].fields.as_ref().unwrap();
    assert_eq!(names(fields), vec!["age", "weight"]);
}

#[test]
fn test_keywords_as_field_names() {
    let text = "type Item {\n  type: String\n  input: Int\n  enum: Boolean\n}";
    let model = extract_schema(text, &MarkerTable::new()).unwrap();
    assert_eq!(model.len(), 1);
    let fields = model.objects["Item"].fields.as_ref().unwrap();
    assert_eq!(names(fields), vec!["type", "input", "enum"]);
}

#[test]
fn test_braced_default_does_not_close_body() {
    let text = "input F {\n  a: I = {x: 1}\n  b: Int\n}\n";
    let types = extract_fielded_types(text, &MarkerTable::new());
    let fields = types.inputs["F"].fields.as_ref().unwrap();
    assert_eq!(names(fields), vec!["a", "b"]);
}

#[test]
fn test_keywords_as_enum_values() {
    let text = "enum Kind {\n  scalar\n  union\n  enum\n}";
    let model = extract_schema(text, &MarkerTable::new()).unwrap();
    assert!(model.scalars.is_empty());
    assert!(model.unions.is_empty());
    assert_eq!(model.enums.len(), 1);
    assert_eq!(names(&model.enums["Kind"].elements), vec!["scalar", "union", "enum"]);
}

#[test]
fn test_comments_are_ignored() {
    let text = "# pets\nunion Pet = Dog # good boy\n  | Cat\nscalar Date # ISO 8601\n";
    let model = extract_schema(text, &MarkerTable::new()).unwrap();
    assert_eq!(names(&model.unions["Pet"].elements), vec!["Dog", "Cat"]);
    assert!(model.scalars.contains_key("Date"));
}

#[test]
fn test_single_member_union() {
    let unions = extract_unions("union Only = One\n", &MarkerTable::new());
    assert_eq!(names(&unions["Only"].elements), vec!["One"]);
}

#[test]
fn test_constructs_inside_descriptions_are_not_read() {
    let text = "\"\"\"\ntype Fake { a: Int }\n\"\"\"\nscalar Real\n";
    let model = extract_schema(text, &MarkerTable::new()).unwrap();
    assert!(model.objects.is_empty());
    assert_eq!(model.scalars["Real"].description.as_deref(), Some("type Fake { a: Int }"));
}
