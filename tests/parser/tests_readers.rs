use rstest::rstest;
use sdl_extract::parser::grammar::*;

#[rstest]
#[case("a: Int", "Int")]
#[case("a: Int!", "Int!")]
#[case("a: [Int]", "[Int]")]
#[case("a: [Int!]!", "[Int!]!")]
#[case("a: [[ID!]]", "[[ID!]]")]
#[case("a: String = \"x\" %0", "String")]
#[case("a: [Int] = [1, 2]", "[Int]")]
fn test_field_types_are_verbatim(#[case] body: &str, #[case] expected: &str) {
    let fields = scan_fields(body);
    assert_eq!(fields.len(), 1, "body: {body}");
    assert_eq!(fields[0].ty, expected);
}

#[rstest]
#[case("union U = A | B", vec!["A", "B"])]
#[case("union U =\n  | A\n  | B", vec!["A", "B"])]
#[case("union U = | A", vec!["A"])]
#[case("union U %0 = A %1 | B", vec!["A", "B"])]
fn test_union_forms(#[case] source: &str, #[case] expected: Vec<&str>) {
    let captures = scan_unions(source);
    assert_eq!(captures.len(), 1, "source: {source}");
    let members: Vec<_> = scan_elements(captures[0].members).iter().map(|e| e.name).collect();
    assert_eq!(members, expected);
}

#[test]
fn test_union_does_not_swallow_next_construct() {
    let source = "union A = B | C\nunion D = E\nscalar F\n";
    let captures = scan_unions(source);
    assert_eq!(captures.len(), 2);
    assert_eq!(captures[0].members, "B | C");
    assert_eq!(captures[1].members, "E");
}

#[test]
fn test_directive_locations_do_not_swallow_next_construct() {
    let source = "directive %0 on FIELD | OBJECT\ntype A { a: Int }\n";
    let captures = scan_directive_definitions(source);
    assert_eq!(captures.len(), 1);
    assert_eq!(captures[0].locations, "FIELD | OBJECT");
}

#[test]
fn test_scalar_with_trailing_text_is_not_a_scalar() {
    assert!(scan_scalars("scalar Date extra\n").is_empty());
    assert_eq!(scan_scalars("scalar Date %0 %1\n")[0].markers, Some("%0 %1"));
}

#[test]
fn test_construct_must_start_a_line() {
    assert!(scan_scalars("x scalar Date\n").is_empty());
    assert_eq!(scan_scalars("  scalar Date\n").len(), 1);
}

#[test]
fn test_parameters_across_lines() {
    let parameters = scan_parameters("\n  \"Search text\"\n  term: String!\n  limit: Int = 10 %1\n");
    assert_eq!(parameters.len(), 2);
    assert_eq!(parameters[0].description, Some("Search text"));
    assert_eq!(parameters[0].ty, "String!");
    assert_eq!(parameters[1].markers, Some("%1"));
}

#[test]
fn test_large_document_scans_every_construct() {
    let source: String = (0..500)
        .map(|i| format!("type T{i} {{\n  f{i}: Int\n}}\nscalar S{i}\n"))
        .collect();
    assert_eq!(scan_fielded_types(&source).len(), 500);
    assert_eq!(scan_scalars(&source).len(), 500);
}
