//! Whole-document extraction.

use crate::helpers::marker_helpers::*;
use crate::helpers::source_fixtures::*;
use sdl_extract::*;

fn library() -> SchemaModel {
    extract_schema(LIBRARY_SCHEMA, &library_table()).unwrap()
}

#[test]
fn test_library_entity_maps() {
    let model = library();

    assert_eq!(names(&model.objects), vec!["Book", "Author", "Book_isExtended_"]);
    assert_eq!(names(&model.interfaces), vec!["Node"]);
    assert_eq!(names(&model.inputs), vec!["BookFilter"]);
    assert_eq!(names(&model.unions), vec!["SearchResult", "SearchResult_isExtended_"]);
    assert_eq!(names(&model.enums), vec!["Genre"]);
    assert_eq!(names(&model.scalars), vec!["DateTime", "DateTime_isExtended_"]);
    assert_eq!(names(&model.directive_definitions), vec!["cacheControl", "tag"]);
    assert_eq!(model.len(), 12);
}

#[test]
fn test_library_book() {
    let model = library();
    let book = &model.objects["Book"];

    assert_eq!(book.description.as_deref(), Some("A book in the catalogue"));
    assert_eq!(directive_names(book.directives.as_ref()), vec!["key"]);
    assert_eq!(names(book.implements.as_ref().unwrap()), vec!["Node", "Publication"]);

    let fields = book.fields.as_ref().unwrap();
    assert_eq!(names(fields), vec!["id", "title", "authors", "published"]);
    assert_eq!(fields["title"].description.as_deref(), Some("The title"));
    assert_eq!(fields["id"].description, None);

    let authors = &fields["authors"];
    assert_eq!(authors.ty, "[Author!]!");
    assert_eq!(directive_names(authors.directives.as_ref()), vec!["deprecated"]);
    let parameters = authors.parameters.as_ref().unwrap();
    assert_eq!(names(parameters), vec!["first", "after"]);
    assert_eq!(parameters["first"].ty, "Int");
    assert_eq!(parameters["after"].ty, "String");
}

#[test]
fn test_library_extensions() {
    let model = library();

    let extension = &model.objects["Book_isExtended_"];
    assert!(extension.is_extended);
    assert_eq!(directive_names(extension.directives.as_ref()), vec!["shareable"]);
    assert_eq!(names(extension.fields.as_ref().unwrap()), vec!["isbn"]);
    assert_eq!(extension.implements, None);

    let scalar = &model.scalars["DateTime_isExtended_"];
    assert!(scalar.is_extended);
    assert_eq!(directive_names(scalar.directives.as_ref()), vec!["key"]);

    let base = &model.scalars["DateTime"];
    assert_eq!(directive_names(base.directives.as_ref()), vec!["specifiedBy"]);
    let specified_by = &base.directives.as_ref().unwrap()["specifiedBy"];
    assert_eq!(
        specified_by.parameters.as_ref().unwrap()["url"],
        "\"https://tools.ietf.org/html/rfc3339\""
    );

    let union = &model.unions["SearchResult_isExtended_"];
    assert_eq!(names(&union.elements), vec!["Magazine"]);
}

#[test]
fn test_library_other_kinds() {
    let model = library();

    let node = &model.interfaces["Node"];
    assert_eq!(node.description.as_deref(), Some("Anything with an identity"));

    let filter = &model.inputs["BookFilter"];
    let fields = filter.fields.as_ref().unwrap();
    assert_eq!(names(fields), vec!["title", "publishedAfter"]);
    assert_eq!(fields["publishedAfter"].ty, "DateTime");

    let genre = &model.enums["Genre"];
    assert_eq!(names(&genre.elements), vec!["FICTION", "NON_FICTION", "POETRY"]);

    let search = &model.unions["SearchResult"];
    assert_eq!(search.directives, None);
    assert_eq!(
        directive_names(search.elements["Author"].directives.as_ref()),
        vec!["shareable"]
    );

    let tag = &model.directive_definitions["tag"];
    assert!(tag.is_repeatable);
    assert_eq!(names(&tag.elements), vec!["OBJECT", "INTERFACE"]);
    assert_eq!(tag.description, None);
    assert_eq!(
        model.directive_definitions["cacheControl"].description.as_deref(),
        Some("Marks a field as cacheable")
    );
}

#[test]
fn test_extraction_is_idempotent() {
    assert_eq!(library(), library());
}

#[test]
fn test_declaration_order_does_not_change_contents() {
    let reordered = extract_schema(LIBRARY_SCHEMA_REORDERED, &library_table()).unwrap();
    assert_eq!(library(), reordered);
}

#[test]
fn test_parallel_matches_sequential() {
    let table = library_table();
    let parallel = SchemaExtractor::new(&table)
        .with_options(ExtractOptions::default().with_parallel(true))
        .extract(LIBRARY_SCHEMA)
        .unwrap();
    assert_eq!(parallel, library());
}

#[test]
fn test_parallel_failure_is_reported() {
    let table = library_table();
    let result = SchemaExtractor::new(&table)
        .with_options(ExtractOptions::default().with_parallel(true))
        .extract(BOGUS_LOCATION);
    assert_eq!(result, Err(SchemaError::invalid_location("BOGUS_LOCATION")));
}

#[test]
fn test_extract_all_preserves_document_order() {
    let table = library_table();
    let models = SchemaExtractor::new(&table)
        .extract_all(&[DATE_SCALAR, ANIMAL_UNION, LIBRARY_SCHEMA])
        .unwrap();

    assert_eq!(models.len(), 3);
    assert_eq!(names(&models[0].scalars), vec!["Date"]);
    assert_eq!(names(&models[1].unions), vec!["Animal"]);
    assert_eq!(models[2], library());
}

#[test]
fn test_extract_all_fails_on_any_document() {
    let table = library_table();
    let result = SchemaExtractor::new(&table).extract_all(&[DATE_SCALAR, BOGUS_LOCATION]);
    assert!(matches!(result, Err(SchemaError::InvalidDirectiveLocation { .. })));
}

#[cfg(feature = "serde")]
#[test]
fn test_serialized_keys() {
    use serde_json::json;

    let model = extract_schema(
        "scalar Date\ntype Person { age(unit: String): Int }",
        &MarkerTable::new(),
    )
    .unwrap();

    assert_eq!(
        serde_json::to_value(&model.scalars["Date"]).unwrap(),
        json!({ "name": "Date", "isExtended": false })
    );
    assert_eq!(
        serde_json::to_value(&model.objects["Person"]).unwrap(),
        json!({
            "name": "Person",
            "isExtended": false,
            "fields": {
                "age": {
                    "name": "age",
                    "type": "Int",
                    "parameters": {
                        "unit": { "name": "unit", "type": "String" }
                    }
                }
            }
        })
    );
}
