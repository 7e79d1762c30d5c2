//! One construct in, one entity out.

use crate::helpers::marker_helpers::*;
use crate::helpers::source_fixtures::*;
use sdl_extract::*;

#[test]
fn test_union_members_become_elements() {
    let unions = extract_unions(ANIMAL_UNION, &MarkerTable::new());

    let mut elements = NameIndex::new();
    elements.insert("Dog".to_string(), UnionElement::new("Dog"));
    elements.insert("Cat".to_string(), UnionElement::new("Cat"));
    let expected = UnionDefinition::new("Animal", false, elements);

    assert_eq!(unions.len(), 1);
    assert_eq!(unions["Animal"], expected);
}

#[test]
fn test_bare_scalar_has_no_optional_attributes() {
    let scalars = extract_scalars(DATE_SCALAR, &MarkerTable::new());
    assert_eq!(names(&scalars), vec!["Date"]);
    assert_eq!(scalars["Date"], ScalarDefinition::new("Date", false));
}

#[test]
fn test_field_parameter() {
    let types = extract_fielded_types(PERSON_WITH_AGE, &MarkerTable::new());
    let person = &types.objects["Person"];
    let fields = person.fields.as_ref().unwrap();
    let age = &fields["age"];

    assert_eq!(names(fields), vec!["age"]);
    assert_eq!(age.ty, "Int");
    let parameters = age.parameters.as_ref().unwrap();
    assert_eq!(names(parameters), vec!["unit"]);
    assert_eq!(parameters["unit"].ty, "String");
}

#[test]
fn test_extension_and_base_coexist() {
    let types = extract_fielded_types(EXTENSION_BEFORE_BASE, &MarkerTable::new());
    assert_eq!(names(&types.objects), vec!["Foo_isExtended_", "Foo"]);

    let extension = &types.objects["Foo_isExtended_"];
    assert!(extension.is_extended);
    assert_eq!(extension.name, "Foo_isExtended_");
    assert_eq!(names(extension.fields.as_ref().unwrap()), vec!["x"]);

    let base = &types.objects["Foo"];
    assert!(!base.is_extended);
    assert_eq!(names(base.fields.as_ref().unwrap()), vec!["y"]);
}

#[test]
fn test_extended_union_and_enum_keep_flag() {
    let text = "extend union Pet = Bird\nextend enum Color {\n  TEAL\n}\n";
    let table = MarkerTable::new();

    let unions = extract_unions(text, &table);
    assert!(unions["Pet_isExtended_"].is_extended);

    let enums = extract_enums(text, &table);
    assert!(enums["Color_isExtended_"].is_extended);
}

#[test]
fn test_custom_extension_suffix() {
    let table = MarkerTable::new();
    let options = ExtractOptions {
        extension_suffix: "Extension".to_string(),
        ..ExtractOptions::default()
    };
    let scalars = SchemaExtractor::new(&table)
        .with_options(options)
        .scalars("extend scalar Url");
    assert_eq!(names(&scalars), vec!["UrlExtension"]);
}

#[test]
fn test_bogus_location_is_an_error() {
    let result = extract_schema(BOGUS_LOCATION, &library_table());
    assert_eq!(result, Err(SchemaError::invalid_location("BOGUS_LOCATION")));

    let message = result.unwrap_err().to_string();
    assert!(message.contains("BOGUS_LOCATION"), "{message}");
}

#[test]
fn test_directive_definition_from_marker() {
    let text = "\"Cache hints\"\ndirective %d0 repeatable on | FIELD_DEFINITION | OBJECT\n";
    let definitions = extract_directive_definitions(text, &library_table()).unwrap();
    let cache = &definitions["cacheControl"];

    assert_eq!(cache.description.as_deref(), Some("Cache hints"));
    assert!(cache.is_repeatable);
    assert!(!cache.is_extended);
    assert_eq!(names(&cache.elements), vec!["FIELD_DEFINITION", "OBJECT"]);
    assert_eq!(
        cache.elements["OBJECT"].location,
        DirectiveLocation::TypeSystem(TypeSystemDirectiveLocation::OBJECT)
    );
    assert_eq!(
        cache.parameters.as_ref().unwrap()["maxAge"],
        ParameterComponent::new("maxAge", "Int")
    );
}

#[test]
fn test_executable_locations() {
    let text = "directive %3 on QUERY | FIELD | INLINE_FRAGMENT";
    let definitions = extract_directive_definitions(text, &library_table()).unwrap();
    let shareable = &definitions["shareable"];
    assert!(shareable.elements.values().all(|e| e.location.is_executable()));
    assert_eq!(shareable.parameters, None);
}

#[test]
fn test_enum_values_and_their_directives() {
    let text = "\"\"\"Colours\"\"\"\nenum Color %3 {\n  RED\n  GREEN %1\n  BLUE\n}\n";
    let enums = extract_enums(text, &library_table());
    let color = &enums["Color"];

    assert_eq!(color.description.as_deref(), Some("Colours"));
    assert_eq!(directive_names(color.directives.as_ref()), vec!["shareable"]);
    assert_eq!(names(&color.elements), vec!["RED", "GREEN", "BLUE"]);
    assert_eq!(
        directive_names(color.elements["GREEN"].directives.as_ref()),
        vec!["deprecated"]
    );
    assert_eq!(color.elements["RED"].directives, None);
}

#[test]
fn test_union_member_directives() {
    let text = "union Result %0 =\n  | Book %3\n  | Author\n";
    let unions = extract_unions(text, &library_table());
    let result = &unions["Result"];

    assert_eq!(directive_names(result.directives.as_ref()), vec!["key"]);
    assert_eq!(directive_names(result.elements["Book"].directives.as_ref()), vec!["shareable"]);
    assert_eq!(result.elements["Author"].directives, None);
}

#[test]
fn test_interface_and_input_fields() {
    let text = "interface Node %0 {\n  id(format: String): ID!\n}\ninput Filter {\n  q: String %1\n}\n";
    let types = extract_fielded_types(text, &library_table());

    let node = &types.interfaces["Node"];
    assert_eq!(directive_names(node.directives.as_ref()), vec!["key"]);
    let id = &node.fields.as_ref().unwrap()["id"];
    assert_eq!(id.ty, "ID!");
    assert_eq!(names(id.parameters.as_ref().unwrap()), vec!["format"]);

    let filter = &types.inputs["Filter"];
    let q = &filter.fields.as_ref().unwrap()["q"];
    assert_eq!(q.ty, "String");
    assert_eq!(directive_names(q.directives.as_ref()), vec!["deprecated"]);
}
