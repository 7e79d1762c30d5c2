//! Field and parameter sub-extractors, applied to the body of a fielded type

use tracing::debug;

use super::resolve_markers;
use crate::base::{NameIndex, non_blank};
use crate::directives::MarkerTable;
use crate::model::{
    DescribableParameterComponent, InputFieldDefinition, ParameterFieldDefinition, publish,
};
use crate::parser::grammar::{scan_fields, scan_parameters};

/// Fields of an object or interface body, arguments included
pub fn extract_parameter_fields(
    body: &str,
    table: &MarkerTable,
) -> NameIndex<ParameterFieldDefinition> {
    let mut fields = NameIndex::new();
    for capture in scan_fields(body) {
        let parameters = capture.parameters.map(|text| extract_parameters(text, table));
        let field = ParameterFieldDefinition::new(capture.name, capture.ty)
            .with_description(non_blank(capture.description))
            .with_directives(resolve_markers(capture.markers, table))
            .with_parameters(parameters);
        publish(&mut fields, field);
    }
    fields
}

/// Fields of an input body. Arguments are not part of an input field and are ignored.
pub fn extract_input_fields(body: &str, table: &MarkerTable) -> NameIndex<InputFieldDefinition> {
    let mut fields = NameIndex::new();
    for capture in scan_fields(body) {
        if capture.parameters.is_some() {
            debug!("[FIELDS] arguments on input field '{}' ignored", capture.name);
        }
        let field = InputFieldDefinition::new(capture.name, capture.ty)
            .with_description(non_blank(capture.description))
            .with_directives(resolve_markers(capture.markers, table));
        publish(&mut fields, field);
    }
    fields
}

/// Arguments declared between a field's parentheses
pub fn extract_parameters(
    text: &str,
    table: &MarkerTable,
) -> NameIndex<DescribableParameterComponent> {
    let mut parameters = NameIndex::new();
    for capture in scan_parameters(text) {
        let parameter = DescribableParameterComponent::new(capture.name, capture.ty)
            .with_description(non_blank(capture.description))
            .with_directives(resolve_markers(capture.markers, table));
        publish(&mut parameters, parameter);
    }
    parameters
}
