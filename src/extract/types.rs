//! Objects, interfaces and inputs

use tracing::trace;

use super::fields::{extract_input_fields, extract_parameter_fields};
use super::{ExtractOptions, resolve_markers};
use crate::base::{NameIndex, non_blank};
use crate::directives::MarkerTable;
use crate::model::{
    InputDefinition, InterfaceDefinition, NamedComponent, ObjectDefinition, publish,
};
use crate::parser::grammar::{FieldedKind, FieldedTypeCapture, scan_elements, scan_fielded_types};

/// The three fielded kinds, read in one pass since they share a grammar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldedTypes {
    pub objects: NameIndex<ObjectDefinition>,
    pub interfaces: NameIndex<InterfaceDefinition>,
    pub inputs: NameIndex<InputDefinition>,
}

pub(super) fn extract(text: &str, table: &MarkerTable, options: &ExtractOptions) -> FieldedTypes {
    let mut types = FieldedTypes::default();

    for capture in scan_fielded_types(text) {
        let name = options.entity_name(capture.name, capture.extended);
        let description = non_blank(capture.description);
        let directives = resolve_markers(capture.markers, table);
        trace!("[FIELDED_TYPES] {:?} '{}'", capture.kind, name);

        match capture.kind {
            FieldedKind::Object => {
                let object = ObjectDefinition::new(name, capture.extended)
                    .with_description(description)
                    .with_directives(directives)
                    .with_fields(Some(extract_parameter_fields(capture.body, table)))
                    .with_implements(implements(&capture));
                publish(&mut types.objects, object);
            }
            FieldedKind::Interface => {
                let interface = InterfaceDefinition::new(name, capture.extended)
                    .with_description(description)
                    .with_directives(directives)
                    .with_fields(Some(extract_parameter_fields(capture.body, table)));
                publish(&mut types.interfaces, interface);
            }
            FieldedKind::Input => {
                let input = InputDefinition::new(name, capture.extended)
                    .with_description(description)
                    .with_directives(directives)
                    .with_fields(Some(extract_input_fields(capture.body, table)));
                publish(&mut types.inputs, input);
            }
        }
    }

    types
}

fn implements(capture: &FieldedTypeCapture<'_>) -> Option<NameIndex<NamedComponent>> {
    let text = capture.implements?;
    let mut interfaces = NameIndex::new();
    for interface in scan_elements(text) {
        publish(&mut interfaces, NamedComponent::new(interface.name));
    }
    Some(interfaces)
}
