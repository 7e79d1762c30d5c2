//! Enums and their values

use tracing::{debug, trace};

use super::{ExtractOptions, resolve_markers};
use crate::base::{NameIndex, non_blank};
use crate::directives::MarkerTable;
use crate::model::{EnumDefinition, EnumElement, publish};
use crate::parser::grammar::{scan_elements, scan_enums};

pub(super) fn extract(
    text: &str,
    table: &MarkerTable,
    options: &ExtractOptions,
) -> NameIndex<EnumDefinition> {
    let mut enums = NameIndex::new();

    for capture in scan_enums(text) {
        let name = options.entity_name(capture.name, capture.extended);

        let mut values = NameIndex::new();
        for value in scan_elements(capture.body) {
            let element =
                EnumElement::new(value.name).with_directives(resolve_markers(value.markers, table));
            publish(&mut values, element);
        }

        if values.is_empty() {
            debug!("[ENUMS] '{}' declares no values, dropped", name);
            continue;
        }

        trace!("[ENUMS] '{}' with {} value(s)", name, values.len());
        let definition = EnumDefinition::new(name, capture.extended, values)
            .with_description(non_blank(capture.description))
            .with_directives(resolve_markers(capture.markers, table));
        publish(&mut enums, definition);
    }

    enums
}
