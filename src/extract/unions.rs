//! Unions and their member types

use tracing::{debug, trace};

use super::{ExtractOptions, resolve_markers};
use crate::base::{NameIndex, non_blank};
use crate::directives::MarkerTable;
use crate::model::{UnionDefinition, UnionElement, publish};
use crate::parser::grammar::{scan_elements, scan_unions};

pub(super) fn extract(
    text: &str,
    table: &MarkerTable,
    options: &ExtractOptions,
) -> NameIndex<UnionDefinition> {
    let mut unions = NameIndex::new();

    for capture in scan_unions(text) {
        let name = options.entity_name(capture.name, capture.extended);

        let mut members = NameIndex::new();
        for member in scan_elements(capture.members) {
            let element = UnionElement::new(member.name)
                .with_directives(resolve_markers(member.markers, table));
            publish(&mut members, element);
        }

        if members.is_empty() {
            debug!("[UNIONS] '{}' has no members, dropped", name);
            continue;
        }

        trace!("[UNIONS] '{}' with {} member(s)", name, members.len());
        let union = UnionDefinition::new(name, capture.extended, members)
            .with_description(non_blank(capture.description))
            .with_directives(resolve_markers(capture.markers, table));
        publish(&mut unions, union);
    }

    unions
}
