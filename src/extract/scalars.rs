//! Scalars

use tracing::trace;

use super::{ExtractOptions, resolve_markers};
use crate::base::{NameIndex, non_blank};
use crate::directives::MarkerTable;
use crate::model::{ScalarDefinition, publish};
use crate::parser::grammar::scan_scalars;

pub(super) fn extract(
    text: &str,
    table: &MarkerTable,
    options: &ExtractOptions,
) -> NameIndex<ScalarDefinition> {
    let mut scalars = NameIndex::new();
    for capture in scan_scalars(text) {
        let name = options.entity_name(capture.name, capture.extended);
        trace!("[SCALARS] '{}'", name);
        let scalar = ScalarDefinition::new(name, capture.extended)
            .with_description(non_blank(capture.description))
            .with_directives(resolve_markers(capture.markers, table));
        publish(&mut scalars, scalar);
    }
    scalars
}
