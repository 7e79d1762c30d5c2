//! Directive definitions
//!
//! The encoder replaces `@name(arguments)` in a definition with a marker whose
//! annotation carries the directive name and, as parameters, argument name to declared
//! type.

use tracing::{trace, warn};

use crate::base::{NameIndex, non_blank};
use crate::directives::MarkerTable;
use crate::error::Result;
use crate::model::{DirectiveDefinition, DirectiveDefinitionElement, ParameterComponent, publish};
use crate::parser::grammar::{scan_directive_definitions, scan_elements};

/// Fails on the first location outside both location vocabularies
pub(super) fn extract(text: &str, table: &MarkerTable) -> Result<NameIndex<DirectiveDefinition>> {
    let mut definitions = NameIndex::new();

    for capture in scan_directive_definitions(text) {
        let Some(annotation) = table.get(capture.marker) else {
            warn!(
                "[DIRECTIVE_DEFINITIONS] marker '{}' is not in the marker table, definition dropped",
                capture.marker
            );
            continue;
        };

        let mut elements = NameIndex::new();
        for location in scan_elements(capture.locations) {
            publish(&mut elements, DirectiveDefinitionElement::new(location.name)?);
        }

        let parameters = annotation.parameters.as_ref().map(|arguments| {
            arguments
                .iter()
                .map(|(name, ty)| (name.clone(), ParameterComponent::new(name, ty)))
                .collect::<NameIndex<_>>()
        });

        trace!(
            "[DIRECTIVE_DEFINITIONS] '@{}' on {} location(s)",
            annotation.name,
            elements.len()
        );
        let definition = DirectiveDefinition::new(annotation.name.clone(), elements)
            .with_description(non_blank(capture.description))
            .with_parameters(parameters)
            .repeatable(capture.repeatable);
        publish(&mut definitions, definition);
    }

    Ok(definitions)
}
