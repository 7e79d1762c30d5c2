//! Entity extractors: encoded SDL text to name-indexed entity maps
//!
//! Each extractor scans the whole document for one construct kind and publishes one
//! entity per match, keyed by name (plus the extension suffix for `extend`). Matches
//! that are missing a required piece are dropped; the only hard failure is a directive
//! definition naming an unknown location.
//!
//! ```text
//! encoded text ──► grammar::scan_* ──► captures ──► model builders ──► NameIndex<T>
//!                                         │
//!                                         └── markers ──► MarkerTable::resolve
//! ```
//!
//! [`SchemaExtractor`] runs every extractor and assembles a [`SchemaModel`]; the free
//! functions are shorthands using [`ExtractOptions::default`].

mod directive_definitions;
mod enums;
mod fields;
mod options;
mod scalars;
mod types;
mod unions;

pub use fields::{extract_input_fields, extract_parameter_fields, extract_parameters};
pub use options::ExtractOptions;
pub use types::FieldedTypes;

use rayon::prelude::*;
use tracing::debug;

use crate::base::NameIndex;
use crate::directives::MarkerTable;
use crate::error::Result;
use crate::model::{
    DirectiveAnnotation, DirectiveDefinition, EnumDefinition, ScalarDefinition, SchemaModel,
    UnionDefinition,
};

/// Runs the per-kind extractors over encoded documents against one marker table
#[derive(Debug, Clone)]
pub struct SchemaExtractor<'t> {
    table: &'t MarkerTable,
    options: ExtractOptions,
}

impl<'t> SchemaExtractor<'t> {
    pub fn new(table: &'t MarkerTable) -> Self {
        Self {
            table,
            options: ExtractOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    pub fn table(&self) -> &'t MarkerTable {
        self.table
    }

    pub fn unions(&self, text: &str) -> NameIndex<UnionDefinition> {
        unions::extract(text, self.table, &self.options)
    }

    pub fn scalars(&self, text: &str) -> NameIndex<ScalarDefinition> {
        scalars::extract(text, self.table, &self.options)
    }

    pub fn enums(&self, text: &str) -> NameIndex<EnumDefinition> {
        enums::extract(text, self.table, &self.options)
    }

    /// Fails with [`crate::SchemaError::InvalidDirectiveLocation`] on the first unknown
    /// location; no partial result is returned.
    pub fn directive_definitions(&self, text: &str) -> Result<NameIndex<DirectiveDefinition>> {
        directive_definitions::extract(text, self.table)
    }

    pub fn fielded_types(&self, text: &str) -> FieldedTypes {
        types::extract(text, self.table, &self.options)
    }

    /// Run every extractor over `text`.
    ///
    /// With [`ExtractOptions::parallel`] the extractors run on the rayon pool; the result
    /// is the same either way.
    pub fn extract(&self, text: &str) -> Result<SchemaModel> {
        let (fielded, unions, enums, scalars, directive_definitions) = if self.options.parallel {
            let ((fielded, unions), ((enums, scalars), directive_definitions)) = rayon::join(
                || rayon::join(|| self.fielded_types(text), || self.unions(text)),
                || {
                    rayon::join(
                        || rayon::join(|| self.enums(text), || self.scalars(text)),
                        || self.directive_definitions(text),
                    )
                },
            );
            (fielded, unions, enums, scalars, directive_definitions?)
        } else {
            (
                self.fielded_types(text),
                self.unions(text),
                self.enums(text),
                self.scalars(text),
                self.directive_definitions(text)?,
            )
        };

        let model = SchemaModel {
            objects: fielded.objects,
            interfaces: fielded.interfaces,
            inputs: fielded.inputs,
            unions,
            enums,
            scalars,
            directive_definitions,
        };
        debug!("[EXTRACT] {} entities extracted", model.len());
        Ok(model)
    }

    /// Extract several independent documents in parallel, preserving their order.
    ///
    /// Fails if any document fails.
    pub fn extract_all<S: AsRef<str> + Sync>(&self, documents: &[S]) -> Result<Vec<SchemaModel>> {
        documents
            .par_iter()
            .map(|document| self.extract(document.as_ref()))
            .collect()
    }
}

/// Resolve an optional marker run; `None` when there are no markers
pub(crate) fn resolve_markers(
    markers: Option<&str>,
    table: &MarkerTable,
) -> Option<NameIndex<DirectiveAnnotation>> {
    markers.map(|text| table.resolve(text))
}

pub fn extract_unions(text: &str, table: &MarkerTable) -> NameIndex<UnionDefinition> {
    SchemaExtractor::new(table).unions(text)
}

pub fn extract_scalars(text: &str, table: &MarkerTable) -> NameIndex<ScalarDefinition> {
    SchemaExtractor::new(table).scalars(text)
}

pub fn extract_enums(text: &str, table: &MarkerTable) -> NameIndex<EnumDefinition> {
    SchemaExtractor::new(table).enums(text)
}

pub fn extract_directive_definitions(
    text: &str,
    table: &MarkerTable,
) -> Result<NameIndex<DirectiveDefinition>> {
    SchemaExtractor::new(table).directive_definitions(text)
}

pub fn extract_fielded_types(text: &str, table: &MarkerTable) -> FieldedTypes {
    SchemaExtractor::new(table).fielded_types(text)
}

/// Extract all seven entity maps with default options
pub fn extract_schema(text: &str, table: &MarkerTable) -> Result<SchemaModel> {
    SchemaExtractor::new(table).extract(text)
}
