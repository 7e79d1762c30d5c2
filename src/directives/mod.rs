//! Decoding of encoding markers back into directive annotations
//!
//! The encoder replaces each directive usage (`@deprecated(reason: "old")`) with a short
//! marker (`%0`) and records the decoded annotation in a [`MarkerTable`]. Resolving a
//! marker run looks every marker up in that table.

use indexmap::IndexMap;
use tracing::{trace, warn};

use crate::base::NameIndex;
use crate::model::DirectiveAnnotation;
use crate::parser::{Lexer, SyntaxKind};

/// Marker text (`%0`) to the directive annotation it stands for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerTable {
    entries: IndexMap<String, DirectiveAnnotation>,
}

impl MarkerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `annotation` under `marker`, replacing any previous entry
    pub fn insert(
        &mut self,
        marker: impl Into<String>,
        annotation: DirectiveAnnotation,
    ) -> Option<DirectiveAnnotation> {
        self.entries.insert(marker.into(), annotation)
    }

    pub fn get(&self, marker: &str) -> Option<&DirectiveAnnotation> {
        self.entries.get(marker)
    }

    pub fn contains(&self, marker: &str) -> bool {
        self.entries.contains_key(marker)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve every marker in `marker_text`, keyed by directive name.
    ///
    /// Text other than markers is ignored. Unknown markers are skipped; when two markers
    /// decode to the same directive the later one wins.
    pub fn resolve(&self, marker_text: &str) -> NameIndex<DirectiveAnnotation> {
        let mut directives = NameIndex::new();
        for token in Lexer::new(marker_text).filter(|t| t.kind == SyntaxKind::MARKER) {
            match self.get(token.text) {
                Some(annotation) => {
                    trace!("[DIRECTIVES] {} -> @{}", token.text, annotation.name);
                    directives.insert(annotation.name.clone(), annotation.clone());
                }
                None => warn!("[DIRECTIVES] unknown marker '{}' skipped", token.text),
            }
        }
        directives
    }
}

impl<M: Into<String>> FromIterator<(M, DirectiveAnnotation)> for MarkerTable {
    fn from_iter<I: IntoIterator<Item = (M, DirectiveAnnotation)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(m, a)| (m.into(), a)).collect(),
        }
    }
}

/// Free-function form of [`MarkerTable::resolve`]
pub fn resolve_directives(marker_text: &str, table: &MarkerTable) -> NameIndex<DirectiveAnnotation> {
    table.resolve(marker_text)
}
