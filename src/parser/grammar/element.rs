//! Reader for element lists: enum values, union members, directive locations and
//! implemented interfaces.

use super::common::read_markers;
use crate::parser::cursor::TokenCursor;

/// Captured slots of one list element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementCapture<'a> {
    pub name: &'a str,
    pub markers: Option<&'a str>,
}

/// Read every element of a list capture. Each name, with the markers that follow it on
/// the same line, is one element; separators (`|`, `&`, `,`), descriptions and
/// comments are skipped.
pub fn scan_elements(list: &str) -> Vec<ElementCapture<'_>> {
    let mut cursor = TokenCursor::new(list);
    let mut elements = Vec::new();

    loop {
        cursor.skip_separators();
        if cursor.at_eof() {
            break;
        }

        match cursor.eat_name() {
            Some(name) => elements.push(ElementCapture {
                name,
                markers: read_markers(&mut cursor, false),
            }),
            None => {
                cursor.bump();
            }
        }
    }

    elements
}
