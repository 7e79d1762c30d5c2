//! Reader for scalar types
//!
//! ```text
//! [description] [extend] scalar Name [markers]
//! ```
//! The declaration must end with its line.

use super::common::{Miss, ReadResult, read_extend, read_markers};
use super::scan;
use crate::parser::cursor::TokenCursor;
use crate::parser::syntax_kind::SyntaxKind;

/// Captured slots of one scalar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarCapture<'a> {
    pub description: Option<&'a str>,
    pub extended: bool,
    pub name: &'a str,
    pub markers: Option<&'a str>,
}

/// Find every scalar declaration in `source`
pub fn scan_scalars(source: &str) -> Vec<ScalarCapture<'_>> {
    scan(source, read_scalar)
}

fn read_scalar<'a>(cursor: &mut TokenCursor<'a>, description: Option<&'a str>) -> ReadResult<ScalarCapture<'a>> {
    let extended = read_extend(cursor);
    if !cursor.eat(SyntaxKind::SCALAR_KW) {
        return Err(Miss::NoMatch);
    }
    cursor.skip_trivia();

    let name = cursor.eat_name().ok_or(Miss::NoMatch)?;
    let markers = read_markers(cursor, false);
    cursor.skip_inline_trivia();
    if !cursor.at_line_end(&[]) {
        return Err(Miss::NoMatch);
    }

    Ok(ScalarCapture {
        description,
        extended,
        name,
        markers,
    })
}
