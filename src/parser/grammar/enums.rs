//! Reader for enum types
//!
//! ```text
//! [description] [extend] enum Name [markers] { values }
//! ```

use super::common::{Miss, ReadResult, read_balanced, read_extend, read_markers};
use super::scan;
use crate::parser::cursor::TokenCursor;
use crate::parser::syntax_kind::SyntaxKind;

/// Captured slots of one enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCapture<'a> {
    pub description: Option<&'a str>,
    pub extended: bool,
    pub name: &'a str,
    pub markers: Option<&'a str>,
    /// Text between the braces
    pub body: &'a str,
}

/// Find every enum declaration in `source`
pub fn scan_enums(source: &str) -> Vec<EnumCapture<'_>> {
    scan(source, read_enum)
}

fn read_enum<'a>(cursor: &mut TokenCursor<'a>, description: Option<&'a str>) -> ReadResult<EnumCapture<'a>> {
    let extended = read_extend(cursor);
    if !cursor.eat(SyntaxKind::ENUM_KW) {
        return Err(Miss::NoMatch);
    }
    cursor.skip_trivia();

    let name = cursor.eat_name().ok_or(Miss::NoMatch)?;
    let markers = read_markers(cursor, true);
    cursor.skip_trivia();

    let open = cursor.current().filter(|t| t.kind == SyntaxKind::L_BRACE).ok_or(Miss::NoMatch)?;
    cursor.bump();
    let close = read_balanced(cursor, SyntaxKind::L_BRACE, SyntaxKind::R_BRACE)?;

    Ok(EnumCapture {
        description,
        extended,
        name,
        markers,
        body: cursor.text_between(open, close),
    })
}
