//! Reader for union types
//!
//! ```text
//! [description] [extend] union Name [markers] = [|] A [markers] (| B [markers])*
//! ```

use super::common::{Miss, ReadResult, read_extend, read_markers, read_pipe_list};
use super::scan;
use crate::parser::cursor::TokenCursor;
use crate::parser::syntax_kind::SyntaxKind;

/// Captured slots of one union
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionCapture<'a> {
    pub description: Option<&'a str>,
    pub extended: bool,
    pub name: &'a str,
    pub markers: Option<&'a str>,
    /// Member list, `|` separators included
    pub members: &'a str,
}

/// Find every union declaration in `source`
pub fn scan_unions(source: &str) -> Vec<UnionCapture<'_>> {
    scan(source, read_union)
}

fn read_union<'a>(cursor: &mut TokenCursor<'a>, description: Option<&'a str>) -> ReadResult<UnionCapture<'a>> {
    let extended = read_extend(cursor);
    if !cursor.eat(SyntaxKind::UNION_KW) {
        return Err(Miss::NoMatch);
    }
    cursor.skip_trivia();

    let name = cursor.eat_name().ok_or(Miss::NoMatch)?;
    let markers = read_markers(cursor, true);
    cursor.skip_trivia();

    if !cursor.eat(SyntaxKind::EQ) {
        return Err(Miss::NoMatch);
    }
    cursor.skip_trivia();

    let members = read_pipe_list(cursor, true)?;

    Ok(UnionCapture {
        description,
        extended,
        name,
        markers,
        members,
    })
}
