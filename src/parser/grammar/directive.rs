//! Reader for directive definitions
//!
//! ```text
//! [description] directive MARKER [repeatable] on [|] LOCATION (| LOCATION)*
//! ```
//! The encoder replaces `@name(arguments)` with a single marker, so the directive's name
//! and arguments are recovered from the marker table rather than from the text.

use super::common::{Miss, ReadResult, read_pipe_list};
use super::scan;
use crate::parser::cursor::TokenCursor;
use crate::parser::syntax_kind::SyntaxKind;

/// Captured slots of one directive definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveDefinitionCapture<'a> {
    pub description: Option<&'a str>,
    pub marker: &'a str,
    pub repeatable: bool,
    /// Location list, `|` separators included
    pub locations: &'a str,
}

/// Find every directive definition in `source`
pub fn scan_directive_definitions(source: &str) -> Vec<DirectiveDefinitionCapture<'_>> {
    scan(source, read_directive_definition)
}

fn read_directive_definition<'a>(
    cursor: &mut TokenCursor<'a>,
    description: Option<&'a str>,
) -> ReadResult<DirectiveDefinitionCapture<'a>> {
    if !cursor.eat(SyntaxKind::DIRECTIVE_KW) {
        return Err(Miss::NoMatch);
    }
    cursor.skip_inline_trivia();

    let marker = cursor
        .current()
        .filter(|t| t.kind == SyntaxKind::MARKER)
        .ok_or(Miss::NoMatch)?
        .text;
    cursor.bump();
    cursor.skip_trivia();

    let repeatable = cursor.eat(SyntaxKind::REPEATABLE_KW);
    cursor.skip_trivia();
    if !cursor.eat(SyntaxKind::ON_KW) {
        return Err(Miss::NoMatch);
    }
    cursor.skip_trivia();

    let locations = read_pipe_list(cursor, false)?;

    Ok(DirectiveDefinitionCapture {
        description,
        marker,
        repeatable,
        locations,
    })
}
