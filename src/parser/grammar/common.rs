//! Readers for the segments every construct shares

use crate::parser::cursor::TokenCursor;
use crate::parser::lexer::Token;
use crate::parser::syntax_kind::SyntaxKind;

/// Why a construct attempt failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Miss {
    /// The construct is not here; the scan moves on
    NoMatch,
    /// Input ended inside the construct, so no later attempt can close it either
    Exhausted,
}

pub(crate) type ReadResult<T> = Result<T, Miss>;

/// Text inside the quotes of a description literal
pub(crate) fn description_content<'a>(token: Token<'a>) -> &'a str {
    let quotes = match token.kind {
        SyntaxKind::BLOCK_STRING => 3,
        _ => 1,
    };
    &token.text[quotes..token.text.len() - quotes]
}

/// Consume a `"""block"""` or `"string"` description if one is next
pub(crate) fn read_description<'a>(cursor: &mut TokenCursor<'a>) -> Option<&'a str> {
    if cursor.current_kind().is_description() {
        cursor.bump().map(description_content)
    } else {
        None
    }
}

/// Consume an `extend` modifier and the trivia after it
pub(crate) fn read_extend(cursor: &mut TokenCursor<'_>) -> bool {
    let extended = cursor.eat(SyntaxKind::EXTEND_KW);
    if extended {
        cursor.skip_trivia();
    }
    extended
}

/// Read a run of encoding markers (`%0 %1`), returning its text.
///
/// With `multiline` the run may continue across line breaks. The cursor is left right
/// after the last marker, or untouched when there is none.
pub(crate) fn read_markers<'a>(cursor: &mut TokenCursor<'a>, multiline: bool) -> Option<&'a str> {
    let skip = |cursor: &mut TokenCursor<'a>| {
        if multiline {
            cursor.skip_trivia()
        } else {
            cursor.skip_inline_trivia()
        }
    };

    let save = cursor.pos();
    skip(cursor);
    if !cursor.at(SyntaxKind::MARKER) {
        cursor.reset(save);
        return None;
    }

    let first = cursor.pos();
    let mut last = first;
    cursor.bump();
    loop {
        let save = cursor.pos();
        skip(cursor);
        if cursor.at(SyntaxKind::MARKER) {
            last = cursor.pos();
            cursor.bump();
        } else {
            cursor.reset(save);
            break;
        }
    }

    Some(cursor.slice(first, last))
}

/// Read a type reference such as `Int`, `[String!]!` or `[[ID]]`, returning it verbatim.
///
/// Brackets are counted rather than recursed into, so nesting depth costs no stack.
pub(crate) fn read_type_reference<'a>(cursor: &mut TokenCursor<'a>) -> Option<&'a str> {
    let first = cursor.pos();

    let mut depth = 0usize;
    while cursor.eat(SyntaxKind::L_BRACKET) {
        depth += 1;
        cursor.skip_inline_trivia();
    }

    cursor.eat_name()?;
    let mut last = cursor.pos() - 1;
    last = read_non_null(cursor).unwrap_or(last);

    for _ in 0..depth {
        cursor.skip_inline_trivia();
        if !cursor.eat(SyntaxKind::R_BRACKET) {
            return None;
        }
        last = cursor.pos() - 1;
        last = read_non_null(cursor).unwrap_or(last);
    }

    Some(cursor.slice(first, last))
}

/// Consume an optional `!`, returning its token index
fn read_non_null(cursor: &mut TokenCursor<'_>) -> Option<usize> {
    let save = cursor.pos();
    cursor.skip_inline_trivia();
    if cursor.eat(SyntaxKind::BANG) {
        Some(cursor.pos() - 1)
    } else {
        cursor.reset(save);
        None
    }
}

/// Skip a `= value` default. The value ends at a line break, comma or marker outside of
/// any brackets.
pub(crate) fn skip_default_value(cursor: &mut TokenCursor<'_>) {
    if !cursor.eat(SyntaxKind::EQ) {
        return;
    }

    let mut depth = 0usize;
    while !cursor.at_eof() {
        match cursor.current_kind() {
            SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE | SyntaxKind::L_PAREN => depth += 1,
            SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE | SyntaxKind::R_PAREN => {
                if depth == 0 {
                    return;
                }
                depth -= 1;
            }
            SyntaxKind::NEWLINE | SyntaxKind::COMMA | SyntaxKind::MARKER if depth == 0 => return,
            _ => {}
        }
        cursor.bump();
    }
}

/// Consume tokens up to and including the `close` that balances an already consumed
/// `open`, returning it. Nested `open`/`close` pairs inside the body are counted.
pub(crate) fn read_balanced<'a>(
    cursor: &mut TokenCursor<'a>,
    open: SyntaxKind,
    close: SyntaxKind,
) -> ReadResult<Token<'a>> {
    let mut depth = 0usize;
    while let Some(token) = cursor.bump() {
        if token.kind == open {
            depth += 1;
        } else if token.kind == close {
            if depth == 0 {
                return Ok(token);
            }
            depth -= 1;
        }
    }
    Err(Miss::Exhausted)
}

/// Read a `|`-separated name list (`A | B`, `| A | B`), each name optionally followed by
/// inline markers. The list may continue across lines after a `|`.
pub(crate) fn read_pipe_list<'a>(cursor: &mut TokenCursor<'a>, with_markers: bool) -> ReadResult<&'a str> {
    let first = cursor.pos();
    if cursor.eat(SyntaxKind::PIPE) {
        cursor.skip_trivia();
    }

    let mut last = read_list_item(cursor, with_markers)?;
    loop {
        let save = cursor.pos();
        cursor.skip_trivia();
        if cursor.eat(SyntaxKind::PIPE) {
            cursor.skip_trivia();
            last = read_list_item(cursor, with_markers)?;
        } else {
            cursor.reset(save);
            break;
        }
    }

    Ok(cursor.slice(first, last))
}

/// Read one list name (plus markers), returning the index of its last token
fn read_list_item(cursor: &mut TokenCursor<'_>, with_markers: bool) -> ReadResult<usize> {
    cursor.eat_name().ok_or(Miss::NoMatch)?;
    if with_markers {
        read_markers(cursor, false);
    }
    Ok(cursor.pos() - 1)
}
