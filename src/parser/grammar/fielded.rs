//! Reader for objects, interfaces and inputs
//!
//! ```text
//! [description] [extend] (type|interface|input) Name [implements A & B] [markers] { body }
//! ```

use super::common::{Miss, ReadResult, read_balanced, read_extend, read_markers};
use super::scan;
use crate::parser::cursor::TokenCursor;
use crate::parser::syntax_kind::SyntaxKind;

/// Which keyword introduced a fielded type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldedKind {
    Object,
    Interface,
    Input,
}

impl FieldedKind {
    fn from_keyword(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::TYPE_KW => Some(Self::Object),
            SyntaxKind::INTERFACE_KW => Some(Self::Interface),
            SyntaxKind::INPUT_KW => Some(Self::Input),
            _ => None,
        }
    }
}

/// Captured slots of one fielded type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldedTypeCapture<'a> {
    pub description: Option<&'a str>,
    pub extended: bool,
    pub kind: FieldedKind,
    pub name: &'a str,
    /// Interface list after `implements`, separators included
    pub implements: Option<&'a str>,
    pub markers: Option<&'a str>,
    /// Text between the braces; never blank
    pub body: &'a str,
}

/// Find every object, interface and input declaration in `source`
pub fn scan_fielded_types(source: &str) -> Vec<FieldedTypeCapture<'_>> {
    scan(source, read_fielded_type)
}

fn read_fielded_type<'a>(
    cursor: &mut TokenCursor<'a>,
    description: Option<&'a str>,
) -> ReadResult<FieldedTypeCapture<'a>> {
    let extended = read_extend(cursor);
    let kind = FieldedKind::from_keyword(cursor.current_kind()).ok_or(Miss::NoMatch)?;
    cursor.bump();
    cursor.skip_trivia();

    let name = cursor.eat_name().ok_or(Miss::NoMatch)?;
    cursor.skip_trivia();

    let implements = if cursor.eat(SyntaxKind::IMPLEMENTS_KW) {
        cursor.skip_trivia();
        Some(read_implements(cursor)?)
    } else {
        None
    };

    let markers = read_markers(cursor, true);
    cursor.skip_trivia();

    let open = cursor.current().filter(|t| t.kind == SyntaxKind::L_BRACE).ok_or(Miss::NoMatch)?;
    cursor.bump();
    let close = read_balanced(cursor, SyntaxKind::L_BRACE, SyntaxKind::R_BRACE)?;

    let body = cursor.text_between(open, close);
    if body.trim().is_empty() {
        return Err(Miss::NoMatch);
    }

    Ok(FieldedTypeCapture {
        description,
        extended,
        kind,
        name,
        implements,
        markers,
        body,
    })
}

/// `A & B`, `& A & B`, `A, B` or (on one line) `A B`
fn read_implements<'a>(cursor: &mut TokenCursor<'a>) -> ReadResult<&'a str> {
    let first = cursor.pos();
    if cursor.eat(SyntaxKind::AMP) {
        cursor.skip_trivia();
    }
    cursor.eat_name().ok_or(Miss::NoMatch)?;
    let mut last = cursor.pos() - 1;

    loop {
        let save = cursor.pos();
        cursor.skip_trivia();
        if cursor.eat(SyntaxKind::AMP) || cursor.eat(SyntaxKind::COMMA) {
            cursor.skip_trivia();
            cursor.eat_name().ok_or(Miss::NoMatch)?;
            last = cursor.pos() - 1;
            continue;
        }

        cursor.reset(save);
        cursor.skip_inline_trivia();
        if cursor.eat_name().is_some() {
            last = cursor.pos() - 1;
        } else {
            cursor.reset(save);
            break;
        }
    }

    Ok(cursor.slice(first, last))
}
