//! Readers for field lines and field parameters
//!
//! ```text
//! field:     [description] name [( parameters )] : Type [= default] [markers]
//! parameter: [description] name : Type [= default] [markers]
//! ```
//!
//! Fields end at a line break or comma; parameters end at a comma or line break.
//! A line that does not read as a field is skipped.

use super::common::{
    Miss, ReadResult, read_balanced, read_description, read_markers, read_type_reference,
    skip_default_value,
};
use crate::parser::cursor::TokenCursor;
use crate::parser::syntax_kind::SyntaxKind;

/// Captured slots of one field line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCapture<'a> {
    pub description: Option<&'a str>,
    pub name: &'a str,
    /// Text between the parentheses, when the field declares any
    pub parameters: Option<&'a str>,
    pub ty: &'a str,
    pub markers: Option<&'a str>,
}

/// Captured slots of one field parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterCapture<'a> {
    pub description: Option<&'a str>,
    pub name: &'a str,
    pub ty: &'a str,
    pub markers: Option<&'a str>,
}

/// Read every field declared in a fielded type's body
pub fn scan_fields(body: &str) -> Vec<FieldCapture<'_>> {
    let mut cursor = TokenCursor::new(body);
    let mut fields = Vec::new();

    loop {
        cursor.skip_separators();
        if cursor.at_eof() {
            break;
        }

        let start = cursor.pos();
        match read_field(&mut cursor) {
            Ok(field) => fields.push(field),
            Err(Miss::Exhausted) => break,
            Err(Miss::NoMatch) => {
                cursor.reset(start);
                cursor.recover_to_line_end();
            }
        }
    }

    fields
}

/// Read every parameter declared between a field's parentheses
pub fn scan_parameters(text: &str) -> Vec<ParameterCapture<'_>> {
    let mut cursor = TokenCursor::new(text);
    let mut parameters = Vec::new();

    loop {
        cursor.skip_separators();
        if cursor.at_eof() {
            break;
        }

        let start = cursor.pos();
        match read_parameter(&mut cursor) {
            Ok(parameter) => parameters.push(parameter),
            Err(_) => {
                cursor.reset(start + 1);
                while !cursor.at_line_end(&[SyntaxKind::COMMA]) {
                    cursor.bump();
                }
            }
        }
    }

    parameters
}

fn read_field<'a>(cursor: &mut TokenCursor<'a>) -> ReadResult<FieldCapture<'a>> {
    let description = read_description(cursor);
    cursor.skip_trivia();

    let name = cursor.eat_name().ok_or(Miss::NoMatch)?;
    cursor.skip_inline_trivia();

    let parameters = if let Some(open) = cursor.current().filter(|t| t.kind == SyntaxKind::L_PAREN) {
        cursor.bump();
        let close = read_balanced(cursor, SyntaxKind::L_PAREN, SyntaxKind::R_PAREN)?;
        cursor.skip_inline_trivia();
        Some(cursor.text_between(open, close))
    } else {
        None
    };

    let (ty, markers) = read_typed_tail(cursor)?;

    Ok(FieldCapture {
        description,
        name,
        parameters,
        ty,
        markers,
    })
}

fn read_parameter<'a>(cursor: &mut TokenCursor<'a>) -> ReadResult<ParameterCapture<'a>> {
    let description = read_description(cursor);
    cursor.skip_trivia();

    let name = cursor.eat_name().ok_or(Miss::NoMatch)?;
    cursor.skip_inline_trivia();

    let (ty, markers) = read_typed_tail(cursor)?;

    Ok(ParameterCapture {
        description,
        name,
        ty,
        markers,
    })
}

/// `: Type [= default] [markers]` up to the end of the item
fn read_typed_tail<'a>(cursor: &mut TokenCursor<'a>) -> ReadResult<(&'a str, Option<&'a str>)> {
    if !cursor.eat(SyntaxKind::COLON) {
        return Err(Miss::NoMatch);
    }
    cursor.skip_inline_trivia();

    let ty = read_type_reference(cursor).ok_or(Miss::NoMatch)?;
    cursor.skip_inline_trivia();
    skip_default_value(cursor);

    let markers = read_markers(cursor, false);
    cursor.skip_inline_trivia();
    if !cursor.at_line_end(&[SyntaxKind::COMMA]) {
        return Err(Miss::NoMatch);
    }

    Ok((ty, markers))
}
