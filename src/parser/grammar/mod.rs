//! Construct readers for encoded SDL
//!
//! One reader per construct kind, each producing a capture record whose fields are the
//! logical slots of that construct (description, extend tag, name, markers, body, ...).
//! Captures borrow from the scanned text; turning them into entities is the job of
//! [`crate::extract`].
//!
//! Reading is two-phase: top-level readers capture a construct's body as one opaque
//! slice, and the nested readers ([`scan_fields`], [`scan_parameters`],
//! [`scan_elements`]) re-scan that slice.

mod common;
mod directive;
mod element;
mod enums;
mod field;
mod fielded;
mod scalar;
mod union;

pub use directive::{DirectiveDefinitionCapture, scan_directive_definitions};
pub use element::{ElementCapture, scan_elements};
pub use enums::{EnumCapture, scan_enums};
pub use field::{FieldCapture, ParameterCapture, scan_fields, scan_parameters};
pub use fielded::{FieldedKind, FieldedTypeCapture, scan_fielded_types};
pub use scalar::{ScalarCapture, scan_scalars};
pub use union::{UnionCapture, scan_unions};

use super::cursor::TokenCursor;
use super::syntax_kind::SyntaxKind;
use common::{Miss, ReadResult, read_balanced, read_description};

/// Find every non-overlapping construct in `source`, in textual order.
///
/// `read` is attempted at the first significant token of each line and directly after
/// each description. A failed attempt moves the scan on by one token, or past the whole
/// `{ ... }` block when that token opens one, so keywords inside bodies owned by other
/// constructs are never read. An attempt that runs out of input ends the scan.
fn scan<'a, T>(
    source: &'a str,
    mut read: impl FnMut(&mut TokenCursor<'a>, Option<&'a str>) -> ReadResult<T>,
) -> Vec<T> {
    let mut cursor = TokenCursor::new(source);
    let mut captures = Vec::new();
    let mut skip_blocks = true;

    loop {
        cursor.skip_trivia();
        if cursor.at_eof() {
            break;
        }

        let start = cursor.pos();
        let description = read_description(&mut cursor);
        cursor.skip_trivia();

        if description.is_some() || cursor.at_line_start() {
            match read(&mut cursor, description) {
                Ok(capture) => {
                    captures.push(capture);
                    continue;
                }
                Err(Miss::Exhausted) => break,
                Err(Miss::NoMatch) => {}
            }
        }

        cursor.reset(start);
        skip_blocks = skip_blocks && skip_block(&mut cursor);
        if cursor.pos() == start {
            cursor.bump();
        }
    }

    captures
}

/// Step over the `{ ... }` block at the cursor. Returns false when the block never
/// closes; the cursor is then left untouched and later blocks cannot close either.
fn skip_block(cursor: &mut TokenCursor<'_>) -> bool {
    let start = cursor.pos();
    if !cursor.eat(SyntaxKind::L_BRACE) {
        return true;
    }
    if read_balanced(cursor, SyntaxKind::L_BRACE, SyntaxKind::R_BRACE).is_ok() {
        return true;
    }
    cursor.reset(start);
    false
}
