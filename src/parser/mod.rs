//! Logos-driven reader for encoded SDL
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! TokenCursor → line-aware token navigation
//!     ↓
//! grammar readers → capture records borrowing from the source
//! ```
//!
//! No tree is built: each reader pulls the logical slots of one construct straight out
//! of the token stream, and the entity extractors turn those slots into model records.
//! Tokenizing is linear and each construct attempt stops at the end of its own text, so
//! scanning a conforming document is linear too.

mod cursor;
pub mod grammar;
mod lexer;
mod syntax_kind;

pub use lexer::{Lexer, Token, tokenize};
pub use syntax_kind::SyntaxKind;
