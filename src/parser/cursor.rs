//! Token cursor shared by all construct readers
//!
//! Readers inspect and consume tokens through this cursor. A failed construct attempt
//! rewinds with [`TokenCursor::reset`]; nothing else moves backwards.

use super::lexer::{Token, tokenize};
use super::syntax_kind::SyntaxKind;
use crate::base::TextRange;

pub(crate) struct TokenCursor<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: tokenize(source),
            pos: 0,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn reset(&mut self, pos: usize) {
        self.pos = pos.min(self.tokens.len());
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    pub fn current(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    pub fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::EOF)
    }

    pub fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    pub fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    pub fn at_name(&self) -> bool {
        self.current_kind().is_name()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// True when only blanks separate the current token from the previous line break
    /// (or from the start of the input).
    pub fn at_line_start(&self) -> bool {
        self.tokens[..self.pos]
            .iter()
            .rev()
            .find(|t| t.kind != SyntaxKind::WHITESPACE)
            .is_none_or(|t| t.kind == SyntaxKind::NEWLINE)
    }

    /// True at a line break, the end of the input, or one of `terminators`.
    pub fn at_line_end(&self, terminators: &[SyntaxKind]) -> bool {
        self.at_eof() || self.at(SyntaxKind::NEWLINE) || self.at_any(terminators)
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    pub fn bump(&mut self) -> Option<Token<'a>> {
        let token = self.current()?;
        self.pos += 1;
        Some(token)
    }

    pub fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn eat_name(&mut self) -> Option<&'a str> {
        if self.at_name() {
            self.bump().map(|t| t.text)
        } else {
            None
        }
    }

    pub fn skip_trivia(&mut self) {
        while self.current_kind().is_trivia() {
            self.pos += 1;
        }
    }

    pub fn skip_inline_trivia(&mut self) {
        while self.current_kind().is_inline_trivia() {
            self.pos += 1;
        }
    }

    /// Skip trivia and any number of commas (insignificant between list items)
    pub fn skip_separators(&mut self) {
        while self.current_kind().is_trivia() || self.at(SyntaxKind::COMMA) {
            self.pos += 1;
        }
    }

    /// Skip the rest of the current line, including its line break
    pub fn recover_to_line_end(&mut self) {
        while !self.at_eof() && !self.at(SyntaxKind::NEWLINE) {
            self.pos += 1;
        }
        self.eat(SyntaxKind::NEWLINE);
    }

    // =========================================================================
    // Source text
    // =========================================================================

    /// Source text covered by the tokens `first..=last` (token indices)
    pub fn slice(&self, first: usize, last: usize) -> &'a str {
        let range = TextRange::new(self.tokens[first].range.start(), self.tokens[last].range.end());
        &self.source[range]
    }

    /// Source text strictly between two tokens
    pub fn text_between(&self, open: Token<'a>, close: Token<'a>) -> &'a str {
        &self.source[TextRange::new(open.range.end(), close.range.start())]
    }
}
