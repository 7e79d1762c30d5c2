//! Logos-based lexer for encoded SDL
//!
//! The lexer is a DFA, so tokenizing is linear in the input length.

use super::syntax_kind::SyntaxKind;
use crate::base::{TextRange, TextSize};
use logos::Logos;

/// A token with its kind, text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub range: TextRange,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let span = self.inner.span();
        let range = TextRange::new(TextSize::new(span.start as u32), TextSize::new(span.end as u32));

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, range })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\f]+")]
    Whitespace,

    #[token("\n")]
    Newline,

    #[regex(r"#[^\n]*", allow_greedy = true)]
    Comment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[_a-zA-Z][_a-zA-Z0-9]*")]
    Ident,

    #[regex(r"-?[0-9]+")]
    Integer,

    #[regex(r"-?[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?")]
    Float,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    #[regex(r#""""([^"]|"[^"]|""[^"])*""""#)]
    BlockString,

    #[regex(r"%[_a-zA-Z0-9]+")]
    Marker,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token("=")]
    Eq,
    #[token("!")]
    Bang,
    #[token("|")]
    Pipe,
    #[token("&")]
    Amp,
    #[token("@")]
    At,
    #[token("$")]
    Dollar,

    // =========================================================================
    // KEYWORDS (exact tokens win over the identifier regex)
    // =========================================================================
    #[token("type")]
    TypeKw,
    #[token("interface")]
    InterfaceKw,
    #[token("input")]
    InputKw,
    #[token("extend")]
    ExtendKw,
    #[token("implements")]
    ImplementsKw,
    #[token("union")]
    UnionKw,
    #[token("scalar")]
    ScalarKw,
    #[token("enum")]
    EnumKw,
    #[token("directive")]
    DirectiveKw,
    #[token("repeatable")]
    RepeatableKw,
    #[token("on")]
    OnKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => SyntaxKind::WHITESPACE,
            Newline => SyntaxKind::NEWLINE,
            Comment => SyntaxKind::COMMENT,

            // Literals
            Ident => SyntaxKind::IDENT,
            Integer => SyntaxKind::INTEGER,
            Float => SyntaxKind::FLOAT,
            String => SyntaxKind::STRING,
            BlockString => SyntaxKind::BLOCK_STRING,
            Marker => SyntaxKind::MARKER,

            // Punctuation
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            Colon => SyntaxKind::COLON,
            Comma => SyntaxKind::COMMA,
            Eq => SyntaxKind::EQ,
            Bang => SyntaxKind::BANG,
            Pipe => SyntaxKind::PIPE,
            Amp => SyntaxKind::AMP,
            At => SyntaxKind::AT,
            Dollar => SyntaxKind::DOLLAR,

            // Keywords
            TypeKw => SyntaxKind::TYPE_KW,
            InterfaceKw => SyntaxKind::INTERFACE_KW,
            InputKw => SyntaxKind::INPUT_KW,
            ExtendKw => SyntaxKind::EXTEND_KW,
            ImplementsKw => SyntaxKind::IMPLEMENTS_KW,
            UnionKw => SyntaxKind::UNION_KW,
            ScalarKw => SyntaxKind::SCALAR_KW,
            EnumKw => SyntaxKind::ENUM_KW,
            DirectiveKw => SyntaxKind::DIRECTIVE_KW,
            RepeatableKw => SyntaxKind::REPEATABLE_KW,
            OnKw => SyntaxKind::ON_KW,
        }
    }
}
