//! Token kinds produced by the lexer
//!
//! SDL keywords are contextual: every keyword is also a valid name, see
//! [`SyntaxKind::is_name`].

/// All token kinds in encoded SDL text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0, // blanks and tabs, never a line break
    NEWLINE,
    COMMENT, // # ...

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,
    INTEGER,
    FLOAT,
    STRING,       // "text"
    BLOCK_STRING, // """text"""
    MARKER,       // %0 - an encoded directive usage

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,   // {
    R_BRACE,   // }
    L_BRACKET, // [
    R_BRACKET, // ]
    L_PAREN,   // (
    R_PAREN,   // )
    COLON,     // :
    COMMA,     // ,
    EQ,        // =
    BANG,      // !
    PIPE,      // |
    AMP,       // &
    AT,        // @
    DOLLAR,    // $

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    TYPE_KW,
    INTERFACE_KW,
    INPUT_KW,
    EXTEND_KW,
    IMPLEMENTS_KW,
    UNION_KW,
    SCALAR_KW,
    ENUM_KW,
    DIRECTIVE_KW,
    REPEATABLE_KW,
    ON_KW,

    // Special
    ERROR,
    EOF, // never produced by the lexer
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace, line break or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::NEWLINE | Self::COMMENT)
    }

    /// Trivia that never ends a line
    pub fn is_inline_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::TYPE_KW as u16) && (self as u16) <= (Self::ON_KW as u16)
    }

    /// Check if this token can be used as a name (identifiers and contextual keywords)
    pub fn is_name(self) -> bool {
        self == Self::IDENT || self.is_keyword()
    }

    /// Check if this is a description literal
    pub fn is_description(self) -> bool {
        matches!(self, Self::STRING | Self::BLOCK_STRING)
    }
}
