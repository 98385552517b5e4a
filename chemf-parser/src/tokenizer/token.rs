use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("[")]
    OpenSquare,

    #[token("]")]
    CloseSquare,

    /// A count following an element, or a multiplier following a group.
    #[regex(r"[0-9]+")]
    Count,

    /// A run of letters. [`tokenize_complete`](super::tokenize_complete) splits each run into
    /// one token per atomic symbol.
    #[regex(r"[a-zA-Z]+")]
    Element,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    /// Returns true if the token opens a group.
    pub fn is_open_bracket(self) -> bool {
        matches!(self, TokenKind::OpenParen | TokenKind::OpenSquare)
    }

    /// Returns true if the token closes a group.
    pub fn is_close_bracket(self) -> bool {
        matches!(self, TokenKind::CloseParen | TokenKind::CloseSquare)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}
