pub mod token;

use crate::catalog::SymbolMatcher;
use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
///
/// Runs of letters are produced as a single [`TokenKind::Element`] token; use
/// [`tokenize_complete`] to get one token per atomic symbol.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows us
/// to backtrack in case of an error.
///
/// Every run of letters is split into atomic symbols with the [`SymbolMatcher`], longest symbol
/// first. Letters that do not start any symbol are kept together with the lowercase letters
/// following them, so the parser can report `Xx` as one unknown element.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let lexeme = lexer.slice();
        match result {
            Ok(TokenKind::Element) => split_elements(&mut tokens, lexeme, span.start),
            Ok(kind) => tokens.push(Token { span, kind, lexeme }),
            Err(()) => tokens.push(Token { span, kind: TokenKind::Symbol, lexeme }),
        }
    }

    tokens.into_boxed_slice()
}

/// Splits a run of letters starting at byte `offset` into element tokens.
fn split_elements<'source>(tokens: &mut Vec<Token<'source>>, run: &'source str, offset: usize) {
    let matcher = SymbolMatcher::get();
    let mut start = 0;

    while start < run.len() {
        let rest = &run[start..];
        let len = match matcher.match_prefix(rest) {
            Some(symbol) => symbol.len(),
            None => {
                // the run only contains ASCII letters, so byte offsets are char offsets
                1 + rest[1..].bytes().take_while(u8::is_ascii_lowercase).count()
            },
        };

        tokens.push(Token {
            span: offset + start..offset + start + len,
            kind: TokenKind::Element,
            lexeme: &rest[..len],
        });
        start += len;
    }
}
