pub mod ast;
pub mod error;
pub mod token;

use error::{kind, Error};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// The deepest that groups may be nested. A group nested deeper than this is a fatal error.
pub const MAX_NESTING: usize = 256;

/// How the parser treats malformed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Any malformed part of the formula fails the whole parse.
    #[default]
    Strict,

    /// Malformed parts of the formula are skipped or repaired, and reported as warnings instead.
    ///
    /// Unclosed groups close at the end of the input. Stray brackets, counts, characters and
    /// unknown elements are skipped. Counts are still read in full, so `C10` is ten carbons
    /// rather than one carbon followed by a stray `0`.
    Lenient,
}

/// A high-level parser for linear formulas. This is the type to use to parse a formula into a
/// syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing. Whitespace is removed up front.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The length of the source code, used to point at the end of it.
    source_len: usize,

    /// How malformed input is treated.
    mode: ParseMode,

    /// Whether groups are allowed. Flat formulas cannot contain any.
    grouping: bool,

    /// The number of groups enclosing the cursor.
    depth: usize,
}

impl<'source> Parser<'source> {
    /// Create a new strict parser for the given source.
    pub fn new(source: &'source str) -> Self {
        let tokens = tokenize_complete(source)
            .into_vec()
            .into_iter()
            .filter(|token| !token.is_whitespace())
            .collect();
        Self {
            tokens,
            cursor: 0,
            source_len: source.len(),
            mode: ParseMode::Strict,
            grouping: true,
            depth: 0,
        }
    }

    /// Create a new parser for the given source with the given [`ParseMode`].
    pub fn with_mode(source: &'source str, mode: ParseMode) -> Self {
        Self { mode, ..Self::new(source) }
    }

    /// Disallows groups, so that only flat formulas (atoms and counts) are accepted.
    pub fn flat(mut self) -> Self {
        self.grouping = false;
        self
    }

    /// Returns the [`ParseMode`] of this parser.
    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Returns true if groups are allowed.
    pub fn allows_groups(&self) -> bool {
        self.grouping
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl chemf_error::ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.source_len..self.source_len
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns true if the current token is of the given kind.
    pub fn at(&self, kind: TokenKind) -> bool {
        self.current_token().is_some_and(|token| token.kind == kind)
    }

    /// Returns the next token to be parsed, then advances the cursor.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                // cloning is cheap: only Range<_> is cloned
                Ok(token.clone())
            },
            None => Err(self.error(kind::UnexpectedEof)),
        }
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::std_parse`] implementation of a type with the given [`Parser`], as it
    /// will automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens, the parsed
    /// value is returned, and any recoverable errors are added to `recoverable_errors`.
    /// Otherwise, the stream is left unchanged and all errors are returned.
    pub fn try_parse<T: Parse>(&mut self, recoverable_errors: &mut Vec<Error>) -> Result<T, Vec<Error>> {
        let start = self.cursor;
        let mut inner_errors = Vec::new();
        match T::std_parse(self, &mut inner_errors) {
            Ok(value) => {
                recoverable_errors.extend(inner_errors);
                Ok(value)
            },
            Err(errs) => {
                self.cursor = start;
                inner_errors.extend(errs);
                Err(inner_errors)
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    ///
    /// In [`ParseMode::Strict`], any recoverable error fails the parse. In
    /// [`ParseMode::Lenient`], recoverable errors are returned alongside the value as warnings.
    pub fn try_parse_full_with_warnings<T: Parse>(&mut self) -> Result<(T, Vec<Error>), Vec<Error>> {
        let mut errors = Vec::new();
        let value = self.try_parse::<T>(&mut errors)?;

        if self.cursor != self.tokens.len() {
            errors.push(self.error(kind::ExpectedEof));
        }

        match self.mode {
            ParseMode::Strict if !errors.is_empty() => Err(errors),
            _ => Ok((value, errors)),
        }
    }

    /// Attempts to parse a value from the given stream of tokens, discarding any warnings. All
    /// the tokens must be consumed by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Vec<Error>> {
        self.try_parse_full_with_warnings().map(|(value, _)| value)
    }

    /// Records a recoverable error for the current token and skips past it.
    pub(crate) fn skip_with(&mut self, recoverable_errors: &mut Vec<Error>, kind: impl chemf_error::ErrorKind + 'static) {
        recoverable_errors.push(self.error(kind));
        self.cursor += 1;
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// Errors the parser can recover from are pushed to `recoverable_errors`, and parsing
    /// continues. Errors it cannot recover from are returned in [`Err`].
    ///
    /// Consumers of the library should use [`Parser::try_parse_full`] instead.
    fn std_parse(input: &mut Parser, recoverable_errors: &mut Vec<Error>) -> Result<Self, Vec<Error>>;
}
