use crate::{
    composition::Composition,
    parser::{
        ast::{count::parse_count, item::{parse_items, sum_items, Item}},
        error::{kind, Error},
        Parse,
        ParseMode,
        Parser,
        MAX_NESTING,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::Serialize;

/// The kind of bracket surrounding a [`Group`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Bracket {
    /// `(` and `)`.
    Paren,

    /// `[` and `]`.
    Square,
}

impl Bracket {
    /// Returns the bracket opened by the given token kind.
    pub fn from_open(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::OpenParen => Some(Self::Paren),
            TokenKind::OpenSquare => Some(Self::Square),
            _ => None,
        }
    }

    /// Returns the bracket closed by the given token kind.
    pub fn from_close(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::CloseParen => Some(Self::Paren),
            TokenKind::CloseSquare => Some(Self::Square),
            _ => None,
        }
    }

    /// Returns the opening character.
    pub fn open(self) -> char {
        match self {
            Self::Paren => '(',
            Self::Square => '[',
        }
    }

    /// Returns the closing character.
    pub fn close(self) -> char {
        match self {
            Self::Paren => ')',
            Self::Square => ']',
        }
    }
}

/// A bracketed sequence of atoms and groups with an optional multiplier, such as `(CH3)2` or
/// `[C6H2(Br)2OH]2`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Group {
    /// The bracket the group was opened with.
    pub bracket: Bracket,

    /// The items inside the group.
    pub items: Vec<Item>,

    /// The multiplier written after the group, if any.
    pub multiplier: Option<u32>,

    /// The region of the source code that this group was parsed from.
    pub span: Range<usize>,
}

impl Group {
    /// Returns the span of the group.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns the factor every count inside the group is scaled by. A missing multiplier means
    /// one.
    pub fn multiplier(&self) -> u32 {
        self.multiplier.unwrap_or(1)
    }

    /// Returns the composition of this group: the sum of the compositions of its items, scaled
    /// by the multiplier.
    pub fn composition(&self) -> Result<Composition, Error> {
        sum_items(&self.items, self.span())?
            .checked_scale(self.multiplier())
            .ok_or_else(|| Error::new(vec![self.span()], kind::CountOverflow))
    }
}

impl Parse for Group {
    fn std_parse(input: &mut Parser, recoverable_errors: &mut Vec<Error>) -> Result<Self, Vec<Error>> {
        let open = input.next_token().map_err(|err| vec![err])?;
        let Some(bracket) = Bracket::from_open(open.kind) else {
            return Err(vec![Error::new(vec![open.span], kind::UnexpectedToken {
                expected: &[TokenKind::OpenParen, TokenKind::OpenSquare],
                found: open.kind,
            })]);
        };

        if input.depth >= MAX_NESTING {
            return Err(vec![Error::new(vec![open.span], kind::NestingTooDeep)]);
        }

        input.depth += 1;
        let items = parse_items(input, recoverable_errors, true);
        input.depth -= 1;
        let items = items?;

        let close = input.current_token()
            .and_then(|token| Some((Bracket::from_close(token.kind)?, token.span.clone())));
        let end = match close {
            Some((closed_with, close_span)) => {
                input.cursor += 1;

                // mismatched pairs like `(CH3]` are accepted in lenient mode
                if closed_with != bracket && input.mode() == ParseMode::Strict {
                    recoverable_errors.push(Error::new(
                        vec![open.span.clone(), close_span.clone()],
                        kind::MismatchedBracket {
                            open: bracket.open(),
                            close: closed_with.close(),
                            expected: bracket.close(),
                        },
                    ));
                }
                close_span.end
            },
            None => {
                // the group runs to the end of the formula
                recoverable_errors.push(Error::new(
                    vec![open.span.clone()],
                    kind::UnclosedGroup { opening: true },
                ));
                items.last().map_or(open.span.end, |item| item.span().end)
            },
        };

        if items.is_empty() {
            recoverable_errors.push(Error::new(vec![open.span.start..end], kind::EmptyGroup));
        }

        let (multiplier, end) = match parse_count(input, recoverable_errors)? {
            Some((multiplier, span)) => (Some(multiplier), span.end),
            None => (None, end),
        };

        Ok(Self {
            bracket,
            items,
            multiplier,
            span: open.span.start..end,
        })
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.bracket.open())?;
        for item in &self.items {
            write!(f, "{}", item)?;
        }
        write!(f, "{}", self.bracket.close())?;
        if let Some(multiplier) = self.multiplier {
            write!(f, "{}", multiplier)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::parser::ast::Atom;

    #[test]
    fn multiplier_scales_every_count() {
        let mut parser = Parser::new("(CH3)2");
        let group = parser.try_parse_full::<Group>().unwrap();
        let composition = group.composition().unwrap();

        assert_eq!(group.multiplier(), 2);
        assert_eq!(composition.get("C"), 2);
        assert_eq!(composition.get("H"), 6);
        assert_eq!(composition.len(), 2);
    }

    #[test]
    fn missing_multiplier() {
        let mut parser = Parser::new("[NO2]");
        let group = parser.try_parse_full::<Group>().unwrap();

        assert_eq!(group.multiplier, None);
        assert_eq!(group.composition().unwrap().to_string(), "NO2");
    }

    #[test]
    fn nested_multipliers() {
        let mut parser = Parser::new("[C6H2(Br)2OH]2");
        let group = parser.try_parse_full::<Group>().unwrap();
        let composition = group.composition().unwrap();

        assert_eq!(composition.get("C"), 12);
        assert_eq!(composition.get("H"), 6);
        assert_eq!(composition.get("Br"), 4);
        assert_eq!(composition.get("O"), 2);
    }

    #[test]
    fn unclosed_group() {
        let mut parser = Parser::new("(CH3");
        let errs = parser.try_parse_full::<Group>().unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].spans, vec![0..1]);

        let mut parser = Parser::with_mode("(CH3", ParseMode::Lenient);
        let group = parser.try_parse_full::<Group>().unwrap();
        assert_eq!(group, Group {
            bracket: Bracket::Paren,
            items: vec![
                Item::Atom(Atom { symbol: "C", count: None, span: 1..2 }),
                Item::Atom(Atom { symbol: "H", count: Some(3), span: 2..4 }),
            ],
            multiplier: None,
            span: 0..4,
        });
        assert_eq!(group.to_string(), "(CH3)");
    }

    #[test]
    fn mismatched_brackets() {
        let mut parser = Parser::new("(CH3]2");
        let errs = parser.try_parse_full::<Group>().unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].spans, vec![0..1, 4..5]);

        let mut parser = Parser::with_mode("(CH3]2", ParseMode::Lenient);
        let group = parser.try_parse_full::<Group>().unwrap();
        assert_eq!(group.composition().unwrap().to_string(), "C2H6");
    }

    #[test]
    fn empty_group() {
        let mut parser = Parser::new("()3");
        assert!(parser.try_parse_full::<Group>().is_err());

        let mut parser = Parser::with_mode("()3", ParseMode::Lenient);
        let group = parser.try_parse_full::<Group>().unwrap();
        assert!(group.composition().unwrap().is_empty());
    }

    fn nested(depth: usize) -> String {
        format!("{}H{}", "(".repeat(depth), ")".repeat(depth))
    }

    #[test]
    fn nesting_at_limit() {
        let source = nested(MAX_NESTING);
        let mut parser = Parser::new(&source);
        let group = parser.try_parse_full::<Group>().unwrap();
        assert_eq!(group.composition().unwrap().to_string(), "H");
    }

    #[test]
    fn nesting_past_limit() {
        for mode in [ParseMode::Strict, ParseMode::Lenient] {
            let source = nested(MAX_NESTING + 1);
            let mut parser = Parser::with_mode(&source, mode);
            let errs = parser.try_parse_full::<Group>().unwrap_err();
            assert_eq!(errs.len(), 1);
            assert_eq!(errs[0].spans, vec![MAX_NESTING..MAX_NESTING + 1]);
        }
    }

    #[test]
    fn very_deep_nesting_is_rejected() {
        let source = nested(200_000);
        let mut parser = Parser::new(&source);
        let errs = parser.try_parse_full::<Group>().unwrap_err();
        assert_eq!(errs.len(), 1);
    }

    #[test]
    fn scaled_count_overflow() {
        let mut parser = Parser::new("(C4000000000)2");
        let group = parser.try_parse_full::<Group>().unwrap();
        let err = group.composition().unwrap_err();
        assert_eq!(err.spans, vec![0..14]);
    }
}
