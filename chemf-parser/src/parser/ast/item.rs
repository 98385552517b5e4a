use crate::{
    catalog,
    composition::Composition,
    parser::{
        ast::{atom::Atom, group::Group},
        error::{kind, Error},
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::Serialize;

/// A single item of a formula or group.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Item {
    Atom(Atom),
    Group(Group),
}

impl Item {
    /// Returns the span of the item.
    pub fn span(&self) -> Range<usize> {
        match self {
            Item::Atom(atom) => atom.span(),
            Item::Group(group) => group.span(),
        }
    }

    /// Returns the composition of the item.
    pub fn composition(&self) -> Result<Composition, Error> {
        match self {
            Item::Atom(atom) => Ok(atom.composition()),
            Item::Group(group) => group.composition(),
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Item::Atom(atom) => write!(f, "{}", atom),
            Item::Group(group) => write!(f, "{}", group),
        }
    }
}

/// Sums the compositions of the given items. An overflowing count is reported at `span`.
pub(crate) fn sum_items(items: &[Item], span: Range<usize>) -> Result<Composition, Error> {
    items.iter().try_fold(Composition::new(), |sum, item| {
        sum.checked_merge(&item.composition()?)
            .ok_or_else(|| Error::new(vec![span.clone()], kind::CountOverflow))
    })
}

/// Parses items until the end of the input, or until a closing bracket if `in_group` is true.
/// The closing bracket is left for the caller to consume.
///
/// Anything that is not an item is recorded as a recoverable error and skipped.
pub(crate) fn parse_items(
    input: &mut Parser,
    recoverable_errors: &mut Vec<Error>,
    in_group: bool,
) -> Result<Vec<Item>, Vec<Error>> {
    let mut items = Vec::new();

    while let Some(token) = input.current_token() {
        let (token_kind, lexeme) = (token.kind, token.lexeme);
        match token_kind {
            TokenKind::Element if catalog::lookup(lexeme).is_none() => {
                input.skip_with(recoverable_errors, kind::UnknownElement {
                    text: lexeme.to_owned(),
                    suggestions: catalog::similar_symbols(lexeme),
                });

                // a count right after an unknown element belongs to it
                if input.at(TokenKind::Count) {
                    input.cursor += 1;
                }
            },
            TokenKind::Element => items.push(Item::Atom(input.try_parse(recoverable_errors)?)),
            _ if token_kind.is_open_bracket() && input.allows_groups() => {
                items.push(Item::Group(input.try_parse(recoverable_errors)?));
            },
            _ if token_kind.is_close_bracket() && in_group => break,
            _ if token_kind.is_open_bracket() || token_kind.is_close_bracket() => {
                if input.allows_groups() {
                    input.skip_with(recoverable_errors, kind::UnclosedGroup { opening: false });
                } else {
                    input.skip_with(recoverable_errors, kind::UnexpectedGroup);
                }
            },
            TokenKind::Count => input.skip_with(recoverable_errors, kind::UnexpectedCount),
            _ => input.skip_with(recoverable_errors, kind::UnexpectedCharacter {
                character: lexeme.to_owned(),
            }),
        }
    }

    Ok(items)
}
