use ariadne::Fmt;
use chemf_attrs::ErrorKind;
use chemf_error::{ErrorKind, EXPR};
use crate::{parser::MAX_NESTING, tokenizer::TokenKind};

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of formula",
    labels = [format!("you might need to add another {} here", "element".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of formula",
    labels = [format!("I could not understand the remaining {} here", "formula".fg(EXPR))],
)]
pub struct ExpectedEof;

/// The formula contains nothing to count.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty formula",
    labels = ["I expected to see a formula here"],
    help = format!("a formula is a sequence of elements, such as {}", "H2O".fg(EXPR)),
)]
pub struct EmptyFormula;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A character that cannot appear in a formula.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected character `{}`", character),
    labels = ["this character cannot appear in a formula"],
    help = "formulas may only contain element symbols, counts, and the brackets `(`, `)`, `[`, and `]`",
)]
pub struct UnexpectedCharacter {
    /// The character that was found.
    pub character: String,
}

/// A run of letters that is not an atomic symbol.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown element `{}`", text),
    labels = ["this is not the symbol of an element"],
    help = if suggestions.is_empty() {
        "element symbols are an uppercase letter, optionally followed by a lowercase letter".to_string()
    } else {
        format!(
            "did you mean {}?",
            suggestions.iter()
                .map(|symbol| format!("`{}`", symbol.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    },
)]
pub struct UnknownElement {
    /// The text that was found.
    pub text: String,

    /// Symbols the user may have meant instead.
    pub suggestions: Vec<&'static str>,
}

/// A count that does not follow an element or a group.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected count",
    labels = ["this count does not follow an element or a group"],
    help = format!("counts are written after what they count, such as {} or {}", "H2".fg(EXPR), "(CH3)2".fg(EXPR)),
)]
pub struct UnexpectedCount;

/// A count or multiplier of zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "count of zero",
    labels = ["this count is zero"],
    help = "remove the element or group instead, or omit the count to count it once",
)]
pub struct ZeroCount;

/// A count, or a count scaled by the multipliers of its groups, does not fit in 32 bits.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "count is too large",
    labels = ["the number of atoms here is too large"],
    help = format!("counts must be at most {}", u32::MAX.fg(EXPR)),
)]
pub struct CountOverflow;

/// A group was not closed, or a closing bracket has no group to close.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed group",
    labels = [if *opening {
        "this bracket is never closed"
    } else {
        "this bracket does not close any group"
    }],
    help = if *opening {
        "add a closing bracket somewhere after this"
    } else {
        "add an opening bracket somewhere before this, or remove it"
    },
)]
pub struct UnclosedGroup {
    /// Whether the bracket was an opening bracket. Otherwise, it was a closing bracket.
    pub opening: bool,
}

/// A group was closed with the wrong kind of bracket.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "mismatched brackets",
    labels = [
        format!("this group opens with `{}`", open),
        format!("but is closed with `{}`", close),
    ],
    help = format!("close the group with `{}`", expected),
)]
pub struct MismatchedBracket {
    /// The opening bracket.
    pub open: char,

    /// The closing bracket that was found.
    pub close: char,

    /// The closing bracket that matches `open`.
    pub expected: char,
}

/// Groups were nested deeper than [`MAX_NESTING`].
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "groups are nested too deeply",
    labels = ["this group is too deep"],
    help = format!("groups may be nested at most {} deep", MAX_NESTING.fg(EXPR)),
)]
pub struct NestingTooDeep;

/// There was nothing inside a pair of brackets.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty group",
    labels = ["add an element inside this group"],
)]
pub struct EmptyGroup;

/// A group was found in a formula that must be flat.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected group",
    labels = ["brackets are not allowed here"],
    help = "this formula must only contain elements and counts",
)]
pub struct UnexpectedGroup;
