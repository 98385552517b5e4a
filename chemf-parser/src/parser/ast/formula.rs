use crate::{
    composition::Composition,
    parser::{
        ast::item::{parse_items, sum_items, Item},
        error::{kind, Error},
        Parse,
        Parser,
    },
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::Serialize;

/// A complete linear formula, such as `(CH3)2C[C6H2(Br)2OH]2`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Formula {
    /// The top-level items of the formula.
    pub items: Vec<Item>,

    /// The region of the source code that this formula was parsed from.
    pub span: Range<usize>,
}

impl Formula {
    /// Returns the span of the formula.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns true if the formula contains no groups.
    pub fn is_flat(&self) -> bool {
        self.items.iter().all(|item| matches!(item, Item::Atom(_)))
    }

    /// Returns the empirical composition of the formula, with every group expanded.
    pub fn composition(&self) -> Result<Composition, Error> {
        sum_items(&self.items, self.span())
    }
}

impl Parse for Formula {
    fn std_parse(input: &mut Parser, recoverable_errors: &mut Vec<Error>) -> Result<Self, Vec<Error>> {
        let items = parse_items(input, recoverable_errors, false)?;
        let span = 0..input.eof_span().end;

        if items.is_empty() && recoverable_errors.is_empty() {
            recoverable_errors.push(Error::new(vec![span.clone()], kind::EmptyFormula));
        }

        Ok(Self { items, span })
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for item in &self.items {
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}
