use crate::{
    catalog,
    composition::Composition,
    parser::{
        ast::count::parse_count,
        error::{kind, Error},
        token::Element,
        Parse,
        Parser,
    },
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::Serialize;

/// An atomic symbol with an optional count, such as `H2` or `Cl`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Atom {
    /// The atomic symbol, as it appears in the [catalog](crate::catalog::CATALOG).
    pub symbol: &'static str,

    /// The count written after the symbol, if any.
    pub count: Option<u32>,

    /// The region of the source code that this atom was parsed from.
    pub span: Range<usize>,
}

impl Atom {
    /// Returns the span of the atom.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns the number of atoms this represents. A missing count means one atom.
    pub fn count(&self) -> u32 {
        self.count.unwrap_or(1)
    }

    /// Returns the composition of this atom.
    pub fn composition(&self) -> Composition {
        Composition::single(self.symbol, self.count())
    }
}

impl Parse for Atom {
    fn std_parse(input: &mut Parser, recoverable_errors: &mut Vec<Error>) -> Result<Self, Vec<Error>> {
        let element = Element::parse_from(input).map_err(|err| vec![err])?;
        let Some((symbol, _)) = catalog::lookup(element.lexeme) else {
            return Err(vec![Error::new(vec![element.span], kind::UnknownElement {
                text: element.lexeme.to_owned(),
                suggestions: catalog::similar_symbols(element.lexeme),
            })]);
        };

        let (count, end) = match parse_count(input, recoverable_errors)? {
            Some((count, span)) => (Some(count), span.end),
            None => (None, element.span.end),
        };

        Ok(Self {
            symbol,
            count,
            span: element.span.start..end,
        })
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol)?;
        if let Some(count) = self.count {
            write!(f, "{}", count)?;
        }
        Ok(())
    }
}
