use crate::{
    parser::{error::{kind, Error}, Parser},
    tokenizer::TokenKind,
};
use std::ops::Range;

/// Generates a struct for each token kind, as well as a `parse_from` function for each token
/// kind. This enables the parser to use and request token kinds as a type, which is much more
/// ergonomic than matching on [`TokenKind`]s.
macro_rules! token_kinds {
    ($($name:ident)*) => {
        $(
            #[derive(Clone, Debug, PartialEq)]
            pub(crate) struct $name<'source> {
                pub(crate) lexeme: &'source str,
                pub(crate) span: Range<usize>,
            }

            impl<'source> $name<'source> {
                /// Parses this token from the given parser, advancing the cursor past it.
                pub(crate) fn parse_from(input: &mut Parser<'source>) -> Result<Self, Error> {
                    let token = input.next_token()?;

                    if token.kind == TokenKind::$name {
                        Ok(Self {
                            lexeme: token.lexeme,
                            span: token.span,
                        })
                    } else {
                        Err(Error::new(vec![token.span], kind::UnexpectedToken {
                            expected: &[TokenKind::$name],
                            found: token.kind,
                        }))
                    }
                }
            }
        )*
    };
}

token_kinds!(
    Count
    Element
);
