use crate::{
    parser::{error::{kind, Error}, token::Count, Parser},
    tokenizer::TokenKind,
};
use std::ops::Range;

/// Parses the count or multiplier at the cursor, if there is one.
///
/// A count that does not fit in a [`u32`] cannot be recovered from. A count of zero is
/// recoverable; the caller keeps it, and the element or group it belongs to then counts for
/// nothing.
pub(crate) fn parse_count(
    input: &mut Parser,
    recoverable_errors: &mut Vec<Error>,
) -> Result<Option<(u32, Range<usize>)>, Vec<Error>> {
    if !input.at(TokenKind::Count) {
        return Ok(None);
    }

    let count = Count::parse_from(input).map_err(|err| vec![err])?;
    let value = count.lexeme
        .parse::<u32>()
        .map_err(|_| vec![Error::new(vec![count.span.clone()], kind::CountOverflow)])?;

    if value == 0 {
        recoverable_errors.push(Error::new(vec![count.span.clone()], kind::ZeroCount));
    }

    Ok(Some((value, count.span)))
}
