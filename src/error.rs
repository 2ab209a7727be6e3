//! Error types for fallible parsing.

use crate::{parse_integer, IntKind, ParseResult, ParseStatus};
use thiserror::Error;

/// Why a parse did not produce an in-range value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid base {0}: expected 0 or 2..=36")]
    InvalidBase(u32),

    #[error("no digits found")]
    NoDigits,

    #[error("value out of range after {consumed} bytes")]
    OutOfRange { consumed: usize },

    #[error("unexpected input at offset {offset}")]
    TrailingInput { offset: usize },
}

/// Conversion of a [`ParseResult`] into a `Result`.
pub trait IntoResult<K> {
    /// `Ok((value, consumed))` when the status is [`ParseStatus::Ok`].
    fn into_result(self, base: u32) -> Result<(K, usize), ParseError>;
}

impl<K: IntKind> IntoResult<K> for ParseResult<K> {
    fn into_result(self, base: u32) -> Result<(K, usize), ParseError> {
        match self.status {
            ParseStatus::Ok => Ok((self.value, self.consumed)),
            ParseStatus::InvalidConfiguration => Err(ParseError::InvalidBase(base)),
            ParseStatus::NoDigitsConsumed => Err(ParseError::NoDigits),
            ParseStatus::OutOfRange => Err(ParseError::OutOfRange {
                consumed: self.consumed,
            }),
        }
    }
}

/// Parse `input` as a whole.
///
/// Same rules as [`parse_integer`], but anything left after the digits is an
/// error.
///
/// ```
/// use strtoi::{parse_exact, ParseError};
///
/// assert_eq!(parse_exact::<u8>(" 0xff", 0), Ok(255));
/// assert_eq!(parse_exact::<u8>("12px", 10), Err(ParseError::TrailingInput { offset: 2 }));
/// ```
pub fn parse_exact<K: IntKind>(input: impl AsRef<[u8]>, base: u32) -> Result<K, ParseError> {
    let bytes = input.as_ref();
    let (value, consumed) = parse_integer::<K>(bytes, base).into_result(base)?;
    if consumed != bytes.len() {
        return Err(ParseError::TrailingInput { offset: consumed });
    }
    Ok(value)
}
