//! The integer parsing engine.
//!
//! One generic body serves every [`IntKind`]. The steps are:
//!
//! 1. reject bases other than `0` and `2..=36` without reading the input
//! 2. skip leading whitespace
//! 3. read an optional `+` or `-`
//! 4. pick the base from a `0` / `0x` prefix when asked to (base `0`), or step
//!    over a `0x` prefix in base 16
//! 5. fold digits until the first byte that is not a digit in that base
//! 6. apply the sign, clamp on overflow and report how far the scan got

use crate::ctype::{digit_value, is_hex_marker, is_space, is_valid_base};
use crate::cursor::Cursor;
use crate::kind::{IntKind, Magnitude};
use crate::overflow::OverflowStrategy;
use core::fmt;

/// Base value requesting detection from the input prefix.
pub const AUTO_BASE: u32 = 0;

/// Outcome classification of a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseStatus {
    /// At least one digit was read and the value fits.
    Ok,
    /// The base argument was neither `0` nor in `2..=36`. Input not scanned.
    InvalidConfiguration,
    /// No digit was found after whitespace, sign and prefix.
    NoDigitsConsumed,
    /// Digits were read but the magnitude does not fit. Value is clamped.
    OutOfRange,
}

impl ParseStatus {
    pub fn is_ok(self) -> bool {
        self == ParseStatus::Ok
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ParseStatus::Ok => "ok",
            ParseStatus::InvalidConfiguration => "invalid-configuration",
            ParseStatus::NoDigitsConsumed => "no-digits",
            ParseStatus::OutOfRange => "out-of-range",
        }
    }
}

impl fmt::Display for ParseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value, consumed length and status of one parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseResult<K> {
    /// Parsed value. Zero unless digits were read; the kind's boundary on
    /// [`ParseStatus::OutOfRange`].
    pub value: K,
    /// Bytes of input logically consumed, the `endptr - nptr` of C.
    pub consumed: usize,
    pub status: ParseStatus,
}

impl<K: IntKind> ParseResult<K> {
    fn rejected(status: ParseStatus, consumed: usize) -> Self {
        Self {
            value: K::ZERO,
            consumed,
            status,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}

/// Parse an integer of kind `K` from the start of `input`.
///
/// `base` is `0` for auto-detection (`0x` → 16, leading `0` → 8, otherwise 10)
/// or an explicit base in `2..=36`. Unsigned kinds use the overflow strategy
/// selected by the `checked-overflow` feature; signed kinds use the cutoff
/// comparison.
///
/// ```
/// use strtoi_stdlib::{parse_integer, ParseStatus};
///
/// let r = parse_integer::<i32>("  -0777", 0);
/// assert_eq!(r.value, -511);
/// assert_eq!(r.consumed, 7);
/// assert_eq!(r.status, ParseStatus::Ok);
/// ```
pub fn parse_integer<K: IntKind>(input: impl AsRef<[u8]>, base: u32) -> ParseResult<K> {
    parse_with::<K, K::Strategy>(input.as_ref(), base)
}

/// Parse with an explicitly chosen overflow strategy.
pub fn parse_with<K, S>(input: &[u8], base: u32) -> ParseResult<K>
where
    K: IntKind,
    S: OverflowStrategy<K>,
{
    if base != AUTO_BASE && !is_valid_base(base) {
        trace!("invalid base {}", base);
        return ParseResult::rejected(ParseStatus::InvalidConfiguration, 0);
    }

    let mut cur = Cursor::new(input);
    // Reported when no digit follows; moves past the `0` of a `0x` prefix.
    let mut fallback_end = 0usize;
    let mut prefix_zero = false;

    while is_space(cur.peek()) {
        cur.bump();
    }

    let negative = match cur.peek() {
        b'-' => {
            cur.bump();
            true
        }
        b'+' => {
            cur.bump();
            false
        }
        _ => false,
    };

    let mut base = base;
    if cur.peek() == b'0' {
        if is_hex_marker(cur.peek_at(1)) && (base == AUTO_BASE || base == 16) {
            base = 16;
            cur.bump();
            fallback_end = cur.offset();
            prefix_zero = true;
            cur.bump();
        } else if base == AUTO_BASE {
            base = 8;
        }
    } else if base == AUTO_BASE {
        base = 10;
    }
    trace!("base {} negative {} digits at {}", base, negative, cur.offset());

    // `base` is in 2..=36 from here on
    let radix = base as u8;
    let strategy = S::prepare(radix, negative);
    let mut acc = <K::Unsigned as Magnitude>::ZERO;
    let mut any_digit = false;
    let mut overflow = false;

    while let Some(digit) = digit_value(cur.peek(), base) {
        if !overflow && !strategy.accumulate(&mut acc, digit) {
            trace!("overflow at offset {}", cur.offset());
            overflow = true;
        }
        any_digit = true;
        cur.bump();
    }

    if !any_digit {
        let status = if prefix_zero {
            ParseStatus::Ok
        } else {
            ParseStatus::NoDigitsConsumed
        };
        return ParseResult::rejected(status, fallback_end);
    }

    if overflow {
        return ParseResult {
            value: K::clamp_bound(negative),
            consumed: cur.offset(),
            status: ParseStatus::OutOfRange,
        };
    }

    ParseResult {
        value: K::from_magnitude(acc, negative),
        consumed: cur.offset(),
        status: ParseStatus::Ok,
    }
}
