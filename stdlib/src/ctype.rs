//! Character classification for the parser.
//!
//! Both predicates are locale independent and operate on raw bytes.

/// Smallest explicit base accepted by the parser.
pub const MIN_BASE: u32 = 2;

/// Largest base accepted by the parser.
pub const MAX_BASE: u32 = 36;

/// Whitespace as recognised by the C locale `isspace`.
///
/// Accepts tab, newline, vertical tab, form feed, carriage return and space.
#[inline]
pub fn is_space(c: u8) -> bool {
    (b'\t'..=b'\r').contains(&c) || c == b' '
}

/// Value of `c` as a digit in `base`.
///
/// Letters are case-insensitive and continue after `9`, so `'a'` and `'A'`
/// are both 10 and `'z'` is 35. Returns `None` when `c` is not a digit or its
/// value does not fit the base, including for bases outside `2..=36`.
#[inline]
pub fn digit_value(c: u8, base: u32) -> Option<u8> {
    let value = match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'z' => c - b'a' + 10,
        b'A'..=b'Z' => c - b'A' + 10,
        _ => return None,
    };
    if !is_valid_base(base) || u32::from(value) >= base {
        return None;
    }
    Some(value)
}

/// True for bases the digit loop can run with, `2..=36`.
///
/// Base `0` (auto-detect) is accepted by the parser but never reaches digit
/// classification.
#[inline]
pub fn is_valid_base(base: u32) -> bool {
    (MIN_BASE..=MAX_BASE).contains(&base)
}

/// True for `'x'` and `'X'`.
#[inline]
pub(crate) fn is_hex_marker(c: u8) -> bool {
    c.eq_ignore_ascii_case(&b'x')
}
