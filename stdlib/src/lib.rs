//! Strtoi Standard Library - integer parsing engine
//!
//! The `strtol` family of C functions shares one algorithm that differs only
//! in the width and signedness of the result. This crate holds that algorithm
//! once, generic over [`IntKind`], and every primitive integer type is a kind.
//!
//! # Layout
//!
//! - [`ctype`] - whitespace and digit classification
//! - [`cursor`] - byte cursor with a NUL sentinel
//! - [`kind`] - width kinds and their unsigned accumulators
//! - [`overflow`] - cutoff and checked-arithmetic overflow detection
//! - [`parse`] - the engine
//!
//! # Example
//!
//! ```
//! use strtoi_stdlib::{parse_integer, ParseStatus};
//!
//! let r = parse_integer::<u32>("99999999999999999999", 10);
//! assert_eq!(r.status, ParseStatus::OutOfRange);
//! assert_eq!(r.value, u32::MAX);
//!
//! let r = parse_integer::<i64>("0x1A", 0);
//! assert_eq!((r.value, r.consumed), (26, 4));
//! ```
//!
//! # Features
//!
//! - `checked-overflow` (default): unsigned kinds detect overflow with
//!   checked multiply/add; without it they use the cutoff comparison too.
//! - `trace`: print engine steps to stderr.

#[cfg(feature = "trace")]
macro_rules! trace {
    ($($arg:tt)*) => {
        eprintln!("[strtoi] {}", format_args!($($arg)*))
    };
}

#[cfg(not(feature = "trace"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

pub mod ctype;
pub mod cursor;
pub mod kind;
pub mod overflow;
pub mod parse;

pub use ctype::{digit_value, is_space, is_valid_base, MAX_BASE, MIN_BASE};
pub use cursor::{Cursor, SENTINEL};
pub use kind::{IntKind, Magnitude};
pub use overflow::{CheckedArith, Cutoff, OverflowStrategy};
pub use parse::{parse_integer, parse_with, ParseResult, ParseStatus, AUTO_BASE};
