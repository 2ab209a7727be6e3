//! Strtoi - strtol-family integer parsing for every integer width
//!
//! One parsing algorithm, the one behind C's `strtol`, `strtoul`, `strtoll`
//! and friends, instantiated for every Rust integer type.
//!
//! # Features
//!
//! - **Classic semantics**: leading whitespace, optional sign, `0`/`0x` base
//!   detection, bases 2 through 36, case-insensitive letter digits
//! - **Every width**: `i8` through `i128`, `u8` through `u128`, `isize`, `usize`
//! - **Saturating overflow**: out-of-range input clamps to the type's boundary
//!   and still reports how much input was consumed
//! - **C compatibility**: `strtol`-style entry points with a thread-local
//!   `errno` equivalent
//!
//! # Example
//!
//! ```rust
//! use strtoi::{parse_integer, ParseStatus};
//!
//! let r = parse_integer::<i32>("  -0777 rest", 0);
//! assert_eq!(r.value, -511);
//! assert_eq!(r.consumed, 7);
//! assert_eq!(r.status, ParseStatus::Ok);
//!
//! let r = parse_integer::<u32>("99999999999999999999", 10);
//! assert_eq!(r.value, u32::MAX);
//! assert_eq!(r.status, ParseStatus::OutOfRange);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐   ┌──────────────────────┐
//! │ libc_compat (errno)  │   │ width::parse_dynamic │
//! └──────────┬───────────┘   └──────────┬───────────┘
//!            └────────────┬─────────────┘
//!                         ▼
//!              ┌─────────────────────┐
//!              │ parse_integer::<K>  │  strtoi-stdlib
//!              └─────────────────────┘
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod errno;
pub mod error;
pub mod libc_compat;
pub mod width;

// Re-export the engine
pub use strtoi_stdlib::{
    digit_value, is_space, is_valid_base, parse_integer, parse_with, CheckedArith, Cutoff,
    IntKind, OverflowStrategy, ParseResult, ParseStatus, AUTO_BASE, MAX_BASE, MIN_BASE,
};

pub use config::{ConfigError, ConfigResult, OutputConfig, OutputFormat, ParseConfig, StrtoiConfig};
pub use errno::{clear_errno, errno, set_errno, Errno};
pub use error::{parse_exact, IntoResult, ParseError};
pub use width::{parse_dynamic, DynParseResult, IntValue, UnknownKind, WidthKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
