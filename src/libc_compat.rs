//! C-compatible `strtol` family.
//!
//! Each function follows its C namesake: it returns the value together with
//! the offset C would store through `endptr`, and records failures in the
//! thread-local [`errno`](crate::errno) slot. Success leaves the slot
//! untouched.
//!
//! ```
//! use strtoi::errno::{clear_errno, errno, Errno};
//! use strtoi::libc_compat::strtoul;
//!
//! clear_errno();
//! let (value, end) = strtoul(b"99999999999999999999999 apples", 10);
//! assert_eq!(value, libc::c_ulong::MAX);
//! assert_eq!(end, 23);
//! assert_eq!(errno(), Some(Errno::Range));
//! ```

use crate::errno::{set_errno, Errno};
use crate::{parse_integer, IntKind, ParseStatus};
use libc::{c_int, c_long, c_longlong, c_ulong, c_ulonglong, intmax_t, uintmax_t};

/// Shared body of every entry point.
fn strtoi<K: IntKind>(nptr: &[u8], base: c_int) -> (K, usize) {
    // A negative base is as invalid as 1 or 37
    let Ok(base) = u32::try_from(base) else {
        set_errno(Errno::Inval);
        return (K::ZERO, 0);
    };
    let r = parse_integer::<K>(nptr, base);
    match r.status {
        ParseStatus::InvalidConfiguration => set_errno(Errno::Inval),
        ParseStatus::OutOfRange => set_errno(Errno::Range),
        ParseStatus::Ok | ParseStatus::NoDigitsConsumed => {}
    }
    (r.value, r.consumed)
}

pub fn strtol(nptr: &[u8], base: c_int) -> (c_long, usize) {
    strtoi(nptr, base)
}

pub fn strtoul(nptr: &[u8], base: c_int) -> (c_ulong, usize) {
    strtoi(nptr, base)
}

pub fn strtoll(nptr: &[u8], base: c_int) -> (c_longlong, usize) {
    strtoi(nptr, base)
}

pub fn strtoull(nptr: &[u8], base: c_int) -> (c_ulonglong, usize) {
    strtoi(nptr, base)
}

pub fn strtoimax(nptr: &[u8], base: c_int) -> (intmax_t, usize) {
    strtoi(nptr, base)
}

pub fn strtoumax(nptr: &[u8], base: c_int) -> (uintmax_t, usize) {
    strtoi(nptr, base)
}

/// `(int) strtol(nptr, NULL, 10)`; out-of-range values are truncated.
pub fn atoi(nptr: &[u8]) -> c_int {
    strtol(nptr, 10).0 as c_int
}

pub fn atol(nptr: &[u8]) -> c_long {
    strtol(nptr, 10).0
}

pub fn atoll(nptr: &[u8]) -> c_longlong {
    strtoll(nptr, 10).0
}
