//! Last-error side channel for the C-compatible entry points.
//!
//! C callers of `strtol` inspect `errno` after the call. The functions in
//! [`crate::libc_compat`] record the same conditions here. The slot is
//! thread-local, like `errno` itself, and is only ever written on failure;
//! callers clear it before a call when they need to tell success apart.

use libc::c_int;
use std::cell::Cell;
use std::fmt;

/// Error codes the parser can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Errno {
    /// Invalid base argument (`EINVAL`).
    Inval,
    /// Value out of range, result clamped (`ERANGE`).
    Range,
}

impl Errno {
    /// Platform value of the code.
    pub fn raw(self) -> c_int {
        match self {
            Errno::Inval => libc::EINVAL,
            Errno::Range => libc::ERANGE,
        }
    }

    pub fn from_raw(code: c_int) -> Option<Self> {
        match code {
            libc::EINVAL => Some(Errno::Inval),
            libc::ERANGE => Some(Errno::Range),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Errno::Inval => "EINVAL",
            Errno::Range => "ERANGE",
        }
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.raw())
    }
}

thread_local! {
    static LAST_ERROR: Cell<Option<Errno>> = const { Cell::new(None) };
}

/// Last error recorded on this thread, if any.
pub fn errno() -> Option<Errno> {
    LAST_ERROR.with(|e| e.get())
}

pub fn set_errno(code: Errno) {
    LAST_ERROR.with(|e| e.set(Some(code)));
}

pub fn clear_errno() {
    LAST_ERROR.with(|e| e.set(None));
}
