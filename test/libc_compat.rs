//! Integration tests for the C-compatible entry points
//!
//! Mirrors how C callers use `strtol`: clear errno, call, inspect both the
//! end offset and errno.

use libc::{c_long, c_ulong};
use strtoi::errno::{clear_errno, errno, Errno};
use strtoi::libc_compat::{atoi, strtol, strtoll, strtoul, strtoull};

// ============================================================================
// endptr
// ============================================================================

#[test]
fn test_end_offset_after_digits() {
    clear_errno();
    assert_eq!(strtol(b"  42 is the answer", 10), (42, 4));
    assert_eq!(strtol(b"0x1fg", 0), (31, 4));
    assert_eq!(strtol(b"0x1fg", 16), (31, 4));
    assert_eq!(errno(), None);
}

#[test]
fn test_end_offset_without_digits_is_start() {
    clear_errno();
    assert_eq!(strtol(b"   +", 10), (0, 0));
    assert_eq!(strtol(b"  -z", 10), (0, 0));
    assert_eq!(errno(), None);
}

#[test]
fn test_end_offset_bare_hex_prefix() {
    // endptr points at the `x`: only the `0` was converted
    assert_eq!(strtoul(b"0x", 16), (0, 1));
    assert_eq!(strtoul(b"  0xq", 0), (0, 3));
}

#[test]
fn test_chained_parsing_with_end_offsets() {
    // The classic `while (p != end)` loop over a list of numbers
    let input = b"10 0x20 030 -4";
    let mut rest: &[u8] = input;
    let mut values = Vec::new();
    loop {
        let (v, end) = strtol(rest, 0);
        if end == 0 {
            break;
        }
        values.push(v);
        rest = &rest[end..];
    }
    assert_eq!(values, vec![10, 32, 24, -4]);
}

// ============================================================================
// errno
// ============================================================================

#[test]
fn test_erange_clamps_both_ways() {
    clear_errno();
    assert_eq!(strtol(b"99999999999999999999999", 10).0, c_long::MAX);
    assert_eq!(errno(), Some(Errno::Range));

    clear_errno();
    assert_eq!(strtol(b"-99999999999999999999999", 10).0, c_long::MIN);
    assert_eq!(errno(), Some(Errno::Range));

    clear_errno();
    assert_eq!(strtoul(b"-99999999999999999999999", 10).0, c_ulong::MAX);
    assert_eq!(errno(), Some(Errno::Range));
    clear_errno();
}

#[test]
fn test_einval_for_bad_base() {
    clear_errno();
    assert_eq!(strtoull(b"10", 40), (0, 0));
    assert_eq!(errno(), Some(Errno::Inval));
    assert_eq!(errno().map(Errno::raw), Some(libc::EINVAL));
    clear_errno();
}

#[test]
fn test_strtoul_negation_wraps() {
    clear_errno();
    assert_eq!(strtoull(b"-1", 10), (u64::MAX, 2));
    assert_eq!(errno(), None);
}

#[test]
fn test_errno_is_per_thread() {
    clear_errno();
    let handle = std::thread::spawn(|| {
        strtoll(b"99999999999999999999999", 10);
        errno()
    });
    assert_eq!(handle.join().unwrap(), Some(Errno::Range));
    assert_eq!(errno(), None);
}

#[test]
fn test_atoi_truncates_like_c_cast() {
    assert_eq!(atoi(b"2147483647"), i32::MAX);
    assert_eq!(atoi(b"  -17 apples"), -17);
    assert_eq!(atoi(b"apples"), 0);
}
