//! Integer width kinds the parser can be instantiated for.
//!
//! Every primitive integer implements [`IntKind`]. The parser accumulates the
//! magnitude of the number in the kind's unsigned counterpart
//! ([`IntKind::Unsigned`]) and converts it back once the sign is known.

use crate::overflow::{Cutoff, OverflowStrategy};
use core::fmt;

/// Unsigned accumulator used while digits are folded in.
pub trait Magnitude: Copy + Eq + Ord + fmt::Debug {
    const ZERO: Self;

    /// `self * base + digit`, or `None` if either step overflows.
    fn checked_mul_add(self, base: u8, digit: u8) -> Option<Self>;

    /// `self * base + digit` with two's complement wrapping.
    fn wrapping_mul_add(self, base: u8, digit: u8) -> Self;

    /// Quotient and remainder of a division by `base`.
    fn div_rem(self, base: u8) -> (Self, u8);
}

/// A concrete integer representation: bit width plus signedness.
pub trait IntKind: Copy + Eq + Ord + fmt::Debug + fmt::Display {
    /// Unsigned type of the same width.
    type Unsigned: Magnitude;

    /// Overflow detection used by [`crate::parse_integer`] for this kind.
    type Strategy: OverflowStrategy<Self>;

    const SIGNED: bool;
    const BITS: u32;
    const MIN: Self;
    const MAX: Self;
    const ZERO: Self;

    /// Largest magnitude representable with the given sign.
    ///
    /// For signed kinds the negative range is one larger than the positive one.
    /// Unsigned kinds ignore the sign.
    fn magnitude_limit(negative: bool) -> Self::Unsigned;

    /// Reinterpret an in-range magnitude as a value, negating when requested.
    ///
    /// Negation wraps, so an unsigned kind maps `-1` to its maximum like
    /// `strtoul` does.
    fn from_magnitude(magnitude: Self::Unsigned, negative: bool) -> Self;

    /// Boundary an overflowing parse is clamped to.
    fn clamp_bound(negative: bool) -> Self {
        if negative && Self::SIGNED {
            Self::MIN
        } else {
            Self::MAX
        }
    }
}

macro_rules! impl_magnitude {
    ($($u:ty),*) => {$(
        impl Magnitude for $u {
            const ZERO: Self = 0;

            #[inline]
            fn checked_mul_add(self, base: u8, digit: u8) -> Option<Self> {
                self.checked_mul(base as $u)?.checked_add(digit as $u)
            }

            #[inline]
            fn wrapping_mul_add(self, base: u8, digit: u8) -> Self {
                self.wrapping_mul(base as $u).wrapping_add(digit as $u)
            }

            #[inline]
            fn div_rem(self, base: u8) -> (Self, u8) {
                let b = base as $u;
                (self / b, (self % b) as u8)
            }
        }
    )*};
}

impl_magnitude!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_signed_kind {
    ($($t:ty => $u:ty),*) => {$(
        impl IntKind for $t {
            type Unsigned = $u;
            type Strategy = Cutoff<$u>;

            const SIGNED: bool = true;
            const BITS: u32 = <$t>::BITS;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const ZERO: Self = 0;

            #[inline]
            fn magnitude_limit(negative: bool) -> $u {
                if negative {
                    <$t>::MIN.unsigned_abs()
                } else {
                    <$t>::MAX as $u
                }
            }

            #[inline]
            fn from_magnitude(magnitude: $u, negative: bool) -> Self {
                let v = magnitude as $t;
                if negative {
                    v.wrapping_neg()
                } else {
                    v
                }
            }
        }
    )*};
}

impl_signed_kind!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize
);

#[cfg(feature = "checked-overflow")]
macro_rules! unsigned_strategy {
    ($u:ty) => {
        crate::overflow::CheckedArith<$u>
    };
}

#[cfg(not(feature = "checked-overflow"))]
macro_rules! unsigned_strategy {
    ($u:ty) => {
        Cutoff<$u>
    };
}

macro_rules! impl_unsigned_kind {
    ($($u:ty),*) => {$(
        impl IntKind for $u {
            type Unsigned = $u;
            type Strategy = unsigned_strategy!($u);

            const SIGNED: bool = false;
            const BITS: u32 = <$u>::BITS;
            const MIN: Self = 0;
            const MAX: Self = <$u>::MAX;
            const ZERO: Self = 0;

            #[inline]
            fn magnitude_limit(_negative: bool) -> $u {
                <$u>::MAX
            }

            #[inline]
            fn from_magnitude(magnitude: $u, negative: bool) -> Self {
                if negative {
                    magnitude.wrapping_neg()
                } else {
                    magnitude
                }
            }
        }
    )*};
}

impl_unsigned_kind!(u8, u16, u32, u64, u128, usize);
