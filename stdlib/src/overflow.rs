//! Overflow detection while folding digits into the accumulator.
//!
//! Two strategies implement [`OverflowStrategy`]:
//!
//! - [`Cutoff`] precomputes the largest accumulator value that can still take
//!   another digit (`cutoff`) and the largest digit allowed at exactly that
//!   value (`cutlim`), then compares before every multiply-add. Works for any
//!   kind and sign.
//! - [`CheckedArith`] performs the multiply-add with overflow-reporting
//!   arithmetic. It is only implemented for unsigned kinds, where the
//!   representable magnitude is the full range of the accumulator.
//!
//! A parse prepares one strategy up front and keeps it for every digit.

use crate::kind::{IntKind, Magnitude};
use core::marker::PhantomData;

/// Accumulate-and-check capability for kind `K`.
pub trait OverflowStrategy<K: IntKind>: Sized {
    /// Set up for one parse in `base` with the sign already known.
    fn prepare(base: u8, negative: bool) -> Self;

    /// Fold `digit` into `acc`.
    ///
    /// Returns `false` and leaves `acc` untouched when the result would exceed
    /// the magnitude `K` can represent for this sign.
    fn accumulate(&self, acc: &mut K::Unsigned, digit: u8) -> bool;
}

/// Precomputed cutoff/cutlim comparison.
#[derive(Debug, Clone, Copy)]
pub struct Cutoff<U> {
    base: u8,
    cutoff: U,
    cutlim: u8,
}

impl<U: Magnitude> Cutoff<U> {
    pub fn new(base: u8, limit: U) -> Self {
        let (cutoff, cutlim) = limit.div_rem(base);
        Self {
            base,
            cutoff,
            cutlim,
        }
    }

    pub fn cutoff(&self) -> U {
        self.cutoff
    }

    pub fn cutlim(&self) -> u8 {
        self.cutlim
    }
}

impl<K: IntKind> OverflowStrategy<K> for Cutoff<K::Unsigned> {
    #[inline]
    fn prepare(base: u8, negative: bool) -> Self {
        Cutoff::new(base, K::magnitude_limit(negative))
    }

    #[inline]
    fn accumulate(&self, acc: &mut K::Unsigned, digit: u8) -> bool {
        if *acc > self.cutoff || (*acc == self.cutoff && digit > self.cutlim) {
            return false;
        }
        *acc = acc.wrapping_mul_add(self.base, digit);
        true
    }
}

/// Overflow-reporting multiply-add, unsigned kinds only.
#[derive(Debug, Clone, Copy)]
pub struct CheckedArith<U> {
    base: u8,
    _acc: PhantomData<U>,
}

macro_rules! impl_checked_arith {
    ($($u:ty),*) => {$(
        impl OverflowStrategy<$u> for CheckedArith<$u> {
            #[inline]
            fn prepare(base: u8, _negative: bool) -> Self {
                Self {
                    base,
                    _acc: PhantomData,
                }
            }

            #[inline]
            fn accumulate(&self, acc: &mut $u, digit: u8) -> bool {
                match acc.checked_mul_add(self.base, digit) {
                    Some(next) => {
                        *acc = next;
                        true
                    }
                    None => false,
                }
            }
        }
    )*};
}

impl_checked_arith!(u8, u16, u32, u64, u128, usize);
