//! Width kinds chosen at runtime.
//!
//! The engine is generic and monomorphised per integer type. Callers that only
//! learn the target width at runtime (the CLI, a config file) name it with a
//! [`WidthKind`]; [`parse_dynamic`] matches once and hands off to the
//! concrete instantiation, so nothing is dispatched per digit.

use crate::{parse_integer, IntKind, ParseResult, ParseStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Expands `$body` with `$k` bound to the primitive type named by `$kind`.
macro_rules! with_kind {
    ($kind:expr, $k:ident => $body:expr) => {
        match $kind {
            WidthKind::I8 => {
                type $k = i8;
                $body
            }
            WidthKind::I16 => {
                type $k = i16;
                $body
            }
            WidthKind::I32 => {
                type $k = i32;
                $body
            }
            WidthKind::I64 => {
                type $k = i64;
                $body
            }
            WidthKind::I128 => {
                type $k = i128;
                $body
            }
            WidthKind::Isize => {
                type $k = isize;
                $body
            }
            WidthKind::U8 => {
                type $k = u8;
                $body
            }
            WidthKind::U16 => {
                type $k = u16;
                $body
            }
            WidthKind::U32 => {
                type $k = u32;
                $body
            }
            WidthKind::U64 => {
                type $k = u64;
                $body
            }
            WidthKind::U128 => {
                type $k = u128;
                $body
            }
            WidthKind::Usize => {
                type $k = usize;
                $body
            }
        }
    };
}

/// A concrete integer representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthKind {
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
}

impl WidthKind {
    pub const ALL: [WidthKind; 12] = [
        WidthKind::I8,
        WidthKind::I16,
        WidthKind::I32,
        WidthKind::I64,
        WidthKind::I128,
        WidthKind::Isize,
        WidthKind::U8,
        WidthKind::U16,
        WidthKind::U32,
        WidthKind::U64,
        WidthKind::U128,
        WidthKind::Usize,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WidthKind::I8 => "i8",
            WidthKind::I16 => "i16",
            WidthKind::I32 => "i32",
            WidthKind::I64 => "i64",
            WidthKind::I128 => "i128",
            WidthKind::Isize => "isize",
            WidthKind::U8 => "u8",
            WidthKind::U16 => "u16",
            WidthKind::U32 => "u32",
            WidthKind::U64 => "u64",
            WidthKind::U128 => "u128",
            WidthKind::Usize => "usize",
        }
    }

    pub fn bits(self) -> u32 {
        with_kind!(self, K => K::BITS)
    }

    pub fn is_signed(self) -> bool {
        with_kind!(self, K => K::SIGNED)
    }

    pub fn min_value(self) -> IntValue {
        with_kind!(self, K => IntValue::from(K::MIN))
    }

    pub fn max_value(self) -> IntValue {
        with_kind!(self, K => IntValue::from(K::MAX))
    }
}

impl fmt::Display for WidthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown width kind '{0}' (expected one of i8..i128, isize, u8..u128, usize)")]
pub struct UnknownKind(pub String);

impl FromStr for WidthKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        WidthKind::ALL
            .into_iter()
            .find(|k| k.name() == lower)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}


/// A parsed value of any width, widened without loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IntValue {
    Signed(i128),
    Unsigned(u128),
}

macro_rules! int_value_from {
    ($variant:ident: $($t:ty),*) => {$(
        impl From<$t> for IntValue {
            fn from(v: $t) -> Self {
                IntValue::$variant(v as _)
            }
        }
    )*};
}

int_value_from!(Signed: i8, i16, i32, i64, i128, isize);
int_value_from!(Unsigned: u8, u16, u32, u64, u128, usize);

impl fmt::Display for IntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntValue::Signed(v) => fmt::Display::fmt(v, f),
            IntValue::Unsigned(v) => fmt::Display::fmt(v, f),
        }
    }
}

/// [`ParseResult`] for a width chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DynParseResult {
    pub kind: WidthKind,
    pub value: IntValue,
    pub consumed: usize,
    #[serde(serialize_with = "serialize_status")]
    pub status: ParseStatus,
}

fn serialize_status<S: serde::Serializer>(status: &ParseStatus, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(status.as_str())
}

impl DynParseResult {
    fn from_typed<K>(kind: WidthKind, r: ParseResult<K>) -> Self
    where
        K: IntKind,
        IntValue: From<K>,
    {
        Self {
            kind,
            value: IntValue::from(r.value),
            consumed: r.consumed,
            status: r.status,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}

/// Parse `input` into the integer type named by `kind`.
pub fn parse_dynamic(input: impl AsRef<[u8]>, base: u32, kind: WidthKind) -> DynParseResult {
    let bytes = input.as_ref();
    with_kind!(kind, K => DynParseResult::from_typed(kind, parse_integer::<K>(bytes, base)))
}
