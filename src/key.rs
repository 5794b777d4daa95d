//! Key-compatible element types.
//!
//! A keyset only holds values that can serve as lookup keys: integers and
//! strings. `KeyCompatible` is sealed so the bound cannot be widened to
//! arbitrary `Eq + Hash` types from outside the crate. Because every
//! implementor has a std-provided `Eq`/`Hash`, no user code runs while a
//! `Keyset` probes its index.

use core::fmt;
use core::hash::Hash;
use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

mod sealed {
    pub trait Sealed {}
}

/// Marker for values usable as keyset elements (integers or strings).
pub trait KeyCompatible: sealed::Sealed + Eq + Hash {}

macro_rules! key_compatible {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl KeyCompatible for $t {}
        )*
    };
}

key_compatible!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
key_compatible!(String, Box<str>, Rc<str>, Arc<str>, ArrayKey);

impl sealed::Sealed for &str {}
impl KeyCompatible for &str {}

impl sealed::Sealed for Cow<'_, str> {}
impl KeyCompatible for Cow<'_, str> {}

/// A key drawn from either domain, for keysets that mix integers and
/// strings. `Int(1)` and `Str("1")` are distinct keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArrayKey {
    Int(i64),
    Str(String),
}

impl ArrayKey {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ArrayKey::Int(i) => Some(*i),
            ArrayKey::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArrayKey::Int(_) => None,
            ArrayKey::Str(s) => Some(s),
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, ArrayKey::Int(_))
    }
}

impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayKey::Int(i) => write!(f, "{i}"),
            ArrayKey::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ArrayKey {
    fn from(i: i64) -> Self {
        ArrayKey::Int(i)
    }
}

impl From<i32> for ArrayKey {
    fn from(i: i32) -> Self {
        ArrayKey::Int(i64::from(i))
    }
}

impl From<String> for ArrayKey {
    fn from(s: String) -> Self {
        ArrayKey::Str(s)
    }
}

impl From<&str> for ArrayKey {
    fn from(s: &str) -> Self {
        ArrayKey::Str(s.to_owned())
    }
}
