//! Backing integers for [`Id`](crate::Id).
//!
//! The unsigned and signed ID variants share one implementation; the backing
//! integer is the only thing that differs between them.

use std::fmt;
use std::hash::Hash;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::macros::impl_backing;
use crate::IdError;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A 64-bit integer that can back an [`Id`](crate::Id).
///
/// Implemented for `u64` and `i64` only.
pub trait Backing:
    sealed::Sealed
    + Copy
    + Ord
    + Hash
    + Default
    + fmt::Debug
    + fmt::Display
    + FromStr<Err = ParseIntError>
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// The zero value, used as the "unset" sentinel.
    const ZERO: Self;

    /// Type name used in error messages.
    const NAME: &'static str;

    /// Whether negative values are representable.
    const SIGNED: bool;

    /// Converts from `i64`.
    ///
    /// The unsigned backing reinterprets the bit pattern; this never fails.
    fn from_i64(value: i64) -> Result<Self, IdError>;

    /// Converts from `u64`.
    ///
    /// The signed backing fails with [`IdError::Overflow`] above `i64::MAX`.
    fn from_u64(value: u64) -> Result<Self, IdError>;

    /// Value-preserving conversion from `i64`, `None` if out of range.
    fn exact_from_i64(value: i64) -> Option<Self>;

    /// Value-preserving conversion from `u64`, `None` if out of range.
    fn exact_from_u64(value: u64) -> Option<Self>;

    /// Value-preserving conversion to `i64`.
    ///
    /// Fails with [`IdError::Overflow`] for `u64` values above `i64::MAX`.
    fn to_i64(self) -> Result<i64, IdError>;
}

impl_backing!(
    u64,
    signed: false,
    from_i64: |value| Ok(value as u64),
    from_u64: |value| Ok(value),
);

impl_backing!(
    i64,
    signed: true,
    from_i64: |value| Ok(value),
    from_u64: |value| i64::try_from(value).map_err(|_| IdError::Overflow {
        value,
        backing: "i64",
    }),
);
