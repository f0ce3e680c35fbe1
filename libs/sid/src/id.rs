//! The numeric ID value type.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::{Backing, IdError};

/// A numeric unique identifier backed by a 64-bit integer.
///
/// Equality and ordering are those of the backing integer. The zero value is
/// a sentinel meaning "unset" and is never a valid issued ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Id<B: Backing = u64>(B);

/// ID backed by `u64`.
pub type Sid = Id<u64>;

/// ID backed by `i64`.
pub type SignedSid = Id<i64>;

impl<B: Backing> Id<B> {
    /// The unset ID.
    pub const ZERO: Self = Self(B::ZERO);

    /// Creates an ID from its backing integer.
    #[must_use]
    pub const fn new(value: B) -> Self {
        Self(value)
    }

    /// Creates an ID from an `i64`.
    ///
    /// For `Sid` the bit pattern is reinterpreted and this never fails.
    pub fn from_i64(value: i64) -> Result<Self, IdError> {
        B::from_i64(value).map(Self)
    }

    /// Creates an ID from a `u64`.
    ///
    /// For `SignedSid` this fails with [`IdError::Overflow`] above `i64::MAX`.
    pub fn from_u64(value: u64) -> Result<Self, IdError> {
        B::from_u64(value).map(Self)
    }

    /// Parses an ID from a string of decimal digits.
    ///
    /// The string must be non-empty and contain only `0-9`, with no
    /// surrounding whitespace. A single leading `-` is accepted for
    /// `SignedSid` only.
    pub fn from_decimal(s: &str) -> Result<Self, IdError> {
        let digits = match s.strip_prefix('-') {
            Some(rest) if B::SIGNED => rest,
            _ => s,
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdError::InvalidFormat {
                input: s.to_string(),
            });
        }

        s.parse::<B>()
            .map(Self)
            .map_err(|source| IdError::OutOfRange {
                input: s.to_string(),
                backing: B::NAME,
                source,
            })
    }

    /// Decodes an ID from text.
    ///
    /// Surrounding whitespace is ignored and blank text yields [`Id::ZERO`].
    pub fn from_text(text: &str) -> Result<Self, IdError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Self::ZERO);
        }

        Self::from_decimal(text)
    }

    /// Encodes the ID as decimal text.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.0.to_string()
    }

    /// Returns true if this is the unset ID.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == B::ZERO
    }

    /// Returns the backing integer.
    #[must_use]
    pub const fn value(&self) -> B {
        self.0
    }

    /// Returns the value handed to a database driver on write.
    #[must_use]
    pub const fn db_value(&self) -> B {
        self.0
    }

    /// Three-way comparison of the backing integers.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    /// Returns true if both IDs hold the same value.
    #[must_use]
    pub fn equal(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    /// Returns true if `self` orders before `other`.
    #[must_use]
    pub fn less_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// Returns true if `self` does not order after `other`.
    #[must_use]
    pub fn less_than_or_equal(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Greater
    }

    /// Returns true if `self` orders after `other`.
    #[must_use]
    pub fn greater_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// Returns true if `self` does not order before `other`.
    #[must_use]
    pub fn greater_than_or_equal(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Less
    }
}

impl<B: Backing> fmt::Display for Id<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<B: Backing> FromStr for Id<B> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal(s)
    }
}
