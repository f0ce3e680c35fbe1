//! Decoding IDs from loosely typed database values.
//!
//! Database drivers hand back column values whose concrete type is only known
//! at runtime. [`ScanValue`] is the closed set of shapes an ID column can
//! take; [`Id::scan`] normalizes each of them into an ID.

use crate::{Backing, Id, IdError};

/// A runtime-typed value read from a database column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScanValue<'a, B: Backing = u64> {
    /// SQL `NULL`.
    Null,
    /// A text column, decoded with [`Id::from_text`].
    Text(&'a str),
    /// A binary column, decoded with [`Id::from_json`].
    Bytes(&'a [u8]),
    /// A signed integer column, decoded with [`Id::from_i64`].
    I64(i64),
    /// An unsigned integer, decoded with [`Id::from_u64`].
    U64(u64),
    /// An ID value, copied as-is.
    Id(Id<B>),
    /// A possibly-null reference to an existing ID.
    IdRef(Option<&'a Id<B>>),
    /// A floating-point column; never accepted.
    Float(f64),
    /// A boolean column; never accepted.
    Bool(bool),
    /// Any other driver type, carried by name.
    Other(&'a str),
}

impl<B: Backing> ScanValue<'_, B> {
    /// Name of the input type, as reported in [`IdError::UnexpectedType`].
    pub fn type_name(&self) -> &str {
        match self {
            ScanValue::Null => "null",
            ScanValue::Text(_) => "string",
            ScanValue::Bytes(_) => "bytes",
            ScanValue::I64(_) => "i64",
            ScanValue::U64(_) => "u64",
            ScanValue::Id(_) => "id",
            ScanValue::IdRef(_) => "&id",
            ScanValue::Float(_) => "f64",
            ScanValue::Bool(_) => "bool",
            ScanValue::Other(name) => *name,
        }
    }
}

impl<B: Backing> Id<B> {
    /// Decodes an ID from a database value.
    ///
    /// `Null` and a null `IdRef` yield [`Id::ZERO`]. Integers follow the
    /// cross-signedness rules of [`Id::from_i64`] and [`Id::from_u64`].
    pub fn scan(value: ScanValue<'_, B>) -> Result<Self, IdError> {
        match value {
            ScanValue::Null | ScanValue::IdRef(None) => Ok(Self::ZERO),
            ScanValue::Text(s) => Self::from_text(s),
            ScanValue::Bytes(b) => Self::from_json(b),
            ScanValue::I64(v) => Self::from_i64(v),
            ScanValue::U64(v) => Self::from_u64(v),
            ScanValue::Id(id) => Ok(id),
            ScanValue::IdRef(Some(id)) => Ok(*id),
            ScanValue::Float(_) | ScanValue::Bool(_) | ScanValue::Other(_) => {
                Err(IdError::UnexpectedType {
                    type_name: value.type_name().to_string(),
                })
            }
        }
    }
}

impl<'a, B: Backing> TryFrom<ScanValue<'a, B>> for Id<B> {
    type Error = IdError;

    fn try_from(value: ScanValue<'a, B>) -> Result<Self, Self::Error> {
        Self::scan(value)
    }
}

impl<'a, B: Backing> From<&'a str> for ScanValue<'a, B> {
    fn from(s: &'a str) -> Self {
        ScanValue::Text(s)
    }
}

impl<'a, B: Backing> From<&'a [u8]> for ScanValue<'a, B> {
    fn from(b: &'a [u8]) -> Self {
        ScanValue::Bytes(b)
    }
}

impl<B: Backing> From<i64> for ScanValue<'_, B> {
    fn from(v: i64) -> Self {
        ScanValue::I64(v)
    }
}

impl<B: Backing> From<u64> for ScanValue<'_, B> {
    fn from(v: u64) -> Self {
        ScanValue::U64(v)
    }
}

impl<B: Backing> From<f64> for ScanValue<'_, B> {
    fn from(v: f64) -> Self {
        ScanValue::Float(v)
    }
}

impl<B: Backing> From<bool> for ScanValue<'_, B> {
    fn from(v: bool) -> Self {
        ScanValue::Bool(v)
    }
}

impl<B: Backing> From<Id<B>> for ScanValue<'_, B> {
    fn from(id: Id<B>) -> Self {
        ScanValue::Id(id)
    }
}

impl<'a, B: Backing> From<&'a Id<B>> for ScanValue<'a, B> {
    fn from(id: &'a Id<B>) -> Self {
        ScanValue::IdRef(Some(id))
    }
}

impl<'a, B: Backing> From<Option<&'a Id<B>>> for ScanValue<'a, B> {
    fn from(id: Option<&'a Id<B>>) -> Self {
        ScanValue::IdRef(id)
    }
}
