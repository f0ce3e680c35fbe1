//! Error types for ID parsing and conversion.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur when constructing or decoding IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input is empty or contains a character outside `0-9`.
    #[error("can't convert {input:?} to id: expected decimal digits")]
    InvalidFormat { input: String },

    /// The digits do not fit in the backing integer.
    #[error("can't convert {input:?} to {backing}: {source}")]
    OutOfRange {
        input: String,
        backing: &'static str,
        #[source]
        source: ParseIntError,
    },

    /// An unsigned value exceeds the maximum of a signed backing integer.
    #[error("{value} overflows {backing}")]
    Overflow { value: u64, backing: &'static str },

    /// A raw JSON literal could not be parsed as the backing integer.
    #[error("can't convert {input} to {backing}: {message}")]
    Conversion {
        input: String,
        backing: &'static str,
        message: String,
    },

    /// A dynamic input has a type the decoder does not accept.
    #[error("can't convert {type_name} to id")]
    UnexpectedType { type_name: String },
}

impl IdError {
    /// Returns true if the input was not made of decimal digits.
    pub fn is_format_error(&self) -> bool {
        matches!(self, IdError::InvalidFormat { .. })
    }

    /// Returns true if the digits did not fit in the backing integer.
    pub fn is_range_error(&self) -> bool {
        matches!(self, IdError::OutOfRange { .. })
    }

    /// Returns true if an unsigned value overflowed a signed backing integer.
    pub fn is_overflow(&self) -> bool {
        matches!(self, IdError::Overflow { .. })
    }

    /// Returns true if the input could not be interpreted at all.
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            IdError::Conversion { .. } | IdError::UnexpectedType { .. }
        )
    }
}
