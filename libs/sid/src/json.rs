//! JSON and serde support.
//!
//! IDs serialize as strings (`"18283195028008204"`) so values above 2^53 keep
//! their precision in consumers that read JSON numbers as doubles. Decoding
//! also accepts bare integer literals, `null`, and empty strings.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Visitor};

use crate::{Backing, Id, IdError};

impl<B: Backing> Id<B> {
    /// Encodes the ID as a JSON string literal.
    #[must_use]
    pub fn to_json(&self) -> String {
        format!("\"{}\"", self.value())
    }

    /// Decodes an ID from raw JSON bytes.
    ///
    /// - blank input, `""` and `null` yield [`Id::ZERO`]
    /// - a JSON string is unquoted and decoded with [`Id::from_text`]
    /// - anything else must be an integer literal that fits the backing type
    pub fn from_json(bytes: &[u8]) -> Result<Self, IdError> {
        let val = bytes.trim_ascii();
        if val.is_empty() {
            return Ok(Self::ZERO);
        }

        if is_string(val) {
            let s: String =
                serde_json::from_slice(val).map_err(|e| conversion_error::<B>(val, e))?;
            if s.is_empty() {
                return Ok(Self::ZERO);
            }
            return Self::from_text(&s);
        }

        let n: Option<B> =
            serde_json::from_slice(val).map_err(|e| conversion_error::<B>(val, e))?;
        Ok(n.map_or(Self::ZERO, Self::new))
    }
}

fn is_string(b: &[u8]) -> bool {
    b.len() >= 2 && b[0] == b'"' && b[b.len() - 1] == b'"'
}

fn conversion_error<B: Backing>(input: &[u8], err: serde_json::Error) -> IdError {
    IdError::Conversion {
        input: String::from_utf8_lossy(input).into_owned(),
        backing: B::NAME,
        message: err.to_string(),
    }
}

impl<B: Backing> serde::Serialize for Id<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.value())
    }
}

impl<'de, B: Backing> serde::Deserialize<'de> for Id<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(IdVisitor(PhantomData))
    }
}

struct IdVisitor<B>(PhantomData<B>);

impl<'de, B: Backing> Visitor<'de> for IdVisitor<B> {
    type Value = Id<B>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a decimal {} as a string or integer", B::NAME)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Id::from_text(v).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        Id::from_json(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        B::exact_from_u64(v)
            .map(Id::new)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        B::exact_from_i64(v)
            .map(Id::new)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Id::ZERO)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Id::ZERO)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}
