//! PostgreSQL bindings via `sqlx`.
//!
//! IDs are written as `INT8`. PostgreSQL has no unsigned 64-bit type, so a
//! `Sid` above `i64::MAX` fails to encode rather than wrapping. On read, the
//! column type decides how the value is decoded:
//!
//! - `NULL` → [`Id::ZERO`]
//! - `INT8`, `INT4`, `INT2` → integer construction
//! - `TEXT`, `VARCHAR`, `BPCHAR`, `NAME` → [`Id::from_text`]
//! - `BYTEA` → [`Id::from_json`]

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgHasArrayType, PgTypeInfo, PgValueRef, Postgres};
use sqlx::{Decode, Encode, Type, TypeInfo, ValueRef};

use crate::{Backing, Id, ScanValue};

impl<B: Backing> Type<Postgres> for Id<B> {
    fn type_info() -> PgTypeInfo {
        <i64 as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <i64 as Type<Postgres>>::compatible(ty)
            || <i32 as Type<Postgres>>::compatible(ty)
            || <i16 as Type<Postgres>>::compatible(ty)
            || <String as Type<Postgres>>::compatible(ty)
            || <Vec<u8> as Type<Postgres>>::compatible(ty)
    }
}

impl<B: Backing> PgHasArrayType for Id<B> {
    fn array_type_info() -> PgTypeInfo {
        <i64 as PgHasArrayType>::array_type_info()
    }
}

impl<'q, B: Backing> Encode<'q, Postgres> for Id<B> {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        let value = self.db_value().to_i64()?;
        <i64 as Encode<'q, Postgres>>::encode_by_ref(&value, buf)
    }

    fn size_hint(&self) -> usize {
        std::mem::size_of::<i64>()
    }
}

/// How an ID column is read, chosen from its PostgreSQL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Int8,
    Int4,
    Int2,
    Text,
    Bytes,
    Unsupported,
}

impl ColumnKind {
    fn of(ty: &PgTypeInfo) -> Self {
        if <i64 as Type<Postgres>>::compatible(ty) {
            ColumnKind::Int8
        } else if <i32 as Type<Postgres>>::compatible(ty) {
            ColumnKind::Int4
        } else if <i16 as Type<Postgres>>::compatible(ty) {
            ColumnKind::Int2
        } else if <String as Type<Postgres>>::compatible(ty) {
            ColumnKind::Text
        } else if <Vec<u8> as Type<Postgres>>::compatible(ty) {
            ColumnKind::Bytes
        } else {
            ColumnKind::Unsupported
        }
    }
}

impl<'r, B: Backing> Decode<'r, Postgres> for Id<B> {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        if value.is_null() {
            return Ok(Self::ZERO);
        }

        let ty = value.type_info().into_owned();
        tracing::trace!(column_type = ty.name(), "decoding id column");

        let id = match ColumnKind::of(&ty) {
            ColumnKind::Int8 => {
                Self::scan(ScanValue::I64(<i64 as Decode<'r, Postgres>>::decode(value)?))
            }
            ColumnKind::Int4 => {
                let v = <i32 as Decode<'r, Postgres>>::decode(value)?;
                Self::scan(ScanValue::I64(i64::from(v)))
            }
            ColumnKind::Int2 => {
                let v = <i16 as Decode<'r, Postgres>>::decode(value)?;
                Self::scan(ScanValue::I64(i64::from(v)))
            }
            ColumnKind::Text => {
                Self::scan(ScanValue::Text(<&str as Decode<'r, Postgres>>::decode(value)?))
            }
            ColumnKind::Bytes => {
                Self::scan(ScanValue::Bytes(<&[u8] as Decode<'r, Postgres>>::decode(value)?))
            }
            ColumnKind::Unsupported => {
                tracing::debug!(column_type = ty.name(), "unsupported id column type");
                Self::scan(ScanValue::Other(ty.name()))
            }
        };

        Ok(id?)
    }
}
