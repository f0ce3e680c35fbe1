//! Macros for wiring primitive integers in as ID backings.

/// Macro to implement [`Backing`](crate::Backing) for a primitive integer.
///
/// This generates:
/// - The sealed marker impl, so only this crate can add backings
/// - `ZERO`, `NAME` and `SIGNED` constants
/// - `from_i64()` / `from_u64()` using the supplied cross-signedness rules
/// - Exact conversions used by JSON decoding and database encoding
/// - `From<$ty> for Id<$ty>` and `From<Id<$ty>> for $ty`
///
/// # Example
///
/// ```ignore
/// impl_backing!(u64, signed: false, from_i64: |v| Ok(v as u64), from_u64: |v| Ok(v));
/// ```
macro_rules! impl_backing {
    (
        $ty:ty,
        signed: $signed:literal,
        from_i64: |$i:ident| $from_i64:expr,
        from_u64: |$u:ident| $from_u64:expr $(,)?
    ) => {
        impl $crate::backing::sealed::Sealed for $ty {}

        impl $crate::Backing for $ty {
            const ZERO: Self = 0;
            const NAME: &'static str = stringify!($ty);
            const SIGNED: bool = $signed;

            fn from_i64($i: i64) -> Result<Self, $crate::IdError> {
                $from_i64
            }

            fn from_u64($u: u64) -> Result<Self, $crate::IdError> {
                $from_u64
            }

            fn exact_from_i64(value: i64) -> Option<Self> {
                <$ty>::try_from(value).ok()
            }

            fn exact_from_u64(value: u64) -> Option<Self> {
                <$ty>::try_from(value).ok()
            }

            fn to_i64(self) -> Result<i64, $crate::IdError> {
                i64::try_from(self).map_err(|_| $crate::IdError::Overflow {
                    value: self as u64,
                    backing: "i64",
                })
            }
        }

        impl From<$ty> for $crate::Id<$ty> {
            fn from(value: $ty) -> Self {
                Self::new(value)
            }
        }

        impl From<$crate::Id<$ty>> for $ty {
            fn from(id: $crate::Id<$ty>) -> Self {
                id.value()
            }
        }
    };
}

pub(crate) use impl_backing;
