//! # sid
//!
//! Numeric unique identifiers with text, JSON, and SQL conversions.
//!
//! ## Design Principles
//!
//! - IDs are plain 64-bit integers; equality and ordering are the integer's
//! - The zero ID is a sentinel for "unset", never an issued ID
//! - IDs serialize to JSON as strings so large values survive JS consumers
//! - Decoding is lenient about empty input and strict about everything else
//!
//! ## Variants
//!
//! One generic [`Id`] covers both backings:
//! - [`Sid`] wraps `u64`
//! - [`SignedSid`] wraps `i64`
//!
//! ```
//! use sid::Sid;
//!
//! let id: Sid = "18283195028008204".parse()?;
//! assert_eq!(serde_json::to_string(&id)?, r#""18283195028008204""#);
//! assert!(Sid::from_text("  ")?.is_zero());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Features
//!
//! - `postgres`: `sqlx` `Type`/`Encode`/`Decode` impls for PostgreSQL

mod backing;
mod error;
mod id;
mod ids;
mod json;
mod macros;
#[cfg(feature = "postgres")]
mod postgres;
mod scan;

pub use backing::Backing;
pub use error::IdError;
pub use id::{Id, Sid, SignedSid};
pub use ids::Ids;
pub use scan::ScanValue;
