//! Conversions between native values and SQL text.
//!
//! Each supported native type implements three traits:
//!
//! * [`Encode`] lowers the value to a [`Value`], which renders as a SQL
//!   literal (`5`, `'abc'`, `X'00FF'`, `NULL`) for a given dialect.
//! * [`Decode`] rebuilds the value from a [`RawColumn`] returned by a driver.
//! * [`NativeType`] names the [`DataType`] of a column holding the value.
//!
//! Supporting a new type only requires implementing the three traits for it.

mod bytes;
mod escape;
pub use escape::{escape, unescape};

mod option;
mod primitive;
mod raw;
pub use raw::RawColumn;

mod string;

mod value;
pub use value::Value;

#[cfg(feature = "chrono")]
mod datetime;

use crate::{DataType, Result};

/// Lowers a native value to a SQL literal.
pub trait Encode {
    fn encode(&self) -> Value;
}

/// Deserializes a value from a raw result cell.
///
/// Malformed input is an error, never a default value.
pub trait Decode: Sized {
    fn decode(column: RawColumn<'_>) -> Result<Self>;
}

/// The column type used to store a native type.
pub trait NativeType {
    const DATA_TYPE: DataType;

    /// `true` when the type can represent `NULL`.
    const NULLABLE: bool = false;
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self) -> Value {
        (**self).encode()
    }
}

/// Returns the backslash escaped SQL literal text for `value`.
pub fn to_sql<T: Encode + ?Sized>(value: &T) -> String {
    value.encode().to_string()
}
