pub mod convert;
pub use convert::{Decode, Encode, NativeType, RawColumn, Value};

pub mod driver;
pub use driver::{Connection, Driver};

mod error;
pub use error::{Error, IntoError};

pub mod row;
pub use row::{Field, Row};

pub mod schema;
pub use schema::{Column, DataType, Index};

pub mod stmt;

/// A Result type alias that uses Tabula's [`Error`] type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

pub use async_trait::async_trait;
