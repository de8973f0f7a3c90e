use super::DataTypeVisitor;

use std::fmt;

/// Abstract SQL storage type of a column.
///
/// `DataType` describes a column independently of any database. Each dialect
/// translates it to its own type name when rendering `CREATE TABLE`: SQLite
/// collapses the integer widths into `INTEGER`, while MySQL picks between
/// `TINYINT` and `BIGINT` based on the integer width.
///
/// Two data types are equal when they are the same variant with the same
/// parameters.
///
/// # Native type mapping
///
/// ```text
/// bool            →  Integer { signed: false, width: 1 }
/// i32             →  Integer { signed: true, width: 4 }
/// u64             →  Integer { signed: false, width: 8 }
/// f64             →  Float { width: 8 }
/// String          →  VarChar { max_len: None }
/// Vec<u8>         →  Blob { max_len: None }
/// NaiveDateTime   →  DateTime
/// ```
///
/// See [`NativeType`](crate::NativeType) for the full table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// An integer of `width` bytes
    Integer { signed: bool, width: u8 },

    /// A floating point number of `width` bytes
    Float { width: u8 },

    /// Variable length character data, unbounded when `max_len` is `None`
    VarChar { max_len: Option<u64> },

    /// Unconstrained text
    Text,

    /// Binary data, unbounded when `max_len` is `None`
    Blob { max_len: Option<u64> },

    /// A calendar date and wall clock time
    DateTime,
}

impl DataType {
    pub const fn integer(signed: bool, width: u8) -> DataType {
        DataType::Integer { signed, width }
    }

    pub const fn float(width: u8) -> DataType {
        DataType::Float { width }
    }

    pub const fn varchar() -> DataType {
        DataType::VarChar { max_len: None }
    }

    pub const fn varchar_with(max_len: u64) -> DataType {
        DataType::VarChar {
            max_len: Some(max_len),
        }
    }

    pub const fn text() -> DataType {
        DataType::Text
    }

    pub const fn blob() -> DataType {
        DataType::Blob { max_len: None }
    }

    pub const fn blob_with(max_len: u64) -> DataType {
        DataType::Blob {
            max_len: Some(max_len),
        }
    }

    pub const fn datetime() -> DataType {
        DataType::DateTime
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, DataType::Integer { .. })
    }

    /// Dispatches to the visitor method matching this variant.
    pub fn apply<V: DataTypeVisitor + ?Sized>(&self, visitor: &mut V) {
        match *self {
            DataType::Integer { signed, width } => visitor.visit_integer(signed, width),
            DataType::Float { width } => visitor.visit_float(width),
            DataType::VarChar { max_len } => visitor.visit_varchar(max_len),
            DataType::Text => visitor.visit_text(),
            DataType::Blob { max_len } => visitor.visit_blob(max_len),
            DataType::DateTime => visitor.visit_datetime(),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Integer {
                signed: true,
                width,
            } => write!(f, "integer({width})"),
            DataType::Integer {
                signed: false,
                width,
            } => write!(f, "unsigned integer({width})"),
            DataType::Float { width } => write!(f, "float({width})"),
            DataType::VarChar { max_len: None } => f.write_str("varchar"),
            DataType::VarChar {
                max_len: Some(max_len),
            } => write!(f, "varchar({max_len})"),
            DataType::Text => f.write_str("text"),
            DataType::Blob { max_len: None } => f.write_str("blob"),
            DataType::Blob {
                max_len: Some(max_len),
            } => write!(f, "blob({max_len})"),
            DataType::DateTime => f.write_str("datetime"),
        }
    }
}
