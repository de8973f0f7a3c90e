use super::DataType;

/// A named, typed column of a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// The column name as it appears in SQL
    pub name: String,

    /// Storage type
    pub ty: DataType,

    /// When `true`, the column accepts `NULL`
    pub nullable: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: DataType) -> Column {
        Column {
            name: name.into(),
            ty,
            nullable: false,
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Column {
        self.nullable = nullable;
        self
    }
}
