use crate::Row;

/// `CREATE TABLE` for a mapping, including its indexes.
#[derive(Debug, Clone)]
pub struct CreateTable<T> {
    pub row: Row<T>,
    pub table: String,
    pub if_not_exists: bool,
}

pub fn create<T>(row: &Row<T>, table: impl Into<String>) -> CreateTable<T> {
    CreateTable {
        row: row.clone(),
        table: table.into(),
        if_not_exists: false,
    }
}

impl<T> CreateTable<T> {
    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }
}
