use super::Expr;

/// `DELETE FROM table WHERE filter`.
///
/// Without a filter the statement empties the table with `TRUNCATE TABLE`,
/// which is not a filtered delete and is not undone by a rollback on every
/// database.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: String,
    pub filter: Option<Expr>,
}

pub fn delete(table: impl Into<String>) -> Delete {
    Delete {
        table: table.into(),
        filter: None,
    }
}

/// Removes every row of `table`.
pub fn truncate(table: impl Into<String>) -> Delete {
    delete(table)
}

impl Delete {
    pub fn filter(mut self, expr: impl Into<Expr>) -> Delete {
        self.filter = Some(expr.into());
        self
    }

    pub fn is_truncate(&self) -> bool {
        self.filter.is_none()
    }
}
