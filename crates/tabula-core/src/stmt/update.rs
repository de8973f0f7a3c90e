use super::Expr;

/// `UPDATE table SET column = value [WHERE filter]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,
    pub set: Assignment,
    pub filter: Option<Expr>,
}

/// `column = value` in a `SET` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: Expr,
}

pub fn set(column: impl Into<String>, value: impl Into<Expr>) -> Assignment {
    Assignment {
        column: column.into(),
        value: value.into(),
    }
}

pub fn update(table: impl Into<String>, set: Assignment) -> Update {
    Update {
        table: table.into(),
        set,
        filter: None,
    }
}

impl Update {
    pub fn filter(mut self, expr: impl Into<Expr>) -> Update {
        self.filter = Some(expr.into());
        self
    }
}
