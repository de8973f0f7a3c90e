use super::Expr;
use crate::schema::IntoColumnNames;

use std::{fmt, sync::Arc};

/// The body of a `SELECT`: projected columns, source, and optional clauses.
///
/// A `Query` can serve as the source of another query, rendered as
/// `(SELECT ...) AS alias`.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub columns: Vec<String>,
    pub from: Source,
    pub filter: Option<Expr>,
    pub order_by: Option<OrderBy>,
    pub limit: Option<u64>,
}

/// What a query selects from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Table(String),
    Query(Arc<Query>),
}

/// `ORDER BY` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderBy {
    /// One direction shared by every column, `x ASC` or `(y,x) DESC`
    Columns { columns: Vec<String>, order: Order },

    /// A direction per column, `y DESC,x ASC`
    List(Vec<(String, Order)>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

/// A query selecting `columns` from `from`, for use as a nested source.
pub fn select_columns(columns: impl IntoColumnNames, from: impl Into<Source>) -> Query {
    Query::new(columns.into_column_names(), from)
}

/// Orders by `columns` in one direction.
pub fn order_by(columns: impl IntoColumnNames, order: Order) -> OrderBy {
    OrderBy::Columns {
        columns: columns.into_column_names(),
        order,
    }
}

impl Query {
    pub fn new(columns: Vec<String>, from: impl Into<Source>) -> Query {
        Query {
            columns,
            from: from.into(),
            filter: None,
            order_by: None,
            limit: None,
        }
    }

    pub fn filter(mut self, expr: impl Into<Expr>) -> Query {
        self.filter = Some(expr.into());
        self
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Query {
        self.order_by = Some(order_by);
        self
    }

    pub fn limit(mut self, limit: u64) -> Query {
        self.limit = Some(limit);
        self
    }
}

impl OrderBy {
    pub fn list<S: Into<String>>(columns: impl IntoIterator<Item = (S, Order)>) -> OrderBy {
        OrderBy::List(
            columns
                .into_iter()
                .map(|(column, order)| (column.into(), order))
                .collect(),
        )
    }
}

impl Order {
    pub fn as_sql(self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl From<&str> for Source {
    fn from(value: &str) -> Self {
        Source::Table(value.to_string())
    }
}

impl From<String> for Source {
    fn from(value: String) -> Self {
        Source::Table(value)
    }
}

impl From<Query> for Source {
    fn from(value: Query) -> Self {
        Source::Query(Arc::new(value))
    }
}
