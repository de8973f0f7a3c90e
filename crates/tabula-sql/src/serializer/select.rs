use super::{Comma, Formatter, ToSql};

use tabula_core::stmt::{self, OrderBy, Query, Source};

impl<T, D> ToSql for &stmt::Select<'_, T, D> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, (&self.query) ";");
    }
}

/// `SELECT cols FROM source [WHERE ..] [ORDER BY ..] [LIMIT n]`, unterminated
/// so it can be nested.
impl ToSql for &Query {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let columns = Comma(&self.columns);
        fmt!(f, "SELECT " columns " FROM " (&self.from));

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE " filter);
        }

        if let Some(order_by) = &self.order_by {
            fmt!(f, order_by);
        }

        if let Some(limit) = self.limit {
            fmt!(f, " LIMIT " limit);
        }
    }
}

impl ToSql for &Source {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Source::Table(name) => fmt!(f, name),
            Source::Query(query) => fmt!(f, "(" (&**query) ") AS alias"),
        }
    }
}

impl ToSql for &OrderBy {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            OrderBy::Columns { columns, order } => match &columns[..] {
                [] => {}
                [column] => fmt!(f, " ORDER BY " column " " (order.as_sql())),
                columns => {
                    let columns = Comma(columns);
                    fmt!(f, " ORDER BY (" columns ") " (order.as_sql()));
                }
            },
            OrderBy::List(list) if list.is_empty() => {}
            OrderBy::List(list) => {
                fmt!(f, " ORDER BY ");
                for (i, (column, order)) in list.iter().enumerate() {
                    let sep = if i > 0 { "," } else { "" };
                    fmt!(f, sep column " " (order.as_sql()));
                }
            }
        }
    }
}
