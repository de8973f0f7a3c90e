use super::{column::ColumnName, Comma, Formatter, ToSql};

use tabula_core::{driver::Flavor, stmt, Row};

impl<T> ToSql for &stmt::Insert<'_, T> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if self.is_empty() {
            return;
        }

        let values = Values::new(&self.row, self.values);
        fmt!(f, (InsertInto::new(&self.row, &self.table)) values ";");
    }
}

impl<T> ToSql for &stmt::Upsert<'_, T> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if self.is_empty() {
            return;
        }

        let values = Values::new(&self.row, self.values);
        fmt!(f, (InsertInto::new(&self.row, &self.table)) values);

        if let Some(pk) = self.row.primary_key() {
            let mut updates: Vec<&str> = self
                .row
                .columns()
                .iter()
                .map(|column| column.name.as_str())
                .filter(|name| !self.row.is_primary_key_column(name))
                .collect();

            match f.serializer.flavor() {
                Flavor::Mysql => {
                    // Every column is part of the key. Re-assigning the first
                    // key column keeps the statement valid without changing
                    // the row.
                    if updates.is_empty() {
                        updates.extend(pk.columns.first().map(String::as_str));
                    }

                    let assignments = Comma(updates.into_iter().map(AssignFrom::Values));
                    fmt!(f, " ON DUPLICATE KEY UPDATE " assignments);
                }
                Flavor::Sqlite => {
                    let target = Comma(&pk.columns);
                    fmt!(f, " ON CONFLICT(" target ")");

                    if updates.is_empty() {
                        fmt!(f, " DO NOTHING");
                    } else {
                        let assignments = Comma(updates.into_iter().map(AssignFrom::Excluded));
                        fmt!(f, " DO UPDATE SET " assignments);
                    }
                }
            }
        }

        fmt!(f, ";");
    }
}

/// `INSERT INTO table (c1,c2) VALUES `
struct InsertInto<'a, T> {
    row: &'a Row<T>,
    table: &'a String,
}

impl<'a, T> InsertInto<'a, T> {
    fn new(row: &'a Row<T>, table: &'a String) -> Self {
        InsertInto { row, table }
    }
}

impl<T> ToSql for InsertInto<'_, T> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let columns = Comma(self.row.columns().iter().map(ColumnName));
        fmt!(f, "INSERT INTO " (self.table) " (" columns ") VALUES ");
    }
}

/// `(v1,v2),(v3,v4)`, one record per value, columns in mapping order
struct Values<'a, T> {
    row: &'a Row<T>,
    values: &'a [T],
}

impl<'a, T> Values<'a, T> {
    fn new(row: &'a Row<T>, values: &'a [T]) -> Self {
        Values { row, values }
    }
}

impl<T> ToSql for Values<'_, T> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.dst.push(',');
            }

            f.dst.push('(');
            for column in 0..self.row.len() {
                if column > 0 {
                    f.dst.push(',');
                }
                fmt!(f, (&self.row.value(value, column)));
            }
            f.dst.push(')');
        }
    }
}

/// `c = VALUES(c)` for MySQL, `c = excluded.c` for SQLite
enum AssignFrom<'a> {
    Values(&'a str),
    Excluded(&'a str),
}

impl ToSql for AssignFrom<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            AssignFrom::Values(column) => fmt!(f, column " = VALUES(" column ")"),
            AssignFrom::Excluded(column) => fmt!(f, column " = excluded." column),
        }
    }
}
