use super::{Formatter, ToSql};

use tabula_core::schema::Column;

/// `name TYPE [NOT NULL]`
impl ToSql for &Column {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let not_null = if self.nullable { "" } else { " NOT NULL" };
        fmt!(f, (&self.name) " " (&self.ty) not_null);
    }
}

/// A column name, as listed after `INSERT INTO t` or in `SELECT`.
pub(super) struct ColumnName<'a>(pub(super) &'a Column);

impl ToSql for ColumnName<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, (&self.0.name));
    }
}
