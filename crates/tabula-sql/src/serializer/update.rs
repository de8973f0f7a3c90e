use super::{Formatter, ToSql};

use tabula_core::stmt;

impl ToSql for &stmt::Update {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let set = &self.set;
        fmt!(f, "UPDATE " (&self.table) " SET " (&set.column) " = " (&set.value));

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE " filter);
        }

        fmt!(f, ";");
    }
}
