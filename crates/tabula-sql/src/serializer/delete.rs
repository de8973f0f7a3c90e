use super::{Formatter, ToSql};

use tabula_core::stmt;

impl ToSql for &stmt::Delete {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = &self.table;

        match &self.filter {
            Some(filter) => fmt!(f, "DELETE FROM " table " WHERE " filter ";"),
            None if f.serializer.capability().truncate_table => {
                fmt!(f, "TRUNCATE TABLE " table ";")
            }
            // No TRUNCATE statement, an unfiltered DELETE empties the table
            None => fmt!(f, "DELETE FROM " table ";"),
        }
    }
}
