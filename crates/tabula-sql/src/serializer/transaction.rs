use super::{Formatter, ToSql};

use tabula_core::stmt;

impl ToSql for stmt::StartTransaction {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "BEGIN;");
    }
}

impl ToSql for stmt::Commit {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "COMMIT;");
    }
}

impl ToSql for stmt::Rollback {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "ROLLBACK;");
    }
}
