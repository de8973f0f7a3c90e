use super::{Formatter, ToSql};

use tabula_core::{stmt::Expr, Value};

impl ToSql for &Expr {
    fn to_sql(self, f: &mut Formatter<'_>) {
        self.append_sql(f.serializer.flavor(), f.dst);
    }
}

impl ToSql for &Value {
    fn to_sql(self, f: &mut Formatter<'_>) {
        self.append_sql(f.serializer.flavor(), f.dst);
    }
}
