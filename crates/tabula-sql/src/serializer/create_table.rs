use super::{Comma, Formatter, ToSql};

use tabula_core::{schema::Index, stmt};

impl<T> ToSql for &stmt::CreateTable<T> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let row = &self.row;
        let name = &self.table;
        let if_not_exists = if self.if_not_exists { "IF NOT EXISTS " } else { "" };
        let columns = Comma(row.columns());

        fmt!(f, "BEGIN;CREATE TABLE " if_not_exists name "(" columns);

        if let Some(pk) = row.primary_key() {
            let pk_columns = Comma(&pk.columns);
            fmt!(f, ",PRIMARY KEY(" pk_columns ")");
        }

        let secondary = row.indexes().iter().filter(|index| !index.primary_key);

        if f.serializer.is_mysql() {
            // MySQL declares secondary indexes inside the table definition
            for index in secondary {
                fmt!(f, "," (InlineKey(index)));
            }

            fmt!(f, ");");
        } else {
            fmt!(f, ");");

            for index in secondary {
                fmt!(f, (CreateIndex { table: name, index }));
            }
        }

        fmt!(f, "COMMIT;");
    }
}

/// `[UNIQUE ]KEY ix(cols)`
struct InlineKey<'a>(&'a Index);

impl ToSql for InlineKey<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let unique = if self.0.unique { "UNIQUE " } else { "" };
        let columns = Comma(&self.0.columns);
        fmt!(f, unique "KEY " (&self.0.name) "(" columns ")");
    }
}

/// `CREATE [UNIQUE ]INDEX IF NOT EXISTS ix ON table(cols);`
struct CreateIndex<'a> {
    table: &'a String,
    index: &'a Index,
}

impl ToSql for CreateIndex<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let unique = if self.index.unique { "UNIQUE " } else { "" };
        let columns = Comma(&self.index.columns);
        fmt!(f, "CREATE " unique "INDEX IF NOT EXISTS " (&self.index.name) " ON " (self.table) "(" columns ");");
    }
}
