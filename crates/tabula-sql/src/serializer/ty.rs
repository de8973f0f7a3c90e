use super::{Formatter, ToSql};

use tabula_core::{
    driver::Flavor,
    schema::{DataType, DataTypeVisitor},
};

/// Longest `VARCHAR` emitted for an unbounded MySQL string column.
const MYSQL_MAX_VARCHAR: u64 = 64000;

impl ToSql for &DataType {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match f.serializer.flavor() {
            Flavor::Sqlite => {
                let name = sqlite_name(self);
                fmt!(f, name);
            }
            Flavor::Mysql => {
                let name = mysql_name(self);
                fmt!(f, (name.as_str()));
            }
        }
    }
}

/// SQLite names a storage class rather than a precise type. Anything not
/// numeric, binary or a timestamp is stored as `TEXT`.
fn sqlite_name(ty: &DataType) -> &'static str {
    struct Name(&'static str);

    impl DataTypeVisitor for Name {
        fn visit_integer(&mut self, _signed: bool, _width: u8) {
            self.0 = "INTEGER";
        }

        fn visit_float(&mut self, _width: u8) {
            self.0 = "REAL";
        }

        fn visit_blob(&mut self, _max_len: Option<u64>) {
            self.0 = "BLOB";
        }

        fn visit_datetime(&mut self) {
            self.0 = "DATETIME";
        }
    }

    let mut name = Name("TEXT");
    ty.apply(&mut name);
    name.0
}

fn mysql_name(ty: &DataType) -> String {
    match *ty {
        DataType::Integer { signed, width } => {
            let name = match width {
                1 => "TINYINT",
                2 => "SMALLINT",
                3 => "MEDIUMINT",
                4 => "INT",
                _ => "BIGINT",
            };

            if signed {
                name.to_string()
            } else {
                format!("{name} UNSIGNED")
            }
        }
        DataType::Float { width: 4 } => "FLOAT".to_string(),
        DataType::Float { .. } => "DOUBLE".to_string(),
        DataType::VarChar { max_len } => {
            format!("VARCHAR({}) BINARY", max_len.unwrap_or(MYSQL_MAX_VARCHAR))
        }
        DataType::Text => "TEXT".to_string(),
        DataType::Blob { max_len } => match max_len {
            None => "BLOB",
            Some(len) if len <= 0xFF => "TINYBLOB",
            Some(len) if len <= 0xFFFF => "BLOB",
            Some(len) if len <= 0xFF_FFFF => "MEDIUMBLOB",
            Some(_) => "LONGBLOB",
        }
        .to_string(),
        DataType::DateTime => "DATETIME".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_storage_classes() {
        assert_eq!(sqlite_name(&DataType::integer(false, 8)), "INTEGER");
        assert_eq!(sqlite_name(&DataType::float(4)), "REAL");
        assert_eq!(sqlite_name(&DataType::varchar_with(10)), "TEXT");
        assert_eq!(sqlite_name(&DataType::text()), "TEXT");
        assert_eq!(sqlite_name(&DataType::blob_with(10)), "BLOB");
        assert_eq!(sqlite_name(&DataType::datetime()), "DATETIME");
    }

    #[test]
    fn mysql_integers() {
        assert_eq!(mysql_name(&DataType::integer(true, 1)), "TINYINT");
        assert_eq!(mysql_name(&DataType::integer(true, 3)), "MEDIUMINT");
        assert_eq!(mysql_name(&DataType::integer(false, 4)), "INT UNSIGNED");
        assert_eq!(mysql_name(&DataType::integer(true, 8)), "BIGINT");
    }

    #[test]
    fn mysql_strings_and_blobs() {
        assert_eq!(mysql_name(&DataType::varchar()), "VARCHAR(64000) BINARY");
        assert_eq!(mysql_name(&DataType::varchar_with(12)), "VARCHAR(12) BINARY");
        assert_eq!(mysql_name(&DataType::blob()), "BLOB");
        assert_eq!(mysql_name(&DataType::blob_with(255)), "TINYBLOB");
        assert_eq!(mysql_name(&DataType::blob_with(256)), "BLOB");
        assert_eq!(mysql_name(&DataType::blob_with(70_000)), "MEDIUMBLOB");
        assert_eq!(mysql_name(&DataType::blob_with(1 << 30)), "LONGBLOB");
        assert_eq!(mysql_name(&DataType::float(8)), "DOUBLE");
    }
}
