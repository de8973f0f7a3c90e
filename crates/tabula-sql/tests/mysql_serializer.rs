use pretty_assertions::assert_eq;
use tabula_core::{
    field,
    stmt::{create, delete, insert, select, start_transaction, sym, upsert, Expr},
    DataType, Row,
};
use tabula_sql::Serializer;

#[derive(Debug, Default, Clone, PartialEq)]
struct Point {
    x: i32,
    y: f64,
}

fn point_row() -> Row<Point> {
    Row::new()
        .add_field("x", field!(Point, x))
        .set_primary_key("x")
        .add_field("y", field!(Point, y))
}

fn sql(stmt: impl tabula_sql::Statement) -> String {
    Serializer::mysql().serialize(stmt)
}

#[test]
fn upsert_statement() {
    let values = [Point { x: 123, y: 3.14 }];
    assert_eq!(
        sql(&upsert(&point_row(), "t1", &values)),
        "INSERT INTO t1 (x,y) VALUES (123,3.140000) ON DUPLICATE KEY UPDATE y = VALUES(y);"
    );
}

#[test]
fn upsert_key_only_mapping() {
    let row = Row::<i32>::scalar("k").set_primary_key("k");
    assert_eq!(
        sql(&upsert(&row, "t", &[7, 8])),
        "INSERT INTO t (k) VALUES (7),(8) ON DUPLICATE KEY UPDATE k = VALUES(k);"
    );
}

#[test]
fn create_table_with_inline_keys() {
    let row = point_row()
        .add_unique_index("ux_y", "y")
        .add_index("ix_xy", ["x", "y"]);

    assert_eq!(
        sql(&create(&row, "t1")),
        "BEGIN;CREATE TABLE t1(x INT NOT NULL,y DOUBLE NOT NULL,PRIMARY KEY(x),\
         UNIQUE KEY ux_y(y),KEY ix_xy(x,y));COMMIT;"
    );
}

#[test]
fn create_table_type_names() {
    #[derive(Default)]
    struct Record {
        flag: bool,
        small: u16,
        name: String,
        code: String,
        blob: Vec<u8>,
        score: Option<f32>,
    }

    let row = Row::<Record>::new()
        .add_field("flag", field!(Record, flag))
        .add_field("small", field!(Record, small))
        .add_field("name", field!(Record, name))
        .add_typed_field("code", DataType::varchar_with(16), field!(Record, code))
        .add_typed_field("blob", DataType::blob_with(1024), field!(Record, blob))
        .add_field("score", field!(Record, score));

    assert_eq!(
        sql(&create(&row, "r").if_not_exists()),
        "BEGIN;CREATE TABLE IF NOT EXISTS r(flag TINYINT UNSIGNED NOT NULL,\
         small SMALLINT UNSIGNED NOT NULL,name VARCHAR(64000) BINARY NOT NULL,\
         code VARCHAR(16) BINARY NOT NULL,blob BLOB NOT NULL,score FLOAT);COMMIT;"
    );
}

#[test]
fn truncate_without_filter() {
    assert_eq!(sql(&delete("t1")), "TRUNCATE TABLE t1;");
    assert_eq!(
        sql(&delete("t1").filter(Expr::ne(sym("x"), 1))),
        "DELETE FROM t1 WHERE (x <> 1);"
    );
}

#[test]
fn select_and_insert_match_sqlite_text() {
    let row = point_row();
    let mut dest: Vec<Point> = vec![];
    let values = [Point { x: 1, y: 1.5 }];

    assert_eq!(
        sql(&select(&row, "t1", &mut dest).filter(Expr::gt(sym("x"), 5))),
        "SELECT x,y FROM t1 WHERE (x > 5);"
    );
    assert_eq!(
        sql(&insert(&row, "t1", &values)),
        "INSERT INTO t1 (x,y) VALUES (1,1.500000);"
    );
    assert_eq!(sql(start_transaction()), "BEGIN;");
}

#[test]
fn strings_are_backslash_escaped() {
    let row = Row::<String>::scalar("s");
    let values = ["it's a \"test\"\n\0".to_string()];

    assert_eq!(
        sql(&insert(&row, "t", &values)),
        r#"INSERT INTO t (s) VALUES ("it\'s a \"test\"\n\0");"#
    );
}
