use pretty_assertions::assert_eq;
use tabula_core::{driver::Driver, Connection as _};
use tabula_driver_sqlite::Sqlite;

async fn connect() -> Box<dyn tabula_core::Connection> {
    Sqlite::in_memory().connect().await.unwrap()
}

#[test]
fn url_parsing() {
    assert!(matches!(Sqlite::new("sqlite::memory:").unwrap(), Sqlite::InMemory));

    let Sqlite::File(path) = Sqlite::new("sqlite:/tmp/tabula.db").unwrap() else {
        panic!("expected a file database");
    };
    assert_eq!(path.to_str(), Some("/tmp/tabula.db"));

    let err = Sqlite::new("mysql://localhost/db").unwrap_err();
    assert!(err.is_invalid_connection_url());

    let err = Sqlite::new("not a url").unwrap_err();
    assert!(err.is_invalid_connection_url());
}

#[test]
fn driver_url() {
    assert_eq!(Sqlite::in_memory().url(), "sqlite::memory:");
    assert_eq!(Sqlite::open("/tmp/x.db").url(), "sqlite:/tmp/x.db");
}

#[tokio::test]
async fn exec_and_query() {
    let mut conn = connect().await;

    conn.exec("BEGIN;CREATE TABLE t1(x INTEGER NOT NULL,y REAL NOT NULL,PRIMARY KEY(x));COMMIT;")
        .await
        .unwrap();

    let changed = conn
        .exec("INSERT INTO t1 (x,y) VALUES (1,0.500000),(2,1.000000);")
        .await
        .unwrap();
    assert_eq!(changed, 2);

    let rows = conn.query("SELECT x,y FROM t1 ORDER BY x ASC;").await.unwrap();
    let cells: Vec<_> = rows
        .iter()
        .map(|row| {
            row.columns()
                .iter()
                .map(|cell| cell.require_str("text").unwrap().to_string())
                .collect::<Vec<_>>()
        })
        .collect();

    assert_eq!(cells, [["1", "0.5"], ["2", "1"]]);
}

#[tokio::test]
async fn empty_exec_is_noop() {
    let mut conn = connect().await;
    assert_eq!(conn.exec("").await.unwrap(), 0);
}

#[tokio::test]
async fn nulls_and_blobs() {
    let mut conn = connect().await;

    conn.exec("CREATE TABLE b(v BLOB);").await.unwrap();
    conn.exec("INSERT INTO b (v) VALUES (X'00FF00'),(X''),(NULL);")
        .await
        .unwrap();

    let rows = conn.query("SELECT v FROM b;").await.unwrap();
    let cells: Vec<_> = rows
        .iter()
        .map(|row| row.columns()[0].require_bytes("bytes").ok().map(<[u8]>::to_vec))
        .collect();

    assert_eq!(cells, [Some(vec![0x00, 0xFF, 0x00]), Some(vec![]), None]);
}

#[tokio::test]
async fn has_table() {
    let mut conn = connect().await;

    assert!(!conn.has_table("t1").await.unwrap());
    conn.exec("CREATE TABLE t1(x INTEGER);").await.unwrap();
    assert!(conn.has_table("t1").await.unwrap());
}

#[tokio::test]
async fn syntax_error_keeps_driver_text() {
    let mut conn = connect().await;

    let err = conn.exec("SELEC 1;").await.unwrap_err();
    assert!(err.is_execute());
    assert!(err.to_string().contains("syntax error"), "got: {err}");
}

#[tokio::test]
async fn open_missing_directory_fails_to_connect() {
    let err = Sqlite::open("/nonexistent-dir/tabula/db.sqlite")
        .connect()
        .await
        .unwrap_err();
    assert!(err.is_connect());
}
