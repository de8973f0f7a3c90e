#![allow(dead_code)]

mod logging_connection;
pub use logging_connection::{ExecLog, LoggingConnection};

use tabula::{field, Db, Row};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: f64,
}

pub fn point_row() -> Row<Point> {
    Row::new()
        .add_field("x", field!(Point, x))
        .set_primary_key("x")
        .add_field("y", field!(Point, y))
}

pub fn points(range: std::ops::Range<i32>) -> Vec<Point> {
    range
        .map(|x| Point {
            x,
            y: f64::from(x) / 2.0,
        })
        .collect()
}

/// An in-memory SQLite database recording every statement it executes.
pub fn sqlite_db() -> (Db, ExecLog) {
    sqlite_db_with(&mut Db::builder())
}

pub fn sqlite_db_with(builder: &mut tabula::Builder) -> (Db, ExecLog) {
    logged(builder, sqlite_connection())
}

/// Like [`sqlite_db`], but every `exec` of `sql` fails.
pub fn sqlite_db_failing_on(sql: &str) -> (Db, ExecLog) {
    logged(&mut Db::builder(), sqlite_connection().fail_on(sql))
}

fn sqlite_connection() -> LoggingConnection {
    let inner = tabula_driver_sqlite::Connection::in_memory().expect("open in-memory sqlite");
    LoggingConnection::new(Box::new(inner))
}

fn logged(builder: &mut tabula::Builder, connection: LoggingConnection) -> (Db, ExecLog) {
    let log = connection.log();
    (builder.build(Box::new(connection)), log)
}
