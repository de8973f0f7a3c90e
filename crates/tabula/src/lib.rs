//! Typed SQL statements for records described by a [`Row`] mapping.
//!
//! A [`Row<T>`] lists the columns of a table and binds each one to an accessor
//! of `T`. Statements are built from a mapping with the factories in
//! [`stmt`], rendered for a database by a [`Serializer`] and executed by a
//! [`Db`], which extracts fetched rows back into `T` values.
//!
//! ```no_run
//! use tabula::{field, stmt, Db, Row};
//!
//! #[derive(Debug, Default)]
//! struct Point {
//!     x: i32,
//!     y: f64,
//! }
//!
//! # async fn run() -> tabula::Result<()> {
//! let row = Row::<Point>::new()
//!     .add_field("x", field!(Point, x))
//!     .set_primary_key("x")
//!     .add_field("y", field!(Point, y));
//!
//! let mut db = Db::connect("sqlite::memory:").await?;
//! db.create_table(&stmt::create(&row, "points")).await?;
//! db.insert(&stmt::insert(&row, "points", &[Point { x: 1, y: 0.5 }])).await?;
//!
//! let mut points = vec![];
//! db.select(stmt::select(&row, "points", &mut points).filter(stmt::Expr::gt(stmt::sym("x"), 0)))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod db;
pub use db::{Builder, Db};

pub use tabula_core::{
    async_trait, bail, convert, driver, err, field, row, schema, stmt, Column, DataType, Decode,
    Encode, Error, Field, Index, NativeType, RawColumn, Result, Row, Value,
};

pub use tabula_sql::{Serializer, Statement};
