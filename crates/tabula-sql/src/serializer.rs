//! Renders statement descriptors to SQL text for one dialect.

#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod flavor;

// Fragment serializers
mod column;
mod create_table;
mod delete;
mod expr;
mod insert;
mod select;
mod transaction;
mod ty;
mod update;

use tabula_core::{
    driver::{Capability, Flavor, Transaction},
    stmt,
};

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// Dialect differences and supported features of the target database
    capability: &'static Capability,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

/// A statement descriptor the [`Serializer`] can render.
///
/// Every rendered statement is terminated with `;`. Some descriptors render
/// to several statements (`CREATE TABLE` wraps itself in `BEGIN;`/`COMMIT;`)
/// and some render to nothing at all (an `INSERT` of no values).
pub trait Statement {
    fn serialize_into(self, serializer: &Serializer, dst: &mut String);
}

impl Serializer {
    pub fn serialize(&self, stmt: impl Statement) -> String {
        let mut ret = String::new();
        stmt.serialize_into(self, &mut ret);
        ret
    }

    /// Serialize a transaction control operation to a SQL string.
    ///
    /// Savepoints are named `sp_{id}`.
    pub fn serialize_transaction(&self, op: &Transaction) -> String {
        match op {
            Transaction::Start => "BEGIN;".to_string(),
            Transaction::Commit => "COMMIT;".to_string(),
            Transaction::Rollback => "ROLLBACK;".to_string(),
            Transaction::Savepoint(id) => format!("SAVEPOINT sp_{id};"),
            Transaction::ReleaseSavepoint(id) => format!("RELEASE SAVEPOINT sp_{id};"),
            Transaction::RollbackToSavepoint(id) => format!("ROLLBACK TO SAVEPOINT sp_{id};"),
        }
    }

    pub fn capability(&self) -> &'static Capability {
        self.capability
    }

    fn flavor(&self) -> Flavor {
        self.capability.flavor
    }

    fn is_mysql(&self) -> bool {
        self.flavor() == Flavor::Mysql
    }
}

macro_rules! impl_statement {
    ( $( [ $($generics:tt)* ] $ty:ty; )* ) => {
        $(
            impl<$($generics)*> Statement for $ty {
                fn serialize_into(self, serializer: &Serializer, dst: &mut String) {
                    let mut f = Formatter { serializer, dst };
                    self.to_sql(&mut f);
                }
            }
        )*
    };
}

impl_statement! {
    [T] &stmt::CreateTable<T>;
    [T] &stmt::Insert<'_, T>;
    [T] &stmt::Upsert<'_, T>;
    [T, D] &stmt::Select<'_, T, D>;
    [] &stmt::Update;
    [] &stmt::Delete;
    [] stmt::StartTransaction;
    [] stmt::Commit;
    [] stmt::Rollback;
}

/// A bare query renders like a `SELECT` statement.
impl Statement for &stmt::Query {
    fn serialize_into(self, serializer: &Serializer, dst: &mut String) {
        let mut f = Formatter { serializer, dst };
        fmt!(&mut f, self ";");
    }
}
