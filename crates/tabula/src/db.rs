mod builder;
pub use builder::Builder;

mod connect;
pub use connect::connect;

mod transaction;

use crate::{Result, Serializer};

use tabula_core::{
    driver::{Connection, RawRow, TransactionManager},
    stmt::{CreateTable, Delete, Insert, Select, Update, Upsert},
    Error,
};
use tracing::{debug, trace};

/// A database handle executing statements over one connection.
///
/// Every statement is rendered by the [`Serializer`] matching the connection's
/// dialect and sent as SQL text. Bulk writes are split into batches of at most
/// [`Builder::max_writes`] rows, all inside one transaction.
pub struct Db {
    connection: Box<dyn Connection>,

    serializer: Serializer,

    /// Open transaction and savepoint levels
    transactions: TransactionManager,

    /// Rows per `INSERT` statement
    max_writes: usize,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connects to the database at `url` with default settings.
    pub async fn connect(url: &str) -> Result<Db> {
        Builder::default().connect(url).await
    }

    /// Wraps an open connection with default settings.
    pub fn new(connection: Box<dyn Connection>) -> Db {
        Builder::default().build(connection)
    }

    /// Creates a table and its indexes.
    ///
    /// The rendered DDL carries its own `BEGIN`/`COMMIT`, so it cannot run
    /// inside an open transaction.
    pub async fn create_table<T>(&mut self, stmt: &CreateTable<T>) -> Result<()> {
        if self.transactions.in_transaction() {
            return Err(Error::invalid_statement(format!(
                "CREATE TABLE {} inside an open transaction",
                stmt.table
            )));
        }

        let sql = self.serializer.serialize(stmt);
        self.exec(&sql).await?;
        Ok(())
    }

    pub async fn has_table(&mut self, table: &str) -> Result<bool> {
        self.connection.has_table(table).await
    }

    /// Inserts a range of values, returning the number of rows written.
    ///
    /// An empty range sends nothing.
    pub async fn insert<T>(&mut self, stmt: &Insert<'_, T>) -> Result<u64> {
        if stmt.is_empty() {
            return Ok(0);
        }

        let batches = stmt
            .batches(self.max_writes)
            .map(|batch| self.serializer.serialize(&batch))
            .collect();

        self.write_batches(batches).await
    }

    /// Inserts a range of values, updating rows whose primary key exists.
    pub async fn upsert<T>(&mut self, stmt: &Upsert<'_, T>) -> Result<u64> {
        if stmt.is_empty() {
            return Ok(0);
        }

        let batches = stmt
            .batches(self.max_writes)
            .map(|batch| self.serializer.serialize(&batch))
            .collect();

        self.write_batches(batches).await
    }

    pub async fn update(&mut self, stmt: &Update) -> Result<u64> {
        let sql = self.serializer.serialize(stmt);
        self.exec(&sql).await
    }

    /// Runs a `SELECT`, extracting each fetched row into a fresh `T` and
    /// pushing it into the statement's destination.
    ///
    /// Returns the number of rows fetched. A row whose width differs from the
    /// mapping, or whose cells cannot be decoded, fails the whole select and
    /// leaves the destination untouched.
    pub async fn select<T, D>(&mut self, stmt: Select<'_, T, D>) -> Result<usize>
    where
        T: Default,
        D: Extend<T>,
    {
        let sql = self.serializer.serialize(&stmt);
        let rows = self.query(&sql).await?;

        let mut values = Vec::with_capacity(rows.len());
        for (index, raw) in rows.iter().enumerate() {
            let mut value = T::default();
            stmt.row
                .extract(&raw.columns(), &mut value)
                .map_err(|err| err.context(tabula_core::err!("row {index}")))?;
            values.push(value);
        }

        let count = values.len();
        stmt.dest.extend(values);
        Ok(count)
    }

    /// Deletes matching rows, or empties the table when there is no filter.
    pub async fn delete(&mut self, stmt: &Delete) -> Result<u64> {
        let sql = self.serializer.serialize(stmt);
        self.exec(&sql).await
    }

    /// Runs SQL text as-is.
    pub async fn exec_sql(&mut self, sql: &str) -> Result<u64> {
        self.exec(sql).await
    }

    pub fn connection(&mut self) -> &mut dyn Connection {
        &mut *self.connection
    }

    pub fn serializer(&self) -> &Serializer {
        &self.serializer
    }

    /// Rows per `INSERT` statement in bulk writes.
    pub fn max_writes(&self) -> usize {
        self.max_writes
    }

    async fn write_batches(&mut self, batches: Vec<String>) -> Result<u64> {
        trace!(batches = batches.len(), max_writes = self.max_writes, "writing batches");

        self.start_transaction().await?;

        let mut count = 0;
        for sql in &batches {
            match self.exec(sql).await {
                Ok(n) => count += n,
                Err(err) => {
                    if let Err(rollback_err) = self.rollback().await {
                        debug!(error = %rollback_err, "rollback after failed batch also failed");
                    }
                    return Err(err);
                }
            }
        }

        self.commit().await?;
        Ok(count)
    }

    async fn exec(&mut self, sql: &str) -> Result<u64> {
        if sql.is_empty() {
            return Ok(0);
        }

        debug!(flavor = ?self.serializer.capability().flavor, sql, "exec");
        self.connection.exec(sql).await
    }

    async fn query(&mut self, sql: &str) -> Result<Vec<RawRow>> {
        debug!(flavor = ?self.serializer.capability().flavor, sql, "query");
        self.connection.query(sql).await
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("connection", &self.connection)
            .field("depth", &self.transactions.depth())
            .field("max_writes", &self.max_writes)
            .finish()
    }
}
