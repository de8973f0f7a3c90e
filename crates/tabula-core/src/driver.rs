mod capability;
pub use capability::{Capability, Flavor};

mod raw_row;
pub use raw_row::RawRow;

mod transaction_manager;
pub use transaction_manager::{Transaction, TransactionManager};

use crate::{async_trait, Result};

use std::{borrow::Cow, fmt::Debug};

/// Opens connections to one database.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// The connection URL this driver was configured with.
    fn url(&self) -> Cow<'_, str>;

    fn capability(&self) -> &'static Capability;

    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// A live connection executing SQL text.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    fn capability(&self) -> &'static Capability;

    /// Executes one or more `;` terminated statements in order, returning the
    /// number of rows changed by the last one.
    ///
    /// Empty text is a no-op.
    async fn exec(&mut self, sql: &str) -> Result<u64>;

    /// Runs a query and returns every fetched row.
    async fn query(&mut self, sql: &str) -> Result<Vec<RawRow>>;

    /// Returns `true` if `table` exists.
    async fn has_table(&mut self, table: &str) -> Result<bool>;
}
