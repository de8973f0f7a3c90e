use super::Db;
use crate::{Result, Serializer};

use tabula_core::driver::{Connection, TransactionManager};

/// Rows per `INSERT` statement unless configured otherwise.
const DEFAULT_MAX_WRITES: usize = 300;

#[derive(Debug)]
pub struct Builder {
    max_writes: usize,
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            max_writes: DEFAULT_MAX_WRITES,
        }
    }
}

impl Builder {
    /// Set the number of rows written by each `INSERT` of a bulk write.
    ///
    /// Values below one are treated as one.
    pub fn max_writes(&mut self, max_writes: usize) -> &mut Self {
        self.max_writes = max_writes.max(1);
        self
    }

    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        Ok(self.build(super::connect(url).await?))
    }

    pub fn build(&mut self, connection: Box<dyn Connection>) -> Db {
        Db {
            serializer: Serializer::new(connection.capability()),
            connection,
            transactions: TransactionManager::new(),
            max_writes: self.max_writes,
        }
    }
}
