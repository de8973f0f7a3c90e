use super::Db;
use crate::Result;

use tabula_core::err;
use tracing::{debug, trace};

impl Db {
    /// Starts a transaction, or a savepoint when one is already open.
    pub async fn start_transaction(&mut self) -> Result<()> {
        let op = self.transactions.start();
        let sql = self.serializer.serialize_transaction(&op);

        if let Err(err) = self.exec(&sql).await {
            self.transactions.undo_start();
            return Err(err);
        }

        trace!(depth = self.transactions.depth(), "transaction started");
        Ok(())
    }

    /// Commits the innermost open transaction.
    pub async fn commit(&mut self) -> Result<()> {
        let op = self.transactions.commit()?;
        let sql = self.serializer.serialize_transaction(&op);

        if let Err(err) = self.exec(&sql).await {
            self.transactions.undo_close();
            return Err(err);
        }

        trace!(depth = self.transactions.depth(), "transaction committed");
        Ok(())
    }

    /// Rolls back the innermost open transaction.
    pub async fn rollback(&mut self) -> Result<()> {
        let op = self.transactions.rollback()?;
        let sql = self.serializer.serialize_transaction(&op);

        if let Err(err) = self.exec(&sql).await {
            self.transactions.undo_close();
            return Err(err);
        }

        trace!(depth = self.transactions.depth(), "transaction rolled back");
        Ok(())
    }

    /// Number of open transactions, savepoints included.
    pub fn transaction_depth(&self) -> u32 {
        self.transactions.depth()
    }

    /// Runs `f` inside a transaction.
    ///
    /// Commits when `f` returns `Ok`. Rolls back and returns `f`'s error when
    /// it returns `Err`; a failed rollback is attached to that error as
    /// context. Nested calls use savepoints.
    pub async fn transaction<O>(
        &mut self,
        f: impl AsyncFnOnce(&mut Db) -> Result<O>,
    ) -> Result<O> {
        self.start_transaction().await?;

        match f(&mut *self).await {
            Ok(ret) => {
                self.commit().await?;
                Ok(ret)
            }
            Err(err) => match self.rollback().await {
                Ok(()) => Err(err),
                Err(rollback_err) => {
                    debug!(error = %rollback_err, "rollback after failed transaction also failed");
                    Err(err.context(err!("rollback also failed: {rollback_err}")))
                }
            },
        }
    }
}
