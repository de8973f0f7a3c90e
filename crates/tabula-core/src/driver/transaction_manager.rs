use crate::{Error, Result};

/// A transaction control operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    /// Start the outermost transaction
    Start,

    /// Commit the outermost transaction
    Commit,

    /// Roll back the outermost transaction
    Rollback,

    /// Start a nested transaction by creating savepoint `sp_{id}`
    Savepoint(u32),

    /// Commit a nested transaction
    ReleaseSavepoint(u32),

    /// Roll back a nested transaction
    RollbackToSavepoint(u32),
}

/// Tracks transaction nesting depth and picks the operation for each
/// start, commit, or rollback.
///
/// The outermost level uses `BEGIN`/`COMMIT`/`ROLLBACK`. Nested levels use
/// savepoints named after the depth they were created at, so a nested
/// transaction can be rolled back without discarding the enclosing one.
#[derive(Debug, Default)]
pub struct TransactionManager {
    depth: u32,
}

impl TransactionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open transactions, nested ones included.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn in_transaction(&self) -> bool {
        self.depth > 0
    }

    /// Returns the operation starting a transaction or savepoint, and
    /// increments the nesting depth.
    pub fn start(&mut self) -> Transaction {
        let op = if self.depth == 0 {
            Transaction::Start
        } else {
            Transaction::Savepoint(self.depth)
        };
        self.depth += 1;
        op
    }

    /// Returns the operation committing the current transaction or releasing
    /// its savepoint, and decrements the nesting depth.
    pub fn commit(&mut self) -> Result<Transaction> {
        self.close("COMMIT")?;
        Ok(if self.depth == 0 {
            Transaction::Commit
        } else {
            Transaction::ReleaseSavepoint(self.depth)
        })
    }

    /// Returns the operation rolling back the current transaction or
    /// savepoint, and decrements the nesting depth.
    ///
    /// The savepoint of a nested rollback is left in place; the enclosing
    /// `COMMIT` or `ROLLBACK` discards it.
    pub fn rollback(&mut self) -> Result<Transaction> {
        self.close("ROLLBACK")?;
        Ok(if self.depth == 0 {
            Transaction::Rollback
        } else {
            Transaction::RollbackToSavepoint(self.depth)
        })
    }

    /// Re-opens a level whose close could not be executed.
    pub fn undo_close(&mut self) {
        self.depth += 1;
    }

    /// Forgets a level whose start could not be executed.
    pub fn undo_start(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn close(&mut self, what: &str) -> Result<()> {
        if self.depth == 0 {
            return Err(Error::invalid_statement(format!(
                "{what} without an open transaction"
            )));
        }
        self.depth -= 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outermost_transaction() {
        let mut tm = TransactionManager::new();
        assert_eq!(tm.start(), Transaction::Start);
        assert!(tm.in_transaction());
        assert_eq!(tm.commit().unwrap(), Transaction::Commit);
        assert!(!tm.in_transaction());
    }

    #[test]
    fn nested_transactions_use_savepoints() {
        let mut tm = TransactionManager::new();
        assert_eq!(tm.start(), Transaction::Start);
        assert_eq!(tm.start(), Transaction::Savepoint(1));
        assert_eq!(tm.start(), Transaction::Savepoint(2));
        assert_eq!(tm.rollback().unwrap(), Transaction::RollbackToSavepoint(2));
        assert_eq!(tm.commit().unwrap(), Transaction::ReleaseSavepoint(1));
        assert_eq!(tm.rollback().unwrap(), Transaction::Rollback);
        assert_eq!(tm.depth(), 0);
    }

    #[test]
    fn close_without_transaction_fails() {
        let mut tm = TransactionManager::new();
        assert!(tm.commit().unwrap_err().is_invalid_statement());
        assert!(tm.rollback().unwrap_err().is_invalid_statement());
        assert_eq!(tm.depth(), 0);
    }
}
