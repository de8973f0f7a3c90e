/// `BEGIN`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartTransaction;

/// `COMMIT`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Commit;

/// `ROLLBACK`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rollback;

pub fn start_transaction() -> StartTransaction {
    StartTransaction
}

pub fn commit() -> Commit {
    Commit
}

pub fn rollback() -> Rollback {
    Rollback
}
