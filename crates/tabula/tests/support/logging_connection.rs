use std::sync::{Arc, Mutex};
use tabula::{
    async_trait,
    driver::{Capability, Connection, RawRow},
    err, Result,
};

/// A connection wrapper that records the SQL text of every `exec` call
#[derive(Debug)]
pub struct LoggingConnection {
    /// The underlying connection that actually runs the statements
    inner: Box<dyn Connection>,

    /// Shared with the test through `ExecLog`
    log: Arc<Mutex<Vec<String>>>,

    /// Statement text that fails instead of reaching `inner`
    fail_on: Option<String>,
}

impl LoggingConnection {
    pub fn new(inner: Box<dyn Connection>) -> Self {
        Self {
            inner,
            log: Arc::new(Mutex::new(Vec::new())),
            fail_on: None,
        }
    }

    /// Fails every `exec` of exactly `sql`.
    pub fn fail_on(mut self, sql: impl Into<String>) -> Self {
        self.fail_on = Some(sql.into());
        self
    }

    pub fn log(&self) -> ExecLog {
        ExecLog {
            statements: self.log.clone(),
        }
    }
}

#[async_trait]
impl Connection for LoggingConnection {
    fn capability(&self) -> &'static Capability {
        self.inner.capability()
    }

    async fn exec(&mut self, sql: &str) -> Result<u64> {
        self.log
            .lock()
            .expect("Failed to acquire exec log lock")
            .push(sql.to_string());

        if self.fail_on.as_deref() == Some(sql) {
            return Err(err!("refusing to run {sql}"));
        }

        self.inner.exec(sql).await
    }

    async fn query(&mut self, sql: &str) -> Result<Vec<RawRow>> {
        self.inner.query(sql).await
    }

    async fn has_table(&mut self, table: &str) -> Result<bool> {
        self.inner.has_table(table).await
    }
}

/// Statements executed so far, in order
pub struct ExecLog {
    statements: Arc<Mutex<Vec<String>>>,
}

impl ExecLog {
    pub fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.statements.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.lock().unwrap().is_empty()
    }

    pub fn clear(&self) {
        self.statements.lock().unwrap().clear();
    }
}
