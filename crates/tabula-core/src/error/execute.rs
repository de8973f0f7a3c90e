use super::Error;

/// Error when the database driver fails to run a statement.
///
/// This wraps errors from the underlying client library (rusqlite,
/// mysql_async) for syntax problems, constraint violations, and I/O failures.
/// The driver's message is displayed as-is.
#[derive(Debug)]
pub(super) struct ExecuteError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ExecuteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for ExecuteError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        super::display_with_sources(self.inner.as_ref(), f)
    }
}

impl Error {
    /// Creates an error from a driver's statement execution failure.
    pub fn execute(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Execute(ExecuteError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a statement execution failure.
    pub fn is_execute(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Execute(_)))
    }
}
