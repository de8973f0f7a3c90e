use super::Error;

/// Error when the database driver cannot establish a connection.
///
/// The driver's own error is kept as the source and its text is displayed
/// unchanged.
#[derive(Debug)]
pub(super) struct ConnectError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ConnectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for ConnectError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        super::display_with_sources(self.inner.as_ref(), f)
    }
}

impl Error {
    /// Creates an error from a driver's connection failure.
    pub fn connect(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Connect(ConnectError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a connection failure.
    pub fn is_connect(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Connect(_)))
    }
}
