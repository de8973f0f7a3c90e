use super::Error;

#[derive(Debug)]
pub(super) struct UnexpectedNull {
    to_type: &'static str,
}

impl std::error::Error for UnexpectedNull {}

impl core::fmt::Display for UnexpectedNull {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unexpected NULL for non-optional {}", self.to_type)
    }
}

impl Error {
    /// Creates an error for a NULL cell decoded into a type that cannot hold it.
    pub fn unexpected_null(to_type: &'static str) -> Error {
        Error::from(super::ErrorKind::UnexpectedNull(UnexpectedNull { to_type }))
    }

    pub fn is_unexpected_null(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnexpectedNull(_)))
    }
}
