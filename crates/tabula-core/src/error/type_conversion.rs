use super::Error;

/// Error when a raw column cannot be decoded into the requested native type.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    text: Box<str>,
    to_type: &'static str,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {:?} to {}", self.text, self.to_type)
    }
}

impl Error {
    /// Creates a type conversion error for the raw `text` that failed to
    /// decode as `to_type`.
    pub fn type_conversion(text: impl Into<String>, to_type: &'static str) -> Error {
        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            text: text.into().into(),
            to_type,
        }))
    }

    /// Returns `true` if this error is a type conversion error.
    pub fn is_type_conversion(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::TypeConversion(_)))
    }
}
