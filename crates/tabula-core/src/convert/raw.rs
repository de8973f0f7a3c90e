use crate::{Error, Result};

/// One cell of a fetched row, as handed over by a driver.
///
/// `None` is SQL `NULL`. Otherwise the cell holds the column's raw bytes:
/// the text form of numbers, dates, and strings, or the verbatim contents of a
/// blob. Keeping an explicit length distinguishes an empty blob from `NULL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawColumn<'a> {
    data: Option<&'a [u8]>,
}

impl<'a> RawColumn<'a> {
    pub const NULL: RawColumn<'static> = RawColumn { data: None };

    pub fn new(data: Option<&'a [u8]>) -> RawColumn<'a> {
        RawColumn { data }
    }

    pub fn text(text: &'a str) -> RawColumn<'a> {
        RawColumn {
            data: Some(text.as_bytes()),
        }
    }

    pub fn bytes(bytes: &'a [u8]) -> RawColumn<'a> {
        RawColumn { data: Some(bytes) }
    }

    pub fn is_null(&self) -> bool {
        self.data.is_none()
    }

    /// Raw bytes, or an `unexpected_null` error naming `ty`.
    pub fn require_bytes(&self, ty: &'static str) -> Result<&'a [u8]> {
        self.data.ok_or_else(|| Error::unexpected_null(ty))
    }

    /// The cell as UTF-8 text, or an error naming `ty`.
    pub fn require_str(&self, ty: &'static str) -> Result<&'a str> {
        let bytes = self.require_bytes(ty)?;
        std::str::from_utf8(bytes)
            .map_err(|_| Error::type_conversion(String::from_utf8_lossy(bytes), ty))
    }
}

impl<'a> From<&'a str> for RawColumn<'a> {
    fn from(text: &'a str) -> RawColumn<'a> {
        RawColumn::text(text)
    }
}

impl<'a> From<Option<&'a str>> for RawColumn<'a> {
    fn from(text: Option<&'a str>) -> RawColumn<'a> {
        RawColumn::new(text.map(str::as_bytes))
    }
}
