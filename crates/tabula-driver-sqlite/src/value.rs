use rusqlite::types::ValueRef;

/// Converts a fetched SQLite value to the raw cell handed to the row mapping.
///
/// Numbers become their decimal text, so the same decoders read SQLite and
/// MySQL results. Text and blobs are copied verbatim.
pub(crate) fn to_cell(value: ValueRef<'_>) -> Option<Vec<u8>> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(value) => Some(value.to_string().into_bytes()),
        ValueRef::Real(value) => Some(value.to_string().into_bytes()),
        ValueRef::Text(value) => Some(value.to_vec()),
        ValueRef::Blob(value) => Some(value.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_become_text() {
        assert_eq!(to_cell(ValueRef::Integer(-42)), Some(b"-42".to_vec()));
        assert_eq!(to_cell(ValueRef::Real(1.5)), Some(b"1.5".to_vec()));
    }

    #[test]
    fn empty_blob_is_not_null() {
        assert_eq!(to_cell(ValueRef::Blob(b"")), Some(vec![]));
        assert_eq!(to_cell(ValueRef::Null), None);
    }
}
