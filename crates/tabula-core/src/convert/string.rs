use super::{Decode, Encode, NativeType, RawColumn, Value};
use crate::{DataType, Result};

impl Encode for str {
    fn encode(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl Encode for String {
    fn encode(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Decode for String {
    fn decode(column: RawColumn<'_>) -> Result<String> {
        column.require_str("String").map(str::to_string)
    }
}

impl NativeType for String {
    const DATA_TYPE: DataType = DataType::varchar();
}

#[cfg(test)]
mod tests {
    use crate::convert::to_sql;

    use super::*;

    #[test]
    fn strings_are_escaped() {
        assert_eq!(to_sql("abc"), "\"abc\"");
        assert_eq!(to_sql(&"hello\nworld".to_string()), r#""hello\nworld""#);
        assert_eq!("abc".encode(), Value::String("abc".to_string()));
    }

    #[test]
    fn decode_reads_text_verbatim() {
        assert_eq!(String::decode("a\\b".into()).unwrap(), "a\\b");
        assert_eq!(String::decode(RawColumn::bytes(b"")).unwrap(), "");
    }

    #[test]
    fn invalid_utf8_fails() {
        let err = String::decode(RawColumn::bytes(&[0xff, 0xfe])).unwrap_err();
        assert!(err.is_type_conversion());
    }
}
