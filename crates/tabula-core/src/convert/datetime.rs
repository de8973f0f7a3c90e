use super::{Decode, Encode, NativeType, RawColumn, Value};
use crate::{DataType, Error, Result};

use chrono::{NaiveDateTime, Timelike};

impl Encode for NaiveDateTime {
    fn encode(&self) -> Value {
        let format = if self.nanosecond() == 0 {
            "%Y-%m-%d %H:%M:%S"
        } else {
            "%Y-%m-%d %H:%M:%S%.f"
        };
        Value::DateTime(self.format(format).to_string())
    }
}

impl Decode for NaiveDateTime {
    fn decode(column: RawColumn<'_>) -> Result<NaiveDateTime> {
        let text = column.require_str("NaiveDateTime")?;
        NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f")
            .map_err(|_| Error::type_conversion(text, "NaiveDateTime"))
    }
}

impl NativeType for NaiveDateTime {
    const DATA_TYPE: DataType = DataType::datetime();
}
