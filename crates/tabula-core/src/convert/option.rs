use super::{Decode, Encode, NativeType, RawColumn, Value};
use crate::{DataType, Result};

impl<T: Encode> Encode for Option<T> {
    fn encode(&self) -> Value {
        match self {
            Some(value) => value.encode(),
            None => Value::Null,
        }
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode(column: RawColumn<'_>) -> Result<Option<T>> {
        if column.is_null() {
            Ok(None)
        } else {
            T::decode(column).map(Some)
        }
    }
}

impl<T: NativeType> NativeType for Option<T> {
    const DATA_TYPE: DataType = T::DATA_TYPE;
    const NULLABLE: bool = true;
}
