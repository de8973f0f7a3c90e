use super::{Decode, Encode, NativeType, RawColumn, Value};
use crate::{DataType, Result};

impl Encode for [u8] {
    fn encode(&self) -> Value {
        Value::Bytes(self.to_vec())
    }
}

impl Encode for Vec<u8> {
    fn encode(&self) -> Value {
        Value::Bytes(self.clone())
    }
}

impl Decode for Vec<u8> {
    fn decode(column: RawColumn<'_>) -> Result<Vec<u8>> {
        column.require_bytes("Vec<u8>").map(<[u8]>::to_vec)
    }
}

impl NativeType for Vec<u8> {
    const DATA_TYPE: DataType = DataType::blob();
}
