use super::{Decode, Encode, NativeType, RawColumn, Value};
use crate::{DataType, Error, Result};

macro_rules! impl_integer {
    ( $( $ty:ty => $signed:literal, $width:literal; )* ) => {
        $(
            impl Encode for $ty {
                fn encode(&self) -> Value {
                    Value::Number(self.to_string())
                }
            }

            impl Decode for $ty {
                fn decode(column: RawColumn<'_>) -> Result<$ty> {
                    let text = column.require_str(stringify!($ty))?;
                    text.parse()
                        .map_err(|_| Error::type_conversion(text, stringify!($ty)))
                }
            }

            impl NativeType for $ty {
                const DATA_TYPE: DataType = DataType::integer($signed, $width);
            }
        )*
    };
}

impl_integer! {
    i8 => true, 1;
    u8 => false, 1;
    i16 => true, 2;
    u16 => false, 2;
    i32 => true, 4;
    u32 => false, 4;
    i64 => true, 8;
    u64 => false, 8;
}

macro_rules! impl_float {
    ( $( $ty:ty => $width:literal; )* ) => {
        $(
            impl Encode for $ty {
                /// Finite values are written with six decimals. SQL has no
                /// literal for NaN, so it is written as `NULL`, the value
                /// SQLite stores for it. Infinities overflow to `9e999`;
                /// SQLite reads that back as infinity and MySQL rejects it
                /// as out of range.
                fn encode(&self) -> Value {
                    if self.is_nan() {
                        Value::Null
                    } else if self.is_infinite() {
                        let sign = if self.is_sign_negative() { "-" } else { "" };
                        Value::Number(format!("{sign}9e999"))
                    } else {
                        Value::Number(format!("{:.6}", self))
                    }
                }
            }

            impl Decode for $ty {
                fn decode(column: RawColumn<'_>) -> Result<$ty> {
                    let text = column.require_str(stringify!($ty))?;
                    text.parse()
                        .map_err(|_| Error::type_conversion(text, stringify!($ty)))
                }
            }

            impl NativeType for $ty {
                const DATA_TYPE: DataType = DataType::float($width);
            }
        )*
    };
}

impl_float! {
    f32 => 4;
    f64 => 8;
}

impl Encode for bool {
    fn encode(&self) -> Value {
        Value::Number(if *self { "1" } else { "0" }.to_string())
    }
}

impl Decode for bool {
    fn decode(column: RawColumn<'_>) -> Result<bool> {
        let text = column.require_str("bool")?;
        let value: i64 = text
            .parse()
            .map_err(|_| Error::type_conversion(text, "bool"))?;
        Ok(value != 0)
    }
}

impl NativeType for bool {
    const DATA_TYPE: DataType = DataType::integer(false, 1);
}

impl Encode for char {
    fn encode(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl Decode for char {
    fn decode(column: RawColumn<'_>) -> Result<char> {
        let text = column.require_str("char")?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Error::type_conversion(text, "char")),
        }
    }
}

impl NativeType for char {
    const DATA_TYPE: DataType = DataType::varchar_with(1);
}
