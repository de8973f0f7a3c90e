use super::Expr;
use crate::{Encode, Value};

/// A constant, lowered once by the value's [`Encode`] implementation.
///
/// Its SQL text depends on the dialect and is produced when the enclosing
/// statement is serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprLiteral {
    pub value: Value,
}

impl ExprLiteral {
    pub fn new<T: Encode + ?Sized>(value: &T) -> ExprLiteral {
        ExprLiteral {
            value: value.encode(),
        }
    }
}

impl From<ExprLiteral> for Expr {
    fn from(value: ExprLiteral) -> Self {
        Expr::Literal(value)
    }
}

macro_rules! impl_from_native {
    ( $( $ty:ty ),* ) => {
        $(
            impl From<$ty> for Expr {
                fn from(value: $ty) -> Self {
                    ExprLiteral::new(&value).into()
                }
            }
        )*
    };
}

impl_from_native!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, char, String, Vec<u8>);

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        ExprLiteral::new(value).into()
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDateTime> for Expr {
    fn from(value: chrono::NaiveDateTime) -> Self {
        ExprLiteral::new(&value).into()
    }
}
