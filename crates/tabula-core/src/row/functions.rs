use super::Row;
use crate::{Decode, Encode, NativeType};

/// Projects `MAX(column)` as a single value of type `V`.
pub fn max<V>(column: &str) -> Row<V>
where
    V: Encode + Decode + NativeType + 'static,
{
    Row::scalar(format!("MAX({column})"))
}

/// Projects `MIN(column)` as a single value of type `V`.
pub fn min<V>(column: &str) -> Row<V>
where
    V: Encode + Decode + NativeType + 'static,
{
    Row::scalar(format!("MIN({column})"))
}

/// Projects `COUNT(column)`.
pub fn count(column: &str) -> Row<i64> {
    Row::scalar(format!("COUNT({column})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DataType;

    #[test]
    fn aggregate_columns() {
        let row = max::<i32>("abc");
        assert_eq!(row.columns()[0].name, "MAX(abc)");
        assert_eq!(row.columns()[0].ty, DataType::integer(true, 4));

        assert_eq!(min::<f64>("y").columns()[0].name, "MIN(y)");
        assert_eq!(count("*").columns()[0].name, "COUNT(*)");
    }

    #[test]
    fn aggregate_extracts_scalar() {
        let mut value = 0i64;
        count("*").extract(&["17".into()], &mut value).unwrap();
        assert_eq!(value, 17);
    }
}
