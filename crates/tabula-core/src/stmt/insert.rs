use crate::Row;

/// `INSERT` of a range of values.
#[derive(Debug)]
pub struct Insert<'a, T> {
    pub row: Row<T>,
    pub table: String,
    pub values: &'a [T],
}

/// Inserts `values`, updating the non-key columns of rows whose primary key
/// already exists.
#[derive(Debug)]
pub struct Upsert<'a, T> {
    pub row: Row<T>,
    pub table: String,
    pub values: &'a [T],
}

pub fn insert<'a, T>(row: &Row<T>, table: impl Into<String>, values: &'a [T]) -> Insert<'a, T> {
    Insert {
        row: row.clone(),
        table: table.into(),
        values,
    }
}

pub fn upsert<'a, T>(row: &Row<T>, table: impl Into<String>, values: &'a [T]) -> Upsert<'a, T> {
    Upsert {
        row: row.clone(),
        table: table.into(),
        values,
    }
}

macro_rules! impl_range {
    ($name:ident) => {
        impl<'a, T> $name<'a, T> {
            /// `true` when there is nothing to write.
            pub fn is_empty(&self) -> bool {
                self.values.is_empty() || self.row.is_empty()
            }

            /// Splits the range into statements of at most `size` values each,
            /// in their original order.
            pub fn batches(&self, size: usize) -> impl Iterator<Item = $name<'a, T>> + '_ {
                self.values.chunks(size.max(1)).map(|values| $name {
                    row: self.row.clone(),
                    table: self.table.clone(),
                    values,
                })
            }
        }

        impl<T> Clone for $name<'_, T> {
            fn clone(&self) -> Self {
                $name {
                    row: self.row.clone(),
                    table: self.table.clone(),
                    values: self.values,
                }
            }
        }
    };
}

impl_range!(Insert);
impl_range!(Upsert);
