use super::{Expr, OrderBy, Query, Source};
use crate::Row;

/// `SELECT` of a mapping's columns, collecting rows into `dest`.
///
/// Each fetched row is extracted into a fresh `T` and pushed into `dest`.
#[derive(Debug)]
pub struct Select<'a, T, D> {
    pub row: Row<T>,
    pub query: Query,
    pub dest: &'a mut D,
}

/// Selects the columns of `row` from `from`.
///
/// `from` is a table name or a nested [`Query`].
pub fn select<'a, T, D>(row: &Row<T>, from: impl Into<Source>, dest: &'a mut D) -> Select<'a, T, D>
where
    D: Extend<T>,
{
    let columns = row.columns().iter().map(|column| column.name.clone()).collect();

    Select {
        row: row.clone(),
        query: Query::new(columns, from),
        dest,
    }
}

impl<T, D> Select<'_, T, D> {
    pub fn filter(mut self, expr: impl Into<Expr>) -> Self {
        self.query = self.query.filter(expr);
        self
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.query = self.query.order_by(order_by);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.query = self.query.limit(limit);
        self
    }
}

/// A destination holding a single value, overwritten by every row.
///
/// Use it to read one value, such as the result of `MAX(x)`:
///
/// ```
/// use tabula_core::stmt::Slot;
///
/// let mut value = 0;
/// Slot::new(&mut value).extend([3, 9]);
/// assert_eq!(value, 9);
/// ```
#[derive(Debug)]
pub struct Slot<'a, T> {
    value: &'a mut T,
}

impl<'a, T> Slot<'a, T> {
    pub fn new(value: &'a mut T) -> Slot<'a, T> {
        Slot { value }
    }
}

impl<T> Extend<T> for Slot<'_, T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            *self.value = value;
        }
    }
}
