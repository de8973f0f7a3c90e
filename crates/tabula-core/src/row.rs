//! Mapping between a native record type and an ordered list of SQL columns.

mod field;
pub use field::Field;

mod functions;
pub use functions::{count, max, min};

use crate::{
    err,
    driver::Flavor,
    schema::{Column, DataType, Index, IntoColumnNames},
    Decode, Encode, Error, NativeType, RawColumn, Result, Value,
};

use std::{fmt, sync::Arc};

/// Describes how a record of type `T` maps to the columns of a table.
///
/// Each column is bound to an accessor that reads the column's value out of a
/// `T` when building SQL and writes it back when extracting a fetched row.
/// Columns keep the order in which they were added: that order is used for
/// `CREATE TABLE`, the column list of `INSERT` and `SELECT`, and the position
/// of each cell in a fetched row.
///
/// A `Row` is immutable. Builder methods take `&self` and return a new `Row`,
/// leaving the receiver untouched, so a partially built mapping can be reused
/// as the base of several others. Cloning is cheap.
///
/// ```
/// use tabula_core::{field, Row};
///
/// #[derive(Default)]
/// struct Point {
///     x: i32,
///     y: f64,
/// }
///
/// let row = Row::<Point>::new()
///     .add_field("x", field!(Point, x))
///     .set_primary_key("x")
///     .add_field("y", field!(Point, y));
///
/// let mut point = Point::default();
/// row.extract(&["3".into(), "1.5".into()], &mut point).unwrap();
/// assert_eq!((point.x, point.y), (3, 1.5));
/// ```
pub struct Row<T> {
    data: Arc<RowData<T>>,
}

struct RowData<T> {
    columns: Vec<Column>,

    /// One accessor per column, in column order
    accessors: Vec<Accessor<T>>,

    /// The primary key, when set, is always first
    indexes: Vec<Index>,
}

type Getter<T> = Arc<dyn Fn(&T) -> Value + Send + Sync>;
type Setter<T> = Arc<dyn Fn(&mut T, RawColumn<'_>) -> Result<()> + Send + Sync>;

struct Accessor<T> {
    get: Getter<T>,
    set: Setter<T>,
}

impl<T: 'static> Row<T> {
    pub fn new() -> Row<T> {
        Row {
            data: Arc::new(RowData {
                columns: vec![],
                accessors: vec![],
                indexes: vec![],
            }),
        }
    }

    /// Adds a column bound to a getter and a setter.
    ///
    /// The column type is inferred from `V`.
    pub fn add_column<V>(
        &self,
        name: impl Into<String>,
        getter: impl Fn(&T) -> V + Send + Sync + 'static,
        setter: impl Fn(&mut T, V) + Send + Sync + 'static,
    ) -> Row<T>
    where
        V: Encode + Decode + NativeType + 'static,
    {
        self.add_typed_column(name, V::DATA_TYPE, getter, setter)
    }

    /// Adds a column bound to a getter and a setter, stored as `ty`.
    pub fn add_typed_column<V>(
        &self,
        name: impl Into<String>,
        ty: DataType,
        getter: impl Fn(&T) -> V + Send + Sync + 'static,
        setter: impl Fn(&mut T, V) + Send + Sync + 'static,
    ) -> Row<T>
    where
        V: Encode + Decode + NativeType + 'static,
    {
        self.push_column(
            Column::new(name, ty).nullable(V::NULLABLE),
            Accessor {
                get: Arc::new(move |value: &T| getter(value).encode()),
                set: Arc::new(move |value: &mut T, column: RawColumn<'_>| {
                    setter(value, V::decode(column)?);
                    Ok(())
                }),
            },
        )
    }

    /// Adds a column bound to a [`Field`] of the record.
    ///
    /// The column type is inferred from `V`.
    pub fn add_field<V>(&self, name: impl Into<String>, field: Field<T, V>) -> Row<T>
    where
        V: Encode + Decode + NativeType + 'static,
    {
        self.add_typed_field(name, V::DATA_TYPE, field)
    }

    /// Adds a column bound to a [`Field`] of the record, stored as `ty`.
    pub fn add_typed_field<V>(
        &self,
        name: impl Into<String>,
        ty: DataType,
        field: Field<T, V>,
    ) -> Row<T>
    where
        V: Encode + Decode + NativeType + 'static,
    {
        let getter = field.clone();

        self.push_column(
            Column::new(name, ty).nullable(V::NULLABLE),
            Accessor {
                get: Arc::new(move |value: &T| getter.get(value).encode()),
                set: Arc::new(move |value: &mut T, column: RawColumn<'_>| {
                    *field.get_mut(value) = V::decode(column)?;
                    Ok(())
                }),
            },
        )
    }

    /// Appends every column of `sub`, reached through `field`.
    ///
    /// The sub-mapping's columns are inserted contiguously at this position
    /// and extracted from the same number of consecutive cells.
    pub fn extend<S: 'static>(&self, sub: &Row<S>, field: Field<T, S>) -> Row<T> {
        let mut data = self.data.fork();

        for (column, accessor) in sub.data.columns.iter().zip(&sub.data.accessors) {
            let (get, set) = (accessor.get.clone(), accessor.set.clone());
            let (getter, setter) = (field.clone(), field.clone());

            data.columns.push(column.clone());
            data.accessors.push(Accessor {
                get: Arc::new(move |value: &T| get(getter.get(value))),
                set: Arc::new(move |value: &mut T, column: RawColumn<'_>| {
                    set(setter.get_mut(value), column)
                }),
            });
        }

        Row::from_data(data)
    }

    /// Makes `columns` the primary key.
    ///
    /// A previously declared primary key is kept as an ordinary unique index.
    pub fn set_primary_key(&self, columns: impl IntoColumnNames) -> Row<T> {
        let mut data = self.data.fork();

        if let Some(previous) = data.indexes.first_mut().filter(|index| index.primary_key) {
            previous.primary_key = false;
            previous.name = format!("pk_{}", previous.columns.join("_"));
        }

        data.indexes.insert(0, Index::primary_key(columns));
        Row::from_data(data)
    }

    /// Adds a non-unique index named `name`.
    pub fn add_index(&self, name: impl Into<String>, columns: impl IntoColumnNames) -> Row<T> {
        self.push_index(Index::new(name, columns))
    }

    /// Adds a unique index named `name`.
    pub fn add_unique_index(
        &self,
        name: impl Into<String>,
        columns: impl IntoColumnNames,
    ) -> Row<T> {
        self.push_index(Index::new(name, columns).unique(true))
    }

    fn push_column(&self, column: Column, accessor: Accessor<T>) -> Row<T> {
        let mut data = self.data.fork();
        data.columns.push(column);
        data.accessors.push(accessor);
        Row::from_data(data)
    }

    fn push_index(&self, index: Index) -> Row<T> {
        let mut data = self.data.fork();
        data.indexes.push(index);
        Row::from_data(data)
    }

    fn from_data(data: RowData<T>) -> Row<T> {
        Row {
            data: Arc::new(data),
        }
    }
}

impl<V> Row<V>
where
    V: Encode + Decode + NativeType + 'static,
{
    /// A single column mapping the whole value.
    ///
    /// Used for scalar projections such as `SELECT MAX(x)`.
    pub fn scalar(name: impl Into<String>) -> Row<V> {
        Row::new().add_scalar_column(name)
    }

    /// Adds a column bound to the whole value.
    pub fn add_scalar_column(&self, name: impl Into<String>) -> Row<V> {
        self.push_column(
            Column::new(name, V::DATA_TYPE).nullable(V::NULLABLE),
            Accessor {
                get: Arc::new(|value: &V| value.encode()),
                set: Arc::new(|value: &mut V, column: RawColumn<'_>| {
                    *value = V::decode(column)?;
                    Ok(())
                }),
            },
        )
    }
}

impl<T> Row<T> {
    pub fn columns(&self) -> &[Column] {
        &self.data.columns
    }

    pub fn indexes(&self) -> &[Index] {
        &self.data.indexes
    }

    pub fn primary_key(&self) -> Option<&Index> {
        self.data.indexes.first().filter(|index| index.primary_key)
    }

    /// Returns `true` if `column` is part of the primary key.
    pub fn is_primary_key_column(&self, column: &str) -> bool {
        self.primary_key()
            .is_some_and(|pk| pk.columns.iter().any(|name| name == column))
    }

    pub fn len(&self) -> usize {
        self.data.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.columns.is_empty()
    }

    /// Populates `value` from the cells of one fetched row.
    ///
    /// Cells are matched to columns by position.
    pub fn extract(&self, row: &[RawColumn<'_>], value: &mut T) -> Result<()> {
        if row.len() != self.data.columns.len() {
            return Err(Error::invalid_result(format!(
                "row has {} columns, expected {}",
                row.len(),
                self.data.columns.len()
            )));
        }

        for ((accessor, cell), column) in self.data.accessors.iter().zip(row).zip(&self.data.columns)
        {
            (accessor.set)(value, *cell)
                .map_err(|e| e.context(err!("column `{}`", column.name)))?;
        }

        Ok(())
    }

    /// The value bound to column `column_index`.
    ///
    /// # Panics
    ///
    /// Panics if `column_index` is out of bounds.
    pub fn value(&self, value: &T, column_index: usize) -> Value {
        (self.data.accessors[column_index].get)(value)
    }

    /// Appends the SQL literal of the value bound to column `column_index`,
    /// as `flavor` reads it.
    ///
    /// # Panics
    ///
    /// Panics if `column_index` is out of bounds.
    pub fn append_value(&self, value: &T, column_index: usize, flavor: Flavor, dst: &mut String) {
        self.value(value, column_index).append_sql(flavor, dst)
    }
}

impl<T> RowData<T> {
    /// Copies the snapshot so a builder call can modify it.
    fn fork(&self) -> RowData<T> {
        RowData {
            columns: self.columns.clone(),
            accessors: self.accessors.clone(),
            indexes: self.indexes.clone(),
        }
    }
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        Accessor {
            get: self.get.clone(),
            set: self.set.clone(),
        }
    }
}

impl<T> Clone for Row<T> {
    fn clone(&self) -> Self {
        Row {
            data: self.data.clone(),
        }
    }
}

impl<T: 'static> Default for Row<T> {
    fn default() -> Self {
        Row::new()
    }
}

impl<T> fmt::Debug for Row<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("columns", &self.data.columns)
            .field("indexes", &self.data.indexes)
            .finish()
    }
}
