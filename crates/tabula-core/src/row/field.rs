use std::sync::Arc;

/// A combined accessor to a value of type `V` stored inside a `T`.
///
/// This is the equivalent of a pointer to member: the same accessor is used to
/// read the value when serializing and to write it when extracting a row. Use
/// the [`field!`](crate::field) macro to build one from a field path.
pub struct Field<T, V> {
    get: Arc<dyn Fn(&T) -> &V + Send + Sync>,
    get_mut: Arc<dyn Fn(&mut T) -> &mut V + Send + Sync>,
}

impl<T: 'static, V: 'static> Field<T, V> {
    pub fn new(
        get: impl Fn(&T) -> &V + Send + Sync + 'static,
        get_mut: impl Fn(&mut T) -> &mut V + Send + Sync + 'static,
    ) -> Field<T, V> {
        Field {
            get: Arc::new(get),
            get_mut: Arc::new(get_mut),
        }
    }

    /// Chains this accessor with one into the nested value.
    pub fn then<W: 'static>(&self, next: &Field<V, W>) -> Field<T, W> {
        let (get, next_get) = (self.get.clone(), next.get.clone());
        let (get_mut, next_get_mut) = (self.get_mut.clone(), next.get_mut.clone());

        Field::new(
            move |value: &T| next_get(get(value)),
            move |value: &mut T| next_get_mut(get_mut(value)),
        )
    }
}

impl<T, V> Field<T, V> {
    pub fn get<'a>(&self, value: &'a T) -> &'a V {
        (self.get)(value)
    }

    pub fn get_mut<'a>(&self, value: &'a mut T) -> &'a mut V {
        (self.get_mut)(value)
    }
}

impl<T, V> Clone for Field<T, V> {
    fn clone(&self) -> Self {
        Field {
            get: self.get.clone(),
            get_mut: self.get_mut.clone(),
        }
    }
}

impl<T, V> std::fmt::Debug for Field<T, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("ty", &std::any::type_name::<V>())
            .finish()
    }
}

/// Builds a [`Field`] from a record type and a field path.
///
/// ```
/// use tabula_core::{field, Field};
///
/// struct Point { x: i32, y: i32 }
/// struct Entry { a: i32, b: Point }
///
/// let x: Field<Point, i32> = field!(Point, x);
/// let by: Field<Entry, i32> = field!(Entry, b.y);
///
/// let mut entry = Entry { a: 1, b: Point { x: 2, y: 3 } };
/// *by.get_mut(&mut entry) = 30;
/// assert_eq!(*x.get(&entry.b), 2);
/// assert_eq!(entry.b.y, 30);
/// ```
#[macro_export]
macro_rules! field {
    ($ty:ty, $($path:tt)+) => {
        $crate::Field::new(
            |value: &$ty| &value.$($path)+,
            |value: &mut $ty| &mut value.$($path)+,
        )
    };
}
