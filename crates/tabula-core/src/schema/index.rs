/// An index over one or more columns of a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    /// Index name. The primary key index has an empty name.
    pub name: String,

    /// Indexed columns, in order
    pub columns: Vec<String>,

    /// When `true`, indexed entries are unique
    pub unique: bool,

    /// When `true`, the index is the table's primary key
    pub primary_key: bool,
}

impl Index {
    pub fn new(name: impl Into<String>, columns: impl IntoColumnNames) -> Index {
        Index {
            name: name.into(),
            columns: columns.into_column_names(),
            unique: false,
            primary_key: false,
        }
    }

    pub fn primary_key(columns: impl IntoColumnNames) -> Index {
        Index {
            name: String::new(),
            columns: columns.into_column_names(),
            unique: true,
            primary_key: true,
        }
    }

    pub fn unique(mut self, unique: bool) -> Index {
        self.unique = unique;
        self
    }
}

/// A single column name or a list of them.
pub trait IntoColumnNames {
    fn into_column_names(self) -> Vec<String>;
}

impl IntoColumnNames for &str {
    fn into_column_names(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoColumnNames for String {
    fn into_column_names(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoColumnNames for &[&str] {
    fn into_column_names(self) -> Vec<String> {
        self.iter().map(|name| name.to_string()).collect()
    }
}

impl<const N: usize> IntoColumnNames for [&str; N] {
    fn into_column_names(self) -> Vec<String> {
        self.iter().map(|name| name.to_string()).collect()
    }
}

impl IntoColumnNames for Vec<&str> {
    fn into_column_names(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

impl IntoColumnNames for Vec<String> {
    fn into_column_names(self) -> Vec<String> {
        self
    }
}
