/// SQL dialect spoken by a database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Sqlite,
    Mysql,
}

#[derive(Debug)]
pub struct Capability {
    pub flavor: Flavor,

    /// When false, emptying a table uses an unfiltered `DELETE` in place of
    /// `TRUNCATE TABLE`.
    pub truncate_table: bool,
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        flavor: Flavor::Sqlite,
        truncate_table: false,
    };

    /// MySQL capabilities
    pub const MYSQL: Self = Self {
        flavor: Flavor::Mysql,
        truncate_table: true,
    };
}
