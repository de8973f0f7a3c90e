mod value;

use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use tabula_core::{
    async_trait,
    driver::{Capability, Driver, RawRow},
    Error, Result,
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a `sqlite:` connection URL
    ///
    /// `sqlite::memory:` opens a private in-memory database; any other path is
    /// a database file.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else if url.path().is_empty() {
            Err(Error::invalid_connection_url(format!(
                "missing database path in connection URL; url={url_str}"
            )))
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    async fn connect(&self) -> Result<Box<dyn tabula_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::connect)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::connect)?;
        Ok(Self { connection })
    }
}

impl From<RusqliteConnection> for Connection {
    fn from(connection: RusqliteConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl tabula_core::driver::Connection for Connection {
    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    async fn exec(&mut self, sql: &str) -> Result<u64> {
        if sql.is_empty() {
            return Ok(0);
        }

        self.connection.execute_batch(sql).map_err(Error::execute)?;
        Ok(self.connection.changes() as u64)
    }

    async fn query(&mut self, sql: &str) -> Result<Vec<RawRow>> {
        let mut stmt = self.connection.prepare(sql).map_err(Error::execute)?;
        let width = stmt.column_count();
        let mut rows = stmt.query([]).map_err(Error::execute)?;

        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(Error::execute)? {
            let mut cells = Vec::with_capacity(width);

            for index in 0..width {
                let cell = row.get_ref(index).map_err(Error::execute)?;
                cells.push(value::to_cell(cell));
            }

            ret.push(RawRow::new(cells));
        }

        Ok(ret)
    }

    async fn has_table(&mut self, table: &str) -> Result<bool> {
        let mut stmt = self
            .connection
            .prepare(&format!("PRAGMA table_info({table})"))
            .map_err(Error::execute)?;
        let mut rows = stmt.query([]).map_err(Error::execute)?;

        Ok(rows.next().map_err(Error::execute)?.is_some())
    }
}
