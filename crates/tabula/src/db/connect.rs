use crate::Result;

use tabula_core::{driver::Connection, Error};
use url::Url;

/// Opens a connection, picking the driver from the URL scheme.
///
/// `sqlite:` URLs need the `sqlite` feature and `mysql:` URLs the `mysql`
/// feature.
pub async fn connect(url: &str) -> Result<Box<dyn Connection>> {
    let parsed = Url::parse(url)
        .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

    match parsed.scheme() {
        "mysql" => connect_mysql(url).await,
        "sqlite" => connect_sqlite(url).await,
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported database; scheme={scheme}; url={url}"
        ))),
    }
}

#[cfg(feature = "mysql")]
async fn connect_mysql(url: &str) -> Result<Box<dyn Connection>> {
    use tabula_core::driver::Driver;

    tabula_driver_mysql::MySQL::new(url)?.connect().await
}

#[cfg(not(feature = "mysql"))]
async fn connect_mysql(_url: &str) -> Result<Box<dyn Connection>> {
    Err(Error::unsupported_feature("`mysql` feature not enabled"))
}

#[cfg(feature = "sqlite")]
async fn connect_sqlite(url: &str) -> Result<Box<dyn Connection>> {
    use tabula_core::driver::Driver;

    tabula_driver_sqlite::Sqlite::new(url)?.connect().await
}

#[cfg(not(feature = "sqlite"))]
async fn connect_sqlite(_url: &str) -> Result<Box<dyn Connection>> {
    Err(Error::unsupported_feature("`sqlite` feature not enabled"))
}
