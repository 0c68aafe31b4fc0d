use super::Db;

use dbo_core::{Error, Result};
use url::Url;

impl Db {
    /// Builds a `Db` with the built-in driver matching the URL scheme.
    ///
    /// Supported schemes are `sqlite:` and `mysql:`, each available when the
    /// crate feature of the same name is enabled. No connection is opened
    /// until [`Db::connect`].
    pub fn connect_url(url: &str) -> Result<Db> {
        let parsed = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

        match parsed.scheme() {
            "mysql" => connect_mysql(url),
            "sqlite" => connect_sqlite(url),
            scheme => Err(Error::invalid_connection_url(format!(
                "unsupported database; scheme={scheme}; url={url}"
            ))),
        }
    }
}

#[cfg(feature = "mysql")]
fn connect_mysql(url: &str) -> Result<Db> {
    Ok(Db::new(dbo_driver_mysql::MySql::new(url)?))
}

#[cfg(not(feature = "mysql"))]
fn connect_mysql(_url: &str) -> Result<Db> {
    Err(Error::not_configured("`mysql` feature not enabled"))
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &str) -> Result<Db> {
    Ok(Db::new(dbo_driver_sqlite::Sqlite::new(url)?))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(_url: &str) -> Result<Db> {
    Err(Error::not_configured("`sqlite` feature not enabled"))
}
