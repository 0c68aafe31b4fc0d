mod connect;

use dbo_core::{
    driver::{Connection, Driver, Operation, Response},
    Error, Result,
};

use std::fmt;
use tokio::sync::{Mutex, MutexGuard};

/// A database connection provider.
///
/// Wraps a driver and caches at most one open connection. [`Db::connect`]
/// opens the connection on first use and hands out the cached one after
/// that; [`Handle::release`] or [`Db::disconnect`] drops it again.
pub struct Db {
    driver: Box<dyn Driver>,
    conn: Mutex<Option<Box<dyn Connection>>>,
}

/// Exclusive access to the connection cached by a [`Db`].
pub struct Handle<'a> {
    guard: MutexGuard<'a, Option<Box<dyn Connection>>>,
}

impl Db {
    pub fn new(driver: impl Driver) -> Db {
        Db {
            driver: Box::new(driver),
            conn: Mutex::new(None),
        }
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.driver
    }

    /// Returns a handle to the cached connection, opening it if needed.
    pub async fn connect(&self) -> Result<Handle<'_>> {
        let mut guard = self.conn.lock().await;

        if guard.is_none() {
            tracing::debug!(url = %self.driver.url(), "opening connection");
            *guard = Some(self.driver.connect().await?);
        }

        Ok(Handle { guard })
    }

    pub async fn is_connected(&self) -> bool {
        self.conn.lock().await.is_some()
    }

    /// Drops the cached connection, if any.
    pub async fn disconnect(&self) {
        if self.conn.lock().await.take().is_some() {
            tracing::debug!(url = %self.driver.url(), "connection closed");
        }
    }

    /// Runs unparameterized SQL, such as DDL, then releases the connection.
    pub async fn execute_raw(&self, sql: impl Into<String>) -> Result<()> {
        let mut conn = self.connect().await?;
        let res = conn.exec(Operation::raw(sql)).await;
        conn.release();
        res.map(|_| ())
    }
}

impl fmt::Debug for Db {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Db")
            .field("url", &self.driver.url())
            .finish_non_exhaustive()
    }
}

impl Handle<'_> {
    pub async fn exec(&mut self, op: Operation) -> Result<Response> {
        let conn = self
            .guard
            .as_mut()
            .ok_or_else(|| Error::not_configured("connection already released"))?;
        conn.exec(op).await
    }

    /// Closes the connection. The next [`Db::connect`] opens a new one.
    pub fn release(mut self) {
        self.guard.take();
    }
}

impl fmt::Debug for Handle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("conn", &*self.guard)
            .finish()
    }
}
