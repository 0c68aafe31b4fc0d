mod credentials;
pub use credentials::{ConnectionDetails, UserCredentials};

pub mod operation;
pub use operation::Operation;

mod response;
pub use response::{Response, Row, Rows};

use crate::{async_trait, Result};

use std::{borrow::Cow, fmt::Debug};

/// Opens backend connections.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Returns the URL this driver connects to.
    fn url(&self) -> Cow<'_, str>;

    /// Opens a new connection.
    ///
    /// Failure to reach the backend is reported as
    /// [`Error::connection_failed`](crate::Error::connection_failed).
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// A single backend handle.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute a database operation
    async fn exec(&mut self, op: Operation) -> Result<Response>;
}
