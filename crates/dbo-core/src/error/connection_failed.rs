use super::Error;

/// Error when a backend handle cannot be established.
///
/// Wraps the driver library's error (rusqlite, mysql_async) so callers see a
/// single error kind for every backend, with the original message preserved.
#[derive(Debug)]
pub(super) struct ConnectionFailed {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ConnectionFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for ConnectionFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "there was a problem connecting to the database: ")?;
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a failed connection attempt.
    pub fn connection_failed(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::ConnectionFailed(ConnectionFailed {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a connection failure.
    pub fn is_connection_failed(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::ConnectionFailed(_)))
    }
}
