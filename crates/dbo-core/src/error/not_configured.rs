use super::Error;

/// Error when a required piece of configuration was never provided.
///
/// This occurs when:
/// - A schema has no table name and is used for persistence
/// - A schema has no identifying column and is used for load/store/delete
/// - A record has neither a bound connection nor a default for its model
///
/// These are programmer errors and always surface to the caller.
#[derive(Debug)]
pub(super) struct NotConfigured {
    message: Box<str>,
}

impl std::error::Error for NotConfigured {}

impl core::fmt::Display for NotConfigured {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "not configured: {}", self.message)
    }
}

impl Error {
    /// Creates a configuration error.
    pub fn not_configured(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotConfigured(NotConfigured {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a
    /// configuration error.
    pub fn is_not_configured(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::NotConfigured(_)))
    }
}
