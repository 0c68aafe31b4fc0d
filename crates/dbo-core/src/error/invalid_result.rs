use super::Error;

/// Error when a driver response has an unexpected shape.
///
/// This occurs when:
/// - A statement returns a row count where rows were expected, or vice versa
/// - A scalar fetch finds no row, or a row with no fields
///
/// The backend returned valid data, but not what the operation asked for.
#[derive(Debug)]
pub(super) struct InvalidResult {
    message: Box<str>,
}

impl std::error::Error for InvalidResult {}

impl core::fmt::Display for InvalidResult {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid result: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid result error.
    pub fn invalid_result(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidResult(InvalidResult {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid result error.
    pub fn is_invalid_result(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::InvalidResult(_)))
    }
}
