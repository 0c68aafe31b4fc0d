use super::Error;

/// Error when a where-clause names a comparison operator that cannot be
/// expressed.
#[derive(Debug)]
pub(super) struct UnsupportedOperator {
    operator: Box<str>,
}

impl std::error::Error for UnsupportedOperator {}

impl core::fmt::Display for UnsupportedOperator {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported operator `{}`", self.operator)
    }
}

impl Error {
    pub fn unsupported_operator(operator: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedOperator(UnsupportedOperator {
            operator: operator.into().into(),
        }))
    }

    pub fn is_unsupported_operator(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::UnsupportedOperator(_)))
    }
}
