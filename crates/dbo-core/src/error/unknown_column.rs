use super::Error;

/// Error when a record attribute is written under a name the schema does not
/// declare. Reads of undeclared names return null instead.
#[derive(Debug)]
pub(super) struct UnknownColumn {
    name: Box<str>,
}

impl std::error::Error for UnknownColumn {}

impl core::fmt::Display for UnknownColumn {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown column `{}`", self.name)
    }
}

impl Error {
    pub fn unknown_column(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownColumn(UnknownColumn {
            name: name.into().into(),
        }))
    }

    pub fn is_unknown_column(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::UnknownColumn(_)))
    }
}
