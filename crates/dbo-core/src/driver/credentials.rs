use std::fmt;

/// Username and optional password used to log in to the backend.
#[derive(Clone, PartialEq, Eq)]
pub struct UserCredentials {
    username: String,
    password: Option<String>,
}

impl UserCredentials {
    pub fn new(username: impl Into<String>, password: Option<String>) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

impl fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCredentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Where to reach a backend, as an ordered set of `key=value` options.
pub trait ConnectionDetails {
    /// Options in the order they appear in the DSN.
    fn options(&self) -> Vec<(&'static str, String)>;

    /// Renders the options as a DSN fragment: `key=value;` for each option.
    fn dsn_part(&self) -> String {
        self.options()
            .into_iter()
            .map(|(key, value)| format!("{key}={value};"))
            .collect()
    }
}
