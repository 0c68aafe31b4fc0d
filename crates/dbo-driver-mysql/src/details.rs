use dbo_core::driver::ConnectionDetails;

/// How to reach a MySQL server: over TCP, or through a local unix socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MySqlConnectionDetails {
    Network { host: String, port: u16 },
    UnixSocket(String),
}

impl MySqlConnectionDetails {
    pub fn network(host: impl Into<String>, port: u16) -> Self {
        Self::Network {
            host: host.into(),
            port,
        }
    }

    pub fn unix_socket(path: impl Into<String>) -> Self {
        Self::UnixSocket(path.into())
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    pub fn is_unix_socket(&self) -> bool {
        matches!(self, Self::UnixSocket(_))
    }
}

impl Default for MySqlConnectionDetails {
    fn default() -> Self {
        Self::network("localhost", 3306)
    }
}

impl ConnectionDetails for MySqlConnectionDetails {
    fn options(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Network { host, port } => {
                vec![("host", host.clone()), ("port", port.to_string())]
            }
            Self::UnixSocket(path) => vec![("unix_socket", path.clone())],
        }
    }
}
