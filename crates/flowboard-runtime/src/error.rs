use std::fmt;

/// Result type for flowboard-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error (unreadable file, malformed value)
    Config(String),

    /// Required settings are absent; holds the environment variable names
    MissingConfig(Vec<&'static str>),

    /// `.env` file could not be parsed
    DotEnv(dotenvy::Error),

    /// Transport-level HTTP failure
    Http(reqwest::Error),

    /// The API answered with a non-success status
    Api { status: u16, body: String },

    /// Payload was not valid JSON
    Json(serde_json::Error),

    /// The session fetch was already started
    AlreadyFetched,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::MissingConfig(names) => write!(
                f,
                "Missing required AirOps environment variables: {}",
                names.join(", ")
            ),
            Error::DotEnv(err) => write!(f, "Could not read .env file: {}", err),
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Api { status, body } => {
                if body.is_empty() {
                    write!(f, "AirOps API returned {}", status)
                } else {
                    write!(f, "AirOps API returned {}: {}", status, body)
                }
            }
            Error::Json(err) => write!(f, "Invalid JSON payload: {}", err),
            Error::AlreadyFetched => write!(f, "Workflows were already fetched for this session"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::DotEnv(err) => Some(err),
            Error::Http(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Config(_) | Error::MissingConfig(_) | Error::Api { .. } | Error::AlreadyFetched => {
                None
            }
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<dotenvy::Error> for Error {
    fn from(err: dotenvy::Error) -> Self {
        Error::DotEnv(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
