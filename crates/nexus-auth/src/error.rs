//! Error types for nexus-auth.
//!
//! Error messages are designed to avoid exposing credential data.

/// Result type alias for nexus-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for nexus-auth operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// OAuth error response from Globus Auth.
    #[error("OAuth error: {error} - {description}")]
    OAuth { error: String, description: String },

    /// Invalid credentials configuration.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// HTTP error while talking to Globus Auth.
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<globus_nexus_transport::Error> for Error {
    fn from(err: globus_nexus_transport::Error) -> Self {
        use globus_nexus_transport::ErrorKind as TransportKind;

        let kind = match &err.kind {
            TransportKind::GlobusApi { code, message, .. } => ErrorKind::OAuth {
                error: code.clone(),
                description: message.clone(),
            },
            TransportKind::Json(message) => ErrorKind::Json(message.clone()),
            TransportKind::Config(message) | TransportKind::InvalidUrl(message) => {
                ErrorKind::Config(message.clone())
            }
            _ => ErrorKind::Http(err.to_string()),
        };
        Error::with_source(kind, err)
    }
}
