//! Error types for nexus-client.

/// Result type alias for nexus-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Nexus API operations.
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

    /// The underlying transport error, if this error came from the HTTP layer.
    pub fn transport(&self) -> Option<&globus_nexus_transport::Error> {
        self.source
            .as_ref()?
            .downcast_ref::<globus_nexus_transport::Error>()
    }

    /// HTTP status code, if one is associated with this error.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::UnexpectedResponse { status, .. } => Some(*status),
            _ => self.transport().and_then(|e| e.status()),
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The client's authorizer cannot be used for this operation.
    /// Raised before any request is sent.
    #[error("Authorization error: {0}")]
    Authorization(String),

    /// A successful response lacked a field the operation needs.
    #[error("Unexpected response (HTTP {status}): {body}")]
    UnexpectedResponse {
        status: u16,
        body: serde_json::Value,
    },

    /// HTTP, API or decoding failure from the transport layer.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Token renewal failed.
    #[error("Auth error: {0}")]
    Auth(String),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<globus_nexus_transport::Error> for Error {
    fn from(err: globus_nexus_transport::Error) -> Self {
        Error::with_source(ErrorKind::Transport(err.to_string()), err)
    }
}

impl From<globus_nexus_auth::Error> for Error {
    fn from(err: globus_nexus_auth::Error) -> Self {
        Error::with_source(ErrorKind::Auth(err.to_string()), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}
