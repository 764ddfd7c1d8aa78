//! HTTP response handling and Globus error mapping.

use serde::de::DeserializeOwned;
use std::sync::LazyLock;

use crate::error::{Error, ErrorKind, Result};

/// Wrapper around an HTTP response.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        self.inner.status().is_success()
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Deserialize the response body as JSON.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let body = self.inner.bytes().await?;
        serde_json::from_slice(&body).map_err(Into::into)
    }

    /// Decode the body as JSON, treating an empty body as `null`.
    pub async fn json_or_null(self) -> Result<serde_json::Value> {
        let body = self.inner.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_slice(&body).map_err(Into::into)
    }
}

/// Extension trait for processing Globus API responses.
pub trait ResponseExt {
    /// Pass 2xx responses through; convert anything else into an error.
    fn check_globus_error(self) -> impl std::future::Future<Output = Result<Response>> + Send;
}

impl ResponseExt for Response {
    async fn check_globus_error(self) -> Result<Response> {
        if self.is_success() {
            return Ok(self);
        }

        let status = self.status();
        let body = self.text().await.unwrap_or_default();
        Err(parse_error_response(status, &body))
    }
}

/// Parse an error response body and convert to the matching error kind.
pub(crate) fn parse_error_response(status: u16, body: &str) -> Error {
    if let Ok(doc) = serde_json::from_str::<GlobusErrorDocument>(body) {
        if doc.code.is_some() || doc.message.is_some() {
            return Error::new(ErrorKind::GlobusApi {
                status,
                code: doc.code.unwrap_or_else(|| "Error".to_string()),
                message: sanitize_error_message(&doc.message.unwrap_or_default()),
            });
        }
    }

    let sanitized = sanitize_error_message(body);
    let kind = match status {
        401 => ErrorKind::Authentication(sanitized),
        403 => ErrorKind::Forbidden(sanitized),
        404 => ErrorKind::NotFound(sanitized),
        _ => ErrorKind::Http {
            status,
            message: sanitized,
        },
    };

    Error::new(kind)
}

static CREDENTIAL_PATTERN: LazyLock<regex_lite::Regex> = LazyLock::new(|| {
    regex_lite::Regex::new(r"(?i)\b(Bearer|Basic|Globus-Goauthtoken)\s+[A-Za-z0-9._~+/=|-]+")
        .expect("credential pattern is a valid regex")
});

/// Sanitize an error message to prevent exposing credentials.
///
/// Values following an authorization scheme name are redacted and messages
/// longer than 500 characters are truncated.
pub(crate) fn sanitize_error_message(message: &str) -> String {
    const MAX_LENGTH: usize = 500;

    let mut sanitized = CREDENTIAL_PATTERN
        .replace_all(message, "${1} [REDACTED]")
        .to_string();

    if sanitized.len() > MAX_LENGTH {
        let mut cut = MAX_LENGTH;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}

/// Globus API error document.
#[derive(Debug, serde::Deserialize)]
struct GlobusErrorDocument {
    #[serde(default, alias = "error")]
    code: Option<String>,
    #[serde(default, alias = "error_description")]
    message: Option<String>,
}
