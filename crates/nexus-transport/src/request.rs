//! HTTP request building.

use std::collections::HashMap;
use serde::Serialize;

use crate::error::Result;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }

    /// The method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
            RequestMethod::Delete => "DELETE",
        }
    }
}

/// Builder for HTTP requests.
///
/// The authorization value is kept apart from the other headers so that it
/// never shows up in Debug output.
pub struct RequestBuilder {
    pub(crate) method: RequestMethod,
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) query_params: Vec<(String, String)>,
    pub(crate) body: Option<RequestBody>,
    pub(crate) authorization: Option<String>,
}

impl std::fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &self.headers)
            .field("query_params", &self.query_params)
            .field("body", &self.body)
            .field("authorization", &self.authorization.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Request body content.
#[derive(Debug)]
pub enum RequestBody {
    Json(serde_json::Value),
    Form(Vec<(String, String)>),
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: RequestMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            query_params: Vec::new(),
            body: None,
            authorization: None,
        }
    }

    /// Set the `Authorization` header value, sent verbatim.
    pub fn authorization(mut self, value: impl Into<String>) -> Self {
        self.authorization = Some(value.into());
        self
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((name.into(), value.into()));
        self
    }

    /// Add several query parameters, in order.
    pub fn query_pairs<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query_params
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Set JSON body.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body)?;
        self.body = Some(RequestBody::Json(value));
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        Ok(self)
    }

    /// Set raw JSON body.
    pub fn json_value(mut self, body: serde_json::Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self
    }

    /// Set form body.
    pub fn form<I, K, V>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let pairs = data.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self.body = Some(RequestBody::Form(pairs));
        self.headers.insert(
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        );
        self
    }

    /// The request method.
    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// The request URL, without query parameters added through [`Self::query`].
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Look up a header set on this builder.
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Query parameters, in insertion order.
    pub fn query_params(&self) -> &[(String, String)] {
        &self.query_params
    }

    /// The request body, if any.
    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    /// The full URL with query parameters appended.
    pub(crate) fn full_url(&self) -> Result<url::Url> {
        let mut url = url::Url::parse(&self.url)?;
        if !self.query_params.is_empty() {
            url.query_pairs_mut().extend_pairs(
                self.query_params.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            );
        }
        Ok(url)
    }
}

impl RequestBody {
    /// Encode the body for the wire.
    pub(crate) fn encode(&self) -> Result<Vec<u8>> {
        match self {
            RequestBody::Json(value) => Ok(serde_json::to_vec(value)?),
            RequestBody::Form(pairs) => Ok(url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
                .finish()
                .into_bytes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let req = RequestBuilder::new(RequestMethod::Get, "https://example.com/groups")
            .authorization("Globus-Goauthtoken abc")
            .header("X-Custom", "value")
            .query("fields", "id,name");

        assert_eq!(req.method(), RequestMethod::Get);
        assert_eq!(req.url(), "https://example.com/groups");
        assert_eq!(req.authorization, Some("Globus-Goauthtoken abc".to_string()));
        assert_eq!(req.get_header("x-custom"), Some("value"));
        assert_eq!(req.query_params().len(), 1);
    }

    #[test]
    fn test_method_names() {
        let methods = [
            (RequestMethod::Get, reqwest::Method::GET),
            (RequestMethod::Post, reqwest::Method::POST),
            (RequestMethod::Put, reqwest::Method::PUT),
            (RequestMethod::Delete, reqwest::Method::DELETE),
        ];
        for (method, expected) in methods {
            assert_eq!(method.to_reqwest(), expected);
            assert_eq!(method.as_str(), expected.as_str());
        }
    }

    #[test]
    fn test_debug_redacts_authorization() {
        let req = RequestBuilder::new(RequestMethod::Get, "https://example.com")
            .authorization("Globus-Goauthtoken super_secret_token");
        let debug_output = format!("{:?}", req);
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_token"));
    }

    #[test]
    fn test_full_url_keeps_existing_query() {
        let req = RequestBuilder::new(
            RequestMethod::Get,
            "https://example.com/goauth/token?grant_type=client_credentials",
        )
        .query("extra", "a b");

        let url = req.full_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/goauth/token?grant_type=client_credentials&extra=a+b"
        );
    }

    #[test]
    fn test_full_url_without_query() {
        let req = RequestBuilder::new(RequestMethod::Get, "https://example.com/groups/g1");
        assert_eq!(req.full_url().unwrap().as_str(), "https://example.com/groups/g1");
    }

    #[test]
    fn test_json_body() {
        let data = serde_json::json!({"name": "Test Group"});
        let req = RequestBuilder::new(RequestMethod::Post, "https://example.com")
            .json(&data)
            .unwrap();

        assert!(matches!(req.body(), Some(RequestBody::Json(_))));
        assert_eq!(req.get_header("Content-Type"), Some("application/json"));
        assert_eq!(
            req.body().unwrap().encode().unwrap(),
            br#"{"name":"Test Group"}"#.to_vec()
        );
    }

    #[test]
    fn test_form_body() {
        let req = RequestBuilder::new(RequestMethod::Post, "https://example.com")
            .form([("grant_type", "client_credentials"), ("scope", "a b")]);

        assert_eq!(
            req.get_header("content-type"),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(
            req.body().unwrap().encode().unwrap(),
            b"grant_type=client_credentials&scope=a+b".to_vec()
        );
    }
}
