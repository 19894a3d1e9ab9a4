//! Request specification type

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use super::{Header, Headers, HttpMethod, QueryParam, QueryParams, RequestBody};

/// Complete specification for an HTTP request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// Unique identifier, used to correlate request and response logs.
    pub id: Uuid,
    /// HTTP method
    pub method: HttpMethod,
    /// Target URL, without query parameters.
    pub url: Url,
    /// Query parameters appended when the request is sent.
    #[serde(default)]
    pub query: QueryParams,
    /// HTTP headers
    #[serde(default)]
    pub headers: Headers,
    /// Request body
    #[serde(default)]
    pub body: RequestBody,
    /// Per-request timeout; the client default applies when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl RequestSpec {
    /// Creates a new request specification with no headers or body.
    #[must_use]
    pub fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            id: Uuid::now_v7(),
            method,
            url,
            query: QueryParams::new(),
            headers: Headers::new(),
            body: RequestBody::none(),
            timeout_ms: None,
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(url: Url) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// Creates a POST request.
    #[must_use]
    pub fn post(url: Url) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    /// Creates a PUT request.
    #[must_use]
    pub fn put(url: Url) -> Self {
        Self::new(HttpMethod::Put, url)
    }

    /// Creates a DELETE request.
    #[must_use]
    pub fn delete(url: Url) -> Self {
        Self::new(HttpMethod::Delete, url)
    }

    /// Adds a header (builder pattern).
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.add(Header::new(name, value));
        self
    }

    /// Adds a query parameter (builder pattern).
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.add(QueryParam::new(key, value));
        self
    }

    /// Sets the body (builder pattern).
    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Sets the timeout (builder pattern).
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Returns the URL with query parameters applied.
    #[must_use]
    pub fn full_url(&self) -> Url {
        let mut url = self.url.clone();
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for param in self.query.iter() {
                pairs.append_pair(&param.key, &param.value);
            }
        }
        url
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_new_request() {
        let req = RequestSpec::get(url("https://petstore.example/v2/pet/1"));
        assert_eq!(req.method, HttpMethod::Get);
        assert!(req.body.is_empty());
        assert_eq!(req.timeout_ms, None);
    }

    #[test]
    fn test_full_url_encodes_query() {
        let req = RequestSpec::get(url("https://petstore.example/v2/pet/findByStatus"))
            .with_query("status", "not valid");
        assert_eq!(
            req.full_url().as_str(),
            "https://petstore.example/v2/pet/findByStatus?status=not+valid"
        );
    }

    #[test]
    fn test_full_url_without_query() {
        let req = RequestSpec::delete(url("https://petstore.example/v2/pet/7"));
        assert_eq!(req.full_url().as_str(), "https://petstore.example/v2/pet/7");
    }

    #[test]
    fn test_builder_collects_headers() {
        let req = RequestSpec::post(url("https://petstore.example/v2/pet"))
            .with_header("Accept", "application/json")
            .with_timeout_ms(500);
        assert!(req.headers.contains("accept"));
        assert_eq!(req.timeout_ms, Some(500));
    }
}
