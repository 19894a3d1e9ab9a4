//! Response types
//!
//! A [`RawResponse`] is what the transport hands back: status, headers and
//! undecoded bytes. Decoding its body yields a [`StructuredResponse`], the
//! value the assertion layer works on.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::de::DeserializeOwned;

use super::StatusCode;

/// Response headers, keyed by lowercase name, keeping every value in the
/// order it was received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHeaders {
    entries: BTreeMap<String, Vec<String>>,
}

impl ResponseHeaders {
    /// Creates an empty header map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Appends a value for `name`.
    pub fn append(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.entries
            .entry(name.as_ref().to_ascii_lowercase())
            .or_default()
            .push(value.into());
    }

    /// Returns the first value for `name` (case-insensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).first().map(String::as_str)
    }

    /// Returns all values for `name` (case-insensitive).
    #[must_use]
    pub fn get_all(&self, name: &str) -> &[String] {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterates over `(name, values)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Returns the number of distinct header names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no headers were received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ResponseHeaders
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.append(name, value);
        }
        headers
    }
}

/// Undecoded HTTP response as returned by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: ResponseHeaders,
    /// Raw response body.
    pub body: Vec<u8>,
    /// Round-trip time.
    pub duration: Duration,
}

impl RawResponse {
    /// Creates a new `RawResponse`.
    #[must_use]
    pub fn new(
        status: impl Into<StatusCode>,
        headers: ResponseHeaders,
        body: Vec<u8>,
        duration: Duration,
    ) -> Self {
        Self {
            status: status.into(),
            headers,
            body,
            duration,
        }
    }

    /// Returns the body as a lossy UTF-8 string.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decodes the body as JSON.
    ///
    /// Returns `None` when the body is empty or whitespace only.
    #[must_use]
    pub fn json_body<T: DeserializeOwned>(&self) -> Option<Result<T, serde_json::Error>> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return None;
        }
        Some(serde_json::from_slice(&self.body))
    }

    /// Turns this raw response into a structured one carrying `body`.
    #[must_use]
    pub fn into_structured<T>(self, body: Option<T>) -> StructuredResponse<T> {
        StructuredResponse {
            status: self.status,
            headers: self.headers,
            body,
            decode_error: None,
            duration: self.duration,
        }
    }

    /// Decodes the JSON body into `T`.
    ///
    /// An empty body yields no body. A body that does not decode also yields
    /// no body, with the decoder message kept in `decode_error`.
    #[must_use]
    pub fn decode<T: DeserializeOwned>(self) -> StructuredResponse<T> {
        match self.json_body::<T>() {
            Some(Ok(body)) => self.into_structured(Some(body)),
            Some(Err(err)) => self.into_structured(None).with_decode_error(err.to_string()),
            None => self.into_structured(None),
        }
    }
}

/// In-memory representation of an HTTP response with a typed body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredResponse<T> {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: ResponseHeaders,
    /// Decoded body, absent when the response had none or it did not decode.
    pub body: Option<T>,
    /// Why a received body could not be decoded.
    pub decode_error: Option<String>,
    /// Round-trip time.
    pub duration: Duration,
}

impl<T> StructuredResponse<T> {
    /// Creates a response with the given status and body and no headers.
    #[must_use]
    pub fn new(status: impl Into<StatusCode>, body: Option<T>) -> Self {
        Self {
            status: status.into(),
            headers: ResponseHeaders::new(),
            body,
            decode_error: None,
            duration: Duration::ZERO,
        }
    }

    /// Replaces the headers (builder pattern).
    #[must_use]
    pub fn with_headers(mut self, headers: ResponseHeaders) -> Self {
        self.headers = headers;
        self
    }

    /// Records why the received body could not be decoded (builder pattern).
    #[must_use]
    pub fn with_decode_error(mut self, message: impl Into<String>) -> Self {
        self.decode_error = Some(message.into());
        self
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Returns a human-readable duration string (e.g., "124 ms").
    #[must_use]
    pub fn duration_display(&self) -> String {
        let millis = self.duration.as_millis();
        if millis < 1000 {
            format!("{millis} ms")
        } else {
            format!("{:.2} s", self.duration.as_secs_f64())
        }
    }
}
