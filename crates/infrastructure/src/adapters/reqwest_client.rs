//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! Every exchange is logged: the request with method, URI, headers and body,
//! the response with status, headers and body.

use std::time::{Duration, Instant};

use petprobe_application::ports::{HttpClient, HttpClientError, HttpFuture};
use petprobe_domain::request::{HttpMethod, MultipartField, RequestBody, RequestSpec};
use petprobe_domain::response::{RawResponse, ResponseHeaders};
use petprobe_domain::settings::PetstoreSettings;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use tracing::info;

use crate::http::{BuiltBody, build_body};

const MAX_REDIRECTS: usize = 10;

/// HTTP client implementation using reqwest.
///
/// Wraps a `reqwest::Client`, whose connection pool is shared by every call.
pub struct ReqwestHttpClient {
    client: Client,
    default_timeout_ms: u64,
}

impl ReqwestHttpClient {
    /// Creates a client configured from `settings`.
    ///
    /// - Timeout: `settings.timeout_ms` unless a request sets its own
    /// - Follow redirects: up to 10
    /// - User-Agent: `settings.user_agent`
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(settings: &PetstoreSettings) -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self::with_client(client, settings.timeout_ms))
    }

    /// Creates a new HTTP client with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, default_timeout_ms: u64) -> Self {
        Self {
            client,
            default_timeout_ms,
        }
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Maps reqwest errors to `HttpClientError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout { timeout_ms };
        }

        if error.is_connect() {
            let message = error.to_string();
            let host = error
                .url()
                .and_then(|u| u.host_str())
                .unwrap_or("unknown")
                .to_string();
            let lower = message.to_lowercase();
            if lower.contains("dns") || lower.contains("resolve") {
                return HttpClientError::DnsError { host, message };
            }
            if lower.contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host,
                    port: error
                        .url()
                        .and_then(url::Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::TooManyRedirects { max: MAX_REDIRECTS };
        }

        if error.is_request() || error.is_body() {
            return HttpClientError::ConnectionFailed(error.to_string());
        }

        HttpClientError::Other(error.to_string())
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute(&self, request: &RequestSpec) -> HttpFuture<'_> {
        // Clone what we need to move into the async block
        let method = request.method;
        let url = request.full_url();
        let headers: Vec<_> = request.headers.iter().cloned().collect();
        let body = request.body.clone();
        let timeout_ms = request.timeout_ms.unwrap_or(self.default_timeout_ms);

        Box::pin(async move {
            info!(
                %method,
                uri = %url,
                headers = ?headers.iter().map(|h| (h.name.as_str(), h.value.as_str())).collect::<Vec<_>>(),
                body = %describe_body(&body),
                "request"
            );

            let built = build_body(&body).await?;

            let start = Instant::now();

            let mut builder = self
                .client
                .request(Self::to_reqwest_method(method), url)
                .timeout(Duration::from_millis(timeout_ms));

            for header in &headers {
                builder = builder.header(&header.name, &header.value);
            }

            // Add Content-Type if body has one and not already set
            if let Some(content_type) = built.content_type() {
                let has_content_type = headers
                    .iter()
                    .any(|h| h.name.eq_ignore_ascii_case(CONTENT_TYPE.as_str()));
                if !has_content_type {
                    builder = builder.header(CONTENT_TYPE, content_type);
                }
            }

            builder = match built {
                BuiltBody::None => builder,
                BuiltBody::Text { content, .. } => builder.body(content),
                BuiltBody::Multipart(form) => builder.multipart(form),
            };

            let response = builder
                .send()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?;

            let status = response.status().as_u16();

            let mut response_headers = ResponseHeaders::new();
            for (name, value) in response.headers() {
                response_headers.append(name.as_str(), value.to_str().unwrap_or("<binary>"));
            }

            let body_bytes = response.bytes().await.map_err(|e| {
                if e.is_timeout() {
                    HttpClientError::Timeout { timeout_ms }
                } else {
                    HttpClientError::BodyRead(e.to_string())
                }
            })?;

            let raw = RawResponse::new(
                status,
                response_headers,
                body_bytes.to_vec(),
                start.elapsed(),
            );

            info!(
                status = %raw.status,
                headers = ?raw.headers.iter().collect::<Vec<_>>(),
                body = %raw.body_text(),
                duration_ms = raw.duration.as_millis(),
                "response"
            );

            Ok(raw)
        })
    }
}

/// Renders a request body for the log.
fn describe_body(body: &RequestBody) -> String {
    match body {
        RequestBody::None => String::new(),
        RequestBody::Json(content) => content.clone(),
        RequestBody::FormUrlEncoded(pairs) => pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&"),
        RequestBody::Multipart(fields) => fields
            .iter()
            .map(|field| match field {
                MultipartField::Text { name, value } => format!("{name}={value}"),
                MultipartField::File { name, path } => format!("{name}=@{}", path.display()),
            })
            .collect::<Vec<_>>()
            .join("; "),
    }
}
