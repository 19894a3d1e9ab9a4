//! HTTP request body builder.
//!
//! Turns the domain `RequestBody` into something reqwest can send. File
//! fields of multipart bodies are read from disk here.

use std::io::ErrorKind;
use std::path::Path;

use petprobe_application::HttpClientError;
use petprobe_domain::request::{MultipartField, RequestBody};
use reqwest::multipart::{Form, Part};

/// Error type for body building operations.
#[derive(Debug, thiserror::Error)]
pub enum BodyBuildError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was looked up.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {message}")]
    FileReadError {
        /// Path and underlying I/O error.
        message: String,
    },

    /// JSON content is not well-formed.
    #[error("invalid JSON: {message}")]
    InvalidJson {
        /// Parser message.
        message: String,
    },

    /// MIME type could not be applied to a part.
    #[error("invalid MIME type: {message}")]
    InvalidMime {
        /// Underlying message.
        message: String,
    },

    /// Serialization error.
    #[error("serialization error: {message}")]
    SerializationError {
        /// Underlying message.
        message: String,
    },
}

impl From<BodyBuildError> for HttpClientError {
    fn from(error: BodyBuildError) -> Self {
        match error {
            BodyBuildError::SerializationError { message } => Self::Serialization(message),
            other => Self::InvalidBody(other.to_string()),
        }
    }
}

/// Result of building a body.
pub enum BuiltBody {
    /// No body.
    None,
    /// Text body with content type.
    Text {
        /// Encoded content.
        content: String,
        /// `Content-Type` to send.
        content_type: String,
    },
    /// Multipart form data.
    Multipart(Form),
}

/// Build an HTTP body from a domain request body.
///
/// # Errors
///
/// Returns an error if JSON content is malformed, form pairs cannot be
/// encoded, or a file field cannot be read.
pub async fn build_body(body: &RequestBody) -> Result<BuiltBody, BodyBuildError> {
    match body {
        RequestBody::None => Ok(BuiltBody::None),

        RequestBody::Json(content) => {
            let _: serde_json::Value =
                serde_json::from_str(content).map_err(|e| BodyBuildError::InvalidJson {
                    message: e.to_string(),
                })?;
            Ok(BuiltBody::Text {
                content: content.clone(),
                content_type: mime::APPLICATION_JSON.to_string(),
            })
        }

        RequestBody::FormUrlEncoded(pairs) => {
            let encoded = serde_urlencoded::to_string(pairs).map_err(|e| {
                BodyBuildError::SerializationError {
                    message: e.to_string(),
                }
            })?;
            Ok(BuiltBody::Text {
                content: encoded,
                content_type: mime::APPLICATION_WWW_FORM_URLENCODED.to_string(),
            })
        }

        RequestBody::Multipart(fields) => {
            let form = build_multipart_form(fields).await?;
            Ok(BuiltBody::Multipart(form))
        }
    }
}

/// Build a multipart form from form data fields.
async fn build_multipart_form(fields: &[MultipartField]) -> Result<Form, BodyBuildError> {
    let mut form = Form::new();

    for field in fields {
        match field {
            MultipartField::Text { name, value } => {
                form = form.text(name.clone(), value.clone());
            }
            MultipartField::File { name, path } => {
                form = form.part(name.clone(), file_part(path).await?);
            }
        }
    }

    Ok(form)
}

async fn file_part(path: &Path) -> Result<Part, BodyBuildError> {
    let content = tokio::fs::read(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => BodyBuildError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => BodyBuildError::FileReadError {
            message: format!("{}: {e}", path.display()),
        },
    })?;

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("file")
        .to_string();

    let mime_type = mime_guess::from_path(path).first_or_octet_stream();

    Part::bytes(content)
        .file_name(filename)
        .mime_str(mime_type.as_ref())
        .map_err(|e| BodyBuildError::InvalidMime {
            message: e.to_string(),
        })
}

impl BuiltBody {
    /// Get the Content-Type header value.
    ///
    /// Multipart bodies return `None`; reqwest sets the header with the boundary.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        match self {
            Self::Text { content_type, .. } => Some(content_type),
            Self::None | Self::Multipart(_) => None,
        }
    }

    /// Check if this is a multipart form.
    #[must_use]
    pub const fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart(_))
    }

    /// Check if this body is empty/none.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
