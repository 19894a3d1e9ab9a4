//! HTTP Request body types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single field of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MultipartField {
    /// Plain text field.
    Text {
        /// Field name.
        name: String,
        /// Field value.
        value: String,
    },
    /// File read from disk when the request is sent.
    File {
        /// Field name.
        name: String,
        /// Path of the file to upload.
        path: PathBuf,
    },
}

impl MultipartField {
    /// Creates a text field.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates a file field.
    #[must_use]
    pub fn file(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::File {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }
}

/// HTTP request body, tagged by its wire encoding.
///
/// JSON bodies are carried already encoded so that serialization failures
/// surface before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum RequestBody {
    /// No body
    #[default]
    None,
    /// Encoded JSON document.
    Json(String),
    /// Ordered `application/x-www-form-urlencoded` pairs.
    FormUrlEncoded(Vec<(String, String)>),
    /// Multipart form data.
    Multipart(Vec<MultipartField>),
}

impl RequestBody {
    /// Creates an empty body.
    #[must_use]
    pub const fn none() -> Self {
        Self::None
    }

    /// Creates a JSON body from an encoded document.
    #[must_use]
    pub fn json(content: impl Into<String>) -> Self {
        Self::Json(content.into())
    }

    /// Creates a form body from name/value pairs, keeping their order.
    #[must_use]
    pub fn form<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::FormUrlEncoded(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Creates a multipart body.
    #[must_use]
    pub const fn multipart(fields: Vec<MultipartField>) -> Self {
        Self::Multipart(fields)
    }

    /// Returns whether the body is empty or none.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Json(content) => content.is_empty(),
            Self::FormUrlEncoded(pairs) => pairs.is_empty(),
            Self::Multipart(fields) => fields.is_empty(),
        }
    }

    /// Returns the content type if applicable.
    ///
    /// Multipart bodies return `None`: the boundary is only known once the
    /// transport builds the form.
    #[must_use]
    pub const fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::None | Self::Multipart(_) => None,
            Self::Json(_) => Some("application/json"),
            Self::FormUrlEncoded(_) => Some("application/x-www-form-urlencoded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_body() {
        let body = RequestBody::json(r#"{"key": "value"}"#);
        assert_eq!(body.content_type(), Some("application/json"));
        assert!(!body.is_empty());
    }

    #[test]
    fn test_empty_body() {
        let body = RequestBody::none();
        assert!(body.is_empty());
        assert_eq!(body.content_type(), None);
    }

    #[test]
    fn test_form_keeps_order() {
        let body = RequestBody::form([("name", "Dundee_2"), ("status", "sold")]);
        assert_eq!(
            body,
            RequestBody::FormUrlEncoded(vec![
                ("name".to_string(), "Dundee_2".to_string()),
                ("status".to_string(), "sold".to_string()),
            ])
        );
        assert_eq!(
            body.content_type(),
            Some("application/x-www-form-urlencoded")
        );
    }

    #[test]
    fn test_multipart_has_no_fixed_content_type() {
        let body = RequestBody::multipart(vec![MultipartField::file("file", "pet.png")]);
        assert_eq!(body.content_type(), None);
        assert!(!body.is_empty());
    }

    #[test]
    fn test_multipart_field_name() {
        assert_eq!(MultipartField::text("note", "hi").name(), "note");
        assert_eq!(MultipartField::file("file", "/tmp/a.png").name(), "file");
    }
}
