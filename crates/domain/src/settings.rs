//! Pet Store connection settings
//!
//! Values are resolved once per run and passed explicitly to the service.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};

/// Connection settings for the Pet Store API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetstoreSettings {
    /// API root, e.g. `https://petstore.swagger.io/v2`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the pet resource relative to `base_url`.
    #[serde(default = "default_pet_endpoint")]
    pub pet_endpoint: String,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// `User-Agent` sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://petstore.swagger.io/v2";

/// Default pet resource path.
pub const DEFAULT_PET_ENDPOINT: &str = "/pet";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_pet_endpoint() -> String {
    DEFAULT_PET_ENDPOINT.to_string()
}

const fn default_timeout_ms() -> u64 {
    30_000
}

fn default_user_agent() -> String {
    concat!("petprobe/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for PetstoreSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            pet_endpoint: default_pet_endpoint(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl PetstoreSettings {
    /// Settings pointing at `base_url`, all else default.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Builds `{base_url}{pet_endpoint}/{segments...}`.
    ///
    /// Segments are percent-encoded individually.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUrl` if `base_url` does not parse or cannot carry a path.
    pub fn endpoint_url(&self, segments: &[&str]) -> DomainResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| DomainError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| DomainError::InvalidUrl(self.base_url.clone()))?;
            path.pop_if_empty();
            path.extend(self.pet_endpoint.split('/').filter(|s| !s.is_empty()));
            path.extend(segments);
        }
        Ok(url)
    }
}
