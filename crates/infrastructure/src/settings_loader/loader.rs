//! Settings loader built on the `config` crate.
//!
//! Layers, lowest precedence first: built-in defaults, an optional TOML
//! file, then `PETSTORE_*` environment variables.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat, Map};
use petprobe_domain::settings::PetstoreSettings;
use thiserror::Error;
use tracing::debug;

/// Prefix of environment overrides, e.g. `PETSTORE_BASE_URL`.
pub const ENV_PREFIX: &str = "PETSTORE";

/// Settings could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The requested settings file does not exist.
    #[error("settings file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A source could not be read or the merged result did not deserialize.
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),
}

/// Builder for a layered settings load.
#[derive(Debug, Default)]
pub struct SettingsLoader {
    file: Option<PathBuf>,
    env: Option<Map<String, String>>,
}

impl SettingsLoader {
    /// Loader with defaults and process environment only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a TOML file layer. The file must exist.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Reads overrides from `vars` instead of the process environment.
    #[must_use]
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Merges all layers into [`PetstoreSettings`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed, or if a value
    /// has the wrong type.
    pub fn load(self) -> Result<PetstoreSettings, ConfigError> {
        let defaults = PetstoreSettings::default();
        let mut builder = Config::builder()
            .set_default("base_url", defaults.base_url)?
            .set_default("pet_endpoint", defaults.pet_endpoint)?
            .set_default(
                "timeout_ms",
                i64::try_from(defaults.timeout_ms).unwrap_or(i64::MAX),
            )?
            .set_default("user_agent", defaults.user_agent)?;

        if let Some(path) = &self.file {
            if !path.is_file() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }
            debug!(path = %path.display(), "reading settings file");
            builder = builder.add_source(File::from(path.as_path()).format(FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(self.env),
        );

        let settings: PetstoreSettings = builder.build()?.try_deserialize()?;
        debug!(base_url = %settings.base_url, endpoint = %settings.pet_endpoint, "settings loaded");
        Ok(settings)
    }
}

/// Loads settings from defaults, `file` if given, and the process environment.
///
/// # Errors
///
/// See [`SettingsLoader::load`].
pub fn load_settings(file: Option<&Path>) -> Result<PetstoreSettings, ConfigError> {
    let loader = SettingsLoader::new();
    match file {
        Some(path) => loader.with_file(path).load(),
        None => loader.load(),
    }
}
