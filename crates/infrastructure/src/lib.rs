//! Petprobe Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, and the settings loader.

pub mod adapters;
pub mod http;
pub mod settings_loader;

pub use adapters::ReqwestHttpClient;
pub use http::{BodyBuildError, BuiltBody, build_body};
pub use settings_loader::{ConfigError, SettingsLoader, load_settings};
