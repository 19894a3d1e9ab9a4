//! HTTP infrastructure utilities.
//!
//! This module provides body building for JSON, form-urlencoded and
//! multipart requests.

mod body_builder;

pub use body_builder::{BodyBuildError, BuiltBody, build_body};
