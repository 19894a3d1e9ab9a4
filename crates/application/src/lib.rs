//! Petprobe Application - Pet Store service and scenario suite
//!
//! This crate defines the application layer with:
//! - The `HttpClient` port
//! - The typed `PetService`
//! - Test-data fixtures
//! - The ordered scenario suite and its runner

pub mod error;
pub mod fixtures;
pub mod pet_service;
pub mod ports;
pub mod scenarios;

pub use error::{ApplicationError, ApplicationResult};
pub use pet_service::{PetService, ServiceResponse};
pub use ports::{HttpClient, HttpClientError, HttpFuture};
pub use scenarios::{PetScenario, ScenarioContext, ScenarioError, SuiteReport, SuiteRunner};
