//! Petprobe Domain - Core types
//!
//! Request and response records, outcome classification, the response
//! assertion layer and the Pet Store data model.
//! All types here are pure Rust with no I/O dependencies.

pub mod assertion;
pub mod error;
pub mod petstore;
pub mod request;
pub mod response;
pub mod settings;

pub use assertion::{AssertionError, AssertionResult, Outcome, ResponseAssertion};
pub use error::{DomainError, DomainResult};
pub use petstore::{Category, Pet, PetStatus, PetUpdateStatus, Tag};
pub use request::{HttpMethod, RequestBody, RequestSpec};
pub use response::{RawResponse, StatusCode, StructuredResponse};
pub use settings::PetstoreSettings;
