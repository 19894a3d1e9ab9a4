//! HTTP Response domain types

mod spec;
mod status;

pub use spec::{RawResponse, ResponseHeaders, StructuredResponse};
pub use status::StatusCode;
