//! Response assertions and outcome classification.
//!
//! Checks run in a fixed order: presence, then status, then body. A failure
//! therefore names the stage that broke: no response at all, the wrong
//! outcome, or a missing payload.

mod builder;
mod chain;
mod error;
mod outcome;

pub use builder::ResponseAssertion;
pub use chain::{
    assert_bad_request, assert_has_body, assert_not_allowed, assert_not_found, assert_outcome,
    assert_present, assert_status, assert_success, extract_body,
};
pub use error::{AssertionError, AssertionResult};
pub use outcome::Outcome;
