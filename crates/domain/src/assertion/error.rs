//! Assertion failures

use thiserror::Error;

use crate::response::StatusCode;

/// Why a response assertion failed.
///
/// Each variant names one stage of the chain, so a failure says whether the
/// call produced nothing, produced the wrong status, or lacked a payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssertionError {
    /// No response was produced (transport failure or timeout).
    #[error("expected a response but none was received{}", describe(.description))]
    MissingResponse {
        /// Scenario description, if one was attached.
        description: Option<String>,
    },

    /// The response carried a different status than expected.
    #[error(
        "expected status {} but was {}{}",
        status(.expected),
        status(.actual),
        describe(.description)
    )]
    UnexpectedStatus {
        /// Expected status code.
        expected: u16,
        /// Status code received.
        actual: u16,
        /// Scenario description, if one was attached.
        description: Option<String>,
    },

    /// A body was required but the response had none, or it did not decode.
    #[error(
        "expected a response body but {}{}",
        absent_body(.decode_error),
        describe(.description)
    )]
    EmptyBody {
        /// Decoder message when a body was received but could not be read.
        decode_error: Option<String>,
        /// Scenario description, if one was attached.
        description: Option<String>,
    },
}

impl AssertionError {
    /// Attaches a description, keeping an existing one.
    #[must_use]
    pub fn with_description(mut self, text: Option<String>) -> Self {
        let slot = match &mut self {
            Self::MissingResponse { description }
            | Self::UnexpectedStatus { description, .. }
            | Self::EmptyBody { description, .. } => description,
        };
        if slot.is_none() {
            *slot = text;
        }
        self
    }

    /// Returns the attached description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::MissingResponse { description }
            | Self::UnexpectedStatus { description, .. }
            | Self::EmptyBody { description, .. } => description.as_deref(),
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn status(code: &u16) -> StatusCode {
    StatusCode::new(*code)
}

#[allow(clippy::ref_option)]
fn absent_body(decode_error: &Option<String>) -> String {
    decode_error.as_deref().map_or_else(
        || "it was absent".to_string(),
        |reason| format!("it did not decode: {reason}"),
    )
}

#[allow(clippy::ref_option)]
fn describe(description: &Option<String>) -> String {
    description
        .as_deref()
        .map(|d| format!(" [{d}]"))
        .unwrap_or_default()
}

/// Result type alias for assertions.
pub type AssertionResult<T> = Result<T, AssertionError>;
