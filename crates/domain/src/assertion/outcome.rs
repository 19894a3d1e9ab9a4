//! Named outcome expectations over a response status.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::response::StatusCode;

/// A named expectation about how the remote service answered a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The call succeeded (200).
    Success,
    /// The request was rejected as malformed (400).
    BadRequest,
    /// The addressed record does not exist (404).
    NotFound,
    /// The operation was refused for this input (405).
    NotAllowed,
}

impl Outcome {
    /// Every recognised outcome.
    pub const ALL: [Self; 4] = [
        Self::Success,
        Self::BadRequest,
        Self::NotFound,
        Self::NotAllowed,
    ];

    /// Status code this outcome stands for.
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::NotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::BadRequest => "bad request",
            Self::NotFound => "not found",
            Self::NotAllowed => "not allowed",
        }
    }

    /// Returns true if `status` satisfies this outcome.
    #[must_use]
    pub const fn matches(self, status: StatusCode) -> bool {
        self.status().as_u16() == status.as_u16()
    }

    /// Maps a status back to its named outcome, if it has one.
    #[must_use]
    pub const fn classify(status: StatusCode) -> Option<Self> {
        match status.as_u16() {
            200 => Some(Self::Success),
            400 => Some(Self::BadRequest),
            404 => Some(Self::NotFound),
            405 => Some(Self::NotAllowed),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.status().as_u16())
    }
}
