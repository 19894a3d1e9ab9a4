//! Scenario failure taxonomy

use std::fmt::Debug;

use petprobe_domain::AssertionError;
use thiserror::Error;

use crate::ApplicationError;

/// Why a scenario failed.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// A response assertion failed.
    #[error(transparent)]
    Assertion(#[from] AssertionError),

    /// The request could not be built or sent.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// The payload differed from what the scenario expected.
    #[error("{check}: expected {expected} but was {actual}")]
    Mismatch {
        /// What was compared.
        check: String,
        /// Expected value, debug-formatted.
        expected: String,
        /// Actual value, debug-formatted.
        actual: String,
    },
}

impl ScenarioError {
    /// Builds a [`ScenarioError::Mismatch`] from two values.
    pub fn mismatch(check: impl Into<String>, expected: &impl Debug, actual: &impl Debug) -> Self {
        Self::Mismatch {
            check: check.into(),
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        }
    }
}

/// Fails with a mismatch unless `expected == actual`.
///
/// # Errors
///
/// Returns [`ScenarioError::Mismatch`].
pub fn expect_eq<T: PartialEq + Debug>(
    check: impl Into<String>,
    expected: &T,
    actual: &T,
) -> Result<(), ScenarioError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ScenarioError::mismatch(check, expected, actual))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_names_both_sides() {
        let err = expect_eq("pet count", &1, &0).unwrap_err();
        assert_eq!(err.to_string(), "pet count: expected 1 but was 0");
    }

    #[test]
    fn test_assertion_message_passes_through() {
        let err = ScenarioError::from(AssertionError::UnexpectedStatus {
            expected: 200,
            actual: 404,
            description: None,
        });
        assert_eq!(err.to_string(), "expected status 200 OK but was 404 Not Found");
    }
}
