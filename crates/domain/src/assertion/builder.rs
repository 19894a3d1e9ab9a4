//! Fluent wrapper over the assertion chain.

use super::chain::{assert_has_body, assert_present, assert_status, extract_body};
use super::{AssertionError, AssertionResult, Outcome};
use crate::response::{StatusCode, StructuredResponse};

/// Fluent assertions over an optional [`StructuredResponse`].
///
/// Every predicate consumes the wrapper and returns it on success, so a
/// scenario reads as one pipeline:
///
/// ```
/// use petprobe_domain::assertion::ResponseAssertion;
/// use petprobe_domain::response::StructuredResponse;
///
/// # fn main() -> Result<(), petprobe_domain::assertion::AssertionError> {
/// let response = Some(StructuredResponse::new(200_u16, Some(42_i64)));
/// let id = ResponseAssertion::assert_that(response)
///     .described_as("Returns a single pet by ID")
///     .is_success()?
///     .into_body()?;
/// assert_eq!(id, 42);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ResponseAssertion<T> {
    response: Option<StructuredResponse<T>>,
    description: Option<String>,
}

impl<T> ResponseAssertion<T> {
    /// Starts a chain over `response`.
    #[must_use]
    pub const fn assert_that(response: Option<StructuredResponse<T>>) -> Self {
        Self {
            response,
            description: None,
        }
    }

    /// Attaches a description that is reported with any failure.
    #[must_use]
    pub fn described_as(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Fails if no response was produced.
    ///
    /// # Errors
    ///
    /// Returns `MissingResponse`.
    pub fn is_present(self) -> AssertionResult<Self> {
        self.check(Ok)
    }

    /// Fails unless the status equals `expected`.
    ///
    /// # Errors
    ///
    /// Returns `MissingResponse` or `UnexpectedStatus`.
    pub fn has_status(self, expected: impl Into<StatusCode>) -> AssertionResult<Self> {
        let expected = expected.into();
        self.check(|response| assert_status(response, expected))
    }

    /// Fails unless the status matches `outcome`.
    ///
    /// # Errors
    ///
    /// Returns `MissingResponse` or `UnexpectedStatus`.
    pub fn has_outcome(self, outcome: Outcome) -> AssertionResult<Self> {
        self.has_status(outcome.status())
    }

    /// Expects 200.
    ///
    /// # Errors
    ///
    /// Returns `MissingResponse` or `UnexpectedStatus`.
    pub fn is_success(self) -> AssertionResult<Self> {
        self.has_outcome(Outcome::Success)
    }

    /// Expects 400.
    ///
    /// # Errors
    ///
    /// Returns `MissingResponse` or `UnexpectedStatus`.
    pub fn is_bad_request(self) -> AssertionResult<Self> {
        self.has_outcome(Outcome::BadRequest)
    }

    /// Expects 404.
    ///
    /// # Errors
    ///
    /// Returns `MissingResponse` or `UnexpectedStatus`.
    pub fn is_not_found(self) -> AssertionResult<Self> {
        self.has_outcome(Outcome::NotFound)
    }

    /// Expects 405.
    ///
    /// # Errors
    ///
    /// Returns `MissingResponse` or `UnexpectedStatus`.
    pub fn is_not_allowed(self) -> AssertionResult<Self> {
        self.has_outcome(Outcome::NotAllowed)
    }

    /// Fails if the body is absent.
    ///
    /// # Errors
    ///
    /// Returns `MissingResponse` or `EmptyBody`.
    pub fn has_body(self) -> AssertionResult<Self> {
        self.check(assert_has_body)
    }

    /// Returns the body as is. Call [`Self::has_body`] first to fail on absence.
    #[must_use]
    pub fn body(self) -> Option<T> {
        self.response.and_then(extract_body)
    }

    /// Asserts the body is present and returns it.
    ///
    /// # Errors
    ///
    /// Returns `MissingResponse` or `EmptyBody`.
    pub fn into_body(self) -> AssertionResult<T> {
        self.has_body()?
            .body()
            .ok_or(AssertionError::EmptyBody {
                decode_error: None,
                description: None,
            })
    }

    /// Returns the wrapped response.
    #[must_use]
    pub fn into_response(self) -> Option<StructuredResponse<T>> {
        self.response
    }

    /// Borrows the wrapped response.
    #[must_use]
    pub const fn response(&self) -> Option<&StructuredResponse<T>> {
        self.response.as_ref()
    }

    fn check<F>(self, check: F) -> AssertionResult<Self>
    where
        F: FnOnce(StructuredResponse<T>) -> AssertionResult<StructuredResponse<T>>,
    {
        let Self {
            response,
            description,
        } = self;
        match assert_present(response).and_then(check) {
            Ok(response) => Ok(Self {
                response: Some(response),
                description,
            }),
            Err(err) => Err(err.with_description(description)),
        }
    }
}
