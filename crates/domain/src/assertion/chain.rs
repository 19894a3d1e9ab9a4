//! Free-function form of the assertion chain.
//!
//! Every check takes the response by value and hands it back on success, so
//! checks compose with `?` or `Result::and_then`:
//!
//! ```
//! use petprobe_domain::assertion::{assert_has_body, assert_status, extract_body};
//! use petprobe_domain::response::StructuredResponse;
//!
//! let response = StructuredResponse::new(200_u16, Some("Dundee"));
//! let body = assert_status(response, 200_u16)
//!     .and_then(assert_has_body)
//!     .map(extract_body);
//! assert_eq!(body, Ok(Some("Dundee")));
//! ```

use super::{AssertionError, AssertionResult, Outcome};
use crate::response::{StatusCode, StructuredResponse};

/// Fails with [`AssertionError::MissingResponse`] if no response was produced.
///
/// # Errors
///
/// Returns `MissingResponse` when `response` is `None`.
pub fn assert_present<T>(
    response: Option<StructuredResponse<T>>,
) -> AssertionResult<StructuredResponse<T>> {
    response.ok_or(AssertionError::MissingResponse { description: None })
}

/// Fails with [`AssertionError::UnexpectedStatus`] unless the status equals `expected`.
///
/// # Errors
///
/// Returns `UnexpectedStatus` carrying both codes on mismatch.
pub fn assert_status<T>(
    response: StructuredResponse<T>,
    expected: impl Into<StatusCode>,
) -> AssertionResult<StructuredResponse<T>> {
    let expected = expected.into();
    if response.status == expected {
        Ok(response)
    } else {
        Err(AssertionError::UnexpectedStatus {
            expected: expected.as_u16(),
            actual: response.status.as_u16(),
            description: None,
        })
    }
}

/// Checks presence, then that the status matches `outcome`.
///
/// # Errors
///
/// Returns `MissingResponse` or `UnexpectedStatus`.
pub fn assert_outcome<T>(
    response: Option<StructuredResponse<T>>,
    outcome: Outcome,
) -> AssertionResult<StructuredResponse<T>> {
    assert_status(assert_present(response)?, outcome.status())
}

/// Expects a 200 response.
///
/// # Errors
///
/// Returns `MissingResponse` or `UnexpectedStatus`.
pub fn assert_success<T>(
    response: Option<StructuredResponse<T>>,
) -> AssertionResult<StructuredResponse<T>> {
    assert_outcome(response, Outcome::Success)
}

/// Expects a 400 response.
///
/// # Errors
///
/// Returns `MissingResponse` or `UnexpectedStatus`.
pub fn assert_bad_request<T>(
    response: Option<StructuredResponse<T>>,
) -> AssertionResult<StructuredResponse<T>> {
    assert_outcome(response, Outcome::BadRequest)
}

/// Expects a 404 response.
///
/// # Errors
///
/// Returns `MissingResponse` or `UnexpectedStatus`.
pub fn assert_not_found<T>(
    response: Option<StructuredResponse<T>>,
) -> AssertionResult<StructuredResponse<T>> {
    assert_outcome(response, Outcome::NotFound)
}

/// Expects a 405 response.
///
/// # Errors
///
/// Returns `MissingResponse` or `UnexpectedStatus`.
pub fn assert_not_allowed<T>(
    response: Option<StructuredResponse<T>>,
) -> AssertionResult<StructuredResponse<T>> {
    assert_outcome(response, Outcome::NotAllowed)
}

/// Fails with [`AssertionError::EmptyBody`] if the body is absent.
///
/// # Errors
///
/// Returns `EmptyBody` when `response.body` is `None`, carrying the decoder
/// message if a body was received but did not decode.
pub fn assert_has_body<T>(
    response: StructuredResponse<T>,
) -> AssertionResult<StructuredResponse<T>> {
    if response.body.is_some() {
        Ok(response)
    } else {
        Err(AssertionError::EmptyBody {
            decode_error: response.decode_error,
            description: None,
        })
    }
}

/// Returns the body unchanged.
#[must_use]
pub fn extract_body<T>(response: StructuredResponse<T>) -> Option<T> {
    response.body
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn response(status: u16, body: Option<&'static str>) -> StructuredResponse<&'static str> {
        StructuredResponse::new(status, body)
    }

    #[test]
    fn test_success_chain_returns_body_unchanged() {
        let original = response(200, Some("pet"));
        let expected = original.body;

        let body = assert_status(original, 200_u16)
            .and_then(assert_has_body)
            .map(extract_body);

        assert_eq!(body, Ok(expected));
    }

    #[test]
    fn test_status_mismatch_reports_both_codes() {
        for actual in [201, 204, 400, 404, 405, 500] {
            let result = assert_status(response(actual, Some("x")), 200_u16);
            assert_eq!(
                result,
                Err(AssertionError::UnexpectedStatus {
                    expected: 200,
                    actual,
                    description: None,
                })
            );
        }
    }

    #[test]
    fn test_absent_response_is_missing() {
        let result = assert_present::<String>(None);
        assert_eq!(
            result,
            Err(AssertionError::MissingResponse { description: None })
        );
    }

    #[test]
    fn test_named_wrappers_check_presence_first() {
        let missing = AssertionError::MissingResponse { description: None };
        assert_eq!(assert_success::<()>(None), Err(missing.clone()));
        assert_eq!(assert_bad_request::<()>(None), Err(missing.clone()));
        assert_eq!(assert_not_found::<()>(None), Err(missing.clone()));
        assert_eq!(assert_not_allowed::<()>(None), Err(missing));
    }

    #[test]
    fn test_named_wrappers_match_their_codes() {
        assert!(assert_success(Some(response(200, None))).is_ok());
        assert!(assert_bad_request(Some(response(400, None))).is_ok());
        assert!(assert_not_found(Some(response(404, None))).is_ok());
        assert!(assert_not_allowed(Some(response(405, None))).is_ok());

        assert_eq!(
            assert_not_allowed(Some(response(200, None))),
            Err(AssertionError::UnexpectedStatus {
                expected: 405,
                actual: 200,
                description: None,
            })
        );
    }

    #[test]
    fn test_missing_body() {
        assert_eq!(
            assert_has_body(response(200, None)),
            Err(AssertionError::EmptyBody {
                decode_error: None,
                description: None,
            })
        );
    }

    #[test]
    fn test_undecodable_body_is_reported_as_such() {
        let malformed = response(200, None).with_decode_error("key must be a string");
        assert_eq!(
            assert_has_body(malformed),
            Err(AssertionError::EmptyBody {
                decode_error: Some("key must be a string".to_string()),
                description: None,
            })
        );
    }
}
