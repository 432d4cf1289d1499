//! Common error types used across the workspace.
//!
//! The taxonomy is deliberately small: a request is either rejected before it
//! reaches a store ([`ValidationError`]) or it names a record the store does not
//! hold ([`NotFoundError`]). The in-memory store performs no IO, so there is no
//! internal-failure variant.

use crate::id::RecordId;

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum TallyError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("record not found")]
    NotFound(#[from] NotFoundError),
}

/// Input rejected before any store is consulted.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The identifier is missing or is not an integer.
    #[error("invalid id {0:?}: expected a positive integer")]
    InvalidId(String),

    /// The identifier parsed, but is zero or negative.
    #[error("invalid id {0}: must be greater than zero")]
    NonPositiveId(i64),

    /// The request body could not be decoded into the expected payload.
    #[error("invalid JSON payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),
}

/// The requested identifier has no current record.
#[derive(Debug, thiserror::Error)]
#[error("{kind} {id} not found")]
pub struct NotFoundError {
    /// Human-readable record kind, e.g. `"Product"`.
    pub kind: &'static str,
    pub id: RecordId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_tally_error() {
        let err: TallyError = ValidationError::NonPositiveId(0).into();
        assert!(matches!(
            err,
            TallyError::Validation(ValidationError::NonPositiveId(0))
        ));
    }

    #[test]
    fn should_describe_missing_record() {
        let err = NotFoundError {
            kind: "Product",
            id: RecordId::FIRST,
        };
        assert_eq!(err.to_string(), "Product 1 not found");
    }

    #[test]
    fn should_quote_raw_input_when_id_is_not_numeric() {
        let err = ValidationError::InvalidId("abc".to_string());
        assert_eq!(
            err.to_string(),
            "invalid id \"abc\": expected a positive integer"
        );
    }
}
