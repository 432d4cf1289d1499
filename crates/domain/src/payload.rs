//! Client payload decoding.

use serde::de::DeserializeOwned;

use crate::error::ValidationError;

/// Decode a JSON request body into a payload type.
///
/// A literal `null` body decodes to `T::default()`.
///
/// # Errors
///
/// Returns [`ValidationError::MalformedPayload`] when the bytes are not valid
/// JSON or do not fit the shape of `T`.
pub fn decode<T: DeserializeOwned + Default>(bytes: &[u8]) -> Result<T, ValidationError> {
    serde_json::from_slice::<Option<T>>(bytes)
        .map(Option::unwrap_or_default)
        .map_err(ValidationError::MalformedPayload)
}
