//! Store-assigned record identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Positive integer identifier assigned by a store on create.
///
/// Identifiers start at [`RecordId::FIRST`] and are never zero. Parsing from
/// text rejects non-numeric and non-positive input with a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct RecordId(u64);

impl RecordId {
    /// The identifier handed out by an empty store.
    pub const FIRST: Self = Self(1);

    /// The identifier that follows this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Access the raw integer value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<u64> for RecordId {
    type Error = ValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(ValidationError::NonPositiveId(0));
        }
        Ok(Self(value))
    }
}

impl From<RecordId> for u64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RecordId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .parse()
            .map_err(|_| ValidationError::InvalidId(s.to_string()))?;
        let value = u64::try_from(value).map_err(|_| ValidationError::NonPositiveId(value))?;
        Self::try_from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_at_one() {
        assert_eq!(RecordId::FIRST.get(), 1);
        assert_eq!(RecordId::default(), RecordId::FIRST);
    }

    #[test]
    fn should_advance_by_one() {
        assert_eq!(RecordId::FIRST.next().get(), 2);
    }

    #[test]
    fn should_parse_positive_integer() {
        let id: RecordId = "42".parse().unwrap();
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn should_reject_zero() {
        let result = RecordId::from_str("0");
        assert!(matches!(result, Err(ValidationError::NonPositiveId(0))));
    }

    #[test]
    fn should_reject_negative_integer() {
        let result = RecordId::from_str("-3");
        assert!(matches!(result, Err(ValidationError::NonPositiveId(-3))));
    }

    #[test]
    fn should_reject_non_numeric_input() {
        assert!(matches!(
            RecordId::from_str("abc"),
            Err(ValidationError::InvalidId(_))
        ));
        assert!(matches!(
            RecordId::from_str(""),
            Err(ValidationError::InvalidId(_))
        ));
        assert!(matches!(
            RecordId::from_str("1.5"),
            Err(ValidationError::InvalidId(_))
        ));
    }

    #[test]
    fn should_serialize_as_plain_number() {
        let json = serde_json::to_string(&RecordId::FIRST).unwrap();
        assert_eq!(json, "1");
    }

    #[test]
    fn should_refuse_to_deserialize_zero() {
        let result: Result<RecordId, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }
}
