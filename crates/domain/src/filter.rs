//! Case-insensitive equality filter for list queries.

/// A normalized filter value matched against a record's designated field.
///
/// Matching is case-insensitive: both sides are compared in lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter(String);

impl Filter {
    /// Build a filter from an optional query value.
    ///
    /// Returns `None` when the value is absent or empty, meaning "match all".
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw {
            Some(value) if !value.is_empty() => Some(Self(value.to_lowercase())),
            _ => None,
        }
    }

    /// Whether `field` equals this filter, ignoring case.
    #[must_use]
    pub fn matches(&self, field: &str) -> bool {
        field.to_lowercase() == self.0
    }
}
