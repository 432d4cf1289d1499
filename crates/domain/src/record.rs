//! The [`Record`] abstraction shared by every stored kind.

use crate::filter::Filter;
use crate::id::RecordId;

/// A kind of record held by a store.
///
/// A record is an identifier plus a set of mutable fields (its
/// [`Payload`](Record::Payload)). The store assigns the identifier; the
/// fields are replaced wholesale on update. Each kind designates exactly one
/// field that list queries filter on.
pub trait Record: Clone + Send + Sync + 'static {
    /// The mutable fields supplied by clients on create and update.
    type Payload: Send + 'static;

    /// Human-readable kind, used in errors and logs.
    const KIND: &'static str;

    /// Query-string key that filters on [`Record::filter_field`].
    const FILTER_KEY: &'static str;

    /// Assemble a stored record from an assigned id and its fields.
    fn from_payload(id: RecordId, payload: Self::Payload) -> Self;

    fn id(&self) -> RecordId;

    /// Replace every mutable field, keeping the identifier.
    fn replace(&mut self, payload: Self::Payload);

    /// The designated filterable field.
    fn filter_field(&self) -> &str;

    /// Whether this record passes `filter`. `None` matches everything.
    fn matches(&self, filter: Option<&Filter>) -> bool {
        filter.is_none_or(|f| f.matches(self.filter_field()))
    }
}
