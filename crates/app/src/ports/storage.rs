//! Storage port — repository trait for record collections.

use std::future::Future;
use std::sync::Arc;

use tally_domain::error::TallyError;
use tally_domain::filter::Filter;
use tally_domain::id::RecordId;
use tally_domain::record::Record;

/// Create, list, update and delete records of one kind.
///
/// Implementations own identifier assignment: `create` receives only the
/// payload and returns the stored record with its new id. `update` and
/// `delete` must check existence and mutate in one step, returning
/// [`TallyError::NotFound`] when the id has no current record.
pub trait RecordRepository<T: Record> {
    /// Store a new record under the next identifier.
    fn create(&self, payload: T::Payload) -> impl Future<Output = Result<T, TallyError>> + Send;

    fn get_by_id(&self, id: RecordId)
    -> impl Future<Output = Result<Option<T>, TallyError>> + Send;

    /// All records passing `filter`; `None` returns everything.
    fn list(
        &self,
        filter: Option<&Filter>,
    ) -> impl Future<Output = Result<Vec<T>, TallyError>> + Send;

    /// Replace the fields of the record stored under `id`.
    fn update(
        &self,
        id: RecordId,
        payload: T::Payload,
    ) -> impl Future<Output = Result<T, TallyError>> + Send;

    fn delete(&self, id: RecordId) -> impl Future<Output = Result<(), TallyError>> + Send;
}

impl<T: Record, R: RecordRepository<T> + Send + Sync> RecordRepository<T> for Arc<R> {
    fn create(&self, payload: T::Payload) -> impl Future<Output = Result<T, TallyError>> + Send {
        (**self).create(payload)
    }

    fn get_by_id(
        &self,
        id: RecordId,
    ) -> impl Future<Output = Result<Option<T>, TallyError>> + Send {
        (**self).get_by_id(id)
    }

    fn list(
        &self,
        filter: Option<&Filter>,
    ) -> impl Future<Output = Result<Vec<T>, TallyError>> + Send {
        (**self).list(filter)
    }

    fn update(
        &self,
        id: RecordId,
        payload: T::Payload,
    ) -> impl Future<Output = Result<T, TallyError>> + Send {
        (**self).update(id, payload)
    }

    fn delete(&self, id: RecordId) -> impl Future<Output = Result<(), TallyError>> + Send {
        (**self).delete(id)
    }
}
