//! Mutex-guarded implementation of [`RecordRepository`].

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tally_app::ports::RecordRepository;
use tally_domain::error::{NotFoundError, TallyError};
use tally_domain::filter::Filter;
use tally_domain::id::RecordId;
use tally_domain::record::Record;

/// State protected by the store lock.
///
/// `next_id` and `records` only ever change together, under the same guard.
struct Inner<T> {
    next_id: RecordId,
    records: BTreeMap<RecordId, T>,
}

/// In-memory record store for one record kind.
///
/// Every operation takes the single lock for its whole read-modify-write
/// sequence and never awaits while holding it. Listing returns records in
/// ascending id order.
pub struct InMemoryStore<T> {
    inner: Mutex<Inner<T>>,
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: RecordId::FIRST,
                records: BTreeMap::new(),
            }),
        }
    }
}

impl<T: Record> InMemoryStore<T> {
    /// Create an empty store whose first record will get id `1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // No critical section can panic half-way, so a poisoned lock still
    // guards consistent state.
    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn not_found(id: RecordId) -> TallyError {
        NotFoundError { kind: T::KIND, id }.into()
    }

    /// Store `payload` under the next identifier and return the stored record.
    pub fn insert(&self, payload: T::Payload) -> T {
        let record = {
            let mut inner = self.lock();
            let id = inner.next_id;
            let record = T::from_payload(id, payload);
            inner.records.insert(id, record.clone());
            inner.next_id = id.next();
            record
        };
        tracing::trace!(kind = T::KIND, id = %record.id(), "record stored");
        record
    }

    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<T> {
        self.lock().records.get(&id).cloned()
    }

    /// Snapshot of every record passing `filter`.
    #[must_use]
    pub fn select(&self, filter: Option<&Filter>) -> Vec<T> {
        self.lock()
            .records
            .values()
            .filter(|record| record.matches(filter))
            .cloned()
            .collect()
    }

    /// Replace the fields of the record under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::NotFound`] and leaves the store untouched when
    /// `id` has no current record.
    pub fn replace(&self, id: RecordId, payload: T::Payload) -> Result<T, TallyError> {
        let mut inner = self.lock();
        let record = inner
            .records
            .get_mut(&id)
            .ok_or_else(|| Self::not_found(id))?;
        record.replace(payload);
        Ok(record.clone())
    }

    /// Remove the record under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::NotFound`] when `id` has no current record.
    pub fn remove(&self, id: RecordId) -> Result<(), TallyError> {
        self.lock()
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().records.is_empty()
    }
}

impl<T: Record> RecordRepository<T> for InMemoryStore<T> {
    fn create(&self, payload: T::Payload) -> impl Future<Output = Result<T, TallyError>> + Send {
        let record = self.insert(payload);
        async { Ok(record) }
    }

    fn get_by_id(
        &self,
        id: RecordId,
    ) -> impl Future<Output = Result<Option<T>, TallyError>> + Send {
        let record = self.get(id);
        async { Ok(record) }
    }

    fn list(
        &self,
        filter: Option<&Filter>,
    ) -> impl Future<Output = Result<Vec<T>, TallyError>> + Send {
        let records = self.select(filter);
        async { Ok(records) }
    }

    fn update(
        &self,
        id: RecordId,
        payload: T::Payload,
    ) -> impl Future<Output = Result<T, TallyError>> + Send {
        let result = self.replace(id, payload);
        async { result }
    }

    fn delete(&self, id: RecordId) -> impl Future<Output = Result<(), TallyError>> + Send {
        let result = self.remove(id);
        async { result }
    }
}
