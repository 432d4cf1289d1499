//! User service — use-cases for managing users.

use tally_domain::error::{NotFoundError, TallyError};
use tally_domain::filter::Filter;
use tally_domain::id::RecordId;
use tally_domain::record::Record;
use tally_domain::user::{User, UserPayload};

use crate::ports::RecordRepository;

/// Application service for user CRUD operations.
pub struct UserService<R> {
    repo: R,
}

impl<R: RecordRepository<User>> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new user; the repository assigns its id.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the repository.
    #[tracing::instrument(skip(self, payload), fields(user_name = %payload.name))]
    pub async fn create_user(&self, payload: UserPayload) -> Result<User, TallyError> {
        let user = self.repo.create(payload).await?;
        tracing::info!(id = %user.id, "user created");
        Ok(user)
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::NotFound`] when no user with `id` exists.
    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, id: RecordId) -> Result<User, TallyError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                kind: User::KIND,
                id,
            }
            .into()
        })
    }

    /// List users, optionally restricted to one name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_users(&self, name: Option<Filter>) -> Result<Vec<User>, TallyError> {
        self.repo.list(name.as_ref()).await
    }

    /// Replace the name of an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::NotFound`] if the user does not exist.
    #[tracing::instrument(skip(self, payload))]
    pub async fn update_user(
        &self,
        id: RecordId,
        payload: UserPayload,
    ) -> Result<User, TallyError> {
        let user = self.repo.update(id, payload).await?;
        tracing::debug!("user updated");
        Ok(user)
    }

    /// Delete a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::NotFound`] if the user does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, id: RecordId) -> Result<(), TallyError> {
        self.repo.delete(id).await?;
        tracing::info!("user deleted");
        Ok(())
    }
}
