//! Product service — use-cases for managing products.

use tally_domain::error::{NotFoundError, TallyError};
use tally_domain::filter::Filter;
use tally_domain::id::RecordId;
use tally_domain::product::{Product, ProductPayload};
use tally_domain::record::Record;

use crate::ports::RecordRepository;

/// Application service for product CRUD operations.
pub struct ProductService<R> {
    repo: R,
}

impl<R: RecordRepository<Product>> ProductService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new product; the repository assigns its id.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the repository.
    #[tracing::instrument(skip(self, payload), fields(product_name = %payload.name))]
    pub async fn create_product(&self, payload: ProductPayload) -> Result<Product, TallyError> {
        let product = self.repo.create(payload).await?;
        tracing::info!(id = %product.id, "product created");
        Ok(product)
    }

    /// Look up a product by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::NotFound`] when no product with `id` exists.
    #[tracing::instrument(skip(self))]
    pub async fn get_product(&self, id: RecordId) -> Result<Product, TallyError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                kind: Product::KIND,
                id,
            }
            .into()
        })
    }

    /// List products, optionally restricted to one category (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_products(
        &self,
        category: Option<Filter>,
    ) -> Result<Vec<Product>, TallyError> {
        self.repo.list(category.as_ref()).await
    }

    /// Replace the name, category and price of an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::NotFound`] if the product does not exist.
    #[tracing::instrument(skip(self, payload))]
    pub async fn update_product(
        &self,
        id: RecordId,
        payload: ProductPayload,
    ) -> Result<Product, TallyError> {
        let product = self.repo.update(id, payload).await?;
        tracing::debug!("product updated");
        Ok(product)
    }

    /// Delete a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::NotFound`] if the product does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn delete_product(&self, id: RecordId) -> Result<(), TallyError> {
        self.repo.delete(id).await?;
        tracing::info!("product deleted");
        Ok(())
    }
}
