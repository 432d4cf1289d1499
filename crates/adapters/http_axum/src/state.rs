//! Shared application state for axum handlers.

use std::sync::Arc;

use tally_app::ports::RecordRepository;
use tally_app::services::product_service::ProductService;
use tally_app::services::user_service::UserService;
use tally_domain::product::Product;
use tally_domain::user::User;

/// Application state shared across all axum handlers.
///
/// Generic over the product and user repository types to avoid dynamic
/// dispatch. `Clone` is implemented manually so the repositories themselves
/// do not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<PR, UR> {
    /// Product CRUD service.
    pub product_service: Arc<ProductService<PR>>,
    /// User CRUD service.
    pub user_service: Arc<UserService<UR>>,
}

impl<PR, UR> Clone for AppState<PR, UR> {
    fn clone(&self) -> Self {
        Self {
            product_service: Arc::clone(&self.product_service),
            user_service: Arc::clone(&self.user_service),
        }
    }
}

impl<PR, UR> AppState<PR, UR>
where
    PR: RecordRepository<Product> + Send + Sync + 'static,
    UR: RecordRepository<User> + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(product_service: ProductService<PR>, user_service: UserService<UR>) -> Self {
        Self {
            product_service: Arc::new(product_service),
            user_service: Arc::new(user_service),
        }
    }

    /// Create a new application state from pre-wrapped `Arc` services.
    ///
    /// Use this when a service is also held elsewhere, e.g. by a test that
    /// inspects the store behind the router.
    pub fn from_arcs(
        product_service: Arc<ProductService<PR>>,
        user_service: Arc<UserService<UR>>,
    ) -> Self {
        Self {
            product_service,
            user_service,
        }
    }
}
