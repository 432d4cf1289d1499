//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use tally_app::ports::RecordRepository;
use tally_domain::product::Product;
use tally_domain::user::User;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the record routes with a `/health` probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<PR, UR>(state: AppState<PR, UR>) -> Router
where
    PR: RecordRepository<Product> + Send + Sync + 'static,
    UR: RecordRepository<User> + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
