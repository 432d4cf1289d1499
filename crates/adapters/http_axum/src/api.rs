//! JSON API handler modules.
//!
//! Each record kind is served from a single path. The method selects the
//! operation and the `id` query parameter names the target record:
//!
//! | Method   | Query                  | Body    | Success |
//! |----------|------------------------|---------|---------|
//! | `POST`   | —                      | payload | 201     |
//! | `GET`    | `?<filter key>=value`  | —       | 200     |
//! | `PUT`    | `?id=N`                | payload | 200     |
//! | `DELETE` | `?id=N`                | —       | 204     |
//!
//! Any other method answers 405.

#[allow(clippy::missing_errors_doc)]
pub mod products;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use std::str::FromStr;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use serde::Deserialize;

use tally_app::ports::RecordRepository;
use tally_domain::error::ValidationError;
use tally_domain::filter::Filter;
use tally_domain::id::RecordId;
use tally_domain::product::Product;
use tally_domain::user::User;

use crate::state::AppState;

/// Query-string pairs in request order.
///
/// Repeated keys are kept; lookups read the first occurrence.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// First value given for `key`, if any.
    #[must_use]
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// List filter read from `key`. Absent or empty means "match all".
    #[must_use]
    pub fn filter(&self, key: &str) -> Option<Filter> {
        Filter::parse(self.first(key))
    }

    /// Parse the `id` parameter. A missing parameter is treated as empty input.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the id is absent, non-numeric or
    /// not positive.
    pub fn record_id(&self) -> Result<RecordId, ValidationError> {
        RecordId::from_str(self.first("id").unwrap_or_default())
    }
}

/// Build the record API router.
///
/// `HEAD` is routed explicitly because axum would otherwise answer it with
/// the `GET` handler.
pub fn routes<PR, UR>() -> Router<AppState<PR, UR>>
where
    PR: RecordRepository<Product> + Send + Sync + 'static,
    UR: RecordRepository<User> + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/products",
            get(products::list::<PR, UR>)
                .head(method_not_allowed)
                .post(products::create::<PR, UR>)
                .put(products::update::<PR, UR>)
                .delete(products::delete::<PR, UR>),
        )
        .route(
            "/users",
            get(users::list::<PR, UR>)
                .head(method_not_allowed)
                .post(users::create::<PR, UR>)
                .put(users::update::<PR, UR>)
                .delete(users::delete::<PR, UR>),
        )
}

async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        QueryParams(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn should_parse_present_id() {
        let query = params(&[("id", "3")]);
        assert_eq!(query.record_id().unwrap().get(), 3);
    }

    #[test]
    fn should_reject_missing_id() {
        let query = QueryParams::default();
        assert!(matches!(
            query.record_id(),
            Err(ValidationError::InvalidId(_))
        ));
    }

    #[test]
    fn should_read_first_value_of_repeated_key() {
        let query = params(&[("id", "1"), ("category", "tools"), ("id", "2")]);
        assert_eq!(query.record_id().unwrap().get(), 1);
        assert_eq!(query.first("category"), Some("tools"));
        assert_eq!(query.first("name"), None);
    }

    #[test]
    fn should_treat_empty_filter_value_as_match_all() {
        assert!(params(&[("category", "")]).filter("category").is_none());
        assert!(params(&[("category", "Tools")]).filter("category").is_some());
    }
}
