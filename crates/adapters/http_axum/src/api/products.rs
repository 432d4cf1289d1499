//! JSON handlers for products.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use tally_app::ports::RecordRepository;
use tally_domain::payload;
use tally_domain::product::{Product, ProductPayload};
use tally_domain::record::Record;
use tally_domain::user::User;

use super::QueryParams;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Product>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Product>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Product>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /products?category=...`
pub async fn list<PR, UR>(
    State(state): State<AppState<PR, UR>>,
    Query(params): Query<QueryParams>,
) -> Result<ListResponse, ApiError>
where
    PR: RecordRepository<Product> + Send + Sync + 'static,
    UR: RecordRepository<User> + Send + Sync + 'static,
{
    let category = params.filter(Product::FILTER_KEY);
    let products = state.product_service.list_products(category).await?;
    Ok(ListResponse::Ok(Json(products)))
}

/// `POST /products`
pub async fn create<PR, UR>(
    State(state): State<AppState<PR, UR>>,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    PR: RecordRepository<Product> + Send + Sync + 'static,
    UR: RecordRepository<User> + Send + Sync + 'static,
{
    let payload: ProductPayload = payload::decode(&body)?;
    let created = state.product_service.create_product(payload).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /products?id=N`
pub async fn update<PR, UR>(
    State(state): State<AppState<PR, UR>>,
    Query(query): Query<QueryParams>,
    body: Bytes,
) -> Result<UpdateResponse, ApiError>
where
    PR: RecordRepository<Product> + Send + Sync + 'static,
    UR: RecordRepository<User> + Send + Sync + 'static,
{
    let id = query.record_id()?;
    let payload: ProductPayload = payload::decode(&body)?;
    let updated = state.product_service.update_product(id, payload).await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /products?id=N`
pub async fn delete<PR, UR>(
    State(state): State<AppState<PR, UR>>,
    Query(query): Query<QueryParams>,
) -> Result<DeleteResponse, ApiError>
where
    PR: RecordRepository<Product> + Send + Sync + 'static,
    UR: RecordRepository<User> + Send + Sync + 'static,
{
    let id = query.record_id()?;
    state.product_service.delete_product(id).await?;
    Ok(DeleteResponse::NoContent)
}
