//! JSON handlers for users.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use tally_app::ports::RecordRepository;
use tally_domain::payload;
use tally_domain::product::Product;
use tally_domain::record::Record;
use tally_domain::user::{User, UserPayload};

use super::QueryParams;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<User>>),
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
    Created(Json<User>),
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
    Ok(Json<User>),
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

/// `GET /users?name=...`
pub async fn list<PR, UR>(
    State(state): State<AppState<PR, UR>>,
    Query(params): Query<QueryParams>,
) -> Result<ListResponse, ApiError>
where
    PR: RecordRepository<Product> + Send + Sync + 'static,
    UR: RecordRepository<User> + Send + Sync + 'static,
{
    let name = params.filter(User::FILTER_KEY);
    let users = state.user_service.list_users(name).await?;
    Ok(ListResponse::Ok(Json(users)))
}

/// `POST /users`
pub async fn create<PR, UR>(
    State(state): State<AppState<PR, UR>>,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    PR: RecordRepository<Product> + Send + Sync + 'static,
    UR: RecordRepository<User> + Send + Sync + 'static,
{
    let payload: UserPayload = payload::decode(&body)?;
    let created = state.user_service.create_user(payload).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /users?id=N`
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
    let payload: UserPayload = payload::decode(&body)?;
    let updated = state.user_service.update_user(id, payload).await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /users?id=N`
pub async fn delete<PR, UR>(
    State(state): State<AppState<PR, UR>>,
    Query(query): Query<QueryParams>,
) -> Result<DeleteResponse, ApiError>
where
    PR: RecordRepository<Product> + Send + Sync + 'static,
    UR: RecordRepository<User> + Send + Sync + 'static,
{
    let id = query.record_id()?;
    state.user_service.delete_user(id).await?;
    Ok(DeleteResponse::NoContent)
}
