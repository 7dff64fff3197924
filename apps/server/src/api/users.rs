//! User management API endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use user_store::{User, UserStore, UserStoreError};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Body of a create request.
///
/// Fields default to empty strings so that a structurally valid body with
/// missing fields fails field validation ("Missing fields") rather than
/// decoding ("Invalid input").
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Body of an update request. An `id` field, if present, is ignored; the
/// path parameter is authoritative.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: String,
}

/// Lists all users, sorted ascending by id.
pub async fn list_users<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<Vec<User>>> {
    let users = state.store.list_users().await?;
    Ok(Json(users))
}

/// Gets a user by id.
pub async fn get_user<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> ServerResult<Json<User>> {
    let user = state
        .store
        .get_user(&id)
        .await?
        .ok_or_else(|| UserStoreError::not_found(&id))?;

    Ok(Json(user))
}

/// Creates a user.
pub async fn create_user<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<User>)> {
    let Json(request) = payload.map_err(|_| ServerError::InvalidInput)?;

    let user = state
        .store
        .create_user(User::new(request.id, request.name))
        .await?;

    tracing::info!(user_id = %user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Updates a user's name.
pub async fn update_user<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> ServerResult<Json<User>> {
    // Verify the user exists before looking at the body, so an absent id
    // reports 404 even when the body is malformed.
    state
        .store
        .get_user(&id)
        .await?
        .ok_or_else(|| UserStoreError::not_found(&id))?;

    let Json(request) = payload.map_err(|_| ServerError::InvalidInput)?;

    let user = state.store.update_user_name(&id, &request.name).await?;

    tracing::info!(user_id = %id, "User updated");

    Ok(Json(user))
}

/// Deletes a user.
pub async fn delete_user<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> ServerResult<StatusCode> {
    state.store.delete_user(&id).await?;

    tracing::info!(user_id = %id, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
