//! API endpoints.

pub mod users;

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use user_store::UserStore;

use crate::state::AppState;

/// Creates the API router with all credential-gated endpoints.
pub fn create_router<S: UserStore + 'static>() -> Router<Arc<AppState<S>>> {
    Router::new()
        .route("/hello", get(hello))
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
}

/// Fixed greeting endpoint, no store access.
async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello, World!" }))
}

/// Health check endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}
