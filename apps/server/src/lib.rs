//! User API server.
//!
//! A minimal HTTP resource API over an in-memory collection of user
//! records, guarded by a static basic-auth credential pair. The store
//! lives in [`user_store`]; this crate supplies the transport layer:
//! routing, validation, auth, and outcome-to-status translation.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod state;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use user_store::UserStore;

use crate::config::Config;
use crate::state::{AppState, SharedState, create_shared_state};

/// Creates the application router with all routes configured.
///
/// Everything except `/health` sits behind the basic auth gate.
pub fn create_app<S: UserStore + 'static>(state: SharedState<S>) -> Router {
    let protected = api::create_router().route_layer(axum::middleware::from_fn_with_state(
        Arc::clone(&state),
        middleware::auth::basic_auth::<S>,
    ));

    Router::new()
        .merge(protected)
        .route("/health", get(api::health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state with the given configuration and store.
pub fn create_state<S: UserStore>(config: Config, store: S) -> SharedState<S> {
    create_shared_state(config, store)
}

/// Initializes tracing with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
