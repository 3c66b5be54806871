pub mod auth;
pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::directory::handlers as directory;
use crate::records::handlers as records;
use crate::routes::auth::{require_api_key, SharedSecret};
use crate::state::{DirectoryState, RecordsState};

/// Directory backend: `GET /`, `POST /tasks/send`. Every route requires the shared secret.
pub fn build_directory_router(state: DirectoryState, secret: SharedSecret) -> Router {
    Router::new()
        .route("/", get(health::directory_root))
        .route("/tasks/send", post(directory::handle_task))
        .route_layer(middleware::from_fn_with_state(secret, require_api_key))
        .with_state(state)
}

/// Records backend: `GET /`, `POST /hr-tasks/send`. Every route requires the shared secret.
pub fn build_records_router(state: RecordsState, secret: SharedSecret) -> Router {
    Router::new()
        .route("/", get(health::records_root))
        .route("/hr-tasks/send", post(records::handle_task))
        .route_layer(middleware::from_fn_with_state(secret, require_api_key))
        .with_state(state)
}
