use axum::Json;
use serde_json::{json, Value};

/// GET / on the directory backend.
pub async fn directory_root() -> Json<Value> {
    Json(json!({
        "message": "Employee Info Agent is running.",
        "service": "directory",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET / on the records backend.
pub async fn records_root() -> Json<Value> {
    Json(json!({
        "message": "HR Agent is running.",
        "service": "records",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
