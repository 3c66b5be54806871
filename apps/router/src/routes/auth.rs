//! Static shared-secret guard for the agent endpoints.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::errors::AppError;

pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Clone)]
pub struct SharedSecret(Arc<str>);

impl SharedSecret {
    pub fn new(secret: &str) -> Self {
        Self(Arc::from(secret))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Rejects the request with 401 unless `x-api-key` equals the shared secret.
/// Runs before any extractor, so the body is never read for unauthenticated calls.
pub async fn require_api_key(
    State(secret): State<SharedSecret>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(key) if key == secret.as_str() => Ok(next.run(request).await),
        _ => {
            warn!(
                "Rejected {} {}: invalid or missing API key",
                request.method(),
                request.uri().path()
            );
            Err(AppError::Unauthorized)
        }
    }
}
