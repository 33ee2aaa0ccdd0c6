use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::auth::AppState;
use crate::error::{ApiError, blocking};

const BEARER_PREFIX: &str = "bearer ";

/// The device a request's token belongs to. Inserted by [`require_device`].
#[derive(Debug, Clone)]
pub struct AuthedDevice {
    pub device_id: String,
}

/// Strip an optional, case-insensitive `Bearer ` marker.
///
/// Anything without the marker is taken as a raw token as-is.
pub fn credential_token(header_value: &str) -> &str {
    match header_value.get(..BEARER_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(BEARER_PREFIX) => {
            &header_value[BEARER_PREFIX.len()..]
        }
        _ => header_value,
    }
}

/// Resolve the Authorization header to a registered device or reject with 401.
pub async fn require_device(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            debug!("Rejected request without credential");
            ApiError::Unauthorized
        })?;

    let token = credential_token(header_value).to_string();

    let db = state.clone();
    let device_id = blocking(move || db.db.resolve_token(&token))
        .await?
        .ok_or_else(|| {
            debug!("Rejected request with unknown token");
            ApiError::Unauthorized
        })?;

    req.extensions_mut().insert(AuthedDevice { device_id });
    Ok(next.run(req).await)
}
