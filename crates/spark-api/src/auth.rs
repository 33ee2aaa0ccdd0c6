use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::info;

use spark_db::Database;
use spark_types::api::{RegisterRequest, RegisterResponse};

use crate::error::{ApiError, blocking};

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
}

/// POST /auth/register: issue a token for a device, revoking any earlier one.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let Json(req) = payload?;

    if req.device_id.trim().is_empty() {
        return Err(ApiError::BadRequest("device_id must not be empty".into()));
    }

    let db = state.clone();
    let device_id = req.device_id.clone();
    let public_key = req.public_key;
    let access_token = blocking(move || db.db.issue_token(&device_id, public_key.as_deref())).await?;

    info!("Device registered: {}", req.device_id);
    Ok(Json(RegisterResponse { access_token }))
}
