use axum::{
    Extension, Json,
    extract::{Query, State, rejection::{JsonRejection, QueryRejection}},
};
use tracing::{debug, warn};

use spark_db::models::MessageRow;
use spark_types::api::{SendMessageRequest, SinceQuery};
use spark_types::models::{ClientRole, Message, Role};
use spark_types::timestamp;

use crate::auth::AppState;
use crate::error::{ApiError, blocking};
use crate::middleware::AuthedDevice;

/// POST /messages/send: append a user or assistant message.
///
/// The message is stored under the `device_id` in the body, which is not
/// required to match the authenticated device.
pub async fn send_message(
    State(state): State<AppState>,
    Extension(device): Extension<AuthedDevice>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
    let Json(req) = payload?;
    let role: ClientRole = req.role.parse()?;

    if req.device_id != device.device_id {
        warn!(
            "Device '{}' is posting as '{}'",
            device.device_id, req.device_id
        );
    }

    let db = state.clone();
    let symbols = req.symbols.unwrap_or_default();
    let row = blocking(move || db.db.append_message(&req.device_id, role, &req.text, &symbols)).await?;

    to_message(row)
        .map(Json)
        .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("stored message failed to decode")))
}

/// GET /messages/since: every message across all devices, oldest first.
pub async fn get_since(
    State(state): State<AppState>,
    Extension(_device): Extension<AuthedDevice>,
    query: Result<Query<SinceQuery>, QueryRejection>,
) -> Result<Json<Vec<Message>>, ApiError> {
    // Only the lower bound lives in this query, so any rejection is a bad bound.
    let Query(query) = query.map_err(|rejection| {
        debug!("Rejected since query: {}", rejection.body_text());
        ApiError::BadRequest("bad timestamp".into())
    })?;

    let after = match query.after.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => Some(timestamp::parse_client(raw)?),
        None => None,
    };

    let db = state.clone();
    let rows = blocking(move || db.db.messages_since(after)).await?;

    Ok(Json(rows.into_iter().filter_map(to_message).collect()))
}

/// Decode a stored row. Rows with an unknown role or unreadable timestamp are skipped.
pub(crate) fn to_message(row: MessageRow) -> Option<Message> {
    let role: Role = match row.role.parse() {
        Ok(role) => role,
        Err(e) => {
            warn!("Skipping message {}: {}", row.id, e);
            return None;
        }
    };

    let symbols = serde_json::from_str(&row.symbols).unwrap_or_else(|e| {
        warn!("Corrupt symbols '{}' on message {}: {}", row.symbols, row.id, e);
        Vec::new()
    });

    let created_at = match timestamp::from_storage(&row.created_at) {
        Ok(ts) => ts,
        Err(e) => {
            warn!("Skipping message {}: corrupt created_at, {}", row.id, e);
            return None;
        }
    };

    Some(Message {
        id: row.id,
        device_id: row.device_id,
        role,
        text: row.text,
        symbols,
        created_at,
    })
}
