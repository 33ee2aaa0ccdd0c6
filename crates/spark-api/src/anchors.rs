use axum::{Extension, Json, extract::State};
use tracing::info;

use spark_types::models::{Message, Role};
use spark_types::symbols::{ANCHOR_PULSE_TEXT, anchor_pulse_symbols};

use crate::auth::AppState;
use crate::error::{ApiError, blocking};
use crate::messages::to_message;
use crate::middleware::AuthedDevice;

/// POST /anchors/pulse: record an anchor message for the calling device.
///
/// Takes no body. Role, text and symbols are always the fixed pulse values.
pub async fn pulse(
    State(state): State<AppState>,
    Extension(device): Extension<AuthedDevice>,
) -> Result<Json<Message>, ApiError> {
    let db = state.clone();
    let device_id = device.device_id.clone();
    let row = blocking(move || {
        db.db.append_system_message(
            &device_id,
            Role::Anchor,
            ANCHOR_PULSE_TEXT,
            &anchor_pulse_symbols(),
        )
    })
    .await?;

    info!("Anchor pulse from {}", device.device_id);
    to_message(row)
        .map(Json)
        .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("stored pulse failed to decode")))
}
