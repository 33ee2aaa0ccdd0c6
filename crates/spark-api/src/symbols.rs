use axum::Json;
use serde_json::{Map, Value};

/// GET /symbols: the static name -> glyph catalog.
pub async fn list_symbols() -> Json<Map<String, Value>> {
    Json(spark_types::symbols::catalog())
}
