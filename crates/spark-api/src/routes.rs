use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::{self, AppState};
use crate::middleware::require_device;
use crate::{anchors, messages, status, symbols};

/// Every API route. CORS, tracing and static pages are layered on by the binary.
pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/", get(status::home))
        .route("/healthz", get(status::health))
        .route("/auth/register", post(auth::register))
        .route("/symbols", get(symbols::list_symbols))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/messages/send", post(messages::send_message))
        .route("/messages/since", get(messages::get_since))
        .route("/anchors/pulse", post(anchors::pulse))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_device))
        .with_state(state);

    Router::new().merge(public_routes).merge(protected_routes)
}
