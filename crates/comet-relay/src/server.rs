//! HTTP surface for the relay.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use comet_core::ContactMessage;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::RelayError;
use crate::mailer::Mailer;
use crate::message::Email;

/// State shared across request handlers.
#[derive(Clone)]
pub struct RelayState {
    pub mailer: Arc<dyn Mailer>,
    /// Configured account address; the default recipient and sender.
    pub account: String,
}

/// Build the relay router.
pub fn router(state: RelayState) -> Router {
    Router::new()
        .route("/api/send", post(send))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_methods(Any)
                .allow_headers(Any)
                .allow_origin(Any),
        )
}

/// `POST /api/send`: verify the transport, then attempt one delivery.
///
/// Success is `200 {"ok": true}`. Any transport failure becomes a 500
/// whose plain-text body is the failure description, `"error"` when the
/// description is empty.
async fn send(State(state): State<RelayState>, Json(msg): Json<ContactMessage>) -> Response {
    match relay(&state, &msg).await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "ok": true }))).into_response(),
        Err(err) => {
            tracing::error!(target: "comet-relay", "send failed: {err}");
            let mut detail = err.to_string();
            if detail.is_empty() {
                detail = "error".to_string();
            }
            (StatusCode::INTERNAL_SERVER_ERROR, detail).into_response()
        }
    }
}

async fn relay(state: &RelayState, msg: &ContactMessage) -> Result<(), RelayError> {
    let email = Email::from_contact(msg, &state.account);
    state.mailer.verify().await?;
    state.mailer.send(&email).await
}
