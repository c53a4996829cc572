//! Webhook Routes
//!
//! Receives Clubhouse webhooks, checks transport and signature
//! preconditions, and hands the decoded event to the relay service.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use tracing::Instrument;
use uuid::Uuid;

use clubhook::WebhookEvent;

use crate::application::{RelayError, RelayOutcome};
use crate::signature::{verify_signature, SIGNATURE_HEADER};
use crate::AppState;

const INVALID_REQUEST: &str = "invalid request";

type ApiError = (StatusCode, String);

fn bad_request() -> ApiError {
    (StatusCode::BAD_REQUEST, INVALID_REQUEST.to_string())
}

/// Whether the Content-Type media type is `application/json`
fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|media| media.trim().eq_ignore_ascii_case("application/json"))
}

/// Verify `Clubhouse-Signature` when the request carries one
fn check_signature(state: &AppState, headers: &HeaderMap, body: &[u8]) -> Result<(), ApiError> {
    let Some(value) = headers.get(SIGNATURE_HEADER) else {
        return Ok(());
    };
    let signature = value.to_str().map_err(|_| bad_request())?.trim();
    if signature.is_empty() {
        return Ok(());
    }

    let Some(secret) = state.webhook_secret.as_deref() else {
        tracing::error!("Received signed webhook but no webhook secret is configured");
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            "webhook secret not configured".to_string(),
        ));
    };

    verify_signature(secret, body, signature).map_err(|e| {
        tracing::warn!(error = %e, "Rejected webhook signature");
        bad_request()
    })
}

fn relay_error_status(error: &RelayError) -> StatusCode {
    match error {
        RelayError::UnsupportedVersion(_) => StatusCode::BAD_REQUEST,
        RelayError::Translation(_) | RelayError::Delivery(_) => StatusCode::BAD_GATEWAY,
    }
}

/// Relay a Clubhouse webhook event to Discord
#[utoipa::path(
    post,
    path = "/webhook",
    request_body(content = String, description = "Clubhouse v1 webhook event", content_type = "application/json"),
    params(
        ("Clubhouse-Signature" = Option<String>, Header, description = "Hex HMAC-SHA256 of the body")
    ),
    responses(
        (status = 200, description = "Event relayed (body is the Discord message) or intentionally skipped (empty body)"),
        (status = 400, description = "Wrong method or content type, bad signature, or unsupported version"),
        (status = 500, description = "Malformed JSON or missing webhook secret"),
        (status = 502, description = "Clubhouse or Discord request failed")
    ),
    tag = "Webhook"
)]
pub async fn receive_webhook(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let span = tracing::info_span!("webhook", request_id = %Uuid::new_v4());
    handle_webhook(state, method, headers, body)
        .instrument(span)
        .await
}

async fn handle_webhook(
    state: AppState,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    if method != Method::POST || !is_json(&headers) {
        tracing::warn!(
            method = %method,
            content_type = ?headers.get(header::CONTENT_TYPE),
            "Invalid method / content-type"
        );
        return Err(bad_request());
    }

    check_signature(&state, &headers, &body)?;

    let event: WebhookEvent = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(error = %e, raw = %String::from_utf8_lossy(&body), "Malformed webhook payload");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("malformed payload: {e}"),
        )
    })?;

    match state.relay.relay(&event).await {
        Ok(RelayOutcome::Delivered(message)) => Ok((StatusCode::OK, Json(message)).into_response()),
        Ok(RelayOutcome::Skipped(reason)) => {
            tracing::info!(?reason, raw = %String::from_utf8_lossy(&body), "Unhandled webhook event");
            Ok(StatusCode::OK.into_response())
        }
        Err(e) => {
            let status = relay_error_status(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, raw = %String::from_utf8_lossy(&body), "Failed to relay webhook");
            } else {
                tracing::warn!(error = %e, "Rejected webhook");
            }
            Err((status, e.to_string()))
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", any(receive_webhook))
        .route("/webhook", any(receive_webhook))
}
