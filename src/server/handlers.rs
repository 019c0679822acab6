//! Request handlers and response bodies.

use crate::error::RelayError;
use crate::models::SendEmailResponse;
use crate::services::ContactRelayService;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    relay: Arc<ContactRelayService>,
}

impl AppState {
    pub fn new(relay: ContactRelayService) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }

    pub fn relay(&self) -> &ContactRelayService {
        &self.relay
    }
}

/// Body of a 200 answer.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SuccessResponse {
    pub success: bool,
    pub data: SendEmailResponse,
}

/// Body of a 400 or 500 answer.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse {
            error: self.client_message(),
        };
        (status, Json(body)).into_response()
    }
}

/// `POST /api/contact`
///
/// The body is taken raw so that a malformed payload goes through the same
/// error mapping as every other failure instead of axum's JSON rejection.
pub async fn submit_contact(State(state): State<AppState>, body: Bytes) -> Response {
    match state.relay.relay_body(&body).await {
        Ok(data) => (
            StatusCode::OK,
            Json(SuccessResponse {
                success: true,
                data,
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
