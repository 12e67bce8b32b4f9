//! Copy Generation Handler
//!
//! The single public endpoint. Generation-path failures never reach
//! this layer as errors; only request-shape problems produce a
//! non-success status.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, header::ACCEPT_LANGUAGE},
};
use serde::Deserialize;

use crate::AppState;
use crate::services::generation::ReframeResponse;
use crate::utils::{ApiError, ApiResult};

fn default_lang() -> String {
    "auto".to_string()
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default = "default_lang")]
    pub lang: String,
}

/// Generate three reframings of a topic
/// POST /api/v1/generate
///
/// The `Accept-Language` header is consulted only when `lang` is
/// `"auto"`. Both generated and fallback payloads return 200.
pub async fn generate(
    State(service): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> ApiResult<Json<ReframeResponse>> {
    let Json(req) = payload.map_err(|e| ApiError::malformed_request(e.body_text()))?;

    let accept_language = headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok());

    let response = service.generate(&req.topic, Some(&req.lang), accept_language).await;
    Ok(Json(response))
}
