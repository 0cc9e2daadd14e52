use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use idcard_validate::validate_text;

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub input_text: String,
}

/// Validate a batch of ID numbers.
///
/// Blank input is a 400 with an `error` field; otherwise the response is
/// the batch summary (valid/invalid buckets plus counts). Invalid ID
/// numbers are a normal 200 outcome, not an error status.
pub async fn validate_ids(Json(payload): Json<ValidateRequest>) -> Response {
    if payload.input_text.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "请输入要验证的身份证号码" })),
        )
            .into_response();
    }
    let summary = validate_text(&payload.input_text);
    info!(
        total = summary.total,
        valid = summary.valid_count,
        invalid = summary.invalid_count,
        "batch validated"
    );
    Json(summary).into_response()
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
