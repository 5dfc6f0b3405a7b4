use serde_json::{json, Value};
use vercel_runtime::{Body, Response, StatusCode};

use crate::{error::AppError, http::cors};

pub fn error_response(err: &AppError) -> (StatusCode, Value) {
    match err {
        AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, json!({"error": "Method not allowed"})),
        AppError::MissingMessage => (StatusCode::BAD_REQUEST, json!({"error": "Message is required"})),
        AppError::InvalidBody(detail) => (StatusCode::BAD_REQUEST, json!({"error": "Invalid JSON", "detail": detail})),
        AppError::MissingApiKey => (StatusCode::INTERNAL_SERVER_ERROR, json!({"error": "API key not configured"})),
        AppError::Upstream { .. }
        | AppError::Timeout(_)
        | AppError::Config(_)
        | AppError::Http(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({
                "error": "Failed to get AI response",
                "fallback": true,
                "message": err.to_string()
            }),
        ),
    }
}

pub fn json_response<T: serde::Serialize>(
    status: StatusCode,
    value: &T,
    allow_origin: &str,
) -> anyhow::Result<Response<Body>> {
    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", "application/json");
    for (name, header) in cors::headers(allow_origin) {
        builder = builder.header(name, header);
    }
    if status == StatusCode::METHOD_NOT_ALLOWED {
        builder = builder.header("Allow", "POST");
    }
    Ok(builder.body(serde_json::to_string(value)?.into())?)
}
