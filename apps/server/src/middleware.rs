use std::collections::HashMap;
use std::time::Instant;

use axum::{
    extract::{Path, Request},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use repoboard_types::ErrorResponse;
use tracing::info;
use uuid::Uuid;

/// Syntactic check only, independent of whether a record with this id
/// exists. `Uuid::try_parse` also accepts braced/simple/URN spellings, but
/// the API only ever hands out hyphenated ids, so incoming ids are held to
/// the same 36-char shape.
pub fn is_valid_repository_id(raw: &str) -> bool {
    raw.len() == 36 && Uuid::try_parse(raw).is_ok()
}

/// Runs before every handler whose route carries an `:id` segment. A
/// malformed id short-circuits with the uniform 400 body; the handler never
/// executes and the store stays untouched.
pub async fn validate_repository_id(
    Path(params): Path<HashMap<String, String>>,
    req: Request,
    next: Next,
) -> Response {
    match params.get("id") {
        Some(id) if is_valid_repository_id(id) => next.run(req).await,
        _ => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Invalid repository ID")),
        )
            .into_response(),
    }
}

/// Per-request timing log: method, path, status and elapsed wall time.
pub async fn log_request_timing(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();
    let res = next.run(req).await;
    info!(
        %method,
        %path,
        status = %res.status(),
        elapsed = ?started.elapsed(),
        "request handled"
    );
    res
}
