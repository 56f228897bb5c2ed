// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Request body size limit applied to every route.
//!
//! A declared `Content-Length` over the limit is rejected before the handler runs.
//! Bodies without a declared length are buffered up to the limit and rejected past it.

use axum::Json;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_LENGTH, TRANSFER_ENCODING};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::AppState;

/// Reject requests whose body exceeds `state.body_limit` with `413`.
pub async fn body_limit_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let limit = state.body_limit;
    let declared = req
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());
    match declared {
        Some(len) if len > limit as u64 => too_large(limit, Some(len)),
        Some(_) => next.run(req).await,
        None if req.headers().contains_key(TRANSFER_ENCODING) => {
            let (parts, body) = req.into_parts();
            match axum::body::to_bytes(body, limit).await {
                Ok(bytes) => next.run(Request::from_parts(parts, Body::from(bytes))).await,
                Err(_) => too_large(limit, None),
            }
        }
        None => next.run(req).await,
    }
}

fn too_large(limit: usize, declared: Option<u64>) -> Response {
    tracing::warn!(limit, ?declared, "request body over limit");
    let body = json!({
        "error": {
            "code": "payload_too_large",
            "message": format!("request body exceeds {limit} bytes"),
        }
    });
    (StatusCode::PAYLOAD_TOO_LARGE, Json(body)).into_response()
}
