// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `GET /api/categories`: the "get many" category contract over HTTP.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use funroad_catalog::{CatalogError, Category, CategoryTree};
use serde_json::json;

use crate::AppState;

/// Category listing failed.
#[derive(Debug, thiserror::Error)]
#[error("category source failed")]
pub struct ApiError(#[from] CatalogError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "category listing failed");
        let body = json!({
            "error": {
                "code": "catalog_unavailable",
                "message": self.0.to_string(),
            }
        });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Handler for `GET /api/categories`.
///
/// Returns the roots in display order after checking sibling slug uniqueness.
pub async fn categories_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let tree = CategoryTree::from_roots(state.categories.get_many()?)?;
    tracing::debug!(count = tree.len(), "categories listed");
    Ok(Json(tree.into_roots()))
}
