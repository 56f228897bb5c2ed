// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Slug;

/// Errors produced while building or reading the category catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The string is not a usable slug (empty, or contains characters outside `[a-z0-9_-]`).
    #[error("invalid slug `{0}`")]
    InvalidSlug(String),
    /// Two siblings share a slug.
    #[error(
        "duplicate slug `{slug}` under {}",
        .parent.as_ref().map_or("the root level", Slug::as_str)
    )]
    DuplicateSlug {
        /// Parent of the offending siblings, `None` at the root level.
        parent: Option<Slug>,
        /// The repeated slug.
        slug: Slug,
    },
    /// A root category would shadow a static page route such as `/about`.
    #[error("root slug `{0}` is reserved for a static page")]
    ReservedSlug(Slug),
    /// The path does not name a storefront route.
    #[error("invalid route `{0}`")]
    InvalidRoute(String),
    /// The category document could not be decoded.
    #[error("malformed category document")]
    Malformed(#[from] serde_json::Error),
}
