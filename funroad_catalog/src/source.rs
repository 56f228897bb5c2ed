// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The "get many" category contract.
//!
//! A source answers a parameterless request with the ordered top-level categories.
//! There is no pagination, caching or retry at this layer.

use std::sync::Arc;

use crate::{CatalogError, Category};

/// Something that can list every category.
pub trait CategorySource {
    /// Fetch all categories in display order.
    fn get_many(&self) -> Result<Vec<Category>, CatalogError>;
}

impl<S: CategorySource + ?Sized> CategorySource for Arc<S> {
    fn get_many(&self) -> Result<Vec<Category>, CatalogError> {
        (**self).get_many()
    }
}

impl<S: CategorySource + ?Sized> CategorySource for &S {
    fn get_many(&self) -> Result<Vec<Category>, CatalogError> {
        (**self).get_many()
    }
}

/// Decode a "get many" response body.
///
/// The body is a JSON array of categories; a `null` body means "no categories".
pub fn parse_get_many(body: &[u8]) -> Result<Vec<Category>, CatalogError> {
    let decoded: Option<Vec<Category>> = serde_json::from_slice(body)?;
    Ok(decoded.unwrap_or_default())
}

/// In-memory source returning a fixed list.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    categories: Vec<Category>,
}

impl StaticSource {
    /// Serve `categories` on every request.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }
}

impl CategorySource for StaticSource {
    fn get_many(&self) -> Result<Vec<Category>, CatalogError> {
        Ok(self.categories.clone())
    }
}

/// Source backed by a JSON document, decoded on every request.
#[derive(Clone, Debug)]
pub struct JsonSource {
    document: Vec<u8>,
}

impl JsonSource {
    /// Wrap a JSON document in the "get many" wire shape.
    pub fn new(document: Vec<u8>) -> Self {
        Self { document }
    }
}

impl CategorySource for JsonSource {
    fn get_many(&self) -> Result<Vec<Category>, CatalogError> {
        parse_get_many(&self.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Slug;

    #[test]
    fn null_document_is_empty() {
        assert!(parse_get_many(b"null").unwrap().is_empty());
        assert!(parse_get_many(b"[]").unwrap().is_empty());
    }

    #[test]
    fn malformed_document_reports_decode_error() {
        let err = JsonSource::new(b"{\"docs\": 1}".to_vec()).get_many().unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
        let err = parse_get_many(br#"[{"name":"X","slug":"Bad Slug"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn sources_preserve_order() {
        let music = Category::new("1", "Music", Slug::new("music").unwrap());
        let books = Category::new("2", "Books", Slug::new("books").unwrap());
        let source = Arc::new(StaticSource::new(vec![music.clone(), books.clone()]));
        assert_eq!(source.get_many().unwrap(), vec![music, books]);

        let json = JsonSource::new(
            br#"[{"id":"2","name":"Books","slug":"books"},
                 {"id":"1","name":"Music","slug":"music"}]"#
                .to_vec(),
        );
        let slugs: Vec<String> = (&json)
            .get_many()
            .unwrap()
            .into_iter()
            .map(|c| c.slug.into())
            .collect();
        assert_eq!(slugs, ["books", "music"]);
    }
}
