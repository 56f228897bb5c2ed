// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered category roots with per-level slug uniqueness.

use std::collections::HashSet;

use crate::{CatalogError, Category, Slug, StaticPage};

/// The ordered top-level categories of the storefront.
///
/// Construction validates that no two siblings share a slug, at the root level and
/// inside every parent's subcategory list. Slugs may repeat across levels
/// (`/shoes/other` and `/bags/other` are distinct routes).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryTree {
    roots: Vec<Category>,
}

impl CategoryTree {
    /// An empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from ordered roots, rejecting duplicate sibling slugs.
    pub fn from_roots(roots: Vec<Category>) -> Result<Self, CatalogError> {
        Self::validate(&roots)?;
        Ok(Self { roots })
    }

    /// Check sibling slug uniqueness of `roots` and every subcategory list below them.
    ///
    /// Root slugs must also not collide with a static page (`about`, `sign-in`, ...),
    /// whose path would otherwise shadow the category route.
    pub fn validate(roots: &[Category]) -> Result<(), CatalogError> {
        if let Some(reserved) = roots
            .iter()
            .find(|c| StaticPage::from_segment(c.slug.as_str()).is_some())
        {
            return Err(CatalogError::ReservedSlug(reserved.slug.clone()));
        }
        validate_level(None, roots)
    }

    /// Build a tree from a "get many" result; an absent result is an empty tree.
    pub fn from_get_many(result: Option<Vec<Category>>) -> Result<Self, CatalogError> {
        Self::from_roots(result.unwrap_or_default())
    }

    /// Top-level categories in display order.
    pub fn roots(&self) -> &[Category] {
        &self.roots
    }

    /// Number of top-level categories.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Whether there are no categories at all.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Iterate top-level categories in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Category> {
        self.roots.iter()
    }

    /// Top-level category by slug.
    pub fn get(&self, slug: &str) -> Option<&Category> {
        self.roots.iter().find(|c| c.slug == slug)
    }

    /// Display index of a top-level category.
    pub fn position(&self, slug: &str) -> Option<usize> {
        self.roots.iter().position(|c| c.slug == slug)
    }

    /// Subcategory `child` of top-level `parent`.
    pub fn child(&self, parent: &str, child: &str) -> Option<&Category> {
        self.get(parent)?
            .subcategories
            .iter()
            .find(|c| c.slug == child)
    }

    /// Consume the tree, returning its roots.
    pub fn into_roots(self) -> Vec<Category> {
        self.roots
    }
}

impl<'a> IntoIterator for &'a CategoryTree {
    type Item = &'a Category;
    type IntoIter = core::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}

fn validate_level(parent: Option<&Slug>, level: &[Category]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(level.len());
    for category in level {
        if !seen.insert(category.slug.as_str()) {
            return Err(CatalogError::DuplicateSlug {
                parent: parent.cloned(),
                slug: category.slug.clone(),
            });
        }
        validate_level(Some(&category.slug), &category.subcategories)?;
    }
    Ok(())
}
