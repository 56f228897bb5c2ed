// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Funroad Catalog: the read-only category model behind the storefront navigation.
//!
//! Categories arrive from the content backend as an ordered list with at most one
//! level of nesting. This crate gives that list a typed shape and the handful of
//! rules the navigation relies on.
//!
//! - [`Slug`]: validated, URL-safe identifier. The sentinel [`Slug::ALL`] maps to the site root.
//! - [`Category`]: name, slug, optional accent color and optional subcategories.
//! - [`CategoryTree`]: ordered roots with slug uniqueness enforced per sibling level.
//! - [`Route`]: the destination paths the navigation produces (`/`, `/{slug}`,
//!   `/{parent}/{slug}` and the static pages).
//! - [`CategorySource`]: the parameterless "get many" contract, with in-memory and JSON
//!   implementations.
//!
//! ## Example
//!
//! ```
//! use funroad_catalog::{CategorySource, CategoryTree, JsonSource, Route};
//!
//! let source = JsonSource::new(
//!     br##"[
//!         {"id": "1", "name": "All", "slug": "all"},
//!         {"id": "2", "name": "Shoes", "slug": "shoes", "color": "#FFB347",
//!          "subcategories": [{"id": "3", "name": "Sneakers", "slug": "sneakers"}]}
//!     ]"##.to_vec(),
//! );
//!
//! let tree = CategoryTree::from_roots(source.get_many().unwrap()).unwrap();
//! assert_eq!(tree.len(), 2);
//!
//! let shoes = tree.get("shoes").unwrap();
//! assert!(!shoes.is_leaf());
//! assert_eq!(Route::for_root(&tree.roots()[0].slug).to_string(), "/");
//! let sneakers = &shoes.subcategories[0];
//! assert_eq!(Route::for_child(&shoes.slug, &sneakers.slug).to_string(), "/shoes/sneakers");
//! ```
//!
//! Caching, invalidation and retry of fetched data are left to the caller.

mod category;
mod error;
mod route;
mod slug;
mod source;
mod tree;

pub use category::Category;
pub use error::CatalogError;
pub use route::{Route, StaticPage};
pub use slug::Slug;
pub use source::{CategorySource, JsonSource, StaticSource, parse_get_many};
pub use tree::CategoryTree;
