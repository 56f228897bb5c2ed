// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! URL-safe category identifiers.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// URL-safe identifier of a category.
///
/// A slug is non-empty and only contains ASCII lowercase letters, digits, `-` and `_`,
/// so it can be spliced into a path segment as is.
///
/// The sentinel [`Slug::ALL`] names the "everything" pseudo-category; navigating to it
/// lands on the site root rather than on a filtered catalog view.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Text of the sentinel slug.
    pub const ALL: &'static str = "all";

    /// Validate and wrap a slug.
    pub fn new(value: impl Into<String>) -> Result<Self, CatalogError> {
        let value = value.into();
        if is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(CatalogError::InvalidSlug(value))
        }
    }

    /// The sentinel `all` slug.
    pub fn all() -> Self {
        Self(Self::ALL.to_owned())
    }

    /// Returns the slug text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the sentinel [`Slug::ALL`].
    pub fn is_all(&self) -> bool {
        self.0 == Self::ALL
    }
}

fn is_valid(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
}

impl TryFrom<String> for Slug {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Slug {
    type Error = CatalogError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Slug {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Slug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Slug {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
