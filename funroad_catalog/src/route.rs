// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Destination paths produced by the storefront navigation.

use core::fmt;
use core::str::FromStr;

use crate::{CatalogError, Slug};

/// Static marketing and account pages.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StaticPage {
    /// `/about`
    About,
    /// `/contact`
    Contact,
    /// `/pricing`
    Pricing,
    /// `/features`
    Features,
    /// `/sign-in`
    SignIn,
    /// `/sign-up`
    SignUp,
}

impl StaticPage {
    /// Every static page.
    pub const ALL: [Self; 6] = [
        Self::About,
        Self::Contact,
        Self::Pricing,
        Self::Features,
        Self::SignIn,
        Self::SignUp,
    ];

    /// Absolute path of the page.
    pub const fn path(self) -> &'static str {
        match self {
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::Pricing => "/pricing",
            Self::Features => "/features",
            Self::SignIn => "/sign-in",
            Self::SignUp => "/sign-up",
        }
    }

    /// The page whose path is `/{segment}`.
    pub(crate) fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|page| &page.path()[1..] == segment)
    }
}

/// A storefront destination.
///
/// Renders to its path with [`Display`](fmt::Display):
///
/// ```
/// use funroad_catalog::{Route, Slug, StaticPage};
///
/// let shoes = Slug::new("shoes").unwrap();
/// let sneakers = Slug::new("sneakers").unwrap();
/// assert_eq!(Route::Home.to_string(), "/");
/// assert_eq!(Route::for_root(&shoes).to_string(), "/shoes");
/// assert_eq!(Route::for_root(&Slug::all()).to_string(), "/");
/// assert_eq!(Route::for_child(&shoes, &sneakers).to_string(), "/shoes/sneakers");
/// assert_eq!(Route::Page(StaticPage::SignUp).to_string(), "/sign-up");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// The site root, `/`.
    Home,
    /// Catalog view of a top-level category, `/{slug}`.
    Category(Slug),
    /// Catalog view of a subcategory, `/{parent}/{slug}`.
    Subcategory {
        /// Top-level category.
        parent: Slug,
        /// Subcategory within `parent`.
        slug: Slug,
    },
    /// A static page.
    Page(StaticPage),
}

impl Route {
    /// Destination of a top-level leaf; the sentinel slug maps to [`Route::Home`].
    pub fn for_root(slug: &Slug) -> Self {
        if slug.is_all() {
            Self::Home
        } else {
            Self::Category(slug.clone())
        }
    }

    /// Destination of a subcategory leaf.
    pub fn for_child(parent: &Slug, slug: &Slug) -> Self {
        Self::Subcategory {
            parent: parent.clone(),
            slug: slug.clone(),
        }
    }

    /// Parse an absolute path.
    ///
    /// A single segment naming a static page parses as [`Route::Page`]; any other valid
    /// slug parses through [`Route::for_root`], so `/all` is [`Route::Home`].
    pub fn parse(path: &str) -> Result<Self, CatalogError> {
        let invalid = || CatalogError::InvalidRoute(path.to_owned());
        let rest = path.strip_prefix('/').ok_or_else(invalid)?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);
        if rest.is_empty() {
            return Ok(Self::Home);
        }
        let mut segments = rest.split('/');
        let first = segments.next().ok_or_else(invalid)?;
        match (segments.next(), segments.next()) {
            (None, _) => {
                if let Some(page) = StaticPage::from_segment(first) {
                    return Ok(Self::Page(page));
                }
                let slug = Slug::new(first).map_err(|_| invalid())?;
                Ok(Self::for_root(&slug))
            }
            (Some(second), None) => {
                let parent = Slug::new(first).map_err(|_| invalid())?;
                let slug = Slug::new(second).map_err(|_| invalid())?;
                Ok(Self::Subcategory { parent, slug })
            }
            (Some(_), Some(_)) => Err(invalid()),
        }
    }
}

impl FromStr for Route {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("/"),
            Self::Category(slug) => write!(f, "/{slug}"),
            Self::Subcategory { parent, slug } => write!(f, "/{parent}/{slug}"),
            Self::Page(page) => f.write_str(page.path()),
        }
    }
}
