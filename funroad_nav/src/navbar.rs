// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Top navigation links and the mobile sidebar toggle.

use funroad_catalog::{CatalogError, Route};

/// A static navigation link.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Display label.
    pub label: &'static str,
    /// Destination path.
    pub href: &'static str,
}

impl NavItem {
    /// Whether this link points at `pathname`. Only exact matches count.
    pub fn is_active(&self, pathname: &str) -> bool {
        self.href == pathname
    }

    /// Destination as a typed route.
    pub fn route(&self) -> Result<Route, CatalogError> {
        Route::parse(self.href)
    }
}

/// Links shown in the navbar and the mobile sidebar, in order.
pub static NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label: "Home",
        href: "/",
    },
    NavItem {
        label: "About",
        href: "/about",
    },
    NavItem {
        label: "Contact",
        href: "/contact",
    },
    NavItem {
        label: "Pricing",
        href: "/pricing",
    },
    NavItem {
        label: "Features",
        href: "/features",
    },
];

/// Account links at the end of the navbar.
pub static AUTH_ITEMS: [NavItem; 2] = [
    NavItem {
        label: "Login",
        href: "/sign-in",
    },
    NavItem {
        label: "Start selling",
        href: "/sign-up",
    },
];

/// Navbar state: the current pathname and whether the mobile sidebar is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Navbar {
    pathname: String,
    sidebar_open: bool,
}

impl Navbar {
    /// Navbar for a page at `pathname`, sidebar closed.
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            sidebar_open: false,
        }
    }

    /// Current pathname.
    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Record a navigation that happened elsewhere.
    pub fn set_pathname(&mut self, pathname: impl Into<String>) {
        self.pathname = pathname.into();
    }

    /// The highlighted link, if the pathname matches one.
    pub fn active_item(&self) -> Option<&'static NavItem> {
        NAV_ITEMS.iter().find(|item| item.is_active(&self.pathname))
    }

    /// Whether the mobile sidebar is open.
    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Open or close the mobile sidebar.
    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    /// Follow `item`: the sidebar closes and the pathname moves to the link.
    pub fn follow(&mut self, item: &NavItem) -> Result<Route, CatalogError> {
        let route = item.route()?;
        self.sidebar_open = false;
        self.pathname = item.href.to_owned();
        Ok(route)
    }
}
