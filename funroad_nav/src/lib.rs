// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Funroad Nav: the state behind the storefront's navigation bar.
//!
//! ## Overview
//!
//! - [`CategoryStrip`]: the horizontal category filter. It measures every pill off-screen,
//!   shows as many as fit, and keeps a trailing "View All" control that opens the drawer.
//! - [`CategoryDrawer`]: the side panel listing the full category tree. Drills one level
//!   into subcategories, goes back, and commits a [`Route`](funroad_catalog::Route) once a
//!   leaf is chosen.
//! - [`StripHover`]: enter/leave transitions for the strip and its pills.
//! - [`Navbar`]: static top-level links and the mobile sidebar toggle.
//!
//! All state here changes on discrete UI events (resize, pointer, data load) and is owned
//! by exactly one component; nothing is shared or locked.
//!
//! ## Example
//!
//! ```
//! use funroad_catalog::{Category, CategoryTree, Route, Slug};
//! use funroad_layout::TextMetrics;
//! use funroad_nav::{CategoryStrip, DrawerOutcome, StripAction};
//! use kurbo::Point;
//!
//! let cat = |s: &str| Category::new(s, s, Slug::new(s).unwrap());
//! let tree = CategoryTree::from_roots(vec![
//!     cat("all"),
//!     cat("shoes").with_subcategories(vec![cat("sneakers")]),
//!     cat("music"),
//! ])
//! .unwrap();
//!
//! let metrics = TextMetrics { advance: 10.0, padding: 10.0, height: 40.0 };
//! let mut strip = CategoryStrip::measured(tree, &metrics);
//! // "all" is 50 wide, "shoes" 70, "music" 70, "View All" 100.
//! let _ = strip.resize(230.0);
//! assert_eq!(strip.visible().len(), 2);
//!
//! // Clicking "View All" opens the drawer; drill into shoes and pick sneakers.
//! assert_eq!(strip.click(Point::new(125.0, 20.0)), StripAction::OpenDrawer);
//! let roots = strip.categories().to_vec();
//! assert_eq!(strip.drawer_mut().select(&roots[1]), DrawerOutcome::Drilled);
//! let sneakers = roots[1].subcategories[0].clone();
//! assert_eq!(
//!     strip.drawer_mut().select(&sneakers),
//!     DrawerOutcome::Navigate(Route::parse("/shoes/sneakers").unwrap())
//! );
//! assert!(!strip.drawer().is_open());
//! ```

mod drawer;
mod hover;
mod navbar;
mod strip;

pub use drawer::{CategoryDrawer, DrawerOutcome, DrawerView};
pub use hover::{HoverEvent, StripHover, StripTarget};
pub use navbar::{AUTH_ITEMS, NAV_ITEMS, NavItem, Navbar};
pub use strip::{CategoryStrip, StripAction, VIEW_ALL_LABEL};
