// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category drawer: the overflow panel listing the full category tree.
//!
//! ## States
//!
//! - [`DrawerView::Root`] lists the top-level categories.
//! - [`DrawerView::Drilled`] lists one parent's subcategories and remembers that parent for
//!   the back button, the background accent and the path of the eventual leaf.
//!
//! ## Transitions
//!
//! | From | Event | To |
//! |------|-------|----|
//! | any | select non-leaf `c` | `Drilled(c)` |
//! | `Root` | select leaf `c` | navigate to `/` (sentinel) or `/{c}`, close |
//! | `Drilled(p)` | select leaf `c` | navigate to `/{p}/{c}`, close |
//! | `Drilled(_)` | back | `Root` |
//! | any | opened or closed | `Root` |

use funroad_catalog::{Category, Route};

/// Background used when no accent applies.
const DEFAULT_BACKGROUND: &str = "white";

/// What the drawer is listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DrawerView {
    /// Top-level categories.
    #[default]
    Root,
    /// Subcategories of the remembered parent.
    Drilled(Category),
}

/// Result of selecting a category in the drawer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawerOutcome {
    /// The selection had subcategories; the drawer now lists them.
    Drilled,
    /// A leaf was chosen; the drawer closed and the caller should navigate.
    Navigate(Route),
}

/// Drill-down state of the category drawer.
#[derive(Clone, Debug, Default)]
pub struct CategoryDrawer {
    open: bool,
    view: DrawerView,
}

impl CategoryDrawer {
    /// A closed drawer at the root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the panel is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current view.
    pub fn view(&self) -> &DrawerView {
        &self.view
    }

    /// Remembered parent while drilled.
    pub fn parent(&self) -> Option<&Category> {
        match &self.view {
            DrawerView::Root => None,
            DrawerView::Drilled(parent) => Some(parent),
        }
    }

    /// Open or close the panel. Either way the view resets to the root.
    pub fn set_open(&mut self, open: bool) {
        self.view = DrawerView::Root;
        self.open = open;
    }

    /// Select `category` from the current listing.
    pub fn select(&mut self, category: &Category) -> DrawerOutcome {
        if !category.is_leaf() {
            tracing::debug!(slug = %category.slug, "drawer drilled");
            self.view = DrawerView::Drilled(category.clone());
            return DrawerOutcome::Drilled;
        }
        let route = match &self.view {
            DrawerView::Root => Route::for_root(&category.slug),
            DrawerView::Drilled(parent) => Route::for_child(&parent.slug, &category.slug),
        };
        tracing::debug!(%route, "drawer navigated");
        self.set_open(false);
        DrawerOutcome::Navigate(route)
    }

    /// Return to the root listing. Returns `false` if already there.
    pub fn back(&mut self) -> bool {
        let drilled = matches!(self.view, DrawerView::Drilled(_));
        self.view = DrawerView::Root;
        drilled
    }

    /// Whether the back control is shown.
    pub fn show_back(&self) -> bool {
        matches!(self.view, DrawerView::Drilled(_))
    }

    /// Categories listed in the current view.
    pub fn current<'a>(&'a self, roots: &'a [Category]) -> &'a [Category] {
        match &self.view {
            DrawerView::Root => roots,
            DrawerView::Drilled(parent) => &parent.subcategories,
        }
    }

    /// Panel background: the drilled parent's accent, or white.
    pub fn background_color(&self) -> &str {
        self.parent()
            .and_then(Category::accent)
            .unwrap_or(DEFAULT_BACKGROUND)
    }
}
