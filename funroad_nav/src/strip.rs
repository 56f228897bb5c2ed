// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The responsive category strip shown under the navbar.

use funroad_catalog::{Category, CategoryTree, Route, Slug};
use funroad_layout::{Measure, ResponsiveRow, RowHit, RowLayout, ShadowList, Update};
use kurbo::{Point, Rect, Size};

use crate::drawer::CategoryDrawer;
use crate::hover::{HoverEvent, StripHover, StripTarget};

/// Label of the trailing overflow control.
pub const VIEW_ALL_LABEL: &str = "View All";

/// What a click on the strip asks the caller to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StripAction {
    /// The click missed every control.
    None,
    /// A pill was clicked; navigate to its catalog view.
    Navigate(Route),
    /// "View All" was clicked; the drawer is now open.
    OpenDrawer,
}

/// Category pills that fit inline, a "View All" control, and the drawer behind it.
///
/// The active category defaults to the sentinel `all`. When the active pill has been pushed
/// into the overflow, "View All" is highlighted instead, unless the pointer is over the strip.
#[derive(Clone, Debug)]
pub struct CategoryStrip {
    tree: CategoryTree,
    active: Slug,
    row: ResponsiveRow,
    layout: RowLayout,
    origin: Point,
    view_all: Size,
    height: f64,
    hover: StripHover,
    drawer: CategoryDrawer,
}

impl CategoryStrip {
    /// Build a strip from pre-measured pills and the natural size of "View All".
    ///
    /// `shadow` must hold one measurement per root of `tree`, in order.
    pub fn new(tree: CategoryTree, shadow: ShadowList, view_all: Size) -> Self {
        let height = row_height(&shadow, view_all);
        let row = ResponsiveRow::new(shadow, view_all.width);
        let origin = Point::ZERO;
        Self {
            layout: RowLayout::arrange(&row, origin, height),
            tree,
            active: Slug::all(),
            row,
            origin,
            view_all,
            height,
            hover: StripHover::new(),
            drawer: CategoryDrawer::new(),
        }
    }

    /// Build a strip, measuring pill labels and "View All" with `metrics`.
    pub fn measured<M: Measure<str>>(tree: CategoryTree, metrics: &M) -> Self {
        let shadow = measure_roots(&tree, metrics);
        let view_all = metrics.measure(VIEW_ALL_LABEL);
        Self::new(tree, shadow, view_all)
    }

    /// Move the strip's top-left corner.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
        self.rearrange();
    }

    /// Every top-level category, visible or not.
    pub fn categories(&self) -> &[Category] {
        self.tree.roots()
    }

    /// The category tree.
    pub fn tree(&self) -> &CategoryTree {
        &self.tree
    }

    /// Categories shown inline.
    pub fn visible(&self) -> &[Category] {
        self.row.split(self.tree.roots()).0
    }

    /// Categories reachable only through "View All".
    pub fn overflow(&self) -> &[Category] {
        self.row.split(self.tree.roots()).1
    }

    /// Visible-count state.
    pub fn row(&self) -> &ResponsiveRow {
        &self.row
    }

    /// Current placement of pills and "View All".
    pub fn layout(&self) -> &RowLayout {
        &self.layout
    }

    /// Container resized.
    pub fn resize(&mut self, container_width: f64) -> Update {
        let update = self.row.observe_resize(container_width);
        if let Update::Changed { from, to } = update {
            tracing::debug!(from, to, container_width, "category strip visible count changed");
        }
        self.rearrange();
        update
    }

    /// Catalog reloaded with `shadow` measurements for the new roots.
    pub fn set_categories(&mut self, tree: CategoryTree, shadow: ShadowList) -> Update {
        self.height = row_height(&shadow, self.view_all);
        self.tree = tree;
        let update = self.row.replace_items(shadow);
        self.rearrange();
        update
    }

    /// Catalog reloaded; measure the new roots with `metrics`.
    pub fn remeasure<M: Measure<str>>(&mut self, tree: CategoryTree, metrics: &M) -> Update {
        let shadow = measure_roots(&tree, metrics);
        self.set_categories(tree, shadow)
    }

    /// Slug of the active category.
    pub fn active(&self) -> &Slug {
        &self.active
    }

    /// Change the active category.
    pub fn set_active(&mut self, slug: Slug) {
        self.active = slug;
    }

    /// Whether `category` is the active one.
    pub fn is_active(&self, category: &Category) -> bool {
        category.slug == self.active
    }

    /// Display index of the active category, if it is in the catalog.
    pub fn active_index(&self) -> Option<usize> {
        self.tree.position(self.active.as_str())
    }

    /// Whether the active category is only reachable through "View All".
    pub fn active_hidden(&self) -> bool {
        self.active_index().is_some_and(|i| self.row.is_hidden(i))
    }

    /// Whether "View All" stands in for a hidden active category.
    pub fn view_all_highlighted(&self) -> bool {
        self.active_hidden() && !self.hover.is_any_hovered()
    }

    /// Whether the pointer is anywhere over the strip.
    pub fn is_any_hovered(&self) -> bool {
        self.hover.is_any_hovered()
    }

    /// Bounds of the strip container.
    pub fn container(&self) -> Rect {
        let width = self.row.container_width().max(0.0);
        Rect::from_origin_size(self.origin, Size::new(width, self.height))
    }

    /// Pointer moved to `pt`.
    pub fn pointer_move(&mut self, pt: Point) -> Vec<HoverEvent> {
        if self.container().contains(pt) {
            let path = StripTarget::path(self.layout.hit_test(pt));
            self.hover.update_path(&path)
        } else {
            self.hover.clear()
        }
    }

    /// Pointer left the window or the strip.
    pub fn pointer_leave(&mut self) -> Vec<HoverEvent> {
        self.hover.clear()
    }

    /// Pointer clicked at `pt`.
    pub fn click(&mut self, pt: Point) -> StripAction {
        match self.layout.hit_test(pt) {
            Some(RowHit::Item(i)) => match self.visible().get(i) {
                Some(category) => StripAction::Navigate(Route::for_root(&category.slug)),
                None => StripAction::None,
            },
            Some(RowHit::Trailing) => {
                self.drawer.set_open(true);
                StripAction::OpenDrawer
            }
            None => StripAction::None,
        }
    }

    /// The drawer behind "View All".
    pub fn drawer(&self) -> &CategoryDrawer {
        &self.drawer
    }

    /// Mutable access to the drawer, for selections, back and close.
    pub fn drawer_mut(&mut self) -> &mut CategoryDrawer {
        &mut self.drawer
    }

    /// Categories listed by the drawer in its current view.
    pub fn drawer_listing(&self) -> &[Category] {
        self.drawer.current(self.tree.roots())
    }

    fn rearrange(&mut self) {
        self.layout = RowLayout::arrange(&self.row, self.origin, self.height);
    }
}

fn measure_roots<M: Measure<str>>(tree: &CategoryTree, metrics: &M) -> ShadowList {
    ShadowList::measure(tree.iter().map(|c| c.name.as_str()), metrics)
}

fn row_height(shadow: &ShadowList, view_all: Size) -> f64 {
    shadow
        .slots()
        .iter()
        .map(|s| s.size.height)
        .fold(view_all.height, f64::max)
}
