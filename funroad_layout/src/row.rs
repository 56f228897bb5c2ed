// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive visible-count state.
//!
//! ## Triggers
//!
//! The count is re-derived on exactly two events:
//! - the container is resized ([`ResponsiveRow::observe_resize`]);
//! - the number of candidates changes ([`ResponsiveRow::replace_items`]).
//!
//! Anything else (new trailing width, same-length candidate refresh) is stored and picked up
//! by the next trigger. Re-derivation reads only current measurements, so a late resize
//! notification always produces the same answer as a fresh one.

use crate::fit;
use crate::measure::ShadowList;

/// Outcome of a trigger.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Update {
    /// Measurements were unavailable; the count was left alone.
    Skipped,
    /// The count was re-derived and did not change.
    Unchanged,
    /// The count was re-derived and changed.
    Changed {
        /// Previous count.
        from: usize,
        /// New count.
        to: usize,
    },
}

impl Update {
    /// Whether the visible count changed.
    pub fn is_changed(self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// Visible-count state of one row, owned for the lifetime of the component that shows it.
#[derive(Clone, Debug)]
pub struct ResponsiveRow {
    shadow: ShadowList,
    container_width: f64,
    trailing_width: f64,
    visible_count: usize,
}

impl ResponsiveRow {
    /// Create a row over `shadow` with a trailing control of `trailing_width`.
    ///
    /// Until the first resize every candidate counts as visible.
    pub fn new(shadow: ShadowList, trailing_width: f64) -> Self {
        Self {
            visible_count: shadow.len(),
            shadow,
            container_width: 0.0,
            trailing_width,
        }
    }

    /// Number of leading candidates shown inline.
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.shadow.len()
    }

    /// Whether the row has no candidates.
    pub fn is_empty(&self) -> bool {
        self.shadow.is_empty()
    }

    /// Last observed container width (zero before layout).
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Width reserved for the trailing control.
    pub fn trailing_width(&self) -> f64 {
        self.trailing_width
    }

    /// Current measurements.
    pub fn shadow(&self) -> &ShadowList {
        &self.shadow
    }

    /// Record a new container width and re-derive the count.
    pub fn observe_resize(&mut self, container_width: f64) -> Update {
        self.container_width = container_width;
        self.recompute()
    }

    /// Record a new trailing-control width. Takes effect on the next trigger.
    pub fn set_trailing_width(&mut self, trailing_width: f64) {
        self.trailing_width = trailing_width;
    }

    /// Replace the measured candidates.
    ///
    /// Re-derives the count only if the number of candidates changed. The stored count is
    /// clamped to the new length either way.
    pub fn replace_items(&mut self, shadow: ShadowList) -> Update {
        let resized = shadow.len() != self.shadow.len();
        self.shadow = shadow;
        let clamped = self.visible_count.min(self.shadow.len());
        let before = self.visible_count;
        self.visible_count = clamped;
        if resized {
            match self.recompute() {
                Update::Skipped | Update::Unchanged if clamped != before => Update::Changed {
                    from: before,
                    to: clamped,
                },
                Update::Changed { to, .. } => Update::Changed { from: before, to },
                other => other,
            }
        } else {
            Update::Unchanged
        }
    }

    /// Split `items` into the inline subset and the overflow subset.
    ///
    /// `items` is expected to be in the same order as the measured candidates.
    pub fn split<'a, T>(&self, items: &'a [T]) -> (&'a [T], &'a [T]) {
        items.split_at(self.visible_count.min(items.len()))
    }

    /// Whether candidate `index` is only reachable through the overflow control.
    pub fn is_hidden(&self, index: usize) -> bool {
        index >= self.visible_count
    }

    fn recompute(&mut self) -> Update {
        let Some(count) = fit::fit(self.container_width, self.trailing_width, self.shadow.widths())
        else {
            return Update::Skipped;
        };
        let from = self.visible_count;
        self.visible_count = count;
        if from == count {
            Update::Unchanged
        } else {
            Update::Changed { from, to: count }
        }
    }
}
