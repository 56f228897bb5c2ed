// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement and hit testing of the visible row.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::row::ResponsiveRow;
use crate::types::SlotFlags;

/// What a pointer position landed on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowHit {
    /// Visible candidate at this index.
    Item(usize),
    /// The trailing overflow control.
    Trailing,
}

/// A placed slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowSlot {
    /// World-space bounds.
    pub bounds: Rect,
    /// Visibility and picking flags.
    pub flags: SlotFlags,
}

/// The visible items laid out left to right, followed by the trailing control.
#[derive(Clone, Debug, PartialEq)]
pub struct RowLayout {
    items: Vec<RowSlot>,
    trailing: RowSlot,
}

impl RowLayout {
    /// Place the row's visible items starting at `origin`, each `height` tall.
    pub fn arrange(row: &ResponsiveRow, origin: Point, height: f64) -> Self {
        let mut x = origin.x;
        let mut place = |width: f64| {
            let bounds = Rect::new(x, origin.y, x + width, origin.y + height);
            x += width;
            RowSlot {
                bounds,
                flags: SlotFlags::default(),
            }
        };
        let items = row
            .shadow()
            .widths()
            .take(row.visible_count())
            .map(&mut place)
            .collect();
        let trailing = place(row.trailing_width());
        Self { items, trailing }
    }

    /// Placed visible items.
    pub fn items(&self) -> &[RowSlot] {
        &self.items
    }

    /// Placed trailing control.
    pub fn trailing(&self) -> &RowSlot {
        &self.trailing
    }

    /// Union of every placed slot.
    pub fn bounds(&self) -> Rect {
        self.items
            .iter()
            .fold(self.trailing.bounds, |acc, s| acc.union(s.bounds))
    }

    /// Replace the flags of a slot. Unknown items are ignored.
    pub fn set_flags(&mut self, target: RowHit, flags: SlotFlags) {
        match target {
            RowHit::Item(i) => {
                if let Some(slot) = self.items.get_mut(i) {
                    slot.flags = flags;
                }
            }
            RowHit::Trailing => self.trailing.flags = flags,
        }
    }

    /// The pickable slot containing `pt`, if any. Bounds are half-open on the right and bottom.
    pub fn hit_test(&self, pt: Point) -> Option<RowHit> {
        let pickable = |s: &RowSlot| s.flags.contains(SlotFlags::PICKABLE) && s.bounds.contains(pt);
        if pickable(&self.trailing) {
            return Some(RowHit::Trailing);
        }
        self.items.iter().position(pickable).map(RowHit::Item)
    }
}
