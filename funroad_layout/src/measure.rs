// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Off-screen measurement of row candidates.

use alloc::vec::Vec;

use kurbo::Size;

use crate::types::Slot;

/// Reports the natural size of an item.
pub trait Measure<T: ?Sized> {
    /// Natural rendered size of `item`, independent of the space available to it.
    fn measure(&self, item: &T) -> Size;
}

impl<T: ?Sized, F: Fn(&T) -> Size> Measure<T> for F {
    fn measure(&self, item: &T) -> Size {
        self(item)
    }
}

/// Precomputed text metrics for pill-shaped labels.
///
/// Width is `2 * padding + advance * chars`, height is constant. Useful where no renderer
/// is available to measure real glyphs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// Horizontal advance of one character.
    pub advance: f64,
    /// Padding on each side of the label.
    pub padding: f64,
    /// Height of every pill.
    pub height: f64,
}

impl Measure<str> for TextMetrics {
    fn measure(&self, item: &str) -> Size {
        let chars = item.chars().count() as f64;
        Size::new(2.0 * self.padding + self.advance * chars, self.height)
    }
}

/// Natural sizes of every candidate, in order.
///
/// This is the invisible clone list: built once per candidate set and read by
/// [`ResponsiveRow`](crate::ResponsiveRow) whenever it re-derives the visible count.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShadowList {
    slots: Vec<Slot>,
}

impl ShadowList {
    /// Measure every item with `measurer`.
    pub fn measure<'a, T, M, I>(items: I, measurer: &M) -> Self
    where
        T: ?Sized + 'a,
        M: Measure<T>,
        I: IntoIterator<Item = &'a T>,
    {
        Self {
            slots: items
                .into_iter()
                .map(|item| Slot::shadow(measurer.measure(item)))
                .collect(),
        }
    }

    /// Build a shadow list from known widths (height zero).
    pub fn from_widths(widths: impl IntoIterator<Item = f64>) -> Self {
        Self {
            slots: widths
                .into_iter()
                .map(|w| Slot::shadow(Size::new(w, 0.0)))
                .collect(),
        }
    }

    /// Number of measured candidates.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Measured slots in order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Natural widths in order.
    pub fn widths(&self) -> impl Iterator<Item = f64> + '_ {
        self.slots.iter().map(|s| s.size.width)
    }

    /// Natural width of candidate `index`.
    pub fn width(&self, index: usize) -> Option<f64> {
        self.slots.get(index).map(|s| s.size.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SlotFlags;
    use alloc::vec;

    #[test]
    fn text_metrics_count_chars_not_bytes() {
        let m = TextMetrics {
            advance: 10.0,
            padding: 5.0,
            height: 40.0,
        };
        assert_eq!(m.measure("abc"), Size::new(40.0, 40.0));
        assert_eq!(m.measure("café"), Size::new(50.0, 40.0));
        assert_eq!(m.measure(""), Size::new(10.0, 40.0));
    }

    #[test]
    fn shadow_slots_are_never_visible_or_pickable() {
        let list = ShadowList::from_widths([10.0, 20.0]);
        assert!(list.slots().iter().all(|s| s.flags == SlotFlags::empty()));
        assert_eq!(list.widths().collect::<Vec<_>>(), vec![10.0, 20.0]);
        assert_eq!(list.width(1), Some(20.0));
        assert_eq!(list.width(2), None);
    }

    #[test]
    fn closures_measure_too() {
        let items = [3_u32, 1, 2];
        let list = ShadowList::measure(&items, &|n: &u32| Size::new(f64::from(*n) * 10.0, 1.0));
        assert_eq!(list.widths().collect::<Vec<_>>(), vec![30.0, 10.0, 20.0]);
        assert_eq!(list.len(), 3);
    }
}
