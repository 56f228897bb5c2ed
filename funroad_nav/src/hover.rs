// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking for the category strip.
//!
//! The pointer's position is expressed as a path from the strip container down to the
//! pill under it, for example `[Strip, Item(2)]`, or just `[Strip]` over empty space.
//! [`StripHover::update_path`] compares the new path with the previous one and emits the
//! minimal set of transitions:
//!
//! - leaves from inner-most to outer-most,
//! - then enters from outer-most to inner-most.
//!
//! ```
//! use funroad_nav::{HoverEvent, StripHover, StripTarget};
//!
//! let mut hover = StripHover::new();
//! assert_eq!(
//!     hover.update_path(&[StripTarget::Strip, StripTarget::Item(0)]),
//!     vec![HoverEvent::Enter(StripTarget::Strip), HoverEvent::Enter(StripTarget::Item(0))]
//! );
//! assert_eq!(
//!     hover.update_path(&[StripTarget::Strip, StripTarget::ViewAll]),
//!     vec![HoverEvent::Leave(StripTarget::Item(0)), HoverEvent::Enter(StripTarget::ViewAll)]
//! );
//! assert!(hover.is_any_hovered());
//! ```

use funroad_layout::RowHit;

/// Something in the strip the pointer can be over.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StripTarget {
    /// The strip container.
    Strip,
    /// A visible category pill.
    Item(usize),
    /// The trailing "View All" control.
    ViewAll,
}

impl StripTarget {
    /// Hover path for a pointer inside the strip that landed on `hit`.
    pub fn path(hit: Option<RowHit>) -> Vec<Self> {
        let mut path = vec![Self::Strip];
        match hit {
            Some(RowHit::Item(i)) => path.push(Self::Item(i)),
            Some(RowHit::Trailing) => path.push(Self::ViewAll),
            None => {}
        }
        path
    }
}

/// A hover transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    /// Pointer entered the target.
    Enter(StripTarget),
    /// Pointer left the target.
    Leave(StripTarget),
}

/// Current hover path of the strip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StripHover {
    current: Vec<StripTarget>,
}

impl StripHover {
    /// Nothing hovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current container→target path.
    pub fn current_path(&self) -> &[StripTarget] {
        &self.current
    }

    /// Whether the pointer is anywhere over the strip.
    pub fn is_any_hovered(&self) -> bool {
        !self.current.is_empty()
    }

    /// Pointer left the strip entirely.
    pub fn clear(&mut self) -> Vec<HoverEvent> {
        let out = self
            .current
            .iter()
            .rev()
            .map(|&t| HoverEvent::Leave(t))
            .collect();
        self.current.clear();
        out
    }

    /// Move to `new_path`, returning the transitions from the previous path.
    pub fn update_path(&mut self, new_path: &[StripTarget]) -> Vec<HoverEvent> {
        let shared = self
            .current
            .iter()
            .zip(new_path)
            .take_while(|(a, b)| a == b)
            .count();

        let mut out: Vec<HoverEvent> = self.current[shared..]
            .iter()
            .rev()
            .map(|&t| HoverEvent::Leave(t))
            .collect();
        out.extend(new_path[shared..].iter().map(|&t| HoverEvent::Enter(t)));

        self.current.clear();
        self.current.extend_from_slice(new_path);
        out
    }
}
