// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Funroad Layout: decide how many variable-width items fit in a row before the rest
//! collapse behind an overflow control.
//!
//! The navigation bar shows a horizontal strip of category pills followed by a fixed
//! "View All" control. Pills that do not fit are reachable only through that control.
//! This crate holds the geometry side of that affordance.
//!
//! - [`ShadowList`]: natural sizes of every candidate, measured off-screen so visible layout
//!   is never disturbed. Slots carry no [`SlotFlags`]: they are neither drawn nor picked.
//! - [`fit`]: the width accumulator. A greedy left-to-right scan; the first item that would
//!   overflow the budget and everything after it are excluded.
//! - [`ResponsiveRow`]: owns the visible count and re-derives it on container resize and when
//!   the number of candidates changes, nothing else.
//! - [`RowLayout`]: places the visible items and the trailing control and hit-tests pointer
//!   positions against them.
//!
//! ## Not a layout engine
//!
//! Measurement itself is environment bound. Upstream code supplies natural sizes, either from a
//! real renderer or from a precomputed table such as [`TextMetrics`], through the
//! [`Measure`] trait.
//!
//! ## Example
//!
//! ```
//! use funroad_layout::{ResponsiveRow, RowHit, RowLayout, ShadowList, TextMetrics, Update};
//! use kurbo::Point;
//!
//! let labels = ["All", "Music", "Design", "Software Development", "Fitness"];
//! let metrics = TextMetrics { advance: 8.0, padding: 16.0, height: 44.0 };
//! let shadow = ShadowList::measure(labels, &metrics);
//!
//! let mut row = ResponsiveRow::new(shadow, 96.0);
//! assert_eq!(row.visible_count(), labels.len());
//!
//! // Before layout the container has no width and nothing changes.
//! assert_eq!(row.observe_resize(0.0), Update::Skipped);
//!
//! // 400 - 96 leaves 304: "All" (56) + "Music" (72) + "Design" (80) fit, the rest overflow.
//! assert_eq!(row.observe_resize(400.0), Update::Changed { from: 5, to: 3 });
//! let (shown, hidden) = row.split(&labels);
//! assert_eq!(shown, ["All", "Music", "Design"]);
//! assert_eq!(hidden, ["Software Development", "Fitness"]);
//!
//! let layout = RowLayout::arrange(&row, Point::ZERO, 44.0);
//! assert_eq!(layout.hit_test(Point::new(60.0, 10.0)), Some(RowHit::Item(1)));
//! assert_eq!(layout.hit_test(Point::new(210.0, 10.0)), Some(RowHit::Trailing));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod arrange;
pub mod fit;
mod measure;
mod row;
mod types;

pub use arrange::{RowHit, RowLayout, RowSlot};
pub use measure::{Measure, ShadowList, TextMetrics};
pub use row::{ResponsiveRow, Update};
pub use types::{Slot, SlotFlags};
