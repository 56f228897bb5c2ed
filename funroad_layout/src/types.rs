// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slot flags and measured slots.

use kurbo::Size;

bitflags::bitflags! {
    /// Slot flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SlotFlags: u8 {
        /// Slot is drawn in the visible row.
        const VISIBLE  = 0b0000_0001;
        /// Slot participates in hit testing.
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for SlotFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// A measured candidate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot {
    /// Natural rendered size.
    pub size: Size,
    /// Visibility and picking flags. Shadow slots are always empty.
    pub flags: SlotFlags,
}

impl Slot {
    /// A slot for the off-screen measurement pass: invisible and never picked.
    pub const fn shadow(size: Size) -> Self {
        Self {
            size,
            flags: SlotFlags::empty(),
        }
    }
}
