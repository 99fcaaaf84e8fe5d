// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::execution::{JsError, JsResult};

/// Where an accessor property keeps one of its functions.
///
/// Both the getter and the setter of an accessor property always own a slot
/// on the object, even when no function is installed: an absent function
/// still reserves its storage index so that installing one later never has
/// to allocate.
///
/// The raw form used by property-map layouts is a signed integer: `v >= 0`
/// is a present function at slot `v`, `v < 0` is an absent function with
/// slot `-v - 1` reserved. [`AccessorSlot::from_raw`] and
/// [`AccessorSlot::into_raw`] convert losslessly between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccessorSlot {
    index: u32,
    present: bool,
}

impl AccessorSlot {
    /// Largest storage index that still has a raw signed encoding.
    pub const MAX_INDEX: u32 = i32::MAX as u32;

    /// A live function stored at `index`.
    ///
    /// ## Panics
    ///
    /// If `index` is larger than [`AccessorSlot::MAX_INDEX`].
    pub const fn present(index: u32) -> Self {
        assert!(index <= Self::MAX_INDEX);
        Self {
            index,
            present: true,
        }
    }

    /// No function, with `index` reserved for one.
    ///
    /// ## Panics
    ///
    /// If `index` is larger than [`AccessorSlot::MAX_INDEX`].
    pub const fn absent(index: u32) -> Self {
        assert!(index <= Self::MAX_INDEX);
        Self {
            index,
            present: false,
        }
    }

    /// Checked version of [`AccessorSlot::present`] and
    /// [`AccessorSlot::absent`].
    pub fn new(index: u32, present: bool) -> JsResult<Self> {
        if index > Self::MAX_INDEX {
            return Err(JsError::InvalidArgument("accessor slot index out of range"));
        }
        Ok(Self { index, present })
    }

    pub const fn from_raw(raw: i32) -> Self {
        if raw >= 0 {
            Self::present(raw as u32)
        } else {
            Self::absent(Self::effective_index(raw))
        }
    }

    pub const fn into_raw(self) -> i32 {
        if self.present {
            self.index as i32
        } else {
            Self::encode_absent(self.index as i32)
        }
    }

    /// Encode a reserved-but-empty slot number.
    ///
    /// `slot` must be a non-negative slot number; the encoding is applied at
    /// most once.
    pub const fn encode_absent(slot: i32) -> i32 {
        debug_assert!(slot >= 0);
        -slot - 1
    }

    /// Storage index denoted by a raw slot encoding.
    pub const fn effective_index(raw: i32) -> u32 {
        if raw >= 0 {
            raw as u32
        } else {
            // Cannot overflow: raw + 1 > i32::MIN.
            -(raw + 1) as u32
        }
    }

    /// Whether a raw slot encoding denotes a live function.
    pub const fn has_function(raw: i32) -> bool {
        raw > -1
    }

    /// Storage index on the object, regardless of presence.
    pub const fn storage_index(self) -> u32 {
        self.index
    }

    pub const fn is_present(self) -> bool {
        self.present
    }

    /// The same reservation with a function installed.
    pub const fn installed(self) -> Self {
        Self {
            present: true,
            ..self
        }
    }

    /// The same reservation with the function removed.
    pub const fn removed(self) -> Self {
        Self {
            present: false,
            ..self
        }
    }

    pub(crate) const fn with_presence(self, present: bool) -> Self {
        Self { present, ..self }
    }
}
