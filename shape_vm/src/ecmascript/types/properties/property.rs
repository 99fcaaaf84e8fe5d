// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use bitflags::bitflags;

use super::AccessorProperty;
use crate::ecmascript::{
    execution::{JsError, JsResult},
    types::{EMBED_SIZE, PropertyKey},
};

bitflags! {
    /// Attributes of a property as stored in a property map.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PropertyFlags: u8 {
        /// \[\[Writable]]; only meaningful for data properties.
        const WRITABLE = 1 << 0;
        /// \[\[Enumerable]]
        const ENUMERABLE = 1 << 1;
        /// \[\[Configurable]]
        const CONFIGURABLE = 1 << 2;
        /// Kind marker: the property's value is computed by a getter/setter
        /// pair.
        const ACCESSOR = 1 << 3;
    }
}

impl Default for PropertyFlags {
    /// Writable, enumerable, configurable data property.
    fn default() -> Self {
        Self::WRITABLE | Self::ENUMERABLE | Self::CONFIGURABLE
    }
}

impl PropertyFlags {
    pub const fn is_writable(self) -> bool {
        self.contains(Self::WRITABLE)
    }

    pub const fn is_enumerable(self) -> bool {
        self.contains(Self::ENUMERABLE)
    }

    pub const fn is_configurable(self) -> bool {
        self.contains(Self::CONFIGURABLE)
    }

    pub const fn is_accessor(self) -> bool {
        self.contains(Self::ACCESSOR)
    }
}

/// Fields shared by every kind of property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyBase {
    key: PropertyKey,
    flags: PropertyFlags,
}

impl PropertyBase {
    pub fn new(key: PropertyKey, flags: PropertyFlags) -> JsResult<Self> {
        if key.is_empty() {
            return Err(JsError::InvalidArgument("empty property key"));
        }
        Ok(Self { key, flags })
    }

    pub fn key(&self) -> PropertyKey {
        self.key
    }

    pub fn flags(&self) -> PropertyFlags {
        self.flags
    }

    pub(crate) fn with_flags(self, flags: PropertyFlags) -> Self {
        Self { flags, ..self }
    }
}

/// Capabilities every property kind provides to the property map and to
/// object storage.
pub trait PropertyBehaviour {
    fn base(&self) -> &PropertyBase;

    fn key(&self) -> PropertyKey {
        self.base().key()
    }

    fn flags(&self) -> PropertyFlags {
        self.base().flags()
    }

    /// How many of this property's slots fall into the spill array.
    fn spill_slot_count(&self) -> u32;

    fn has_getter_function(&self) -> bool {
        false
    }

    fn has_setter_function(&self) -> bool {
        false
    }

    fn is_writable(&self) -> bool {
        self.flags().is_writable()
    }

    fn is_enumerable(&self) -> bool {
        self.flags().is_enumerable()
    }

    fn is_configurable(&self) -> bool {
        self.flags().is_configurable()
    }

    /// True when the property's value is computed by a getter/setter pair.
    fn is_accessor(&self) -> bool {
        self.flags().is_accessor()
    }
}

/// A property whose value is stored directly in one object slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataProperty {
    base: PropertyBase,
    slot: u32,
}

impl DataProperty {
    pub fn new(key: PropertyKey, flags: PropertyFlags, slot: u32) -> JsResult<Self> {
        let flags = flags.difference(PropertyFlags::ACCESSOR);
        Ok(Self {
            base: PropertyBase::new(key, flags)?,
            slot,
        })
    }

    pub fn slot(&self) -> u32 {
        self.slot
    }

    pub fn copy(&self) -> Self {
        *self
    }

    pub fn with_flags(&self, flags: PropertyFlags) -> Self {
        Self {
            base: self
                .base
                .with_flags(flags.difference(PropertyFlags::ACCESSOR)),
            slot: self.slot,
        }
    }
}

impl PropertyBehaviour for DataProperty {
    fn base(&self) -> &PropertyBase {
        &self.base
    }

    fn spill_slot_count(&self) -> u32 {
        u32::from(self.slot >= EMBED_SIZE)
    }
}

/// Every kind of property a property map can hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Property {
    Data(DataProperty),
    Accessor(AccessorProperty),
}

impl Property {
    pub fn as_accessor(&self) -> Option<&AccessorProperty> {
        match self {
            Property::Accessor(accessor) => Some(accessor),
            Property::Data(_) => None,
        }
    }

    pub fn copy(&self) -> Self {
        match self {
            Property::Data(data) => Property::Data(data.copy()),
            Property::Accessor(accessor) => Property::Accessor(accessor.copy()),
        }
    }
}

impl PropertyBehaviour for Property {
    fn base(&self) -> &PropertyBase {
        match self {
            Property::Data(data) => data.base(),
            Property::Accessor(accessor) => accessor.base(),
        }
    }

    fn spill_slot_count(&self) -> u32 {
        match self {
            Property::Data(data) => data.spill_slot_count(),
            Property::Accessor(accessor) => accessor.spill_slot_count(),
        }
    }

    fn has_getter_function(&self) -> bool {
        match self {
            Property::Data(data) => data.has_getter_function(),
            Property::Accessor(accessor) => accessor.has_getter_function(),
        }
    }

    fn has_setter_function(&self) -> bool {
        match self {
            Property::Data(data) => data.has_setter_function(),
            Property::Accessor(accessor) => accessor.has_setter_function(),
        }
    }
}

impl From<DataProperty> for Property {
    fn from(value: DataProperty) -> Self {
        Property::Data(value)
    }
}

impl From<AccessorProperty> for Property {
    fn from(value: AccessorProperty) -> Self {
        Property::Accessor(value)
    }
}
