// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::hash::{Hash, Hasher};

use super::{
    AccessorSlot, GetterHandle, PropertyBase, PropertyBehaviour, PropertyFlags, SetterHandle,
};
use crate::ecmascript::{
    abstract_operations::testing_and_comparison::is_callable,
    execution::{Agent, JsResult},
    types::{EMBED_SIZE, Function, Object, PropertyKey, ValueType},
};

/// A property with user defined getter and setter functions.
///
/// The functions themselves live in the owning object's embedded or spill
/// slots; the property only records which slots. Two slots are always
/// reserved, one for each side, even if only one function is installed.
///
/// The descriptor is immutable: redefining the property produces a new
/// descriptor through [`AccessorProperty::copy`] and the `with_*` builders,
/// which never change the reserved storage indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessorProperty {
    base: PropertyBase,
    getter: AccessorSlot,
    setter: AccessorSlot,
}

impl AccessorProperty {
    /// Create an accessor property from raw slot encodings.
    ///
    /// A negative slot means no function is installed on that side and
    /// `-slot - 1` is the storage index reserved for it.
    pub fn new(
        key: PropertyKey,
        flags: PropertyFlags,
        getter_slot: i32,
        setter_slot: i32,
    ) -> JsResult<Self> {
        Self::from_slots(
            key,
            flags,
            AccessorSlot::from_raw(getter_slot),
            AccessorSlot::from_raw(setter_slot),
        )
    }

    pub fn from_slots(
        key: PropertyKey,
        flags: PropertyFlags,
        getter: AccessorSlot,
        setter: AccessorSlot,
    ) -> JsResult<Self> {
        Ok(Self {
            base: PropertyBase::new(key, flags.union(PropertyFlags::ACCESSOR))?,
            getter,
            setter,
        })
    }

    pub fn copy(&self) -> Self {
        Self {
            base: self.base,
            getter: self.getter,
            setter: self.setter,
        }
    }

    pub fn with_flags(&self, flags: PropertyFlags) -> Self {
        Self {
            base: self.base.with_flags(flags.union(PropertyFlags::ACCESSOR)),
            ..self.copy()
        }
    }

    pub fn with_getter_presence(&self, present: bool) -> Self {
        Self {
            getter: self.getter.with_presence(present),
            ..self.copy()
        }
    }

    pub fn with_setter_presence(&self, present: bool) -> Self {
        Self {
            setter: self.setter.with_presence(present),
            ..self.copy()
        }
    }

    pub fn getter_slot(&self) -> AccessorSlot {
        self.getter
    }

    pub fn setter_slot(&self) -> AccessorSlot {
        self.setter
    }

    pub fn getter_storage_index(&self) -> u32 {
        self.getter.storage_index()
    }

    pub fn setter_storage_index(&self) -> u32 {
        self.setter.storage_index()
    }

    /// Find the getter function currently stored on `object`.
    ///
    /// Returns `None` when no getter is installed or when the slot holds
    /// something that is not callable.
    pub fn resolve_getter(&self, agent: &Agent, object: Object) -> Option<Function> {
        resolve_accessor_function(agent, object, self.getter)
    }

    /// Find the setter function currently stored on `object`.
    pub fn resolve_setter(&self, agent: &Agent, object: Object) -> Option<Function> {
        resolve_accessor_function(agent, object, self.setter)
    }

    /// Handle that reads this property's getter slot, invokes the getter and
    /// adapts the result to `target`.
    pub fn getter_access_handle(&self, target: ValueType) -> GetterHandle {
        GetterHandle::new(self.getter_storage_index(), target)
    }

    /// Handle that reads this property's setter slot and invokes the setter.
    pub fn setter_access_handle(&self) -> SetterHandle {
        SetterHandle::new(self.setter_storage_index())
    }
}

fn resolve_accessor_function(agent: &Agent, object: Object, slot: AccessorSlot) -> Option<Function> {
    if !slot.is_present() {
        return None;
    }
    is_callable(object.read_slot(agent, slot.storage_index()))
}

impl PropertyBehaviour for AccessorProperty {
    fn base(&self) -> &PropertyBase {
        &self.base
    }

    fn spill_slot_count(&self) -> u32 {
        u32::from(self.getter_storage_index() >= EMBED_SIZE)
            + u32::from(self.setter_storage_index() >= EMBED_SIZE)
    }

    fn has_getter_function(&self) -> bool {
        self.getter.is_present()
    }

    fn has_setter_function(&self) -> bool {
        self.setter.is_present()
    }
}

impl Hash for AccessorProperty {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base.hash(state);
        state.write_i32(self.getter.into_raw() ^ self.setter.into_raw().rotate_left(16));
    }
}
