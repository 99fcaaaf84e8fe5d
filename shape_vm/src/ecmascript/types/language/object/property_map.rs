// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use ahash::RandomState;
use hashbrown::HashMap;
use tracing::{debug, trace};

use super::PropertyKey;
use crate::ecmascript::{
    execution::{JsError, JsResult},
    types::{
        AccessorProperty, AccessorSlot, DataProperty, EMBED_SIZE, Property, PropertyBehaviour,
        PropertyFlags,
    },
};

/// The properties of one object, in insertion order, together with the slot
/// numbers assigned to them.
///
/// Slots are handed out sequentially and never reused: replacing a property
/// keeps the slots of the property it replaces.
#[derive(Debug, Clone, Default)]
pub struct PropertyMap {
    properties: Vec<Property>,
    lookup: HashMap<PropertyKey, usize, RandomState>,
    next_slot: u32,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn find(&self, key: PropertyKey) -> Option<&Property> {
        self.lookup.get(&key).map(|&index| &self.properties[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    /// Number of slots assigned so far; also the next free slot number.
    pub fn slot_count(&self) -> u32 {
        self.next_slot
    }

    /// Number of spill array entries an object with this map needs.
    ///
    /// Counts every assigned slot past the embedded ones, including slots
    /// left reserved by a property that was redefined into a smaller kind.
    pub fn spill_length(&self) -> u32 {
        self.next_slot.saturating_sub(EMBED_SIZE)
    }

    pub fn add_data_property(
        &mut self,
        key: PropertyKey,
        flags: PropertyFlags,
    ) -> JsResult<DataProperty> {
        self.check_new_key(key)?;
        let slot = self.peek_slots(1)?;
        let property = DataProperty::new(key, flags, slot)?;
        self.commit(property.into(), 1);
        Ok(property)
    }

    /// Add an accessor property with fresh getter and setter slots.
    ///
    /// Both slots are reserved even if a side has no function; that side is
    /// stored with the absent encoding.
    pub fn add_accessor_property(
        &mut self,
        key: PropertyKey,
        flags: PropertyFlags,
        has_getter: bool,
        has_setter: bool,
    ) -> JsResult<AccessorProperty> {
        self.check_new_key(key)?;
        let getter_slot = self.peek_slots(2)?;
        let property = AccessorProperty::from_slots(
            key,
            flags,
            AccessorSlot::new(getter_slot, has_getter)?,
            AccessorSlot::new(getter_slot + 1, has_setter)?,
        )?;
        self.commit(property.into(), 2);
        Ok(property)
    }

    /// Swap the property stored under `property`'s key for `property`,
    /// returning the old descriptor.
    pub fn replace(&mut self, property: Property) -> JsResult<Property> {
        let Some(&index) = self.lookup.get(&property.key()) else {
            return Err(JsError::PropertyNotFound);
        };
        debug!(?property, "replacing property");
        Ok(core::mem::replace(&mut self.properties[index], property))
    }

    fn check_new_key(&self, key: PropertyKey) -> JsResult<()> {
        if self.lookup.contains_key(&key) {
            return Err(JsError::InvalidArgument("duplicate property key"));
        }
        Ok(())
    }

    /// First of `count` consecutive free slots, without reserving them.
    fn peek_slots(&self, count: u32) -> JsResult<u32> {
        match self.next_slot.checked_add(count) {
            Some(end) if end - 1 <= AccessorSlot::MAX_INDEX => Ok(self.next_slot),
            _ => Err(JsError::InvalidArgument("property map slots exhausted")),
        }
    }

    fn commit(&mut self, property: Property, slots: u32) {
        trace!(
            key = ?property.key(),
            first_slot = self.next_slot,
            slots,
            "reserving property slots"
        );
        self.next_slot += slots;
        self.lookup.insert(property.key(), self.properties.len());
        self.properties.push(property);
    }
}
