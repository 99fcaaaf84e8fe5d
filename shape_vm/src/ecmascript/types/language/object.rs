// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod property_key;
mod property_map;

use core::ops::{Index, IndexMut};

pub use property_key::PropertyKey;
pub use property_map::PropertyMap;
use tracing::debug;

use super::Value;
use crate::{ecmascript::execution::Agent, heap::ObjectIndex};

/// Number of slots stored inline in every object. Slot numbers at or above
/// this live in the spill array at `slot - EMBED_SIZE`.
pub const EMBED_SIZE: u32 = 4;

#[derive(Debug, Default)]
pub struct ObjectHeapData {
    pub(crate) map: PropertyMap,
    pub(crate) embedded: [Value; EMBED_SIZE as usize],
    pub(crate) spill: Vec<Value>,
}

impl ObjectHeapData {
    pub fn spill_len(&self) -> usize {
        self.spill.len()
    }

    fn get_embed_or_spill(&self, slot: u32) -> Value {
        if slot < EMBED_SIZE {
            self.embedded[slot as usize]
        } else {
            self.spill
                .get((slot - EMBED_SIZE) as usize)
                .copied()
                .unwrap_or(Value::Undefined)
        }
    }

    fn set_embed_or_spill(&mut self, slot: u32, value: Value, initial_spill_capacity: usize) {
        if slot < EMBED_SIZE {
            self.embedded[slot as usize] = value;
            return;
        }
        let spill_index = (slot - EMBED_SIZE) as usize;
        if spill_index >= self.spill.len() {
            let new_len = (spill_index + 1).max(self.map.spill_length() as usize);
            if self.spill.capacity() == 0 {
                self.spill.reserve(new_len.max(initial_spill_capacity));
            }
            debug!(old_len = self.spill.len(), new_len, "growing spill array");
            self.spill.resize(new_len, Value::Undefined);
        }
        self.spill[spill_index] = value;
    }
}

/// ### [6.1.7 The Object Type](https://tc39.es/ecma262/#sec-object-type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Object(pub(crate) ObjectIndex);

impl Object {
    /// Read the value stored at an embedded or spill slot.
    ///
    /// A spill slot the object has not grown to yet reads as undefined.
    pub fn read_slot(self, agent: &Agent, slot: u32) -> Value {
        agent[self].get_embed_or_spill(slot)
    }

    /// Write `value` into an embedded or spill slot, growing the spill array
    /// as needed.
    pub fn write_slot(self, agent: &mut Agent, slot: u32, value: Value) {
        let initial_spill_capacity = agent.options.initial_spill_capacity;
        agent[self].set_embed_or_spill(slot, value, initial_spill_capacity);
    }

    pub fn property_map(self, agent: &Agent) -> &PropertyMap {
        &agent[self].map
    }
}

impl Index<Object> for Agent {
    type Output = ObjectHeapData;

    fn index(&self, index: Object) -> &Self::Output {
        self.heap
            .objects
            .get(index.0.into_index())
            .expect("Object out of bounds")
            .as_ref()
            .expect("Object slot empty")
    }
}

impl IndexMut<Object> for Agent {
    fn index_mut(&mut self, index: Object) -> &mut Self::Output {
        self.heap
            .objects
            .get_mut(index.0.into_index())
            .expect("Object out of bounds")
            .as_mut()
            .expect("Object slot empty")
    }
}
