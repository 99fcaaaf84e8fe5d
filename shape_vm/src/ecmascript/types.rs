// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod language;
mod properties;

pub use language::{
    EMBED_SIZE, Function, FunctionHeapData, FunctionInvoker, HeapString, Object, ObjectHeapData,
    PropertyKey, PropertyMap, String, StringHeapData, Symbol, SymbolHeapData, Value, ValueType,
};
pub use properties::{
    AccessorProperty, AccessorSlot, DataProperty, GetterHandle, GetterTrampoline, Property,
    PropertyBase, PropertyBehaviour, PropertyFlags, SetterHandle, SetterTrampoline,
    user_accessor_getter, user_accessor_setter,
};
