// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod access_handle;
mod accessor_property;
mod accessor_slot;
mod property;

pub use access_handle::{
    GetterHandle, GetterTrampoline, SetterHandle, SetterTrampoline, user_accessor_getter,
    user_accessor_setter,
};
pub use accessor_property::AccessorProperty;
pub use accessor_slot::AccessorSlot;
pub use property::{DataProperty, Property, PropertyBase, PropertyBehaviour, PropertyFlags};
