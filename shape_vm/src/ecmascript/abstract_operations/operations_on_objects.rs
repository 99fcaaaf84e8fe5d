// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [7.3 Operations on Objects](https://tc39.es/ecma262/#sec-operations-on-objects)
//!
//! Own-property definition, reads and writes over the embedded/spill slot
//! layout. Prototype chains are not consulted.

use tracing::debug;

use crate::ecmascript::{
    execution::{Agent, JsError, JsResult},
    types::{
        AccessorProperty, DataProperty, Function, FunctionInvoker, Object, Property,
        PropertyBehaviour, PropertyFlags, PropertyKey, Value, ValueType,
    },
};

/// Define or redefine an own accessor property on `object`.
///
/// A new property gets two fresh slots. Redefining an existing accessor
/// property reuses its reserved slots: only the presence of each side, the
/// flags and the stored functions change.
#[tracing::instrument(level = "debug", skip(agent))]
pub fn define_accessor_property(
    agent: &mut Agent,
    object: Object,
    key: PropertyKey,
    flags: PropertyFlags,
    get: Option<Function>,
    set: Option<Function>,
) -> JsResult<AccessorProperty> {
    let existing = agent[object].map.find(key).cloned();
    let property = match existing {
        None => agent[object].map.add_accessor_property(
            key,
            flags,
            get.is_some(),
            set.is_some(),
        )?,
        Some(Property::Data(_)) => return Err(JsError::NotAccessor),
        Some(Property::Accessor(old)) => {
            let new = old
                .with_flags(flags)
                .with_getter_presence(get.is_some())
                .with_setter_presence(set.is_some());
            debug!(
                old_getter = old.getter_slot().into_raw(),
                old_setter = old.setter_slot().into_raw(),
                new_getter = new.getter_slot().into_raw(),
                new_setter = new.setter_slot().into_raw(),
                "redefining accessor property"
            );
            agent[object].map.replace(new.into())?;
            new
        }
    };
    object.write_slot(
        agent,
        property.getter_storage_index(),
        get.map_or(Value::Undefined, Value::from),
    );
    object.write_slot(
        agent,
        property.setter_storage_index(),
        set.map_or(Value::Undefined, Value::from),
    );
    Ok(property)
}

/// Define or redefine an own data property on `object`.
///
/// An accessor property being turned into a data property keeps its getter
/// slot for the value; its setter slot is cleared and stays reserved.
pub fn define_data_property(
    agent: &mut Agent,
    object: Object,
    key: PropertyKey,
    flags: PropertyFlags,
    value: Value,
) -> JsResult<DataProperty> {
    let existing = agent[object].map.find(key).cloned();
    let property = match existing {
        None => agent[object].map.add_data_property(key, flags)?,
        Some(Property::Data(old)) => {
            let new = old.with_flags(flags);
            agent[object].map.replace(new.into())?;
            new
        }
        Some(Property::Accessor(old)) => {
            let new = DataProperty::new(key, flags, old.getter_storage_index())?;
            agent[object].map.replace(new.into())?;
            object.write_slot(agent, old.setter_storage_index(), Value::Undefined);
            new
        }
    };
    object.write_slot(agent, property.slot(), value);
    Ok(property)
}

/// Read an own property of `object`. Accessor properties are read through
/// their getter; missing properties read as undefined.
pub fn get(
    agent: &mut Agent,
    object: Object,
    key: PropertyKey,
    invoker: &mut dyn FunctionInvoker,
) -> JsResult<Value> {
    let property = agent[object].map.find(key).cloned();
    match property {
        None => Ok(Value::Undefined),
        Some(Property::Data(data)) => Ok(object.read_slot(agent, data.slot())),
        Some(Property::Accessor(accessor)) => accessor
            .getter_access_handle(ValueType::Any)
            .call(agent, object, invoker),
    }
}

/// Write an own property of `object`.
///
/// Accessor properties are written through their setter. A missing property
/// is created as a default data property. Writes to non-writable data
/// properties are ignored, or fail with [`JsError::ReadOnly`] in strict mode.
pub fn set(
    agent: &mut Agent,
    object: Object,
    key: PropertyKey,
    value: Value,
    invoker: &mut dyn FunctionInvoker,
) -> JsResult<()> {
    let property = agent[object].map.find(key).cloned();
    match property {
        None => {
            define_data_property(agent, object, key, PropertyFlags::default(), value)?;
            Ok(())
        }
        Some(Property::Data(data)) if data.is_writable() => {
            object.write_slot(agent, data.slot(), value);
            Ok(())
        }
        Some(Property::Data(_)) if agent.options.strict => Err(JsError::ReadOnly),
        Some(Property::Data(_)) => Ok(()),
        Some(Property::Accessor(accessor)) => accessor
            .setter_access_handle()
            .call(agent, object, value, invoker),
    }
}

/// The getter and setter functions currently installed for an own accessor
/// property of `object`.
pub fn get_own_accessor_functions(
    agent: &Agent,
    object: Object,
    key: PropertyKey,
) -> JsResult<(Option<Function>, Option<Function>)> {
    match object.property_map(agent).find(key) {
        None => Err(JsError::PropertyNotFound),
        Some(Property::Data(_)) => Err(JsError::NotAccessor),
        Some(Property::Accessor(accessor)) => Ok((
            accessor.resolve_getter(agent, object),
            accessor.resolve_setter(agent, object),
        )),
    }
}
