// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::HashMap;

use shape_vm::{
    Agent, JsError, JsResult, Options,
    ecmascript::{
        abstract_operations::operations_on_objects::{
            define_accessor_property, define_data_property, get, get_own_accessor_functions, set,
        },
        types::{
            EMBED_SIZE, Function, FunctionInvoker, Object, PropertyBehaviour, PropertyFlags,
            PropertyKey, Value, ValueType,
        },
    },
};

type Body = Box<dyn FnMut(&mut Agent, Value, &[Value]) -> JsResult<Value>>;

/// Runs registered Rust closures in place of function bodies.
#[derive(Default)]
struct NativeInvoker {
    bodies: HashMap<Function, Body>,
}

impl NativeInvoker {
    fn register(
        &mut self,
        agent: &mut Agent,
        name: &str,
        body: impl FnMut(&mut Agent, Value, &[Value]) -> JsResult<Value> + 'static,
    ) -> Function {
        let function = agent.create_function(name, 0);
        self.bodies.insert(function, Box::new(body));
        function
    }
}

impl FunctionInvoker for NativeInvoker {
    fn call(
        &mut self,
        agent: &mut Agent,
        function: Function,
        this: Value,
        arguments: &[Value],
    ) -> JsResult<Value> {
        let body = self
            .bodies
            .get_mut(&function)
            .expect("function was not registered");
        body(agent, this, arguments)
    }
}

fn receiver(this: Value) -> Object {
    match this {
        Value::Object(object) => object,
        other => panic!("unexpected receiver {other:?}"),
    }
}

/// A `celsius`/`fahrenheit` pair where `fahrenheit` is an accessor over the
/// `celsius` data property.
fn thermometer(agent: &mut Agent, invoker: &mut NativeInvoker) -> (Object, PropertyKey) {
    let object = agent.create_object();
    let celsius = PropertyKey::from_str(agent, "celsius");
    let fahrenheit = PropertyKey::from_str(agent, "fahrenheit");
    define_data_property(
        agent,
        object,
        celsius,
        PropertyFlags::default(),
        Value::Number(100.0),
    )
    .unwrap();

    let getter = invoker.register(agent, "get fahrenheit", move |agent, this, _| {
        let object = receiver(this);
        match get(agent, object, celsius, &mut NativeInvoker::default())? {
            Value::Number(c) => Ok(Value::Number(c * 9.0 / 5.0 + 32.0)),
            other => Ok(other),
        }
    });
    let setter = invoker.register(agent, "set fahrenheit", move |agent, this, args| {
        let object = receiver(this);
        let Some(Value::Number(f)) = args.first().copied() else {
            return Ok(Value::Undefined);
        };
        set(
            agent,
            object,
            celsius,
            Value::Number((f - 32.0) * 5.0 / 9.0),
            &mut NativeInvoker::default(),
        )?;
        Ok(Value::Undefined)
    });
    define_accessor_property(
        agent,
        object,
        fahrenheit,
        PropertyFlags::ENUMERABLE | PropertyFlags::CONFIGURABLE,
        Some(getter),
        Some(setter),
    )
    .unwrap();
    (object, fahrenheit)
}

#[test]
fn accessor_reads_and_writes_go_through_functions() {
    let mut agent = Agent::new(Options::default());
    let mut invoker = NativeInvoker::default();
    let (object, fahrenheit) = thermometer(&mut agent, &mut invoker);

    assert_eq!(
        get(&mut agent, object, fahrenheit, &mut invoker),
        Ok(Value::Number(212.0))
    );
    set(
        &mut agent,
        object,
        fahrenheit,
        Value::Number(32.0),
        &mut invoker,
    )
    .unwrap();
    let celsius = PropertyKey::from_str(&mut agent, "celsius");
    assert_eq!(
        get(&mut agent, object, celsius, &mut invoker),
        Ok(Value::Number(0.0))
    );
}

#[test]
fn getter_handle_adapts_return_type() {
    let mut agent = Agent::new(Options::default());
    let mut invoker = NativeInvoker::default();
    let object = agent.create_object();
    let key = PropertyKey::from_str(&mut agent, "count");
    let getter = invoker.register(&mut agent, "get count", |_, _, _| Ok(Value::Integer(3)));
    let property = define_accessor_property(
        &mut agent,
        object,
        key,
        PropertyFlags::empty(),
        Some(getter),
        None,
    )
    .unwrap();

    let as_number = property.getter_access_handle(ValueType::Number);
    assert_eq!(
        as_number.call(&mut agent, object, &mut invoker),
        Ok(Value::Number(3.0))
    );
    let as_string = property.getter_access_handle(ValueType::String);
    assert_eq!(
        as_string.call(&mut agent, object, &mut invoker),
        Err(JsError::TypeMismatch {
            expected: ValueType::String,
            found: ValueType::Number,
        })
    );
}

#[test]
fn getter_only_property_in_strict_mode() {
    let mut agent = Agent::new(Options {
        strict: true,
        ..Default::default()
    });
    let mut invoker = NativeInvoker::default();
    let object = agent.create_object();
    let key = PropertyKey::from_str(&mut agent, "x");
    let getter = invoker.register(&mut agent, "get x", |_, _, _| Ok(Value::Boolean(true)));
    let property = define_accessor_property(
        &mut agent,
        object,
        key,
        PropertyFlags::ENUMERABLE,
        Some(getter),
        None,
    )
    .unwrap();
    assert!(property.has_getter_function());
    assert!(!property.has_setter_function());
    assert_eq!(
        set(&mut agent, object, key, Value::Null, &mut invoker),
        Err(JsError::MissingSetter)
    );
    assert_eq!(
        get(&mut agent, object, key, &mut invoker),
        Ok(Value::Boolean(true))
    );
}

#[test]
fn installing_a_setter_later_reuses_the_reserved_slot() {
    let mut agent = Agent::new(Options::default());
    let mut invoker = NativeInvoker::default();
    let object = agent.create_object();
    let key = PropertyKey::from_str(&mut agent, "x");

    let getter = invoker.register(&mut agent, "get x", |_, _, _| Ok(Value::Integer(1)));
    let before = define_accessor_property(
        &mut agent,
        object,
        key,
        PropertyFlags::ENUMERABLE,
        Some(getter),
        None,
    )
    .unwrap();
    let slot_count = object.property_map(&agent).slot_count();

    let setter = invoker.register(&mut agent, "set x", |_, _, _| Ok(Value::Undefined));
    let after = define_accessor_property(
        &mut agent,
        object,
        key,
        PropertyFlags::ENUMERABLE,
        Some(getter),
        Some(setter),
    )
    .unwrap();

    assert_eq!(object.property_map(&agent).slot_count(), slot_count);
    assert_eq!(after.setter_storage_index(), before.setter_storage_index());
    assert_eq!(after.getter_slot(), before.getter_slot());
    assert!(after.has_setter_function());
    assert_ne!(after, before);
    assert_eq!(
        get_own_accessor_functions(&agent, object, key),
        Ok((Some(getter), Some(setter)))
    );
}

#[test]
fn accessors_past_the_embedded_slots_spill() {
    let mut agent = Agent::new(Options::default());
    let mut invoker = NativeInvoker::default();
    let object = agent.create_object();

    let mut functions = Vec::new();
    for i in 0..4 {
        let key = PropertyKey::Integer(i);
        let getter = invoker.register(&mut agent, "get", move |_, _, _| Ok(Value::Integer(i)));
        define_accessor_property(
            &mut agent,
            object,
            key,
            PropertyFlags::default(),
            Some(getter),
            None,
        )
        .unwrap();
        functions.push(getter);
    }

    let map = object.property_map(&agent);
    assert_eq!(map.slot_count(), 8);
    assert_eq!(map.spill_length(), 8 - EMBED_SIZE);
    assert_eq!(agent[object].spill_len(), (8 - EMBED_SIZE) as usize);
    for i in 0..4 {
        assert_eq!(
            get(&mut agent, object, PropertyKey::Integer(i), &mut invoker),
            Ok(Value::Integer(i))
        );
    }
    assert_eq!(
        get_own_accessor_functions(&agent, object, PropertyKey::Integer(3)),
        Ok((Some(functions[3]), None))
    );
}

#[test]
fn non_callable_stored_in_getter_slot_is_not_a_getter() {
    let mut agent = Agent::new(Options::default());
    let mut invoker = NativeInvoker::default();
    let object = agent.create_object();
    let key = PropertyKey::from_str(&mut agent, "x");
    let getter = invoker.register(&mut agent, "get x", |_, _, _| Ok(Value::Integer(1)));
    let property = define_accessor_property(
        &mut agent,
        object,
        key,
        PropertyFlags::empty(),
        Some(getter),
        None,
    )
    .unwrap();

    // Storage mutated behind the property map's back.
    object.write_slot(&mut agent, property.getter_storage_index(), Value::Integer(7));
    assert!(property.has_getter_function());
    assert_eq!(property.resolve_getter(&agent, object), None);
    assert_eq!(
        get(&mut agent, object, key, &mut invoker),
        Ok(Value::Undefined)
    );
}
