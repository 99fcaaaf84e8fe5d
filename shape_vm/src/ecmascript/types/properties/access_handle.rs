// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Invocation handles for accessor properties.
//!
//! A handle binds a storage slot to one of the crate's well-known accessor
//! trampolines. Calling the handle reads the slot on the receiver and, if it
//! holds a function, runs it through the embedder's [`FunctionInvoker`].

use tracing::trace;

use crate::ecmascript::{
    abstract_operations::testing_and_comparison::is_callable,
    execution::{Agent, JsError, JsResult},
    types::{FunctionInvoker, Object, Value, ValueType},
};

pub type GetterTrampoline =
    fn(&mut Agent, Object, u32, &mut dyn FunctionInvoker) -> JsResult<Value>;

pub type SetterTrampoline =
    fn(&mut Agent, Object, u32, Value, &mut dyn FunctionInvoker) -> JsResult<()>;

/// Reads an accessor property through its getter.
#[derive(Debug, Clone, Copy)]
pub struct GetterHandle {
    slot: u32,
    target: ValueType,
    trampoline: GetterTrampoline,
}

impl GetterHandle {
    pub(crate) fn new(slot: u32, target: ValueType) -> Self {
        Self {
            slot,
            target,
            trampoline: user_accessor_getter,
        }
    }

    pub fn slot(&self) -> u32 {
        self.slot
    }

    pub fn target(&self) -> ValueType {
        self.target
    }

    /// Run the getter stored on `receiver` and adapt its result to the
    /// handle's target type.
    pub fn call(
        &self,
        agent: &mut Agent,
        receiver: Object,
        invoker: &mut dyn FunctionInvoker,
    ) -> JsResult<Value> {
        (self.trampoline)(agent, receiver, self.slot, invoker)?.adapt(self.target)
    }
}

/// Writes an accessor property through its setter.
#[derive(Debug, Clone, Copy)]
pub struct SetterHandle {
    slot: u32,
    trampoline: SetterTrampoline,
}

impl SetterHandle {
    pub(crate) fn new(slot: u32) -> Self {
        Self {
            slot,
            trampoline: user_accessor_setter,
        }
    }

    pub fn slot(&self) -> u32 {
        self.slot
    }

    pub fn call(
        &self,
        agent: &mut Agent,
        receiver: Object,
        value: Value,
        invoker: &mut dyn FunctionInvoker,
    ) -> JsResult<()> {
        (self.trampoline)(agent, receiver, self.slot, value, invoker)
    }
}

/// Read the getter at `slot` and call it with `receiver` as this value.
///
/// A slot without a callable yields undefined.
pub fn user_accessor_getter(
    agent: &mut Agent,
    receiver: Object,
    slot: u32,
    invoker: &mut dyn FunctionInvoker,
) -> JsResult<Value> {
    let Some(getter) = is_callable(receiver.read_slot(agent, slot)) else {
        trace!(slot, "accessor has no getter");
        return Ok(Value::Undefined);
    };
    trace!(slot, ?getter, "invoking user accessor getter");
    invoker.call(agent, getter, receiver.into(), &[])
}

/// Read the setter at `slot` and call it with `receiver` as this value and
/// `value` as its only argument.
///
/// A slot without a callable ignores the write, or fails with
/// [`JsError::MissingSetter`] when the agent is in strict mode.
pub fn user_accessor_setter(
    agent: &mut Agent,
    receiver: Object,
    slot: u32,
    value: Value,
    invoker: &mut dyn FunctionInvoker,
) -> JsResult<()> {
    let Some(setter) = is_callable(receiver.read_slot(agent, slot)) else {
        trace!(slot, "accessor has no setter");
        if agent.options.strict {
            return Err(JsError::MissingSetter);
        }
        return Ok(());
    };
    trace!(slot, ?setter, "invoking user accessor setter");
    invoker.call(agent, setter, receiver.into(), &[value])?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecmascript::{
        execution::Options,
        types::{Function, FunctionInvoker},
    };

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(Function, Value, Vec<Value>)>,
        result: Value,
    }

    impl FunctionInvoker for Recorder {
        fn call(
            &mut self,
            _agent: &mut Agent,
            function: Function,
            this: Value,
            arguments: &[Value],
        ) -> JsResult<Value> {
            self.calls.push((function, this, arguments.to_vec()));
            Ok(self.result)
        }
    }

    #[test]
    fn getter_invokes_with_receiver() {
        let mut agent = Agent::new(Options::default());
        let object = agent.create_object();
        let getter = agent.create_function("get", 0);
        object.write_slot(&mut agent, 3, getter.into());

        let mut recorder = Recorder {
            result: Value::Integer(5),
            ..Default::default()
        };
        let handle = GetterHandle::new(3, ValueType::Any);
        let value = handle.call(&mut agent, object, &mut recorder).unwrap();
        assert_eq!(value, Value::Integer(5));
        assert_eq!(recorder.calls, vec![(getter, Value::Object(object), vec![])]);
    }

    #[test]
    fn getter_result_is_adapted() {
        let mut agent = Agent::new(Options::default());
        let object = agent.create_object();
        let getter = agent.create_function("get", 0);
        object.write_slot(&mut agent, 0, getter.into());
        let mut recorder = Recorder {
            result: Value::Integer(2),
            ..Default::default()
        };

        let number = GetterHandle::new(0, ValueType::Number);
        assert_eq!(
            number.call(&mut agent, object, &mut recorder),
            Ok(Value::Number(2.0))
        );
        let boolean = GetterHandle::new(0, ValueType::Boolean);
        assert_eq!(
            boolean.call(&mut agent, object, &mut recorder),
            Err(JsError::TypeMismatch {
                expected: ValueType::Boolean,
                found: ValueType::Number,
            })
        );
    }

    #[test]
    fn missing_getter_reads_undefined() {
        let mut agent = Agent::new(Options::default());
        let object = agent.create_object();
        let mut recorder = Recorder::default();
        let handle = GetterHandle::new(7, ValueType::Any);
        assert_eq!(
            handle.call(&mut agent, object, &mut recorder),
            Ok(Value::Undefined)
        );
        assert!(recorder.calls.is_empty());
    }

    #[test]
    fn setter_passes_value() {
        let mut agent = Agent::new(Options::default());
        let object = agent.create_object();
        let setter = agent.create_function("set", 1);
        object.write_slot(&mut agent, 1, setter.into());
        let mut recorder = Recorder::default();
        SetterHandle::new(1)
            .call(&mut agent, object, Value::Boolean(true), &mut recorder)
            .unwrap();
        assert_eq!(
            recorder.calls,
            vec![(setter, Value::Object(object), vec![Value::Boolean(true)])]
        );
    }

    #[test]
    fn missing_setter_depends_on_strictness() {
        let mut agent = Agent::new(Options::default());
        let object = agent.create_object();
        let mut recorder = Recorder::default();
        let handle = SetterHandle::new(1);
        assert_eq!(
            handle.call(&mut agent, object, Value::Null, &mut recorder),
            Ok(())
        );

        let mut strict = Agent::new(Options {
            strict: true,
            ..Default::default()
        });
        let object = strict.create_object();
        assert_eq!(
            handle.call(&mut strict, object, Value::Null, &mut recorder),
            Err(JsError::MissingSetter)
        );
        assert!(recorder.calls.is_empty());
    }
}
