// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use small_string::SmallString;

use super::{Function, HeapString, Object, String, Symbol};
use crate::ecmascript::execution::{JsError, JsResult};

/// ### [6.1 ECMAScript Language Types](https://tc39.es/ecma262/#sec-ecmascript-language-types)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Value {
    /// ### [6.1.1 The Undefined Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-undefined-type)
    #[default]
    Undefined,

    /// ### [6.1.2 The Null Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-null-type)
    Null,

    /// ### [6.1.3 The Boolean Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-boolean-type)
    Boolean(bool),

    /// ### [6.1.4 The String Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-string-type)
    String(HeapString),
    SmallString(SmallString),

    /// ### [6.1.5 The Symbol Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-symbol-type)
    Symbol(Symbol),

    /// ### [6.1.6.1 The Number Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-number-type)
    Integer(i64),
    Number(f64),

    /// ### [6.1.7 The Object Type](https://tc39.es/ecma262/#sec-object-type)
    Object(Object),

    /// An object with a \[\[Call]] internal method.
    Function(Function),
}

/// The kind of a [`Value`], used to request type-adapted access handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Accept any value unchanged.
    Any,
    Undefined,
    Null,
    Boolean,
    String,
    Symbol,
    Number,
    Object,
    Function,
}

impl Value {
    pub fn value_type(self) -> ValueType {
        match self {
            Value::Undefined => ValueType::Undefined,
            Value::Null => ValueType::Null,
            Value::Boolean(_) => ValueType::Boolean,
            Value::String(_) | Value::SmallString(_) => ValueType::String,
            Value::Symbol(_) => ValueType::Symbol,
            Value::Integer(_) | Value::Number(_) => ValueType::Number,
            Value::Object(_) => ValueType::Object,
            Value::Function(_) => ValueType::Function,
        }
    }

    /// Adapt this value to `target`.
    ///
    /// Integers widen to Numbers and functions are accepted where an Object
    /// is requested; every other pairing must match exactly.
    pub fn adapt(self, target: ValueType) -> JsResult<Value> {
        match (target, self) {
            (ValueType::Any, value) => Ok(value),
            (ValueType::Number, Value::Integer(int)) => Ok(Value::Number(int as f64)),
            (ValueType::Object, Value::Function(_)) => Ok(self),
            (target, value) if value.value_type() == target => Ok(value),
            (expected, value) => Err(JsError::TypeMismatch {
                expected,
                found: value.value_type(),
            }),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        match value {
            String::String(data) => Value::String(data),
            String::SmallString(data) => Value::SmallString(data),
        }
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Value::Function(value)
    }
}
