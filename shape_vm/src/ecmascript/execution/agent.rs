// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::types::{Function, FunctionHeapData, Object, ObjectHeapData, ValueType},
    heap::{CreateHeapData, Heap},
};

#[derive(Debug, Clone)]
pub struct Options {
    /// Number of spill slots reserved the first time an object's spill
    /// array has to grow.
    pub initial_spill_capacity: usize,
    /// Writes that would otherwise be silently dropped fail instead:
    /// [`JsError::MissingSetter`] for accessors without a setter and
    /// [`JsError::ReadOnly`] for non-writable data properties.
    pub strict: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            initial_spill_capacity: 4,
            strict: false,
        }
    }
}

pub type JsResult<T> = core::result::Result<T, JsError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JsError {
    /// A malformed or missing argument, such as an empty property key.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A value could not be adapted to the type an access handle was
    /// requested with.
    #[error("type mismatch: expected {expected:?}, found {found:?}")]
    TypeMismatch {
        expected: ValueType,
        found: ValueType,
    },

    #[error("property not found")]
    PropertyNotFound,

    /// An accessor operation was requested of a data property.
    #[error("property is not an accessor property")]
    NotAccessor,

    #[error("cannot set property which has only a getter")]
    MissingSetter,

    #[error("cannot assign to read only property")]
    ReadOnly,
}

/// Owner of the heap and of the options every operation consults.
#[derive(Debug, Default)]
pub struct Agent {
    pub(crate) options: Options,
    pub heap: Heap,
}

impl Agent {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            heap: Heap::new(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Create a fresh ordinary object with an empty property map.
    pub fn create_object(&mut self) -> Object {
        self.heap.create(ObjectHeapData::default())
    }

    pub fn create_function(&mut self, name: &str, length: u8) -> Function {
        let name = crate::ecmascript::types::String::from_str(self, name);
        self.heap.create(FunctionHeapData::new(Some(name), length))
    }
}
