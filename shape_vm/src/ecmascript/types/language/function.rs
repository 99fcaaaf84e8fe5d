// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::ops::Index;

use super::{String, Value};
use crate::{
    ecmascript::execution::{Agent, JsResult},
    heap::FunctionIndex,
};

#[derive(Debug, Clone)]
pub struct FunctionHeapData {
    pub(crate) name: Option<String>,
    pub(crate) length: u8,
}

impl FunctionHeapData {
    pub fn new(name: Option<String>, length: u8) -> Self {
        Self { name, length }
    }
}

/// A callable value. Function bodies are owned by the embedder; the object
/// model only stores and locates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Function(pub(crate) FunctionIndex);

impl Function {
    pub fn name(self, agent: &Agent) -> Option<String> {
        agent[self].name
    }

    pub fn length(self, agent: &Agent) -> u8 {
        agent[self].length
    }
}

/// The mechanism that actually runs a function body.
///
/// Accessor properties resolve which function to call and with what
/// receiver; the call itself is delegated to an implementation of this
/// trait.
pub trait FunctionInvoker {
    fn call(
        &mut self,
        agent: &mut Agent,
        function: Function,
        this: Value,
        arguments: &[Value],
    ) -> JsResult<Value>;
}

impl Index<Function> for Agent {
    type Output = FunctionHeapData;

    fn index(&self, index: Function) -> &Self::Output {
        self.heap
            .functions
            .get(index.0.into_index())
            .expect("Function out of bounds")
            .as_ref()
            .expect("Function slot empty")
    }
}
