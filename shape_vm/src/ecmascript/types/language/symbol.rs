// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::ops::Index;

use super::String;
use crate::{
    ecmascript::execution::Agent,
    heap::{CreateHeapData, SymbolIndex},
};

#[derive(Debug, Clone)]
pub struct SymbolHeapData {
    pub(crate) descriptor: Option<String>,
}

/// ### [6.1.5 The Symbol Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-symbol-type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(pub(crate) SymbolIndex);

impl Symbol {
    pub fn new(agent: &mut Agent, description: Option<&str>) -> Symbol {
        let descriptor = description.map(|str| String::from_str(agent, str));
        agent.heap.create(SymbolHeapData { descriptor })
    }

    pub fn description(self, agent: &Agent) -> Option<String> {
        agent[self].descriptor
    }
}

impl Index<Symbol> for Agent {
    type Output = SymbolHeapData;

    fn index(&self, index: Symbol) -> &Self::Output {
        self.heap
            .symbols
            .get(index.0.into_index())
            .expect("Symbol out of bounds")
            .as_ref()
            .expect("Symbol slot empty")
    }
}
