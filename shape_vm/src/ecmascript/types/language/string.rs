// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::ops::Index;

use small_string::SmallString;

use crate::{ecmascript::execution::Agent, heap::StringIndex};

#[derive(Debug, Clone)]
pub struct StringHeapData {
    data: Box<str>,
}

impl StringHeapData {
    pub(crate) fn new(data: &str) -> Self {
        Self { data: data.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }
}

/// An interned string that was too long to be stored inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeapString(pub(crate) StringIndex);

/// ### [6.1.4 The String Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-string-type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum String {
    String(HeapString),
    SmallString(SmallString),
}

impl String {
    pub const EMPTY_STRING: String = String::SmallString(SmallString::EMPTY);

    pub fn from_str(agent: &mut Agent, str: &str) -> String {
        match SmallString::try_from(str) {
            Ok(small) => String::SmallString(small),
            Err(_) => String::String(agent.heap.alloc_string(str)),
        }
    }

    pub fn is_empty(self) -> bool {
        // Heap strings are always longer than the inline capacity.
        match self {
            String::String(_) => false,
            String::SmallString(small) => small.is_empty(),
        }
    }

    pub fn to_std_string(self, agent: &Agent) -> std::string::String {
        match self {
            String::String(data) => agent[data].as_str().to_owned(),
            String::SmallString(small) => small.to_string_lossy().into_owned(),
        }
    }
}

impl From<HeapString> for String {
    fn from(value: HeapString) -> Self {
        String::String(value)
    }
}

impl From<SmallString> for String {
    fn from(value: SmallString) -> Self {
        String::SmallString(value)
    }
}

impl Index<HeapString> for Agent {
    type Output = StringHeapData;

    fn index(&self, index: HeapString) -> &Self::Output {
        self.heap
            .strings
            .get(index.0.into_index())
            .expect("HeapString out of bounds")
            .as_ref()
            .expect("HeapString slot empty")
    }
}
