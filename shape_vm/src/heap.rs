// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod indexes;

use ahash::RandomState;
use hashbrown::HashMap;

pub use self::indexes::{BaseIndex, FunctionIndex, ObjectIndex, StringIndex, SymbolIndex};
use crate::ecmascript::types::{
    Function, FunctionHeapData, HeapString, Object, ObjectHeapData, StringHeapData, Symbol,
    SymbolHeapData,
};

/// Arena storage for every heap-allocated value the object model knows of.
///
/// Items are never removed: tracing and compaction are left to the embedder.
#[derive(Debug, Default)]
pub struct Heap {
    pub(crate) functions: Vec<Option<FunctionHeapData>>,
    pub(crate) objects: Vec<Option<ObjectHeapData>>,
    pub(crate) strings: Vec<Option<StringHeapData>>,
    pub(crate) symbols: Vec<Option<SymbolHeapData>>,
    /// Interning table for heap strings; equal text always maps to the same
    /// [`HeapString`].
    pub(crate) string_lookup: HashMap<Box<str>, StringIndex, RandomState>,
}

/// Allocate `T` on the heap and return a handle `F` to it.
pub trait CreateHeapData<T, F> {
    fn create(&mut self, data: T) -> F;
}

impl CreateHeapData<FunctionHeapData, Function> for Heap {
    fn create(&mut self, data: FunctionHeapData) -> Function {
        self.functions.push(Some(data));
        Function(FunctionIndex::last(&self.functions))
    }
}

impl CreateHeapData<ObjectHeapData, Object> for Heap {
    fn create(&mut self, data: ObjectHeapData) -> Object {
        self.objects.push(Some(data));
        Object(ObjectIndex::last(&self.objects))
    }
}

impl CreateHeapData<SymbolHeapData, Symbol> for Heap {
    fn create(&mut self, data: SymbolHeapData) -> Symbol {
        self.symbols.push(Some(data));
        Symbol(SymbolIndex::last(&self.symbols))
    }
}

impl Heap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `data` and return its heap string handle.
    ///
    /// Callers are expected to have tried the small string representation
    /// first: strings that fit inline are never placed on the heap.
    pub(crate) fn alloc_string(&mut self, data: &str) -> HeapString {
        if let Some(&index) = self.string_lookup.get(data) {
            return HeapString(index);
        }
        self.strings.push(Some(StringHeapData::new(data)));
        let index = StringIndex::last(&self.strings);
        self.string_lookup.insert(data.into(), index);
        HeapString(index)
    }
}
