// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use small_string::SmallString;

use crate::ecmascript::{
    execution::Agent,
    types::{HeapString, String, Symbol},
};

/// Largest integer that round-trips through an f64 without loss.
const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// # [Property key](https://tc39.es/ecma262/#property-key)
///
/// The properties of an object are uniquely identified using property keys. A
/// _property key_ is either a String or a Symbol. Strings that are canonical
/// integers are stored as `Integer` so that `"1"` and `1` name the same
/// property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Integer(i64),
    SmallString(SmallString),
    String(HeapString),
    Symbol(Symbol),
}

impl PropertyKey {
    pub fn from_str(agent: &mut Agent, str: &str) -> Self {
        parse_integer_key(str).unwrap_or_else(|| String::from_str(agent, str).into())
    }

    /// True for the empty string key. Such keys are rejected when a property
    /// is created.
    pub fn is_empty(self) -> bool {
        match self {
            PropertyKey::SmallString(small) => small.is_empty(),
            _ => false,
        }
    }

    pub fn is_symbol(self) -> bool {
        matches!(self, PropertyKey::Symbol(_))
    }
}

impl From<String> for PropertyKey {
    fn from(value: String) -> Self {
        match value {
            String::String(data) => PropertyKey::String(data),
            String::SmallString(small) => PropertyKey::SmallString(small),
        }
    }
}

impl From<Symbol> for PropertyKey {
    fn from(value: Symbol) -> Self {
        PropertyKey::Symbol(value)
    }
}

impl From<u32> for PropertyKey {
    fn from(value: u32) -> Self {
        PropertyKey::Integer(value.into())
    }
}

/// Parse `str` as a canonical integer key: no leading zeros, no `-0`, no
/// sign prefix other than `-`, and within the safe integer range.
fn parse_integer_key(str: &str) -> Option<PropertyKey> {
    let digits = str.strip_prefix('-').unwrap_or(str);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    if str.starts_with('-') && digits == "0" {
        return None;
    }
    let value: i64 = str.parse().ok()?;
    (value.abs() <= MAX_SAFE_INTEGER).then_some(PropertyKey::Integer(value))
}
