// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Object model for accessor and data properties.
//!
//! Every object stores its property values in [`EMBED_SIZE`] inline slots
//! followed by a growable spill array. A property map assigns slot numbers
//! to each property; accessor properties always reserve one slot for the
//! getter and one for the setter, so that installing a missing function
//! later never reallocates.
//!
//! [`EMBED_SIZE`]: ecmascript::types::EMBED_SIZE

pub mod ecmascript;
pub mod heap;

pub use ecmascript::execution::{Agent, JsError, JsResult, Options};
