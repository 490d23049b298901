//! Traits which, typically, may be imported without concern: `use pennant::prelude::*`.

// Needs to be imported in order to implement a custom flag type.
pub use crate::api::Value;
