// SPDX-License-Identifier: MIT

//! Variable bindings consumed by condition evaluation
//!
//! This module provides:
//! - `Variable` / `VariableValue` - the runtime bindings a condition reads
//! - `VariableResolver` - resolves `{{name}}` targets to another variable's value
//! - `TextInterpolator` - substitutes placeholders embedded in literal text

mod placeholder;
mod value;

pub use placeholder::{
    PlaceholderInterpolator, PlaceholderResolver, TextInterpolator, VariableResolver,
};
pub use value::{Variable, VariableValue};

/// Look up a variable by id
pub fn find_by_id<'a>(variables: &'a [Variable], id: &str) -> Option<&'a Variable> {
    variables.iter().find(|v| v.id == id)
}
