// SPDX-License-Identifier: MIT

//! `{{name}}` placeholder handling
//!
//! Provides the default implementations of the variable collaborators used
//! when resolving the right-hand side of a comparison.

use once_cell::sync::Lazy;
use regex::Regex;

use super::value::{Variable, VariableValue};

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*([^{}]+?)\s*\}\}").expect("placeholder pattern is valid"));

static WHOLE_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\{\{\s*([^{}]+?)\s*\}\}$").expect("placeholder pattern is valid")
});

/// Resolves a comparison target that refers to another variable
pub trait VariableResolver: Send + Sync {
    /// Value of the variable `target` uniquely names, if any
    fn resolve(&self, target: &str, variables: &[Variable]) -> Option<VariableValue>;
}

/// Substitutes variable references embedded in free text
pub trait TextInterpolator: Send + Sync {
    fn interpolate(&self, text: &str, variables: &[Variable]) -> String;
}

/// Resolves targets of the exact form `{{name}}`
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderResolver;

impl VariableResolver for PlaceholderResolver {
    fn resolve(&self, target: &str, variables: &[Variable]) -> Option<VariableValue> {
        let name = WHOLE_PLACEHOLDER.captures(target.trim())?.get(1)?.as_str();

        let mut matches = variables.iter().filter(|v| v.name() == name);
        let variable = matches.next()?;
        if matches.next().is_some() {
            log::debug!("Placeholder '{}' is ambiguous, not resolving", name);
            return None;
        }

        // A null binding resolves to nothing and falls through to interpolation
        match &variable.value {
            VariableValue::Null => None,
            value => Some(value.clone()),
        }
    }
}

/// Replaces every `{{name}}` with the variable's text; unknown names become empty
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderInterpolator;

impl TextInterpolator for PlaceholderInterpolator {
    fn interpolate(&self, text: &str, variables: &[Variable]) -> String {
        PLACEHOLDER
            .replace_all(text, |caps: &regex::Captures<'_>| {
                let name = &caps[1];
                variables
                    .iter()
                    .find(|v| v.name() == name)
                    .map(|v| v.value.to_text())
                    .unwrap_or_default()
            })
            .into_owned()
    }
}
