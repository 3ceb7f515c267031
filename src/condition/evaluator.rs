// SPDX-License-Identifier: MIT

//! Condition evaluator

use once_cell::sync::Lazy;

use super::ast::{Comparison, Condition, LogicalOperator};
use super::operators;
use crate::config::EvaluatorConfig;
use crate::variables::{
    find_by_id, PlaceholderInterpolator, PlaceholderResolver, TextInterpolator, Variable,
    VariableResolver, VariableValue,
};

static DEFAULT_EVALUATOR: Lazy<ConditionEvaluator> = Lazy::new(ConditionEvaluator::default);

/// Evaluate a condition against variable bindings with the default evaluator
pub fn evaluate(condition: &Condition, variables: &[Variable]) -> bool {
    DEFAULT_EVALUATOR.evaluate(condition, variables)
}

/// Evaluates conditions against variable bindings.
///
/// Holds only configuration and the variable collaborators; evaluation never
/// mutates anything, so one evaluator can be shared across threads.
pub struct ConditionEvaluator {
    config: EvaluatorConfig,
    resolver: Box<dyn VariableResolver>,
    interpolator: Box<dyn TextInterpolator>,
}

impl ConditionEvaluator {
    /// Create an evaluator using the `{{name}}` placeholder collaborators
    pub fn new(config: EvaluatorConfig) -> Self {
        Self {
            config,
            resolver: Box::new(PlaceholderResolver),
            interpolator: Box::new(PlaceholderInterpolator),
        }
    }

    /// Replace the variable reference resolver
    pub fn with_resolver(mut self, resolver: impl VariableResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Replace the text interpolator
    pub fn with_interpolator(mut self, interpolator: impl TextInterpolator + 'static) -> Self {
        self.interpolator = Box::new(interpolator);
        self
    }

    /// Settings this evaluator was built with
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluate a whole condition.
    ///
    /// A condition without comparisons is false. AND over no comparisons is
    /// vacuously true, OR over none is false.
    pub fn evaluate(&self, condition: &Condition, variables: &[Variable]) -> bool {
        let Some(comparisons) = &condition.comparisons else {
            log::debug!("Condition has no comparisons, failing closed");
            return false;
        };

        let result = match condition.logical_operator {
            LogicalOperator::And => comparisons
                .iter()
                .all(|c| self.evaluate_comparison(c, variables)),
            LogicalOperator::Or => comparisons
                .iter()
                .any(|c| self.evaluate_comparison(c, variables)),
        };

        log::debug!(
            "{:?} condition over {} comparison(s) evaluated to {}",
            condition.logical_operator,
            comparisons.len(),
            result
        );
        result
    }

    /// Evaluate a single comparison; incomplete comparisons are false
    pub fn evaluate_comparison(&self, comparison: &Comparison, variables: &[Variable]) -> bool {
        let Some(variable_id) = comparison.variable_id.as_deref().filter(|id| !id.is_empty())
        else {
            return false;
        };

        let input = find_by_id(variables, variable_id)
            .map(|v| v.value.clone())
            .unwrap_or_default();
        let target = self.resolve_target(comparison.value.as_deref(), variables);

        let Some(op) = comparison.comparison_operator else {
            return false;
        };

        let result = operators::apply(op, &input, &target, &self.config);
        log::trace!(
            "{} {:?} '{}' {:?} => {}",
            variable_id,
            input,
            op,
            target,
            result
        );
        result
    }

    /// Resolve the right-hand side: explicit null, a variable reference, or
    /// literal text with placeholders substituted
    fn resolve_target(&self, value: Option<&str>, variables: &[Variable]) -> VariableValue {
        match value {
            None | Some("undefined") | Some("null") => VariableValue::Null,
            Some(raw) => self.resolver.resolve(raw, variables).unwrap_or_else(|| {
                VariableValue::Scalar(self.interpolator.interpolate(raw, variables))
            }),
        }
    }
}

impl Default for ConditionEvaluator {
    fn default() -> Self {
        Self::new(EvaluatorConfig::default())
    }
}

impl std::fmt::Debug for ConditionEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConditionEvaluator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
