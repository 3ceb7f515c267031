// SPDX-License-Identifier: MIT

//! Semantics of each comparison operator

use super::ast::ComparisonOperator;
use super::broadcast::{canonical, compare, normalize, Reduction};
use super::regex_literal::parse_regex_literal;
use super::similarity::best_similarity;
use super::temporal::{parse_date_or_number, parse_number};
use crate::config::EvaluatorConfig;
use crate::variables::VariableValue;
use regex::Regex;
use std::cell::RefCell;
use std::collections::HashMap;

/// Apply `op` to a resolved input and target
pub fn apply(
    op: ComparisonOperator,
    input: &VariableValue,
    target: &VariableValue,
    config: &EvaluatorConfig,
) -> bool {
    match op {
        ComparisonOperator::Contains => match input {
            VariableValue::Sequence(_) => compare(same_element, input, target, Reduction::Any),
            _ => compare(contains, input, target, Reduction::Any),
        },
        ComparisonOperator::NotContains => match input {
            VariableValue::Sequence(_) => {
                compare(|a, b| !same_element(a, b), input, target, Reduction::Every)
            }
            _ => compare(not_contains, input, target, Reduction::Every),
        },
        ComparisonOperator::Equal => compare(equals, input, target, Reduction::Every),
        ComparisonOperator::NotEqual => {
            compare(|a, b| !equals(a, b), input, target, Reduction::Every)
        }
        ComparisonOperator::Greater => ordered(input, target, |a, b| a > b),
        ComparisonOperator::Less => ordered(input, target, |a, b| a < b),
        ComparisonOperator::IsSet => !input.is_empty(),
        ComparisonOperator::IsEmpty => input.is_empty(),
        ComparisonOperator::StartsWith => compare(
            |a, b| affix(a, b, |s, p| s.starts_with(p)),
            input,
            target,
            Reduction::Every,
        ),
        ComparisonOperator::EndsWith => compare(
            |a, b| affix(a, b, |s, p| s.ends_with(p)),
            input,
            target,
            Reduction::Every,
        ),
        ComparisonOperator::MatchesRegex => {
            let patterns = PatternCache::new(config);
            compare(
                |a, b| patterns.matches(a, b).unwrap_or(false),
                input,
                target,
                Reduction::Any,
            )
        }
        ComparisonOperator::NotMatchRegex => {
            let patterns = PatternCache::new(config);
            compare(
                |a, b| patterns.matches(a, b).map_or(true, |matched| !matched),
                input,
                target,
                Reduction::Every,
            )
        }
        ComparisonOperator::StringSimilarity => similar(input, target, config),
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Sequence membership: canonical equality, case and spacing preserved
fn same_element(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => canonical(a) == canonical(b),
        _ => false,
    }
}

/// Normalized text, `None` when null or blank once trimmed
fn normalized(s: Option<&str>) -> Option<String> {
    s.map(normalize).filter(|s| !s.is_empty())
}

fn contains(a: Option<&str>, b: Option<&str>) -> bool {
    match (normalized(a), normalized(b)) {
        (Some(a), Some(b)) => a.contains(&b),
        _ => false,
    }
}

fn not_contains(a: Option<&str>, b: Option<&str>) -> bool {
    !contains(a, b)
}

fn equals(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => normalize(a) == normalize(b),
        (None, None) => true,
        _ => false,
    }
}

fn affix<F>(a: Option<&str>, b: Option<&str>, test: F) -> bool
where
    F: Fn(&str, &str) -> bool,
{
    match (normalized(a), normalized(b)) {
        (Some(a), Some(b)) => test(&a, &b),
        _ => false,
    }
}

/// GREATER / LESS. Strings are read as numbers or dates; a sequence stands in
/// for its length. NaN never orders, so unparseable input is false.
fn ordered<F>(input: &VariableValue, target: &VariableValue, cmp: F) -> bool
where
    F: Fn(f64, f64) -> bool,
{
    use VariableValue::{Null, Scalar, Sequence};

    let (a, b) = match (input, target) {
        (Null, _) | (_, Null) => return false,
        (Scalar(a), Scalar(b)) => (parse_date_or_number(a), parse_date_or_number(b)),
        (Scalar(a), Sequence(b)) => (parse_number(a), b.len() as f64),
        (Sequence(a), Scalar(b)) => (a.len() as f64, parse_number(b)),
        (Sequence(a), Sequence(b)) => (a.len() as f64, b.len() as f64),
    };
    cmp(a, b)
}

/// Compiled regexes for one comparison, keyed by target text, so a sequence
/// input compiles each pattern once
struct PatternCache<'a> {
    config: &'a EvaluatorConfig,
    compiled: RefCell<HashMap<String, Option<Regex>>>,
}

impl<'a> PatternCache<'a> {
    fn new(config: &'a EvaluatorConfig) -> Self {
        Self {
            config,
            compiled: RefCell::new(HashMap::new()),
        }
    }

    /// `Some(matched)` when the pattern compiles, `None` when it is blank or
    /// invalid. Null and empty inputs never match.
    fn matches(&self, a: Option<&str>, b: Option<&str>) -> Option<bool> {
        let b = non_blank(b)?;
        let mut compiled = self.compiled.borrow_mut();
        let re = compiled
            .entry(b.to_string())
            .or_insert_with(|| compile_pattern(b, self.config))
            .as_ref()?;
        Some(non_blank(a).is_some_and(|a| re.is_match(a)))
    }
}

fn compile_pattern(target: &str, config: &EvaluatorConfig) -> Option<Regex> {
    let literal = parse_regex_literal(target);
    if literal.pattern.is_empty() {
        return None;
    }

    match literal.compile(config.regex_size_limit) {
        Ok(re) => Some(re),
        Err(e) => {
            log::warn!("Ignoring invalid regex '{}': {}", literal.pattern, e);
            None
        }
    }
}

fn similar(input: &VariableValue, target: &VariableValue, config: &EvaluatorConfig) -> bool {
    let Some(input) = input.as_scalar() else {
        return false;
    };

    let targets: Vec<&str> = match target {
        VariableValue::Null => return false,
        VariableValue::Scalar(s) => vec![s.as_str()],
        VariableValue::Sequence(items) => items.iter().map(String::as_str).collect(),
    };

    match best_similarity(input, targets) {
        Some(score) => {
            log::trace!(
                "best similarity {:.3} against threshold {:.3}",
                score,
                config.similarity_threshold
            );
            score > config.similarity_threshold
        }
        None => false,
    }
}
