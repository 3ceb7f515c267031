// SPDX-License-Identifier: MIT

//! Condition evaluation for flow branching
//!
//! A condition is a list of comparisons between a variable's value and a
//! target, joined by AND or OR. Values may be strings, lists of strings or
//! null; comparisons broadcast over lists. Examples of comparisons:
//! - `answer` Equal to `yes`
//! - `tags` Contains `{{wanted_tag}}`
//! - `email` Matches regex `/^\S+@\S+$/i`
//! - `reply` Similar to `hi|hello|hey`

mod ast;
mod broadcast;
mod evaluator;
mod operators;
mod regex_literal;
mod similarity;
mod temporal;

pub use ast::{Comparison, ComparisonOperator, Condition, LogicalOperator};
pub use broadcast::{compare, normalize, Reduction};
pub use evaluator::{evaluate, ConditionEvaluator};
pub use regex_literal::{parse_regex_literal, RegexLiteral};
pub use similarity::{best_similarity, levenshtein, similarity};
pub use temporal::{parse_date, parse_date_or_number, parse_number};
