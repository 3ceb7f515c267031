// SPDX-License-Identifier: MIT

//! Condition evaluation for flow automation
//!
//! Decides which branch a flow takes by evaluating conditions (comparisons
//! between runtime variables and targets, joined by AND/OR) against the
//! current variable bindings.

pub mod condition;
pub mod config;
pub mod error;
pub mod loader;
pub mod routing;
pub mod server;
pub mod variables;

pub use condition::{
    evaluate, Comparison, ComparisonOperator, Condition, ConditionEvaluator, LogicalOperator,
};
pub use error::BranchError;
pub use routing::{route, ConditionBlock, ConditionItem, RouteDecision};
pub use variables::{Variable, VariableValue};
