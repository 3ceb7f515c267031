// SPDX-License-Identifier: MIT

//! Condition and comparison types

use serde::{Deserialize, Serialize};

/// A set of comparisons combined by a single logical operator
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(default)]
    pub logical_operator: LogicalOperator,
    /// Absent comparisons make the whole condition false
    #[serde(default)]
    pub comparisons: Option<Vec<Comparison>>,
}

impl Condition {
    /// Condition that holds when every comparison holds
    pub fn all(comparisons: Vec<Comparison>) -> Self {
        Self {
            logical_operator: LogicalOperator::And,
            comparisons: Some(comparisons),
        }
    }

    /// Condition that holds when at least one comparison holds
    pub fn any(comparisons: Vec<Comparison>) -> Self {
        Self {
            logical_operator: LogicalOperator::Or,
            comparisons: Some(comparisons),
        }
    }
}

/// How comparison results are folded together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum LogicalOperator {
    #[default]
    #[serde(rename = "AND", alias = "and")]
    And,
    #[serde(rename = "OR", alias = "or")]
    Or,
}

/// One (variable, operator, literal) triple
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_operator: Option<ComparisonOperator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Comparison {
    /// Comparison against a literal target
    pub fn new(
        variable_id: impl Into<String>,
        operator: ComparisonOperator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            variable_id: Some(variable_id.into()),
            comparison_operator: Some(operator),
            value: Some(value.into()),
        }
    }

    /// Comparison that takes no target, such as `Is set`
    pub fn unary(variable_id: impl Into<String>, operator: ComparisonOperator) -> Self {
        Self {
            variable_id: Some(variable_id.into()),
            comparison_operator: Some(operator),
            value: None,
        }
    }
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ComparisonOperator {
    #[serde(rename = "Equal to", alias = "EQUAL")]
    Equal,
    #[serde(rename = "Not equal", alias = "NOT_EQUAL")]
    NotEqual,
    #[serde(rename = "Contains", alias = "CONTAINS")]
    Contains,
    #[serde(rename = "Does not contain", alias = "NOT_CONTAINS")]
    NotContains,
    #[serde(rename = "Greater than", alias = "GREATER")]
    Greater,
    #[serde(rename = "Less than", alias = "LESS")]
    Less,
    #[serde(rename = "Is set", alias = "IS_SET")]
    IsSet,
    #[serde(rename = "Is empty", alias = "IS_EMPTY")]
    IsEmpty,
    #[serde(rename = "Starts with", alias = "STARTS_WITH")]
    StartsWith,
    #[serde(rename = "Ends with", alias = "ENDS_WITH")]
    EndsWith,
    #[serde(rename = "Matches regex", alias = "MATCHES_REGEX")]
    MatchesRegex,
    #[serde(rename = "Does not match regex", alias = "NOT_MATCH_REGEX")]
    NotMatchRegex,
    #[serde(rename = "Similar to", alias = "STRING_SIMILARITY")]
    StringSimilarity,
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ComparisonOperator::Equal => "Equal to",
            ComparisonOperator::NotEqual => "Not equal",
            ComparisonOperator::Contains => "Contains",
            ComparisonOperator::NotContains => "Does not contain",
            ComparisonOperator::Greater => "Greater than",
            ComparisonOperator::Less => "Less than",
            ComparisonOperator::IsSet => "Is set",
            ComparisonOperator::IsEmpty => "Is empty",
            ComparisonOperator::StartsWith => "Starts with",
            ComparisonOperator::EndsWith => "Ends with",
            ComparisonOperator::MatchesRegex => "Matches regex",
            ComparisonOperator::NotMatchRegex => "Does not match regex",
            ComparisonOperator::StringSimilarity => "Similar to",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operator_display_matches_wire_name() {
        for op in [
            ComparisonOperator::Equal,
            ComparisonOperator::NotContains,
            ComparisonOperator::NotMatchRegex,
            ComparisonOperator::StringSimilarity,
        ] {
            let wire = serde_json::to_value(op).unwrap();
            assert_eq!(wire, json!(op.to_string()));
        }
    }

    #[test]
    fn test_operator_aliases() {
        let op: ComparisonOperator = serde_json::from_value(json!("NOT_CONTAINS")).unwrap();
        assert_eq!(op, ComparisonOperator::NotContains);

        let op: ComparisonOperator = serde_json::from_value(json!("Greater than")).unwrap();
        assert_eq!(op, ComparisonOperator::Greater);

        assert!(serde_json::from_value::<ComparisonOperator>(json!("Roughly")).is_err());
    }

    #[test]
    fn test_condition_deserialize() {
        let condition: Condition = serde_json::from_value(json!({
            "logicalOperator": "OR",
            "comparisons": [
                {"variableId": "v1", "comparisonOperator": "Equal to", "value": "42"},
                {"variableId": "v2", "comparisonOperator": "IS_SET"},
                {}
            ]
        }))
        .unwrap();

        assert_eq!(condition.logical_operator, LogicalOperator::Or);
        let comparisons = condition.comparisons.unwrap();
        assert_eq!(
            comparisons[0],
            Comparison::new("v1", ComparisonOperator::Equal, "42")
        );
        assert_eq!(
            comparisons[1],
            Comparison::unary("v2", ComparisonOperator::IsSet)
        );
        assert_eq!(comparisons[2], Comparison::default());
    }

    #[test]
    fn test_condition_defaults() {
        let condition: Condition = serde_json::from_value(json!({})).unwrap();
        assert_eq!(condition.logical_operator, LogicalOperator::And);
        assert!(condition.comparisons.is_none());
    }
}
