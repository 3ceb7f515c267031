// SPDX-License-Identifier: MIT

//! Condition blocks: pick the outgoing edge of a branching step
//!
//! A block holds ordered items, each guarded by a condition. The first item
//! whose condition holds decides the edge; when none does the block's own
//! default edge is taken.

use serde::{Deserialize, Serialize};

use crate::condition::{Condition, ConditionEvaluator};
use crate::error::BranchError;
use crate::variables::Variable;

/// A branching step in a flow
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionBlock {
    pub id: String,
    #[serde(default)]
    pub items: Vec<ConditionItem>,
    /// Edge taken when no item matches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outgoing_edge_id: Option<String>,
}

/// One guarded branch of a block
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionItem {
    pub id: String,
    #[serde(default, alias = "content")]
    pub condition: Condition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outgoing_edge_id: Option<String>,
}

/// Outcome of routing a block
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDecision {
    /// Matching item, `None` when the default edge was taken
    pub item_id: Option<String>,
    /// Edge to follow, `None` when the flow ends here
    pub edge_id: Option<String>,
}

impl RouteDecision {
    pub fn is_fallback(&self) -> bool {
        self.item_id.is_none()
    }

    /// Pretty-printed JSON, as printed by the `route` command
    pub fn to_json(&self) -> Result<String, BranchError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Route through a block with the default evaluator
pub fn route(block: &ConditionBlock, variables: &[Variable]) -> RouteDecision {
    block.route(&ConditionEvaluator::default(), variables)
}

impl ConditionBlock {
    /// Route through the block, stopping at the first matching item
    pub fn route(&self, evaluator: &ConditionEvaluator, variables: &[Variable]) -> RouteDecision {
        match self
            .items
            .iter()
            .find(|item| evaluator.evaluate(&item.condition, variables))
        {
            Some(item) => {
                log::debug!("Block '{}' matched item '{}'", self.id, item.id);
                RouteDecision {
                    item_id: Some(item.id.clone()),
                    edge_id: item.outgoing_edge_id.clone(),
                }
            }
            None => {
                log::debug!("Block '{}' matched no item, taking default edge", self.id);
                RouteDecision {
                    item_id: None,
                    edge_id: self.outgoing_edge_id.clone(),
                }
            }
        }
    }
}
