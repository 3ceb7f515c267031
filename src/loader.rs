//! Document loader - YAML/JSON file loading and parsing
//!
//! Conditions, condition blocks and variable sets are plain serde documents.
//! YAML is a superset of JSON, so both formats go through the YAML parser.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::condition::Condition;
use crate::error::BranchError;
use crate::routing::ConditionBlock;
use crate::variables::Variable;

/// Loads evaluation inputs from YAML or JSON files
pub struct DocumentLoader;

impl DocumentLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a condition from a file
    pub fn load_condition<P: AsRef<Path>>(&self, path: P) -> Result<Condition, BranchError> {
        Self::parse_condition(&fs::read_to_string(path)?)
    }

    /// Load a condition block from a file
    pub fn load_block<P: AsRef<Path>>(&self, path: P) -> Result<ConditionBlock, BranchError> {
        Self::parse_block(&fs::read_to_string(path)?)
    }

    /// Load a variable list from a file
    pub fn load_variables<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Variable>, BranchError> {
        Self::parse_variables(&fs::read_to_string(path)?)
    }

    /// Parse a condition from a YAML or JSON string
    pub fn parse_condition(content: &str) -> Result<Condition, BranchError> {
        parse_document("condition", content)
    }

    /// Parse a condition block from a YAML or JSON string
    pub fn parse_block(content: &str) -> Result<ConditionBlock, BranchError> {
        parse_document("block", content)
    }

    /// Parse a variable list from a YAML or JSON string.
    ///
    /// An empty document is an empty list.
    pub fn parse_variables(content: &str) -> Result<Vec<Variable>, BranchError> {
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        parse_document("variables", content)
    }
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_document<T: DeserializeOwned>(kind: &str, content: &str) -> Result<T, BranchError> {
    if content.trim().is_empty() {
        return Err(BranchError::document(kind, "document is empty"));
    }
    Ok(serde_yaml::from_str(content)?)
}
