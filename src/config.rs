// SPDX-License-Identifier: MIT

//! Evaluator configuration
//!
//! Settings are read from an optional YAML file and can be overridden from the
//! environment (`.env` files are honoured by the binary):
//! - `KINETIC_BRANCH_SIMILARITY_THRESHOLD`
//! - `KINETIC_BRANCH_REGEX_SIZE_LIMIT`

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::BranchError;

pub const SIMILARITY_THRESHOLD_ENV: &str = "KINETIC_BRANCH_SIMILARITY_THRESHOLD";
pub const REGEX_SIZE_LIMIT_ENV: &str = "KINETIC_BRANCH_REGEX_SIZE_LIMIT";

/// Default minimum similarity a "Similar to" candidate must exceed
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.8;

/// Default compiled-size ceiling for user supplied regexes (1 MiB)
pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 1 << 20;

/// Tuning knobs for the condition evaluator
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Similarity score a candidate must strictly exceed to match
    pub similarity_threshold: f64,
    /// Upper bound on the compiled size of a regex, in bytes
    pub regex_size_limit: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
        }
    }
}

impl EvaluatorConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BranchError> {
        let content = fs::read_to_string(path)?;
        Self::parse_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn parse_yaml(content: &str) -> Result<Self, BranchError> {
        // An empty document deserializes to unit, not to a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: EvaluatorConfig = serde_yaml::from_str(content)?;
        config.validate()
    }

    /// Default configuration with environment overrides applied
    pub fn from_env() -> Result<Self, BranchError> {
        Self::default().with_env_overrides()
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self, BranchError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, BranchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(SIMILARITY_THRESHOLD_ENV) {
            self.similarity_threshold = raw.trim().parse().map_err(|_| {
                BranchError::config(format!(
                    "{} must be a number, got '{}'",
                    SIMILARITY_THRESHOLD_ENV, raw
                ))
            })?;
        }

        if let Some(raw) = lookup(REGEX_SIZE_LIMIT_ENV) {
            self.regex_size_limit = raw.trim().parse().map_err(|_| {
                BranchError::config(format!(
                    "{} must be a positive integer, got '{}'",
                    REGEX_SIZE_LIMIT_ENV, raw
                ))
            })?;
        }

        self.validate()
    }

    fn validate(self) -> Result<Self, BranchError> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(BranchError::config(format!(
                "similarity_threshold must be within [0, 1], got {}",
                self.similarity_threshold
            )));
        }
        if self.regex_size_limit == 0 {
            return Err(BranchError::config("regex_size_limit must be positive"));
        }
        Ok(self)
    }
}
