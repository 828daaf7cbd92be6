//! Binary form of what a partition (or the final merge) hands to its collaborators.
//!
//! Layout, via bincode: a one-byte tag followed by the rule base when present, then a
//! one-byte tag followed by the prediction array when present.

use crate::error::Result;
use crate::rule_base::RuleSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartitionOutput {
    pub rule_base: Option<RuleSet>,
    pub predictions: Option<Vec<i32>>,
}

impl PartitionOutput {
    pub fn new(rule_base: RuleSet) -> Self {
        PartitionOutput {
            rule_base: Some(rule_base),
            predictions: None,
        }
    }

    pub fn with_predictions(mut self, predictions: Vec<i32>) -> Self {
        self.predictions = Some(predictions);
        self
    }

    pub fn rule_base(&self) -> Option<&RuleSet> {
        self.rule_base.as_ref()
    }

    pub fn predictions(&self) -> Option<&[i32]> {
        self.predictions.as_deref()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl From<RuleSet> for PartitionOutput {
    fn from(rule_base: RuleSet) -> Self {
        PartitionOutput::new(rule_base)
    }
}
