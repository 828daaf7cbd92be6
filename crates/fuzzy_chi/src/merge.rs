//! Combine partition-local rule sets into the global rule base.
//!
//! Input order is part of the contract: rule sets arrive sorted by partition index, and
//! which of two colliding rules survives depends on that order.

use crate::codec::PartitionOutput;
use crate::conf::MergePolicy;
use crate::error::{ChiError, Result};
use crate::rule::RuleKey;
use crate::rule_base::RuleSet;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBaseMerger {
    pub policy: MergePolicy,
}

impl RuleBaseMerger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: MergePolicy) -> Self {
        RuleBaseMerger { policy }
    }

    /// Merge `ordered` (ascending partition index) into one rule base.
    pub fn merge(&self, ordered: &[RuleSet]) -> Result<RuleSet> {
        let first = ordered.first().ok_or(ChiError::NoPartitions)?;
        let baseline = ordered.iter().find(|rs| !rs.is_empty()).unwrap_or(first);

        let mut merged = RuleSet::new(Arc::clone(baseline.domain()), *baseline.config());
        let mut provenance = vec![0usize; ordered.len()];
        let mut positions: HashMap<RuleKey, usize> = HashMap::new();
        let mut discarded = 0usize;

        for (k, rule_set) in ordered.iter().enumerate() {
            if let Some(reason) = baseline.inconsistency_with(rule_set) {
                return Err(ChiError::InconsistentDomain {
                    partition: k,
                    reason,
                });
            }
            for rule in rule_set {
                match positions.get(&rule.key()) {
                    Some(&pos) => {
                        discarded += 1;
                        if self.policy == MergePolicy::MaxWeight {
                            if let Some(kept) = merged.rule_mut(pos) {
                                if rule.weight > kept.weight {
                                    kept.weight = rule.weight;
                                }
                            }
                        }
                    }
                    None => {
                        positions.insert(rule.key(), merged.len());
                        merged.push(rule.clone());
                    }
                }
            }
            provenance[k] = rule_set.len();
            debug!(partition = k, n_rules = rule_set.len(), "partition merged");
        }

        merged.set_provenance(provenance);
        info!(
            partitions = ordered.len(),
            n_rules = merged.len(),
            discarded,
            policy = ?self.policy,
            "rule bases merged"
        );
        Ok(merged)
    }

    /// Merge decoded partition outputs. An output without a rule base is a missing partition.
    pub fn merge_outputs(&self, outputs: &[PartitionOutput]) -> Result<RuleSet> {
        let rule_sets = outputs
            .iter()
            .enumerate()
            .map(|(k, out)| {
                out.rule_base
                    .clone()
                    .ok_or(ChiError::MissingPartition { partition: k })
            })
            .collect::<Result<Vec<_>>>()?;
        self.merge(&rule_sets)
    }
}

/// Merge with the default first-seen-wins policy.
pub fn merge(ordered: &[RuleSet]) -> Result<RuleSet> {
    RuleBaseMerger::default().merge(ordered)
}
