use serde::{Deserialize, Serialize};

pub const DEFAULT_LABEL_COUNT: usize = 3;
pub const MIN_LABEL_COUNT: usize = 2;
pub const DEFAULT_N_PARTITIONS: usize = 4;

/// How a trained rule base is meant to be queried. Carried through training untouched.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum InferenceType {
    WinningRule,
    AdditiveCombination,
}

/// T-norm used to combine per-attribute memberships when the rule base is queried.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum CombinationType {
    Minimum,
    Product,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum RuleWeightType {
    NoWeights,
    CertaintyFactor,
    PenalizedCertaintyFactorI,
    PenalizedCertaintyFactorII,
}

/// What to do when two partitions produce a rule with the same antecedent and consequent.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub enum MergePolicy {
    /// Keep the rule from the lowest partition index, drop later ones.
    #[default]
    FirstSeen,
    /// Keep the first-seen position but take the largest weight among the colliding rules.
    MaxWeight,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub enum SplitStrategy {
    /// Consecutive runs of rows, like input splits of a file.
    #[default]
    Contiguous,
    /// Rows shuffled with a seeded generator before chunking.
    Shuffled { seed: u64 },
}

/// Global options stamped onto every rule set produced from one training run.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RuleBaseConfig {
    pub inference: InferenceType,
    pub combination: CombinationType,
    pub rule_weight: RuleWeightType,
}

impl Default for RuleBaseConfig {
    fn default() -> Self {
        RuleBaseConfig {
            inference: InferenceType::WinningRule,
            combination: CombinationType::Product,
            rule_weight: RuleWeightType::CertaintyFactor,
        }
    }
}

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct ChiConfig {
    pub label_count: usize,
    pub rule_base: RuleBaseConfig,
    /// Reject partitions without instances instead of contributing an empty rule set.
    pub strict: bool,
}

impl ChiConfig {
    pub fn new(label_count: usize, rule_base: RuleBaseConfig, strict: bool) -> Self {
        ChiConfig {
            label_count,
            rule_base,
            strict,
        }
    }

    pub fn with_label_count(mut self, label_count: usize) -> Self {
        self.label_count = label_count;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for ChiConfig {
    fn default() -> Self {
        ChiConfig::new(DEFAULT_LABEL_COUNT, RuleBaseConfig::default(), false)
    }
}
