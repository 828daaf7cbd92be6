use crate::conf::RuleBaseConfig;
use crate::domain::FuzzyDomain;
use crate::rule::{FuzzyRule, RuleKey};
use crate::serde::shared_domain as domain_serde;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A collection of fuzzy rules together with the fuzzy database they refer to.
///
/// Partition-local rule sets have an empty provenance table. A merged rule set records,
/// for each partition in merge order, how many rules that partition reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(with = "domain_serde")]
    domain: Arc<FuzzyDomain>,
    config: RuleBaseConfig,
    rules: Vec<FuzzyRule>,
    provenance: Vec<usize>,
}

impl RuleSet {
    pub fn new(domain: Arc<FuzzyDomain>, config: RuleBaseConfig) -> Self {
        RuleSet {
            domain,
            config,
            rules: Vec::new(),
            provenance: Vec::new(),
        }
    }

    pub fn from_rules(
        domain: Arc<FuzzyDomain>,
        config: RuleBaseConfig,
        rules: Vec<FuzzyRule>,
    ) -> Self {
        RuleSet {
            domain,
            config,
            rules,
            provenance: Vec::new(),
        }
    }

    pub fn domain(&self) -> &Arc<FuzzyDomain> {
        &self.domain
    }

    pub fn config(&self) -> &RuleBaseConfig {
        &self.config
    }

    pub fn rules(&self) -> &[FuzzyRule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FuzzyRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&FuzzyRule> {
        self.rules.get(idx)
    }

    pub fn find(&self, key: &RuleKey) -> Option<&FuzzyRule> {
        self.rules
            .iter()
            .find(|r| r.consequent == key.consequent && r.antecedent == key.antecedent)
    }

    pub fn contains_key(&self, key: &RuleKey) -> bool {
        self.find(key).is_some()
    }

    /// Rules contributed by each partition before de-duplication, indexed by merge position.
    pub fn provenance(&self) -> &[usize] {
        &self.provenance
    }

    pub(crate) fn push(&mut self, rule: FuzzyRule) {
        self.rules.push(rule);
    }

    pub(crate) fn rule_mut(&mut self, idx: usize) -> Option<&mut FuzzyRule> {
        self.rules.get_mut(idx)
    }

    pub(crate) fn set_provenance(&mut self, provenance: Vec<usize>) {
        self.provenance = provenance;
    }

    /// Reason why `other` cannot be merged with this rule set, if any.
    pub fn inconsistency_with(&self, other: &RuleSet) -> Option<String> {
        if self.config != other.config {
            return Some(format!(
                "configuration {:?} differs from baseline {:?}",
                other.config, self.config
            ));
        }
        if Arc::ptr_eq(&self.domain, &other.domain) || self.domain == other.domain {
            return None;
        }
        if self.domain.class_names != other.domain.class_names {
            return Some("class labels differ from baseline".to_string());
        }
        if self.domain.label_count != other.domain.label_count {
            return Some(format!(
                "label count {} differs from baseline {}",
                other.domain.label_count, self.domain.label_count
            ));
        }
        Some("fuzzy variables differ from baseline".to_string())
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a FuzzyRule;
    type IntoIter = std::slice::Iter<'a, FuzzyRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RuleBase ({} rules, {:?})", self.rules.len(), self.config)?;
        for rule in &self.rules {
            writeln!(f, "  {}", rule.describe(&self.domain))?;
        }
        if !self.provenance.is_empty() {
            write!(f, "provenance: {:?}", self.provenance)?;
        }
        Ok(())
    }
}
