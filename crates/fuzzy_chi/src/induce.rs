//! Chi rule induction over one data partition.
//!
//! Every instance is mapped to the antecedent made of its best-matching label per attribute.
//! Compatibility grades (product of the chosen memberships) are summed per antecedent and
//! class; each antecedent then yields one rule predicting its heaviest class, weighted by that
//! class's share of the antecedent's total grade.

use crate::conf::ChiConfig;
use crate::domain::FuzzyDomain;
use crate::error::{ChiError, Result};
use crate::rule::FuzzyRule;
use crate::rule_base::RuleSet;
use crate::schema::{DataPartition, Instance};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Per-antecedent, per-class compatibility grades. Owned by a single induction call.
///
/// Grades are kept individually and summed in ascending order when rules are built, so the
/// sums do not depend on the order instances were added in.
#[derive(Debug, Default)]
pub struct GradeAccumulator {
    n_classes: usize,
    grades: BTreeMap<Vec<usize>, Vec<Vec<f64>>>,
}

impl GradeAccumulator {
    pub fn new(n_classes: usize) -> Self {
        GradeAccumulator {
            n_classes,
            grades: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, antecedent: Vec<usize>, class: usize, grade: f64) {
        let n_classes = self.n_classes;
        let per_class = self
            .grades
            .entry(antecedent)
            .or_insert_with(|| vec![Vec::new(); n_classes]);
        per_class[class].push(grade);
    }

    pub fn n_antecedents(&self) -> usize {
        self.grades.len()
    }

    /// One rule per antecedent, in ascending antecedent order.
    /// Antecedents with no accumulated grade are skipped; the count of skipped ones is returned.
    pub fn into_rules(self) -> (Vec<FuzzyRule>, usize) {
        let mut skipped = 0;
        let mut rules = Vec::with_capacity(self.grades.len());
        for (antecedent, grades) in self.grades {
            let per_class: Vec<f64> = grades.into_iter().map(ordered_sum).collect();
            let total: f64 = per_class.iter().sum();
            if total <= 0.0 {
                debug!(?antecedent, "antecedent has zero compatibility, no rule emitted");
                skipped += 1;
                continue;
            }
            let (consequent, best) = per_class
                .iter()
                .enumerate()
                .fold((0, per_class[0]), |acc, (class, &sum)| {
                    if sum > acc.1 {
                        (class, sum)
                    } else {
                        acc
                    }
                });
            rules.push(FuzzyRule::new(antecedent, consequent, best / total));
        }
        (rules, skipped)
    }
}

fn ordered_sum(mut grades: Vec<f64>) -> f64 {
    grades.sort_by(f64::total_cmp);
    grades.iter().sum()
}

/// Best label per attribute and the compatibility grade of the instance with that antecedent.
pub fn antecedent_of(instance: &Instance, domain: &FuzzyDomain) -> (Vec<usize>, f64) {
    let mut grade = 1.0;
    let antecedent = domain
        .variables
        .iter()
        .zip(instance.values.iter())
        .map(|(var, &x)| {
            let (label, degree) = var.fuzzify(x);
            grade *= degree;
            label
        })
        .collect();
    (antecedent, grade)
}

fn check_instance(
    partition: usize,
    row: usize,
    instance: &Instance,
    domain: &FuzzyDomain,
) -> Result<()> {
    if instance.values.len() != domain.n_variables() {
        return Err(ChiError::InvalidInstance {
            partition,
            row,
            reason: format!(
                "expected {} values, found {}",
                domain.n_variables(),
                instance.values.len()
            ),
        });
    }
    if instance.label >= domain.n_classes() {
        return Err(ChiError::InvalidInstance {
            partition,
            row,
            reason: format!(
                "class index {} out of range for {} classes",
                instance.label,
                domain.n_classes()
            ),
        });
    }
    Ok(())
}

/// Build the partition-local rule set of `partition` against the shared `domain`.
pub fn induce(
    partition: &DataPartition,
    domain: &Arc<FuzzyDomain>,
    config: &ChiConfig,
) -> Result<RuleSet> {
    debug!(
        partition = partition.index,
        n_instances = partition.len(),
        "inducing rules"
    );

    if let Some(reason) = domain.schema_mismatch(&partition.schema) {
        return Err(ChiError::InconsistentDomain {
            partition: partition.index,
            reason,
        });
    }
    if config.label_count != domain.label_count {
        return Err(ChiError::InconsistentDomain {
            partition: partition.index,
            reason: format!(
                "configured label count {} differs from domain label count {}",
                config.label_count, domain.label_count
            ),
        });
    }
    if partition.is_empty() {
        if config.strict {
            return Err(ChiError::EmptyPartition {
                partition: partition.index,
            });
        }
        warn!(partition = partition.index, "empty partition, contributing no rules");
        return Ok(RuleSet::new(Arc::clone(domain), config.rule_base));
    }

    let mut acc = GradeAccumulator::new(domain.n_classes());
    for (row, instance) in partition.instances.iter().enumerate() {
        check_instance(partition.index, row, instance, domain)?;
        let (antecedent, grade) = antecedent_of(instance, domain);
        acc.add(antecedent, instance.label, grade);
    }

    let n_antecedents = acc.n_antecedents();
    let (rules, skipped) = acc.into_rules();
    if skipped > 0 {
        warn!(
            partition = partition.index,
            skipped, "antecedents without compatibility were dropped"
        );
    }
    debug!(
        partition = partition.index,
        n_antecedents,
        n_rules = rules.len(),
        "partition rule set finalized"
    );

    Ok(RuleSet::from_rules(
        Arc::clone(domain),
        config.rule_base,
        rules,
    ))
}
