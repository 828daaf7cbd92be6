//! In-process partition orchestration: split, induce every partition on the rayon pool,
//! then merge the results in partition order.

use crate::conf::{ChiConfig, MergePolicy, SplitStrategy};
use crate::domain::{build_domain, FuzzyDomain};
use crate::error::Result;
use crate::induce::induce;
use crate::merge::RuleBaseMerger;
use crate::rule_base::RuleSet;
use crate::schema::{DataPartition, DatasetSchema, Instance};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct ChiTrainer {
    pub config: ChiConfig,
    pub merge_policy: MergePolicy,
}

impl ChiTrainer {
    pub fn new(config: ChiConfig, merge_policy: MergePolicy) -> Self {
        ChiTrainer {
            config,
            merge_policy,
        }
    }

    /// Split `instances` into `n_partitions` disjoint partitions covering every instance once.
    /// Partition sizes differ by at most one; `n_partitions` of 0 is treated as 1.
    pub fn split(
        schema: &Arc<DatasetSchema>,
        mut instances: Vec<Instance>,
        n_partitions: usize,
        strategy: SplitStrategy,
    ) -> Vec<DataPartition> {
        let n_partitions = n_partitions.max(1);
        if let SplitStrategy::Shuffled { seed } = strategy {
            let mut rng = StdRng::seed_from_u64(seed);
            instances.shuffle(&mut rng);
        }

        let base = instances.len() / n_partitions;
        let extra = instances.len() % n_partitions;
        let mut rest = instances.into_iter();
        (0..n_partitions)
            .map(|idx| {
                let size = base + usize::from(idx < extra);
                let chunk: Vec<Instance> = rest.by_ref().take(size).collect();
                DataPartition::new(idx, Arc::clone(schema), chunk)
            })
            .collect()
    }

    /// Induce every partition in parallel. Results keep the order of `partitions`.
    pub fn induce_all(
        &self,
        domain: &Arc<FuzzyDomain>,
        partitions: &[DataPartition],
    ) -> Vec<Result<RuleSet>> {
        partitions
            .par_iter()
            .map(|partition| induce(partition, domain, &self.config))
            .collect()
    }

    /// Train on partitions already sorted by partition index.
    pub fn train(&self, schema: &DatasetSchema, partitions: &[DataPartition]) -> Result<RuleSet> {
        let domain = Arc::new(build_domain(schema, self.config.label_count)?);
        info!(
            n_partitions = partitions.len(),
            n_instances = partitions.iter().map(DataPartition::len).sum::<usize>(),
            label_count = domain.label_count,
            "training fuzzy rule base"
        );

        // All partitions must finish before the merge starts.
        let rule_sets = self
            .induce_all(&domain, partitions)
            .into_iter()
            .collect::<Result<Vec<_>>>()?;

        RuleBaseMerger::with_policy(self.merge_policy).merge(&rule_sets)
    }

    pub fn train_instances(
        &self,
        schema: DatasetSchema,
        instances: Vec<Instance>,
        n_partitions: usize,
        strategy: SplitStrategy,
    ) -> Result<RuleSet> {
        let schema = Arc::new(schema);
        let partitions = Self::split(&schema, instances, n_partitions, strategy);
        self.train(&schema, &partitions)
    }
}
