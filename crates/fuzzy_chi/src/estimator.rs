use crate::conf::{ChiConfig, MergePolicy, SplitStrategy, DEFAULT_N_PARTITIONS};
use crate::dataframe::{instances_from_dataframe, schema_from_dataframe};
use crate::error::ChiError;
use crate::orchestrator::ChiTrainer;
use crate::rule_base::RuleSet;
use crate::schema::DatasetSchema;
use estimator_api::api::{Estimator, FitError};
use polars::prelude::*;

pub struct FuzzyChiClassifier {
    pub n_partitions: usize,
    pub config: ChiConfig,
    pub split_strategy: SplitStrategy,
    pub merge_policy: MergePolicy,
    pub rule_base: Option<RuleSet>,
    pub schema: Option<DatasetSchema>,
}

impl FuzzyChiClassifier {
    pub fn new(
        n_partitions: usize,
        config: ChiConfig,
        split_strategy: SplitStrategy,
        merge_policy: MergePolicy,
    ) -> Self {
        FuzzyChiClassifier {
            n_partitions,
            config,
            split_strategy,
            merge_policy,
            rule_base: None,
            schema: None,
        }
    }

    pub fn default() -> Self {
        FuzzyChiClassifier::new(
            DEFAULT_N_PARTITIONS,
            ChiConfig::default(),
            SplitStrategy::default(),
            MergePolicy::default(),
        )
    }

    pub fn rule_base(&self) -> Option<&RuleSet> {
        self.rule_base.as_ref()
    }

    /// Human readable listing of the learned rules.
    pub fn rules_info(&self) -> String {
        match &self.rule_base {
            Some(rb) => rb.to_string(),
            None => "Rule base not fitted".to_string(),
        }
    }
}

impl From<ChiError> for FitError {
    fn from(err: ChiError) -> Self {
        match err {
            ChiError::InvalidSchema(_) | ChiError::InvalidInstance { .. } | ChiError::DataFrame(_) => {
                FitError::InvalidInput(err.to_string())
            }
            _ => FitError::Training(err.to_string()),
        }
    }
}

impl Estimator for FuzzyChiClassifier {
    fn _fit_impl(&mut self, x: &DataFrame, y: &DataFrame) -> Result<(), FitError> {
        let target = y
            .get_columns()
            .first()
            .ok_or_else(|| FitError::InvalidInput("empty target frame".to_string()))?;

        let schema = schema_from_dataframe(x, target)?;
        let instances = instances_from_dataframe(x, target, &schema)?;

        let trainer = ChiTrainer::new(self.config.clone(), self.merge_policy);
        let rule_base = trainer.train_instances(
            schema.clone(),
            instances,
            self.n_partitions,
            self.split_strategy,
        )?;

        self.rule_base = Some(rule_base);
        self.schema = Some(schema);
        Ok(())
    }

    fn is_fitted(&self) -> bool {
        self.rule_base.is_some()
    }
}
