use std::sync::Arc;

use fuzzy_chi::codec::PartitionOutput;
use fuzzy_chi::conf::{ChiConfig, SplitStrategy};
use fuzzy_chi::domain::build_domain;
use fuzzy_chi::error::ChiError;
use fuzzy_chi::merge::{merge, RuleBaseMerger};
use fuzzy_chi::orchestrator::ChiTrainer;
use fuzzy_chi::rule::FuzzyRule;
use fuzzy_chi::rule_base::RuleSet;
use fuzzy_chi::schema::{AttributeSpec, DatasetSchema, Instance};

fn schema() -> DatasetSchema {
    DatasetSchema::new(
        vec![
            AttributeSpec::numeric("length", 0.0, 8.0),
            AttributeSpec::nominal("shape", ["round", "flat"]),
        ],
        ["small", "large"],
    )
}

fn trained() -> RuleSet {
    let instances: Vec<Instance> = (0..40)
        .map(|i| Instance::new(vec![(i % 9) as f64, (i % 2) as f64], usize::from(i % 9 > 4)))
        .collect();
    ChiTrainer::new(ChiConfig::default(), Default::default())
        .train_instances(schema(), instances, 3, SplitStrategy::Contiguous)
        .unwrap()
}

/// The decoded rule base carries its own domain; nothing else is needed to read it.
#[test]
fn merged_rule_base_survives_encoding() {
    let merged = trained();
    let bytes = PartitionOutput::new(merged.clone()).to_bytes().unwrap();
    let decoded = PartitionOutput::from_bytes(&bytes).unwrap();

    let rb = decoded.rule_base().unwrap();
    assert_eq!(rb, &merged);
    assert_eq!(rb.provenance(), merged.provenance());
    assert_eq!(rb.domain().class_names, vec!["small", "large"]);
    assert_eq!(rb.domain().variables[1].label_name(1), Some("flat"));
    assert!(decoded.predictions().is_none());
}

#[test]
fn predictions_block_is_optional() {
    let with = PartitionOutput::new(trained()).with_predictions(vec![0, 1, 1, 0]);
    let decoded = PartitionOutput::from_bytes(&with.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded.predictions(), Some(&[0, 1, 1, 0][..]));

    let empty = PartitionOutput::default();
    let bytes = empty.to_bytes().unwrap();
    // Two absent blocks are two zero tags
    assert_eq!(bytes, vec![0u8, 0u8]);
    assert_eq!(PartitionOutput::from_bytes(&bytes).unwrap(), empty);
}

/// The leading tag says whether a rule base follows.
#[test]
fn rule_base_block_is_tagged() {
    let bytes = PartitionOutput::new(trained()).to_bytes().unwrap();
    assert_eq!(bytes[0], 1);
    assert_eq!(*bytes.last().unwrap(), 0);
}

#[test]
fn truncated_bytes_are_a_codec_error() {
    let bytes = PartitionOutput::new(trained()).to_bytes().unwrap();
    let err = PartitionOutput::from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(err, ChiError::Codec(_)));
}

/// Partition outputs shipped as bytes merge like the in-memory rule sets.
#[test]
fn decoded_partition_outputs_merge() {
    let domain = Arc::new(build_domain(&schema(), 3).unwrap());
    let config = ChiConfig::default().rule_base;
    let parts = vec![
        RuleSet::from_rules(
            Arc::clone(&domain),
            config,
            vec![FuzzyRule::new(vec![0, 0], 0, 0.75)],
        ),
        RuleSet::from_rules(
            Arc::clone(&domain),
            config,
            vec![
                FuzzyRule::new(vec![0, 0], 0, 0.25),
                FuzzyRule::new(vec![2, 1], 1, 1.0),
            ],
        ),
    ];

    let shipped: Vec<PartitionOutput> = parts
        .iter()
        .map(|rs| {
            let bytes = PartitionOutput::new(rs.clone()).to_bytes().unwrap();
            PartitionOutput::from_bytes(&bytes).unwrap()
        })
        .collect();

    let from_bytes = RuleBaseMerger::new().merge_outputs(&shipped).unwrap();
    let in_memory = merge(&parts).unwrap();
    assert_eq!(from_bytes, in_memory);
    assert_eq!(from_bytes.rules()[0].weight, 0.75);
}
