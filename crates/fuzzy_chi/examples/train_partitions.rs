use estimator_api::api::Estimator;
use fuzzy_chi::codec::PartitionOutput;
use fuzzy_chi::conf::{ChiConfig, MergePolicy, SplitStrategy};
use fuzzy_chi::estimator::FuzzyChiClassifier;
use fuzzy_chi::merge::RuleBaseMerger;
use fuzzy_chi::orchestrator::ChiTrainer;
use fuzzy_chi::schema::{AttributeSpec, DatasetSchema, Instance};
use polars::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn generate_sample_dataframe(n_samples: usize) -> (DataFrame, DataFrame) {
    let mut x1_vals: Vec<Option<f64>> = Vec::with_capacity(n_samples);
    let mut x2_vals: Vec<Option<f64>> = Vec::with_capacity(n_samples);
    let mut shape_vals: Vec<Option<&str>> = Vec::with_capacity(n_samples);
    let mut target_strs: Vec<Option<&str>> = Vec::with_capacity(n_samples);

    for i in 0..n_samples {
        let x1 = ((i * 7) % 100) as f64 / 10.0;
        let x2 = ((i * 13) % 50) as f64 / 5.0;
        let shape = if i % 3 == 0 { "round" } else { "flat" };
        x1_vals.push(Some(x1));
        // Every 17th value is missing
        x2_vals.push(if i % 17 == 0 { None } else { Some(x2) });
        shape_vals.push(Some(shape));

        let target = if x1 + x2 > 10.0 { "B" } else { "A" };
        target_strs.push(Some(target));
    }

    let cols: Vec<Column> = vec![
        Series::new(PlSmallStr::from_static("x1"), x1_vals).into(),
        Series::new(PlSmallStr::from_static("x2"), x2_vals).into(),
        Series::new(PlSmallStr::from_static("shape"), shape_vals).into(),
    ];
    let target: Vec<Column> = vec![Series::new(PlSmallStr::from_static("target"), target_strs).into()];
    (DataFrame::new(cols).unwrap(), DataFrame::new(target).unwrap())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Fuzzy Chi (Polars) ===");
    let (x, y) = generate_sample_dataframe(1_000);

    let mut model = FuzzyChiClassifier::new(
        8,
        ChiConfig::default().with_label_count(5),
        SplitStrategy::Shuffled { seed: 42 },
        MergePolicy::FirstSeen,
    );
    let start = Instant::now();
    model.fit(&x, &y).unwrap();
    println!("Fitted in {:?}", start.elapsed());
    println!("{}", model.rules_info());

    println!("=== Shipping partition outputs as bytes ===");
    let schema = Arc::new(DatasetSchema::new(
        vec![AttributeSpec::numeric("x", 0.0, 10.0)],
        ["c0", "c1"],
    ));
    let instances: Vec<Instance> = (0..40)
        .map(|i| {
            let x = (i % 11) as f64;
            Instance::new(vec![x], usize::from(x > 5.0))
        })
        .collect();
    let partitions = ChiTrainer::split(&schema, instances, 4, SplitStrategy::Contiguous);

    let trainer = ChiTrainer::default();
    let domain = Arc::new(fuzzy_chi::domain::build_domain(&schema, trainer.config.label_count).unwrap());
    let shipped: Vec<Vec<u8>> = trainer
        .induce_all(&domain, &partitions)
        .into_iter()
        .map(|rs| PartitionOutput::new(rs.unwrap()).to_bytes().unwrap())
        .collect();
    println!(
        "Partition payload sizes: {:?}",
        shipped.iter().map(Vec::len).collect::<Vec<_>>()
    );

    let outputs: Vec<PartitionOutput> = shipped
        .iter()
        .map(|bytes| PartitionOutput::from_bytes(bytes).unwrap())
        .collect();
    let merged = RuleBaseMerger::new().merge_outputs(&outputs).unwrap();
    println!("{}", merged);
}
