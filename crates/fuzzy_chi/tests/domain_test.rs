use fuzzy_chi::domain::{build_domain, label_names, uniform_labels};
use fuzzy_chi::error::ChiError;
use fuzzy_chi::membership::{LabelShape, Membership, Shoulder};
use fuzzy_chi::schema::{AttributeSpec, DatasetSchema};

fn one_attribute_schema(min: f64, max: f64) -> DatasetSchema {
    DatasetSchema::new(vec![AttributeSpec::numeric("x", min, max)], ["c0", "c1"])
}

#[test]
fn three_labels_on_zero_ten() {
    let domain = build_domain(&one_attribute_schema(0.0, 10.0), 3).unwrap();
    assert_eq!(domain.n_variables(), 1);
    assert_eq!(domain.label_count, 3);

    let var = &domain.variables[0];
    assert_eq!(var.n_labels(), 3);
    let names: Vec<&str> = var.labels.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["low", "mid", "high"]);

    let apexes: Vec<f64> = var
        .labels
        .iter()
        .map(|l| match &l.shape {
            LabelShape::Triangular(t) => t.apex,
            other => panic!("unexpected shape {:?}", other),
        })
        .collect();
    assert_eq!(apexes, vec![0.0, 5.0, 10.0]);

    match (&var.labels[0].shape, &var.labels[2].shape) {
        (LabelShape::Triangular(first), LabelShape::Triangular(last)) => {
            assert_eq!(first.shoulder, Shoulder::Left);
            assert_eq!(last.shoulder, Shoulder::Right);
        }
        _ => panic!("numeric labels must be triangular"),
    }
}

/// Every in-range value has a label with positive membership; adjacent labels overlap.
#[test]
fn uniform_labels_cover_range() {
    let labels = uniform_labels(-2.0, 6.0, 5);
    for i in 0..=80 {
        let x = -2.0 + i as f64 * 0.1;
        let best = labels
            .iter()
            .map(|l| l.membership(x))
            .fold(0.0_f64, f64::max);
        assert!(best > 0.0, "no label covers {}", x);
    }
    // Midway between two apexes both neighbours have membership 0.5
    let x = -1.0;
    assert!((labels[0].membership(x) - 0.5).abs() < 1e-12);
    assert!((labels[1].membership(x) - 0.5).abs() < 1e-12);
}

#[test]
fn fuzzify_ties_pick_lowest_label() {
    let domain = build_domain(&one_attribute_schema(0.0, 10.0), 3).unwrap();
    let var = &domain.variables[0];
    assert_eq!(var.fuzzify(2.5), (0, 0.5));
    assert_eq!(var.fuzzify(7.5), (1, 0.5));
    assert_eq!(var.fuzzify(1.0).0, 0);
    assert_eq!(var.fuzzify(9.0).0, 2);
    // Out of range values fall on the shoulders
    assert_eq!(var.fuzzify(-3.0), (0, 1.0));
    assert_eq!(var.fuzzify(42.0), (2, 1.0));
    // Missing values match nothing
    assert_eq!(var.fuzzify(f64::NAN), (0, 0.0));
}

#[test]
fn nominal_attribute_has_one_label_per_value() {
    let schema = DatasetSchema::new(
        vec![
            AttributeSpec::numeric("x", 0.0, 1.0),
            AttributeSpec::nominal("color", ["red", "green", "blue"]),
        ],
        ["yes", "no"],
    );
    let domain = build_domain(&schema, 5).unwrap();
    let color = &domain.variables[1];
    assert_eq!(color.n_labels(), 3);
    assert_eq!(color.label_name(2), Some("blue"));
    assert_eq!(color.fuzzify(1.0), (1, 1.0));
    assert_eq!(domain.variables[0].n_labels(), 5);
}

#[test]
fn label_count_below_two_is_rejected() {
    let err = build_domain(&one_attribute_schema(0.0, 10.0), 1).unwrap_err();
    assert!(matches!(err, ChiError::InvalidSchema(_)));
}

#[test]
fn degenerate_or_inverted_range_is_rejected() {
    for (min, max) in [(5.0, 5.0), (10.0, 0.0), (0.0, f64::INFINITY), (f64::NAN, 1.0)] {
        let err = build_domain(&one_attribute_schema(min, max), 3).unwrap_err();
        assert!(
            matches!(err, ChiError::InvalidSchema(_)),
            "range [{}, {}] should be invalid",
            min,
            max
        );
    }
}

#[test]
fn empty_schema_parts_are_rejected() {
    let no_inputs = DatasetSchema::new(vec![], ["a"]);
    assert!(matches!(
        build_domain(&no_inputs, 3),
        Err(ChiError::InvalidSchema(_))
    ));

    let no_classes = DatasetSchema::new(
        vec![AttributeSpec::numeric("x", 0.0, 1.0)],
        Vec::<String>::new(),
    );
    assert!(matches!(
        build_domain(&no_classes, 3),
        Err(ChiError::InvalidSchema(_))
    ));

    let no_values = DatasetSchema::new(
        vec![AttributeSpec::nominal("c", Vec::<String>::new())],
        ["a"],
    );
    assert!(matches!(
        build_domain(&no_values, 3),
        Err(ChiError::InvalidSchema(_))
    ));
}

/// The domain depends on the schema and label count only.
#[test]
fn build_domain_is_deterministic() {
    let schema = DatasetSchema::new(
        vec![
            AttributeSpec::numeric("a", -1.5, 3.25),
            AttributeSpec::nominal("b", ["p", "q"]),
            AttributeSpec::numeric("c", 100.0, 200.0),
        ],
        ["x", "y", "z"],
    );
    let d1 = build_domain(&schema, 7).unwrap();
    let d2 = build_domain(&schema.clone(), 7).unwrap();
    assert_eq!(d1, d2);
    assert_ne!(d1, build_domain(&schema, 5).unwrap());
}

#[test]
fn schema_mismatch_is_reported() {
    let schema = one_attribute_schema(0.0, 10.0);
    let domain = build_domain(&schema, 3).unwrap();
    assert!(domain.schema_mismatch(&schema).is_none());
    assert!(domain
        .schema_mismatch(&one_attribute_schema(0.0, 20.0))
        .is_some());
    let other_classes = DatasetSchema::new(vec![AttributeSpec::numeric("x", 0.0, 10.0)], ["a"]);
    assert!(domain.schema_mismatch(&other_classes).is_some());
}

#[test]
fn label_names_fall_back_to_indices() {
    assert_eq!(label_names(2), vec!["low", "high"]);
    assert_eq!(label_names(4), vec!["L0", "L1", "L2", "L3"]);
}
