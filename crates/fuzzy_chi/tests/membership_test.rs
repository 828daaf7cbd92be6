//! Integration tests for fuzzy_chi::membership
//!
//! Triangular labels (plain and shoulder), crisp labels for nominal values, and the
//! tagged `LabelShape` wrapper that dispatches to either.

use fuzzy_chi::membership::{
    CrispLabel, LabelShape, LinguisticLabel, Membership, Shoulder, TriangularLabel,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

/// Interior triangle ramps up to the apex and back down, zero outside.
#[test]
fn triangular_interior_shape() {
    let t = TriangularLabel::new(0.0, 5.0, 10.0);

    let got: Vec<f64> = [-1.0, 0.0, 2.5, 5.0, 7.5, 10.0, 11.0]
        .iter()
        .map(|x| t.membership(*x))
        .collect();
    let expected = [0.0, 0.0, 0.5, 1.0, 0.5, 0.0, 0.0];
    for (g, e) in got.iter().zip(expected.iter()) {
        assert!(close(*g, *e), "got {} expected {}", g, e);
    }
}

/// A left shoulder saturates at 1 below its apex, a right shoulder above it.
#[test]
fn triangular_shoulders_saturate() {
    let left = TriangularLabel::new(-5.0, 0.0, 5.0).with_shoulder(Shoulder::Left);
    assert_eq!(left.membership(-100.0), 1.0);
    assert_eq!(left.membership(0.0), 1.0);
    assert!(close(left.membership(2.5), 0.5));
    assert_eq!(left.membership(5.0), 0.0);

    let right = TriangularLabel::new(5.0, 10.0, 15.0).with_shoulder(Shoulder::Right);
    assert_eq!(right.membership(100.0), 1.0);
    assert_eq!(right.membership(10.0), 1.0);
    assert!(close(right.membership(7.5), 0.5));
    assert_eq!(right.membership(5.0), 0.0);
}

/// Missing values (NaN) never match any label.
#[test]
fn nan_has_zero_membership() {
    let t = TriangularLabel::new(0.0, 5.0, 10.0);
    let left = TriangularLabel::new(-5.0, 0.0, 5.0).with_shoulder(Shoulder::Left);
    let crisp = CrispLabel { code: 0 };
    assert_eq!(t.membership(f64::NAN), 0.0);
    assert_eq!(left.membership(f64::NAN), 0.0);
    assert_eq!(crisp.membership(f64::NAN), 0.0);
}

#[test]
fn crisp_label_exact_match_only() {
    let crisp = CrispLabel { code: 2 };
    let got: Vec<f64> = [0.0, 1.0, 2.0, 2.5]
        .iter()
        .map(|x| crisp.membership(*x))
        .collect();
    assert_eq!(got, vec![0.0, 0.0, 1.0, 0.0]);
}

/// LabelShape and LinguisticLabel dispatch to the wrapped membership function.
#[test]
fn label_shape_dispatch() {
    let tri = LinguisticLabel::triangular("mid", TriangularLabel::new(0.0, 5.0, 10.0));
    let nom = LinguisticLabel::crisp("red", 1);

    assert!(matches!(tri.shape, LabelShape::Triangular(_)));
    assert!(close(tri.membership(2.5), 0.5));
    assert_eq!(nom.membership(1.0), 1.0);
    assert_eq!(nom.membership(0.0), 0.0);

    match &nom.shape {
        LabelShape::Crisp(c) => assert_eq!(c.code, 1),
        other => panic!("expected crisp shape, got {:?}", other),
    }
}

#[test]
fn display_forms() {
    let tri = LinguisticLabel::triangular("low", TriangularLabel::new(-5.0, 0.0, 5.0));
    assert_eq!(tri.to_string(), "low: Triangular(-5, 0, 5)");
    let nom = LinguisticLabel::crisp("blue", 3);
    assert_eq!(nom.to_string(), "blue: Crisp(3)");
}
