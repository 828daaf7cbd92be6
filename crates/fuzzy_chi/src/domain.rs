//! The shared fuzzy database: one fuzzy variable per input attribute.
//!
//! The domain only depends on the declared attribute ranges and the label count, so every
//! partition can build (or receive) an identical copy without looking at any instance.

use crate::conf::MIN_LABEL_COUNT;
use crate::error::{ChiError, Result};
use crate::membership::*;
use crate::schema::{AttributeKind, AttributeSpec, DatasetSchema};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyVariable {
    pub name: String,
    pub kind: AttributeKind,
    pub labels: Vec<LinguisticLabel>,
}

impl FuzzyVariable {
    pub fn n_labels(&self) -> usize {
        self.labels.len()
    }

    /// Label with maximal membership for `x` and that membership.
    /// Equal memberships resolve to the lowest label index.
    pub fn fuzzify(&self, x: f64) -> (usize, f64) {
        let mut best = (0, 0.0);
        for (idx, label) in self.labels.iter().enumerate() {
            let degree = label.membership(x);
            if degree > best.1 {
                best = (idx, degree);
            }
        }
        best
    }

    pub fn label_name(&self, idx: usize) -> Option<&str> {
        self.labels.get(idx).map(|l| l.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyDomain {
    pub label_count: usize,
    pub variables: Vec<FuzzyVariable>,
    pub class_names: Vec<String>,
}

impl FuzzyDomain {
    pub fn n_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn n_classes(&self) -> usize {
        self.class_names.len()
    }

    /// Why `schema` is not the schema this domain was built from, if it is not.
    pub fn schema_mismatch(&self, schema: &DatasetSchema) -> Option<String> {
        if schema.n_inputs() != self.n_variables() {
            return Some(format!(
                "schema has {} input attributes, domain has {}",
                schema.n_inputs(),
                self.n_variables()
            ));
        }
        if schema.classes != self.class_names {
            return Some("class labels differ".to_string());
        }
        self.variables
            .iter()
            .zip(schema.attributes.iter())
            .find(|(var, attr)| var.name != attr.name || var.kind != attr.kind)
            .map(|(var, attr)| format!("attribute '{}' differs from '{}'", attr, var.name))
    }
}

impl fmt::Display for FuzzyDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for var in &self.variables {
            let labels: Vec<String> = var.labels.iter().map(|l| l.to_string()).collect();
            writeln!(f, "{}: [{}]", var.name, labels.join("; "))?;
        }
        write!(f, "classes: [{}]", self.class_names.join(", "))
    }
}

/// Names given to the labels of a numeric attribute.
pub fn label_names(label_count: usize) -> Vec<String> {
    let names: &[&str] = match label_count {
        2 => &["low", "high"],
        3 => &["low", "mid", "high"],
        5 => &["very_low", "low", "mid", "high", "very_high"],
        7 => &[
            "extra_low",
            "very_low",
            "low",
            "mid",
            "high",
            "very_high",
            "extra_high",
        ],
        _ => return (0..label_count).map(|i| format!("L{}", i)).collect(),
    };
    names.iter().map(|s| s.to_string()).collect()
}

/// Uniform triangular partition of `[min, max]`, shoulders at both ends.
pub fn uniform_labels(min: f64, max: f64, label_count: usize) -> Vec<LinguisticLabel> {
    let step = (max - min) / (label_count - 1) as f64;
    label_names(label_count)
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            // Pin the last apex to `max` so rounding never leaves a gap at the top.
            let apex = if i == label_count - 1 {
                max
            } else {
                min + i as f64 * step
            };
            let shoulder = if i == 0 {
                Shoulder::Left
            } else if i == label_count - 1 {
                Shoulder::Right
            } else {
                Shoulder::None
            };
            let label = TriangularLabel::new(apex - step, apex, apex + step).with_shoulder(shoulder);
            LinguisticLabel::triangular(name, label)
        })
        .collect()
}

fn build_variable(attr: &AttributeSpec, label_count: usize) -> Result<FuzzyVariable> {
    let labels = match &attr.kind {
        AttributeKind::Numeric { min, max } => {
            if !min.is_finite() || !max.is_finite() {
                return Err(ChiError::InvalidSchema(format!(
                    "attribute '{}' has a non-finite range [{}, {}]",
                    attr.name, min, max
                )));
            }
            if min >= max {
                return Err(ChiError::InvalidSchema(format!(
                    "attribute '{}' has an empty or inverted range [{}, {}]",
                    attr.name, min, max
                )));
            }
            uniform_labels(*min, *max, label_count)
        }
        AttributeKind::Nominal { values } => {
            if values.is_empty() {
                return Err(ChiError::InvalidSchema(format!(
                    "nominal attribute '{}' declares no values",
                    attr.name
                )));
            }
            values
                .iter()
                .enumerate()
                .map(|(code, value)| LinguisticLabel::crisp(value.clone(), code))
                .collect()
        }
    };
    Ok(FuzzyVariable {
        name: attr.name.clone(),
        kind: attr.kind.clone(),
        labels,
    })
}

/// Build the fuzzy database for `schema` with `label_count` labels per numeric attribute.
pub fn build_domain(schema: &DatasetSchema, label_count: usize) -> Result<FuzzyDomain> {
    if label_count < MIN_LABEL_COUNT {
        return Err(ChiError::InvalidSchema(format!(
            "label count must be at least {}, got {}",
            MIN_LABEL_COUNT, label_count
        )));
    }
    if schema.attributes.is_empty() {
        return Err(ChiError::InvalidSchema(
            "schema has no input attributes".to_string(),
        ));
    }
    if schema.classes.is_empty() {
        return Err(ChiError::InvalidSchema(
            "schema has no class labels".to_string(),
        ));
    }

    let variables = schema
        .attributes
        .iter()
        .map(|attr| build_variable(attr, label_count))
        .collect::<Result<Vec<_>>>()?;

    Ok(FuzzyDomain {
        label_count,
        variables,
        class_names: schema.classes.clone(),
    })
}
