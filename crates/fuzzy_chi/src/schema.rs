//! Dataset description shared by every partition, and the instances flowing through induction.
//!
//! Numeric attribute values are stored as-is. Nominal values are stored as the position of
//! the value inside the attribute's declared value list, so a whole instance is a `Vec<f64>`.
//! `NaN` marks a missing value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeKind {
    Numeric { min: f64, max: f64 },
    Nominal { values: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSpec {
    pub name: String,
    pub kind: AttributeKind,
}

impl AttributeSpec {
    pub fn numeric(name: impl Into<String>, min: f64, max: f64) -> Self {
        AttributeSpec {
            name: name.into(),
            kind: AttributeKind::Numeric { min, max },
        }
    }

    pub fn nominal<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AttributeSpec {
            name: name.into(),
            kind: AttributeKind::Nominal {
                values: values.into_iter().map(Into::into).collect(),
            },
        }
    }

    /// Position of a nominal value, `None` for numeric attributes or unknown values.
    pub fn nominal_code(&self, value: &str) -> Option<usize> {
        match &self.kind {
            AttributeKind::Nominal { values } => values.iter().position(|v| v == value),
            AttributeKind::Numeric { .. } => None,
        }
    }
}

impl fmt::Display for AttributeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            AttributeKind::Numeric { min, max } => write!(f, "{} real [{}, {}]", self.name, min, max),
            AttributeKind::Nominal { values } => write!(f, "{} {{{}}}", self.name, values.join(", ")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSchema {
    pub attributes: Vec<AttributeSpec>,
    pub classes: Vec<String>,
}

impl DatasetSchema {
    pub fn new<S: Into<String>>(
        attributes: Vec<AttributeSpec>,
        classes: impl IntoIterator<Item = S>,
    ) -> Self {
        DatasetSchema {
            attributes,
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn n_inputs(&self) -> usize {
        self.attributes.len()
    }

    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    pub fn class_index(&self, name: &str) -> Option<usize> {
        self.classes.iter().position(|c| c == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub values: Vec<f64>,
    pub label: usize,
}

impl Instance {
    pub fn new(values: Vec<f64>, label: usize) -> Self {
        Instance { values, label }
    }
}

/// One worker's share of the training set.
#[derive(Debug, Clone)]
pub struct DataPartition {
    pub index: usize,
    pub schema: Arc<DatasetSchema>,
    pub instances: Vec<Instance>,
}

impl DataPartition {
    pub fn new(index: usize, schema: Arc<DatasetSchema>, instances: Vec<Instance>) -> Self {
        DataPartition {
            index,
            schema,
            instances,
        }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
