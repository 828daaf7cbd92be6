use core::fmt;
use serde::{Deserialize, Serialize};

/// Degree in [0, 1] to which a crisp value belongs to a fuzzy set.
pub trait Membership {
    fn membership(&self, x: f64) -> f64;
}

/// Which side of a triangle saturates at 1 past its apex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shoulder {
    None,
    Left,
    Right,
}

/// -------------------
/// TriangularLabel
/// -------------------
/// Triangle with breakpoints (left, apex, right). Shoulder labels cover the ends of the domain.

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangularLabel {
    pub left: f64,
    pub apex: f64,
    pub right: f64,
    pub shoulder: Shoulder,
}

impl TriangularLabel {
    pub fn new(left: f64, apex: f64, right: f64) -> Self {
        Self {
            left,
            apex,
            right,
            shoulder: Shoulder::None,
        }
    }

    pub fn with_shoulder(mut self, shoulder: Shoulder) -> Self {
        self.shoulder = shoulder;
        self
    }
}

impl Membership for TriangularLabel {
    fn membership(&self, x: f64) -> f64 {
        if x.is_nan() {
            return 0.0;
        }
        match self.shoulder {
            Shoulder::Left if x <= self.apex => return 1.0,
            Shoulder::Right if x >= self.apex => return 1.0,
            _ => {}
        }
        if x <= self.left || x >= self.right {
            0.0
        } else if x < self.apex {
            (x - self.left) / (self.apex - self.left)
        } else if x > self.apex {
            (self.right - x) / (self.right - self.apex)
        } else {
            1.0
        }
    }
}

impl fmt::Display for TriangularLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangular({}, {}, {})", self.left, self.apex, self.right)
    }
}

// ---------------------------
// CrispLabel (nominal values)
// ---------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrispLabel {
    pub code: usize,
}

impl Membership for CrispLabel {
    fn membership(&self, x: f64) -> f64 {
        if x == self.code as f64 {
            1.0
        } else {
            0.0
        }
    }
}

impl fmt::Display for CrispLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crisp({})", self.code)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LabelShape {
    Triangular(TriangularLabel),
    Crisp(CrispLabel),
}

impl Membership for LabelShape {
    fn membership(&self, x: f64) -> f64 {
        match self {
            LabelShape::Triangular(t) => t.membership(x),
            LabelShape::Crisp(c) => c.membership(x),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinguisticLabel {
    pub name: String,
    pub shape: LabelShape,
}

impl LinguisticLabel {
    pub fn triangular(name: impl Into<String>, label: TriangularLabel) -> Self {
        LinguisticLabel {
            name: name.into(),
            shape: LabelShape::Triangular(label),
        }
    }

    pub fn crisp(name: impl Into<String>, code: usize) -> Self {
        LinguisticLabel {
            name: name.into(),
            shape: LabelShape::Crisp(CrispLabel { code }),
        }
    }
}

impl Membership for LinguisticLabel {
    fn membership(&self, x: f64) -> f64 {
        self.shape.membership(x)
    }
}

impl fmt::Display for LinguisticLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.shape {
            LabelShape::Triangular(t) => write!(f, "{}: {}", self.name, t),
            LabelShape::Crisp(c) => write!(f, "{}: {}", self.name, c),
        }
    }
}
