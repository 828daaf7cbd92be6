use crate::domain::FuzzyDomain;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structural identity of a rule: the label chosen per attribute plus the predicted class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RuleKey {
    pub antecedent: Vec<usize>,
    pub consequent: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyRule {
    pub antecedent: Vec<usize>,
    pub consequent: usize,
    pub weight: f64,
}

impl FuzzyRule {
    pub fn new(antecedent: Vec<usize>, consequent: usize, weight: f64) -> Self {
        FuzzyRule {
            antecedent,
            consequent,
            weight,
        }
    }

    pub fn key(&self) -> RuleKey {
        RuleKey {
            antecedent: self.antecedent.clone(),
            consequent: self.consequent,
        }
    }

    /// Readable form using the label and class names of `domain`.
    pub fn describe(&self, domain: &FuzzyDomain) -> String {
        let terms: Vec<String> = self
            .antecedent
            .iter()
            .zip(domain.variables.iter())
            .map(|(label, var)| {
                let name = var
                    .label_name(*label)
                    .map(str::to_string)
                    .unwrap_or_else(|| label.to_string());
                format!("{} IS {}", var.name, name)
            })
            .collect();
        let class = domain
            .class_names
            .get(self.consequent)
            .cloned()
            .unwrap_or_else(|| self.consequent.to_string());
        format!(
            "IF {} THEN {} WITH {:.4}",
            terms.join(" AND "),
            class,
            self.weight
        )
    }
}

impl fmt::Display for FuzzyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.antecedent.iter().map(|l| l.to_string()).collect();
        write!(
            f,
            "[{}] -> {} ({})",
            labels.join(", "),
            self.consequent,
            self.weight
        )
    }
}
