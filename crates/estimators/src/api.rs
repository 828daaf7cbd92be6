use polars::prelude::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FitError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Training failed: {0}")]
    Training(String),
}

/// Training-only estimator interface. Scoring new samples lives outside these crates.
pub trait Estimator {
    /// Fit on features `x` and a single-column target frame `y`.
    fn fit(&mut self, x: &DataFrame, y: &DataFrame) -> Result<(), FitError> {
        if x.height() != y.height() {
            return Err(FitError::InvalidInput(format!(
                "feature rows ({}) and target rows ({}) differ",
                x.height(),
                y.height()
            )));
        }
        if y.width() != 1 {
            return Err(FitError::InvalidInput(format!(
                "expected exactly one target column, found {}",
                y.width()
            )));
        }
        self._fit_impl(x, y)
    }

    fn _fit_impl(&mut self, _x: &DataFrame, _y: &DataFrame) -> Result<(), FitError> {
        // Default implementation can be overridden by specific estimators
        Err(FitError::InvalidInput(
            "Default fit implementation not provided".to_string(),
        ))
    }

    fn is_fitted(&self) -> bool;
}
