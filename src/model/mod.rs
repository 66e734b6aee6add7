//! Prediction model interface
//!
//! The forecast engine treats the trained model as opaque: it only calls
//! [`Predictor::predict`] with feature vectors in the fixed
//! [`crate::dataset::SELECTED_FEATURES`] order and passes the result through
//! unchanged.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised by model loading or prediction
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse model file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("feature vector has {actual} values, model expects {expected}")]
    ShapeMismatch { expected: usize, actual: usize },
}

/// An opaque, pre-trained prediction function.
///
/// Implementations must not retain or mutate the input slice; failures
/// propagate unchanged to the caller.
pub trait Predictor {
    /// Predict CO2 per capita (metric tons) from a feature vector
    fn predict(&self, features: &[f64]) -> Result<f64, ModelError>;
}

/// Linear regression model loaded from a JSON export.
///
/// The production model is trained and exported elsewhere; this crate only
/// consumes its coefficients. Any other [`Predictor`] implementation can be
/// substituted without touching the forecast engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearModel {
    /// Load a model from its JSON export
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let file = std::fs::File::open(path)?;
        let model = serde_json::from_reader(file)?;
        Ok(model)
    }
}

impl Predictor for LinearModel {
    fn predict(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::ShapeMismatch {
                expected: self.coefficients.len(),
                actual: features.len(),
            });
        }

        let weighted: f64 = features
            .iter()
            .zip(&self.coefficients)
            .map(|(v, c)| v * c)
            .sum();
        Ok(self.intercept + weighted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_prediction() {
        let model = LinearModel {
            intercept: 0.5,
            coefficients: vec![0.1, 0.2, 0.0],
        };
        let pred = model.predict(&[10.0, 5.0, 99.0]).expect("predict");
        assert_relative_eq!(pred, 0.5 + 1.0 + 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_shape_mismatch() {
        let model = LinearModel {
            intercept: 0.0,
            coefficients: vec![1.0, 2.0],
        };
        let err = model.predict(&[1.0]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::ShapeMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let json = r#"{"intercept": 1.25, "coefficients": [0.5, -0.25]}"#;
        let model: LinearModel = serde_json::from_str(json).expect("parse");
        assert_eq!(model.coefficients.len(), 2);
        let pred = model.predict(&[2.0, 4.0]).expect("predict");
        assert_relative_eq!(pred, 1.25 + 1.0 - 1.0, epsilon = 1e-12);
    }
}
