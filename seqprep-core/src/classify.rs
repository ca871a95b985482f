//! Classifier boundary
//!
//! The core never owns a model. Callers inject anything implementing
//! [`Classifier`], including a plain closure, and receive a probability for the
//! single-sample [`ModelInput`] built from an [`EncodedVector`].
//! [`LogisticModel`] is a small JSON-backed model usable from the command line.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeqPrepError};
use crate::types::{EncodedVector, ModelInput};

/// Default decision threshold: positive when the probability exceeds it.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Maps one fixed-length sample to a probability in `[0, 1]`.
pub trait Classifier {
    fn predict(&self, input: &ModelInput) -> Result<f64>;
}

impl<F> Classifier for F
where
    F: Fn(&ModelInput) -> f64,
{
    fn predict(&self, input: &ModelInput) -> Result<f64> {
        Ok(self(input))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Negative,
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Positive => write!(f, "Positive"),
            Label::Negative => write!(f, "Negative"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub probability: f64,
    pub label: Label,
}

impl Prediction {
    pub fn from_probability(probability: f64, threshold: f64) -> Self {
        let label = if probability > threshold {
            Label::Positive
        } else {
            Label::Negative
        };
        Self { probability, label }
    }
}

/// Run `classifier` on one encoded sample and apply `threshold`.
pub fn classify<C: Classifier + ?Sized>(
    encoded: &EncodedVector,
    classifier: &C,
    threshold: f64,
) -> Result<Prediction> {
    let input = encoded.to_model_input();
    let probability = classifier.predict(&input)?;
    log::debug!(
        "Classifier returned {:.4} for {} features",
        probability,
        input.feature_count()
    );
    Ok(Prediction::from_probability(probability, threshold))
}

/// Logistic regression over the encoded features, stored as JSON:
/// `{"weights": [...], "bias": 0.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub weights: Vec<f64>,
    #[serde(default)]
    pub bias: f64,
}

impl LogisticModel {
    pub fn new(weights: Vec<f64>, bias: f64) -> Self {
        Self { weights, bias }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| SeqPrepError::input_unavailable(path.display().to_string(), e))?;
        let model: LogisticModel = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| SeqPrepError::ModelFormat(format!("{}: {}", path.display(), e)))?;
        log::info!("Loaded model with {} weights from {}", model.weights.len(), path.display());
        Ok(model)
    }

    pub fn input_length(&self) -> usize {
        self.weights.len()
    }
}

impl Classifier for LogisticModel {
    fn predict(&self, input: &ModelInput) -> Result<f64> {
        if input.feature_count() != self.weights.len() {
            return Err(SeqPrepError::ModelShape {
                expected: self.weights.len(),
                actual: input.feature_count(),
            });
        }
        let z: f64 = self
            .weights
            .iter()
            .zip(&input.features)
            .map(|(w, &x)| w * x as f64)
            .sum::<f64>()
            + self.bias;
        Ok(1.0 / (1.0 + (-z).exp()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode;
    use crate::types::RawSequence;
    use std::io::Write;
    use std::num::NonZeroUsize;
    use tempfile::NamedTempFile;

    fn encoded(seq: &str, len: usize) -> EncodedVector {
        encode(&RawSequence::from(seq), NonZeroUsize::new(len).unwrap())
    }

    #[test]
    fn test_closure_classifier_sees_batch_of_one() {
        let classifier = |input: &ModelInput| {
            assert_eq!(input.shape, [1, 8]);
            0.9
        };
        let prediction = classify(&encoded("ACGT", 8), &classifier, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(prediction.label, Label::Positive);
        assert_eq!(prediction.probability, 0.9);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(Prediction::from_probability(0.5, 0.5).label, Label::Negative);
        assert_eq!(Prediction::from_probability(0.5001, 0.5).label, Label::Positive);
        assert_eq!(Prediction::from_probability(0.2, 0.1).label, Label::Positive);
    }

    #[test]
    fn test_logistic_model_probability() {
        let model = LogisticModel::new(vec![0.0; 4], 0.0);
        let prediction = classify(&encoded("GGGG", 4), &model, DEFAULT_THRESHOLD).unwrap();
        assert!((prediction.probability - 0.5).abs() < 1e-12);
        assert_eq!(prediction.label, Label::Negative);

        let model = LogisticModel::new(vec![1.0, 1.0, 0.0, 0.0], -1.0);
        let p = model.predict(&encoded("TT", 4).to_model_input()).unwrap();
        assert!(p > 0.99);
    }

    #[test]
    fn test_logistic_model_shape_mismatch() {
        let model = LogisticModel::new(vec![0.1; 3], 0.0);
        let result = classify(&encoded("ACGT", 4), &model, DEFAULT_THRESHOLD);
        assert!(matches!(
            result,
            Err(SeqPrepError::ModelShape { expected: 3, actual: 4 })
        ));
    }

    #[test]
    fn test_logistic_model_load() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"weights": [0.5, -0.5], "bias": 0.25}}"#).unwrap();
        let model = LogisticModel::load(file.path()).unwrap();
        assert_eq!(model.input_length(), 2);
        assert_eq!(model.bias, 0.25);
    }

    #[test]
    fn test_missing_model_is_input_unavailable() {
        let result = LogisticModel::load("/nonexistent/model.json");
        assert!(matches!(result, Err(SeqPrepError::InputUnavailable { .. })));
    }

    #[test]
    fn test_malformed_model_is_format_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let result = LogisticModel::load(file.path());
        assert!(matches!(result, Err(SeqPrepError::ModelFormat(_))));
    }
}
