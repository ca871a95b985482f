//! Predict command implementation - encode and score with a model

use anyhow::Result;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use seqprep_core::{classify, Label, LogisticModel, SequenceEncoder};

use crate::config::Config;
use crate::error::{CliError, CliResult};

pub fn execute(
    config: &Config,
    input: PathBuf,
    model: Option<PathBuf>,
    target_length: Option<NonZeroUsize>,
    threshold: Option<f64>,
) -> Result<()> {
    let threshold = validate_threshold(threshold.unwrap_or(config.classifier.threshold))?;
    let model_path = model
        .or_else(|| config.classifier.model.clone())
        .ok_or_else(|| CliError::config("No model specified; pass --model or set [classifier] model"))?;

    let model = LogisticModel::load(&model_path).map_err(CliError::from)?;
    let encoder = SequenceEncoder::new(config.encoder.to_encoder_config(target_length));

    let sequence = super::read_input(&input)?;
    let encoded = encoder.encode(&sequence);
    let prediction = classify(&encoded, &model, threshold).map_err(CliError::from)?;

    println!("Probability of positive: {:.4}", prediction.probability);
    match prediction.label {
        Label::Positive => println!("This sample is likely Positive"),
        Label::Negative => println!("This sample is likely Negative"),
    }

    Ok(())
}

fn validate_threshold(threshold: f64) -> CliResult<f64> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(CliError::validation(format!(
            "Threshold must be between 0 and 1, got: {}",
            threshold
        )));
    }
    Ok(threshold)
}
