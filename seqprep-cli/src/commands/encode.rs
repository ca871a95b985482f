//! Encode command implementation - fixed-length integer vector

use anyhow::{Context, Result};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use seqprep_core::{EncodedVector, SequenceEncoder};

use crate::config::Config;
use crate::OutputFormat;

pub fn execute(
    config: &Config,
    input: PathBuf,
    target_length: Option<NonZeroUsize>,
    format: OutputFormat,
) -> Result<()> {
    let encoder = SequenceEncoder::new(config.encoder.to_encoder_config(target_length));
    let sequence = super::read_input(&input)?;

    if sequence.len() > encoder.target_length() {
        log::warn!(
            "Sequence has {} bases; only the first {} are encoded",
            sequence.len(),
            encoder.target_length()
        );
    }

    let encoded = encoder.encode(&sequence);
    println!("{}", render(&encoded, format)?);
    Ok(())
}

fn render(encoded: &EncodedVector, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(encoded
            .as_slice()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")),
        OutputFormat::Json => serde_json::to_string(encoded).context("Failed to serialize encoded vector"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqprep_core::{encode, RawSequence};

    #[test]
    fn test_render_formats() {
        let encoded = encode(&RawSequence::from("ACGTN"), NonZeroUsize::new(7).unwrap());
        assert_eq!(render(&encoded, OutputFormat::Text).unwrap(), "0 1 2 3 0 0 0");
        assert_eq!(render(&encoded, OutputFormat::Json).unwrap(), "[0,1,2,3,0,0,0]");
    }
}
