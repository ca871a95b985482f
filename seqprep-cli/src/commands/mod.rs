//! Command implementations for the SeqPrep CLI

pub mod split;
pub mod encode;
pub mod predict;
pub mod stats;
pub mod config;

use anyhow::Result;
use seqprep_core::{FastaReader, RawSequence};
use std::path::Path;

use crate::error::CliError;

/// Read the input FASTA, mapping core errors to user-facing ones.
pub(crate) fn read_input(input: &Path) -> Result<RawSequence> {
    log::info!("Reading sequence from {}", input.display());
    let sequence = FastaReader::parse_path_or_stdin(input).map_err(CliError::from)?;
    log::info!("Read {} bases", sequence.len());
    Ok(sequence)
}
